use crate::models::page::PageModel;

/// Removes the preloader when the load event fires. Returns true the first
/// time, false on later calls or when the page never had one.
pub fn remove_on_load(page: &mut PageModel) -> bool {
    let removed = page.preloader.take().is_some();
    if removed {
        log::debug!("preloader removed");
    }
    removed
}

#[cfg(test)]
mod tests {
    use crate::models::page::PageElement;

    use super::*;

    #[test]
    fn removal_happens_once() {
        let mut page = PageModel::new();
        page.preloader = Some(PageElement::with_classes(&["preloader"]));

        assert!(remove_on_load(&mut page));
        assert!(page.preloader.is_none());
        assert!(!remove_on_load(&mut page));
    }

    #[test]
    fn missing_preloader_is_a_noop() {
        let mut page = PageModel::new();
        assert!(!remove_on_load(&mut page));
    }
}
