//! Page enhancement services: scroll-driven class toggles, the mobile nav
//! menu, preloader removal and the optional scroll-animation capability.

pub mod animations;
pub mod nav;
pub mod preloader;
pub mod scroll;

pub use animations::{AnimationBootstrap, AnimationOptions, ScrollAnimator};
pub use scroll::{ScrollCommand, ScrollEffects};

use crate::models::page::PageModel;

/// Wires the individual enhancements to the host's load and scroll events.
pub struct PageEnhancements {
    scroll: ScrollEffects,
    animations: AnimationBootstrap,
}

impl PageEnhancements {
    pub fn new(scroll: ScrollEffects, animator: Option<Box<dyn ScrollAnimator>>) -> Self {
        Self {
            scroll,
            animations: AnimationBootstrap::new(animator),
        }
    }

    /// Load event: drop the preloader, settle the scroll-dependent classes
    /// for the initial offset, and initialize the animator if one is present.
    pub fn on_load(&mut self, page: &mut PageModel, offset: f64) {
        preloader::remove_on_load(page);
        self.scroll.on_scroll(page, offset);
        self.animations.init_on_load();
    }

    pub fn on_scroll(&self, page: &mut PageModel, offset: f64) {
        self.scroll.on_scroll(page, offset);
    }
}

#[cfg(test)]
mod tests {
    use crate::models::page::PageElement;

    use super::*;

    #[test]
    fn load_event_settles_the_page() {
        let mut page = PageModel::new();
        page.header = Some(PageElement::with_classes(&["sticky-top"]));
        page.preloader = Some(PageElement::new());
        page.scroll_top = Some(PageElement::new());

        let mut enhancements = PageEnhancements::new(ScrollEffects::default(), None);
        enhancements.on_load(&mut page, 0.0);

        assert!(page.preloader.is_none());
        assert!(!page.body.classes.contains(scroll::SCROLLED_CLASS));

        enhancements.on_scroll(&mut page, 250.0);
        assert!(page.body.classes.contains(scroll::SCROLLED_CLASS));
    }
}
