use crate::models::page::PageModel;
use crate::models::settings::PageConfig;

pub const SCROLLED_CLASS: &str = "scrolled";
pub const HEADER_SCROLLED_CLASS: &str = "header-scrolled";
pub const SCROLL_TOP_ACTIVE_CLASS: &str = "active";

/// Header classes that opt the body into the scrolled flag.
const STICKY_MARKER_CLASSES: [&str; 3] = ["scroll-up-sticky", "sticky-top", "fixed-top"];

/// Host-side action requested by a page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    ToTop { smooth: bool },
}

/// Scroll-position driven class toggles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEffects {
    pub scrolled_threshold: f64,
    pub header_threshold: f64,
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            header_threshold: 10.0,
        }
    }
}

impl ScrollEffects {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            scrolled_threshold: config.scrolled_threshold,
            header_threshold: config.header_threshold,
        }
    }

    /// Applies every scroll-dependent toggle for the given scroll offset.
    pub fn on_scroll(&self, page: &mut PageModel, offset: f64) {
        self.toggle_scrolled(page, offset);
        self.toggle_header_background(page, offset);
        self.toggle_scroll_top(page, offset);
    }

    /// Body gains the scrolled flag past the threshold, but only when the
    /// header opted in via one of the sticky marker classes. Without a header
    /// or marker the body is left untouched.
    fn toggle_scrolled(&self, page: &mut PageModel, offset: f64) {
        let Some(header) = &page.header else {
            return;
        };
        let sticky = STICKY_MARKER_CLASSES
            .iter()
            .any(|class| header.classes.contains(class));
        if !sticky {
            return;
        }

        page.body
            .classes
            .set(SCROLLED_CLASS, offset > self.scrolled_threshold);
    }

    /// The header background flips independently of the sticky markers.
    fn toggle_header_background(&self, page: &mut PageModel, offset: f64) {
        if let Some(header) = &mut page.header {
            header
                .classes
                .set(HEADER_SCROLLED_CLASS, offset > self.header_threshold);
        }
    }

    fn toggle_scroll_top(&self, page: &mut PageModel, offset: f64) {
        if let Some(button) = &mut page.scroll_top {
            button
                .classes
                .set(SCROLL_TOP_ACTIVE_CLASS, offset > self.scrolled_threshold);
        }
    }
}

/// Activating the scroll-top button asks the host for a smooth scroll back to
/// the top; the engine owns no viewport, so the move itself is the host's.
pub fn activate_scroll_top(page: &PageModel) -> Option<ScrollCommand> {
    page.scroll_top
        .as_ref()
        .map(|_| ScrollCommand::ToTop { smooth: true })
}

#[cfg(test)]
mod tests {
    use crate::models::page::PageElement;

    use super::*;

    fn sticky_page() -> PageModel {
        let mut page = PageModel::new();
        page.header = Some(PageElement::with_classes(&["fixed-top"]));
        page.scroll_top = Some(PageElement::new());
        page
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        let mut page = sticky_page();
        let effects = ScrollEffects::default();

        effects.on_scroll(&mut page, 150.0);
        assert!(page.body.classes.contains(SCROLLED_CLASS));

        effects.on_scroll(&mut page, 50.0);
        assert!(!page.body.classes.contains(SCROLLED_CLASS));
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut page = sticky_page();
        let effects = ScrollEffects::default();

        effects.on_scroll(&mut page, 100.0);
        assert!(!page.body.classes.contains(SCROLLED_CLASS));
        effects.on_scroll(&mut page, 100.5);
        assert!(page.body.classes.contains(SCROLLED_CLASS));
    }

    #[test]
    fn non_sticky_header_leaves_body_untouched() {
        let mut page = PageModel::new();
        page.header = Some(PageElement::with_classes(&["plain"]));
        page.body.classes.add(SCROLLED_CLASS);

        ScrollEffects::default().on_scroll(&mut page, 0.0);
        // No marker class means the flag is not managed at all
        assert!(page.body.classes.contains(SCROLLED_CLASS));
    }

    #[test]
    fn missing_header_is_a_noop_for_body_flag() {
        let mut page = PageModel::new();
        ScrollEffects::default().on_scroll(&mut page, 500.0);
        assert!(!page.body.classes.contains(SCROLLED_CLASS));
    }

    #[test]
    fn header_background_uses_its_own_threshold() {
        let mut page = sticky_page();
        let effects = ScrollEffects::default();

        effects.on_scroll(&mut page, 11.0);
        let header = page.header.as_ref().unwrap();
        assert!(header.classes.contains(HEADER_SCROLLED_CLASS));
        // 11 is above the header threshold but below the body one
        assert!(!page.body.classes.contains(SCROLLED_CLASS));

        effects.on_scroll(&mut page, 5.0);
        let header = page.header.as_ref().unwrap();
        assert!(!header.classes.contains(HEADER_SCROLLED_CLASS));
    }

    #[test]
    fn scroll_top_button_activates_and_requests_top() {
        let mut page = sticky_page();
        let effects = ScrollEffects::default();

        effects.on_scroll(&mut page, 300.0);
        let button = page.scroll_top.as_ref().unwrap();
        assert!(button.classes.contains(SCROLL_TOP_ACTIVE_CLASS));

        assert_eq!(
            activate_scroll_top(&page),
            Some(ScrollCommand::ToTop { smooth: true })
        );
    }

    #[test]
    fn absent_scroll_top_yields_no_command() {
        let page = PageModel::new();
        assert_eq!(activate_scroll_top(&page), None);
    }

    #[test]
    fn thresholds_come_from_config() {
        let config = PageConfig {
            scrolled_threshold: 40.0,
            header_threshold: 4.0,
            ..PageConfig::default()
        };
        let effects = ScrollEffects::from_config(&config);

        let mut page = sticky_page();
        effects.on_scroll(&mut page, 41.0);
        assert!(page.body.classes.contains(SCROLLED_CLASS));
    }
}
