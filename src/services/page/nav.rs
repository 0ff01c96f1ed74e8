use crate::models::page::{NavDropdown, PageModel};

pub const MOBILE_NAV_ACTIVE_CLASS: &str = "mobile-nav-active";
pub const NAV_OPEN_ICON_CLASS: &str = "bi-list";
pub const NAV_CLOSE_ICON_CLASS: &str = "bi-x";
pub const DROPDOWN_ACTIVE_CLASS: &str = "active";
pub const SUBMENU_ACTIVE_CLASS: &str = "dropdown-active";

pub fn is_open(page: &PageModel) -> bool {
    page.body.classes.contains(MOBILE_NAV_ACTIVE_CLASS)
}

/// Flips the mobile nav and swaps the toggle button's icon classes. Returns
/// the open state afterwards. A page without a toggle button still tracks the
/// body flag.
pub fn toggle(page: &mut PageModel) -> bool {
    let open = page.body.classes.toggle(MOBILE_NAV_ACTIVE_CLASS);
    if let Some(button) = &mut page.nav_toggle {
        button.classes.toggle(NAV_OPEN_ICON_CLASS);
        button.classes.toggle(NAV_CLOSE_ICON_CLASS);
    }
    open
}

/// Following an in-page link closes the nav if it was open. Returns true when
/// a close happened.
pub fn on_nav_link_followed(page: &mut PageModel) -> bool {
    if !is_open(page) {
        return false;
    }
    toggle(page);
    true
}

/// Flips one dropdown: the item gains/loses `active`, its submenu
/// `dropdown-active`.
pub fn toggle_dropdown(dropdown: &mut NavDropdown) {
    dropdown.item.classes.toggle(DROPDOWN_ACTIVE_CLASS);
    dropdown.submenu.classes.toggle(SUBMENU_ACTIVE_CLASS);
}
