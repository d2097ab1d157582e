//! Navigation rules: navbar styling, mobile menu and in-page scrolling.
//!
//! Pure functions; the browser crate wires them to events.

use crate::config::StoreConfig;

pub const NAVBAR_SOLID: &str = "rgba(0, 0, 0, 0.9)";
pub const NAVBAR_GLASS: &str = "rgba(255, 255, 255, 0.1)";

/// Class toggled on the nav menu (and on the current nav link).
pub const ACTIVE_CLASS: &str = "active";

/// Navbar background for a given vertical scroll position.
pub fn navbar_background(config: &StoreConfig, scroll_y: f64) -> &'static str {
    if scroll_y > config.navbar_solid_after_px {
        NAVBAR_SOLID
    } else {
        NAVBAR_GLASS
    }
}

/// Whether a resize to `viewport_width` must close the mobile menu.
pub fn closes_menu_on_resize(config: &StoreConfig, viewport_width: f64) -> bool {
    viewport_width > config.mobile_breakpoint_px
}

/// Transform of hamburger bar `index` (0-based) for the given menu state.
///
/// Even bars rotate one way, odd bars the other, forming a cross when open.
pub fn hamburger_bar_transform(index: usize, menu_open: bool) -> String {
    if !menu_open {
        return "none".to_string();
    }
    let odd = index % 2 == 1;
    let angle = if odd { -45 } else { 45 };
    let dx = if odd { -6 } else { 6 };
    let dy = if odd { 6 } else { -6 };
    format!("rotate({angle}deg) translate({dx}px, {dy}px)")
}

/// Document offset to scroll to so `target` lands just below the fixed navbar.
pub fn scroll_target_top(target_rect_top: f64, page_y_offset: f64, navbar_height: f64) -> f64 {
    target_rect_top + page_y_offset - navbar_height
}

/// Whether an anchor `href` points inside the current page.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#')
}
