//! Reactive state owned by a mounted header.
//!
//! The header tracks two unrelated flags: whether the mobile menu panel is
//! open and whether the page has been scrolled past [`SCROLL_THRESHOLD`].
//! Both live in signals owned by the header's reactive scope, so once the
//! header is unmounted and its owner cleaned up, further updates are dropped.

use leptos::prelude::*;

/// Vertical scroll offset above which the header switches to its raised style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Whether a vertical scroll offset puts the header in its scrolled style.
pub fn exceeds_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug)]
pub struct NavbarState {
    menu_open: RwSignal<bool>,
    scrolled: RwSignal<bool>,
}

impl NavbarState {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            scrolled: RwSignal::new(false),
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        set_if_changed(self.menu_open, false);
    }

    /// A navigation link was chosen; the router handles the navigation itself.
    pub fn select_link(&self) {
        self.close_menu();
    }

    /// Recomputes the scrolled flag from the latest vertical offset.
    pub fn record_scroll(&self, offset: f64) {
        set_if_changed(self.scrolled, exceeds_scroll_threshold(offset));
    }

    #[cfg(test)]
    fn menu_open_signal(&self) -> RwSignal<bool> {
        self.menu_open
    }

    #[cfg(test)]
    fn scrolled_signal(&self) -> RwSignal<bool> {
        self.scrolled
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new()
    }
}

// Writes through `maybe_update` so equal values don't notify subscribers, and
// a disposed signal is ignored instead of panicking.
fn set_if_changed(signal: RwSignal<bool>, next: bool) {
    signal.maybe_update(|value| {
        let changed = *value != next;
        *value = next;
        changed
    });
}
