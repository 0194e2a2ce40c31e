//! Behavioural checks of the header's navigation and state handling through the
//! crate's public API.

use app::components::header::{NavbarState, SCROLL_THRESHOLD, header_class};
use app::routes::{self, ROUTES};
use leptos::prelude::*;

fn with_state<T>(test: impl FnOnce(NavbarState) -> T) -> T {
    let owner = Owner::new();
    owner.with(|| test(NavbarState::new()))
}

#[test]
fn nested_summit_page_highlights_our_work_only() {
    let current = Some("/our-work/2024-summit");
    let active: Vec<_> = ROUTES
        .iter()
        .filter(|route| route.is_active(current))
        .map(|route| route.label)
        .collect();
    assert_eq!(active, ["Our Work"]);
}

#[test]
fn active_iff_exact_or_separator_prefix() {
    let paths = [
        "/",
        "/our-work",
        "/our-work/",
        "/our-work/2024-summit",
        "/our-works",
        "/events/spring/day-1",
        "/blog",
        "/blogs",
        "/members?page=2",
        "/contact/",
        "",
    ];
    for current in paths {
        for route in ROUTES {
            let expected =
                current == route.path || current.starts_with(&format!("{}/", route.path));
            assert_eq!(
                routes::is_active(Some(current), route.path),
                expected,
                "path {current:?} route {}",
                route.path
            );
        }
    }
}

#[test]
fn scroll_threshold_boundaries() {
    with_state(|state| {
        state.record_scroll(SCROLL_THRESHOLD);
        assert!(!state.is_scrolled());
        state.record_scroll(11.0);
        assert!(state.is_scrolled());
    });
}

#[test]
fn scroll_offsets_zero_fifteen_five() {
    let seen = with_state(|state| {
        [0.0, 15.0, 5.0]
            .into_iter()
            .map(|offset| {
                state.record_scroll(offset);
                state.is_scrolled()
            })
            .collect::<Vec<_>>()
    });
    assert_eq!(seen, [false, true, false]);
}

#[test]
fn selecting_any_link_closes_open_menu() {
    with_state(|state| {
        for _ in ROUTES {
            state.toggle_menu();
            assert!(state.is_menu_open());
            state.select_link();
            assert!(!state.is_menu_open());
        }
    });
}

#[test]
fn header_style_tracks_scrolled_flag() {
    with_state(|state| {
        assert!(header_class(state.is_scrolled()).contains("border-transparent"));
        state.record_scroll(40.0);
        assert!(header_class(state.is_scrolled()).contains("shadow-md"));
    });
}
