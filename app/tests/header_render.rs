//! Server-side renders of the full app, checking the header markup produced for
//! a given request path.
#![cfg(feature = "ssr")]

use app::components::header::{desktop_link_class, header_class};
use app::routes::ROUTES;
use app::site::{INTEREST_FORM_LABEL, INTEREST_FORM_URL};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml as _;
use leptos_meta::provide_meta_context;
use leptos_router::location::RequestUrl;

const UNDERLINE_MARKER: &str = "-bottom-[6px]";

fn render_at(path: &str) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_meta_context();
        provide_context(RequestUrl::new(path));
        app::component().to_html()
    });
    // Unmounting runs the header's cleanup, which removes its window listeners.
    owner.cleanup();
    html
}

/// The opening tag of the first `<a>` element whose `href` is `href`.
fn anchor_tag<'a>(html: &'a str, href: &str) -> &'a str {
    let needle = format!("href=\"{href}\"");
    let at = html.find(&needle).unwrap_or_else(|| panic!("no link to {href}"));
    let start = html[..at].rfind("<a").expect("link has an opening tag");
    let end = at + html[at..].find('>').expect("link tag is closed");
    &html[start..=end]
}

#[test]
fn nested_page_marks_only_our_work_active() {
    let html = render_at("/our-work/2024-summit");

    assert_eq!(html.matches(desktop_link_class(true)).count(), 1);
    assert_eq!(
        html.matches(desktop_link_class(false)).count(),
        ROUTES.len() - 1
    );
    assert_eq!(html.matches(UNDERLINE_MARKER).count(), 1);

    let active = anchor_tag(&html, "/our-work");
    assert!(active.contains(desktop_link_class(true)), "{active}");
}

#[test]
fn root_page_marks_only_home_active() {
    let html = render_at("/");
    assert_eq!(html.matches(desktop_link_class(true)).count(), 1);
    assert_eq!(html.matches(UNDERLINE_MARKER).count(), 1);
    assert!(anchor_tag(&html, "/events").contains(desktop_link_class(false)));
}

#[test]
fn unknown_page_marks_nothing_active() {
    let html = render_at("/not-a-section");
    assert_eq!(html.matches(desktop_link_class(true)).count(), 0);
    assert_eq!(html.matches(UNDERLINE_MARKER).count(), 0);
}

#[test]
fn header_starts_unscrolled_with_menu_closed() {
    let html = render_at("/contact");
    assert!(html.contains(&header_class(false)));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("id=\"mobile-menu\""));
}

#[test]
fn call_to_action_opens_in_new_context() {
    let html = render_at("/events");
    let cta = anchor_tag(&html, INTEREST_FORM_URL);
    assert!(cta.contains("target=\"_blank\""), "{cta}");
    assert!(cta.contains("rel=\"noopener noreferrer\""), "{cta}");
    assert!(html.contains(INTEREST_FORM_LABEL));
}
