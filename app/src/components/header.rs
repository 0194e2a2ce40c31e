//! The site header: branding, primary navigation, the mobile slide-out menu,
//! the call to action and the social links.
//!
//! The header restyles itself once the page is scrolled and highlights the
//! route matching the current location.

mod state;

pub use state::{NavbarState, SCROLL_THRESHOLD, exceeds_scroll_threshold};

use icondata::{LuMenu, LuX};
use leptos::{ev, prelude::*};
use leptos_router::{components::A, hooks::use_location};

use crate::{
    components::icons::{self, icon},
    routes::{ROUTES, RouteDescriptor},
    site::{BRAND_ACCENT, BRAND_NAME, INTEREST_FORM_LABEL, INTEREST_FORM_URL, LOGO_ALT, LOGO_SRC},
};

const HEADER_BASE: &str = "sticky top-0 z-50 w-full border-b backdrop-blur transition-all duration-200 supports-[backdrop-filter]:bg-background/60";
const ACCENT_MARKER: &str = "mr-2 w-1 h-4 rounded-full bg-[#405862]";
const ACCENT_UNDERLINE: &str = "absolute left-0 w-full h-1 rounded-full -bottom-[6px] bg-[#405862]";

pub fn header_class(scrolled: bool) -> String {
    let modifier = if scrolled {
        "bg-background/95 shadow-md"
    } else {
        "bg-background border-transparent"
    };
    format!("{HEADER_BASE} {modifier}")
}

pub fn desktop_link_class(active: bool) -> &'static str {
    if active {
        "relative py-1.5 px-2 text-base font-bold transition-colors text-[#405862] hover:text-[#405862]"
    } else {
        "relative py-1.5 px-2 text-base font-medium rounded-md transition-colors text-muted-foreground hover:text-[#405862] hover:bg-[#f5f1eb]/50"
    }
}

pub fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "flex items-center py-2 px-3 text-sm font-bold rounded-md transition-colors text-[#405862] bg-[#f5f1eb] hover:text-[#405862]"
    } else {
        "flex items-center py-2 px-3 text-sm font-medium rounded-md transition-colors text-muted-foreground hover:text-[#405862]"
    }
}

/// Renders the header. Must be mounted inside a `Router`.
pub fn component() -> impl IntoView {
    let state = NavbarState::new();
    let pathname = use_location().pathname;

    // Any navigation, whether from a link or the browser history, closes the menu.
    Effect::new(move |_| {
        pathname.track();
        state.close_menu();
    });
    listen_to_window(state);

    view! {
        <header class=move || header_class(state.is_scrolled())>
            <div class="container flex justify-between items-center h-16">
                <div class="flex gap-2 items-center">
                    <button
                        type="button"
                        class="inline-flex justify-center items-center rounded-md md:hidden size-10 hover:bg-[#f5f1eb]"
                        aria-controls="mobile-menu"
                        aria-expanded=move || state.is_menu_open().to_string()
                        on:click=move |_| state.toggle_menu()
                    >
                        {icon(LuMenu, "size-5")}
                        <span class="sr-only">"Toggle menu"</span>
                    </button>
                    {mobile_menu(state, pathname)}
                    <A href="/" attr:class="flex gap-2 items-center">
                        <img src=LOGO_SRC alt=LOGO_ALT width="40" height="40" class="hidden rounded-full md:block"/>
                        <div class="text-lg font-semibold">
                            <span class="text-[#405862]">{BRAND_ACCENT}</span>
                            " "
                            {BRAND_NAME}
                        </div>
                    </A>
                </div>
                <nav class="hidden gap-10 items-center md:flex" aria-label="Main">
                    {ROUTES.iter().map(|route| desktop_link(*route, pathname)).collect_view()}
                </nav>
                <div class="flex gap-4 items-center">
                    <a
                        href=INTEREST_FORM_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden py-2 px-4 text-sm font-medium text-white rounded-md transition-all md:inline-flex hover:shadow-md bg-[#405862] hover:bg-[#334852]"
                    >
                        {INTEREST_FORM_LABEL}
                    </a>
                    {icons::component()}
                </div>
            </div>
        </header>
    }
}

// Registers the window listeners for the lifetime of the header's owner.
fn listen_to_window(state: NavbarState) {
    let scroll = window_event_listener(ev::scroll, move |_| {
        state.record_scroll(window().scroll_y().unwrap_or_default());
    });
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            state.close_menu();
        }
    });
    on_cleanup(move || {
        scroll.remove();
        keydown.remove();
    });
}

fn desktop_link(route: RouteDescriptor, pathname: Memo<String>) -> impl IntoView {
    let active = move || pathname.with(|path| route.is_active(Some(path.as_str())));

    view! {
        <A href=route.path attr:class=move || desktop_link_class(active())>
            {route.label}
            <Show when=active>
                <span class=ACCENT_UNDERLINE></span>
            </Show>
        </A>
    }
}

fn mobile_link(route: RouteDescriptor, state: NavbarState, pathname: Memo<String>) -> impl IntoView {
    let active = move || pathname.with(|path| route.is_active(Some(path.as_str())));

    view! {
        <A
            href=route.path
            attr:class=move || mobile_link_class(active())
            on:click=move |_| state.select_link()
        >
            <Show when=active>
                <div class=ACCENT_MARKER></div>
            </Show>
            {route.label}
        </A>
    }
}

fn mobile_menu(state: NavbarState, pathname: Memo<String>) -> impl IntoView {
    view! {
        <Show when=move || state.is_menu_open()>
            <div
                class="fixed inset-0 z-50 md:hidden bg-black/80"
                aria-hidden="true"
                on:click=move |_| state.close_menu()
            ></div>
            <div
                id="mobile-menu"
                role="dialog"
                aria-modal="true"
                aria-label="Navigation menu"
                class="fixed inset-y-0 left-0 z-50 p-6 border-r shadow-lg md:hidden w-[240px] bg-background sm:w-[300px]"
            >
                <button
                    type="button"
                    class="absolute top-4 right-4 rounded-sm opacity-70 transition-opacity hover:opacity-100"
                    on:click=move |_| state.close_menu()
                >
                    {icon(LuX, "size-4")}
                    <span class="sr-only">"Close"</span>
                </button>
                <div class="flex flex-col gap-4 py-4">
                    <A href="/" attr:class="flex gap-2 items-center" on:click=move |_| state.select_link()>
                        <img src=LOGO_SRC alt=LOGO_ALT width="100" height="100" class="rounded-full"/>
                    </A>
                    <nav class="flex flex-col gap-4">
                        {ROUTES
                            .iter()
                            .map(|route| mobile_link(*route, state, pathname))
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_class_follows_scroll() {
        let resting = header_class(false);
        let raised = header_class(true);
        assert!(resting.starts_with("sticky top-0"));
        assert!(resting.ends_with("bg-background border-transparent"));
        assert!(raised.ends_with("bg-background/95 shadow-md"));
        assert!(!raised.contains("border-transparent"));
    }

    #[test]
    fn test_link_classes_mark_active_route() {
        assert!(desktop_link_class(true).contains("font-bold"));
        assert!(!desktop_link_class(false).contains("font-bold"));
        assert!(mobile_link_class(true).contains("bg-[#f5f1eb]"));
        assert!(mobile_link_class(false).contains("text-muted-foreground"));
    }

    #[test]
    fn test_header_reexports_threshold() {
        assert!((SCROLL_THRESHOLD - 10.0).abs() < f64::EPSILON);
        assert!(exceeds_scroll_threshold(SCROLL_THRESHOLD + 1.0));
    }
}
