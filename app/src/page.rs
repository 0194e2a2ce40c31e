//! The destination rendered for every navigation route, including nested
//! paths such as `/our-work/2024-summit`.

use leptos::{
    html::{h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_location;

use crate::{routes, site};

/// Page heading for a location: the active route's label, or the brand when
/// no route matches.
pub fn heading(path: &str) -> &'static str {
    routes::active_route(Some(path)).map_or(site::BRAND_NAME, |route| route.label)
}

pub fn component() -> impl IntoView {
    let pathname = use_location().pathname;
    let title = move || pathname.with(|path| heading(path));

    section().class("py-12").child((
        Title(
            TitleProps::builder()
                .text(move || format!("{} | {}", title(), site::brand()))
                .build(),
        ),
        h1().class("text-3xl font-bold text-[#405862]").child(title),
        p().class("mt-2 text-muted-foreground").child(move || pathname.get()),
    ))
}
