//! Inline icon rendering and the header's social profile links.

use icondata::Icon;
use leptos::{html::{a, div}, prelude::*};

use crate::site::SOCIAL_LINKS;

/// Renders an `icondata` icon as an inline, decorative `<svg>`.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox=icon.view_box
            fill=icon.fill.unwrap_or("currentColor")
            stroke=icon.stroke
            stroke-width=icon.stroke_width
            stroke-linecap=icon.stroke_linecap
            stroke-linejoin=icon.stroke_linejoin
            aria-hidden="true"
            inner_html=icon.data
        ></svg>
    }
}

/// The row of community and social profile links shown at the end of the header.
pub fn component() -> impl IntoView {
    div().class("flex flex-row gap-4 items-center").child(
        SOCIAL_LINKS
            .iter()
            .map(|link| {
                a().href(link.url)
                    .rel("noopener noreferrer")
                    .target("_blank")
                    .aria_label(link.label)
                    .class("transition-colors text-[#405862] hover:text-[#334852]")
                    .child(icon(link.icon, "size-6"))
            })
            .collect_view(),
    )
}
