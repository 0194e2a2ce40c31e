// Core application modules and components
use crate::components::{error_template, header};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod page;
pub mod routes;
pub mod site;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/site.css")
                    .build(),
            ),
            Title(TitleProps::builder().text(site::brand()).build()),
        )),
        body().class("min-h-screen antialiased bg-background font-sans").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                {header::component}
                <main class="container flex-1">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=page::component/>
                        <Route path=StaticSegment("our-work") view=page::component/>
                        <Route path=(StaticSegment("our-work"), WildcardSegment("rest")) view=page::component/>
                        <Route path=StaticSegment("events") view=page::component/>
                        <Route path=(StaticSegment("events"), WildcardSegment("rest")) view=page::component/>
                        <Route path=StaticSegment("blog") view=page::component/>
                        <Route path=(StaticSegment("blog"), WildcardSegment("rest")) view=page::component/>
                        <Route path=StaticSegment("members") view=page::component/>
                        <Route path=(StaticSegment("members"), WildcardSegment("rest")) view=page::component/>
                        <Route path=StaticSegment("contact") view=page::component/>
                        <Route path=(StaticSegment("contact"), WildcardSegment("rest")) view=page::component/>
                    </FlatRoutes>
                </main>
            </div>
        </Router>
    }
}
