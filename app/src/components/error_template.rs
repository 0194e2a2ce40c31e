//! This module defines the `error_template` component, which renders the page
//! shown when routing fails.
//!
//! It includes an `AppError` enum for application-level errors and a component
//! that renders them, setting the matching HTTP status code on the server.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

use crate::components::icons::icon;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s out of an error set, ignoring foreign error types.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders an error page based on the provided errors.
///
/// `outside_errors` takes priority (the router fallback passes them in during
/// SSR); otherwise the reactive `errors` from an error boundary are read
/// without subscribing. When neither is present the page is rendered empty.
/// On the server the response status is set from the first `AppError`.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|signal| signal.get_untracked()))
        .map(app_errors)
        .unwrap_or_default();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(first) = errors.first() {
            tracing::warn!(status = %first.status_code(), error = %first, "rendering error page");
            if let Some(response) = use_context::<ResponseOptions>() {
                response.set_status(first.status_code());
            }
        }
    }

    div().class("grid place-content-center py-24 px-4 h-full antialiased").child((
        h1().class("mb-6 text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_, error)| {
                    let error_code = error.status_code();

                    div().class("flex flex-col gap-1 justify-center items-center").child((
                        h1().class("text-xl tracking-widest uppercase text-muted-foreground").child(
                            format!("{error_code}| {error}")
                        ),
                        div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 text-[#405862] hover:text-[#334852]").child(
                            A(AProps::builder()
                                .href("/")
                                .children(ToChildren::to_children(move || {
                                    vec![
                                        icon(icondata::LuArrowLeft, "size-4").into_any(),
                                        "Go back home".into_any(),
                                    ]
                                }))
                                .build()
                            )
                        )
                    ))
                }).build(),
        ),
    ))
}
