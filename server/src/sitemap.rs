use app::routes::ROUTES;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use core::fmt::Write as _;
use tracing::error;

use crate::state::AppState;

pub fn build_response(body: String, content_type: &str, status: StatusCode) -> Response<String> {
    match Response::builder()
        .status(status)
        .header("Content-Type", content_type)
        .body(body)
    {
        Ok(response) => response,
        Err(build_error) => {
            error!(?build_error, "Failed to build HTTP response");
            let mut fallback = Response::new(String::new());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}

/// Renders the sitemap for the navigation routes under `base_url`.
pub fn render_sitemap(base_url: &str) -> Result<String, core::fmt::Error> {
    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for route in ROUTES {
        let priority = if route.path == "/" { "1.0" } else { "0.8" };
        sitemap.push_str("<url>\n");
        writeln!(sitemap, "<loc>{base_url}{}</loc>", route.path)?;
        writeln!(sitemap, "<changefreq>weekly</changefreq>")?;
        writeln!(sitemap, "<priority>{priority}</priority>")?;
        sitemap.push_str("</url>\n");
    }

    sitemap.push_str("</urlset>\n");
    Ok(sitemap)
}

pub async fn sitemap_handler(State(state): State<AppState>) -> Response<String> {
    match render_sitemap(&state.config.base_url) {
        Ok(sitemap) => build_response(sitemap, "application/xml; charset=utf-8", StatusCode::OK),
        Err(err) => {
            error!(?err, "Failed to write sitemap");
            build_response(
                "Failed to build sitemap".to_owned(),
                "text/plain; charset=utf-8",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
