mod config;
mod redirect;
mod sitemap;
mod state;

use std::sync::Arc;

use app::{component, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use config::ServerConfig;
use dotenvy::dotenv;
use leptos::logging;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use serde_json::json;
use sitemap::sitemap_handler;
use state::AppState;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "site",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn router(app_state: AppState) -> Router {
    let routes = generate_route_list(component);

    let app = Router::<AppState>::new()
        .leptos_routes(
            &app_state,
            routes,
            {
                let leptos_options = app_state.leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .nest_service("/static", ServeDir::new(&app_state.config.static_dir));

    let app = if app_state.config.redirect_www {
        app.layer(axum::middleware::from_fn(redirect_www))
    } else {
        app
    };

    app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new().compress_when(
                NotForContentType::new("application/xml").and(SizeAbove::new(1024)),
            )),
    )
    .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
    .with_state(app_state)
}

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let config = match ServerConfig::from_env(addr) {
        Ok(config) => config,
        Err(err) => {
            logging::error!("Invalid server configuration: {}", err);
            return;
        }
    };
    tracing::debug!(?config, "loaded server configuration");

    let app = router(AppState {
        leptos_options,
        config: Arc::new(config),
    });

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
            logging::error!("Error details: {:?}", err);
        }
    }
}
