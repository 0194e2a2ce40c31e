use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};
use tracing::{debug, error};

/// Permanently redirects `www.` hosts to the bare domain over https, keeping the
/// path and query.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(host) = req.headers().get(header::HOST)
        && let Ok(host) = host.to_str()
        && let Some(bare_host) = host.strip_prefix("www.")
    {
        let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
        let location = format!("https://{bare_host}{path_query}");
        debug!(%host, %location, "redirecting www host");
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|err| {
                error!(?err, "Failed to build redirect response");
                StatusCode::INTERNAL_SERVER_ERROR
            });
    }
    Ok(next.run(req).await)
}
