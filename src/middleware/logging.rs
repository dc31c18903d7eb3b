use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Level;

// same ceiling axum applies to `Json` bodies by default
const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
struct Operation<'a> {
    resource: &'static str,
    name: &'static str,
    id: Option<&'a str>,
}

fn classify<'a>(method: &Method, path: &'a str) -> Option<Operation<'a>> {
    // axum routes `/api/pedidos/` to the fallback, so no trailing slash here
    let mut segments = path.strip_prefix('/')?.split('/');

    if segments.next()? != "api" {
        return None;
    }

    let resource = match segments.next()? {
        "produtos" => "produtos",
        "pedidos" => "pedidos",
        "itens" => "itens",
        _ => return None,
    };

    let id = segments.next();
    if id == Some("") || segments.next().is_some() {
        return None;
    }

    let name = match (method, id.is_some()) {
        (&Method::POST, false) => "create",
        (&Method::GET, false) => "read_all",
        (&Method::GET, true) => "read",
        (&Method::PUT, true) => "update",
        (&Method::DELETE, true) => "delete",
        _ => return None,
    };

    Some(Operation { resource, name, id })
}

/// Logs every resource call once: the operation at info level, its inputs
/// (path id and request body) at debug level.
pub async fn log_operation(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let Some(op) = classify(req.method(), &path) else {
        return next.run(req).await;
    };

    tracing::info!(
        resource = op.resource,
        operation = op.name,
        "{}::{}",
        op.resource,
        op.name
    );

    if !tracing::enabled!(Level::DEBUG) {
        return next.run(req).await;
    }

    let has_body = matches!(op.name, "create" | "update");
    if !has_body {
        match op.id {
            Some(id) => tracing::debug!(resource = op.resource, operation = op.name, id, "parameters"),
            None => tracing::debug!(resource = op.resource, operation = op.name, "no parameters"),
        }
        return next.run(req).await;
    }

    // buffer the body so it can be logged, then hand the same bytes on
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!(error = %e, "request body rejected");
            return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
        }
    };

    tracing::debug!(
        resource = op.resource,
        operation = op.name,
        id = op.id,
        body = %String::from_utf8_lossy(&bytes),
        "parameters"
    );

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
