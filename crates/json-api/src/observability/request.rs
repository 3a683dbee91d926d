//! Per-request logging and request IDs.

use std::time::Instant;

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, info, warn};
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let request_id = resolve_request_id(req.header::<String>(REQUEST_ID_HEADER));

    set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        path = %path,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let status = res.status_code.unwrap_or(StatusCode::OK);
    let duration_ms = started.elapsed().as_millis();

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        if status.is_server_error() || status.is_client_error() {
            warn!(status = status.as_u16(), duration_ms, "request.failed");
        } else {
            info!(status = status.as_u16(), duration_ms, "request.completed");
        }
    });
}

fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(request_id, "could not encode request id for response header: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn make_service() -> Service {
        Service::new(Router::new().hoop(request_logging).get(ok))
    }

    #[test]
    fn resolve_request_id_keeps_caller_value() {
        assert_eq!(resolve_request_id(Some("abc".to_string())), "abc");
    }

    #[test]
    fn resolve_request_id_generates_for_blank_value() {
        let generated = resolve_request_id(Some("  ".to_string()));

        assert!(Uuid::parse_str(&generated).is_ok(), "expected a uuid, got {generated}");
    }

    #[tokio::test]
    async fn response_echoes_request_id() {
        let res = TestClient::get("http://example.com")
            .add_header(REQUEST_ID_HEADER, "req-123", true)
            .send(&make_service())
            .await;

        let header = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());

        assert_eq!(header, Some("req-123"));
    }
}
