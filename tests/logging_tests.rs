mod common;

use std::io;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::json;
use tracing::Level;

use common::{send, send_raw, test_app};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Single test in this binary: the subscriber is a thread-local default and
// #[tokio::test] runs everything on the current thread.
#[tokio::test]
async fn debug_logging_records_operations_and_forwards_bodies() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = test_app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/produtos",
        Some(json!({ "desPro": "Widget", "qtdeProduto": 10.0, "valProduto": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["desPro"], "Widget");

    let (status, updated) = send(
        &app,
        "PUT",
        "/api/produtos/1",
        Some(json!({ "desPro": "Widget XL", "qtdeProduto": 10.0, "valProduto": 3.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["desPro"], "Widget XL");
    assert_eq!(updated["valProduto"], 3.0);

    let (status, _) = send(&app, "GET", "/api/produtos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/api/produtos", None).await;
    assert_eq!(status, StatusCode::OK);

    // malformed bodies still reach the extractor after buffering
    let (status, _) = send_raw(&app, "POST", "/api/produtos", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let oversized = format!(r#"{{"desPro": "{}"}}"#, "x".repeat(2 * 1024 * 1024));
    let (status, _) = send_raw(&app, "POST", "/api/produtos", Some(&oversized)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);

    let out = logs.text();
    assert!(out.contains("produtos::create"), "{out}");
    assert!(out.contains("produtos::update"), "{out}");
    assert!(out.contains("produtos::read_all"), "{out}");
    assert!(out.contains("produtos::read "), "{out}");
    assert!(out.contains("Widget XL"), "body not logged: {out}");
    assert!(out.contains("id=\"1\"") || out.contains("id=1"), "id not logged: {out}");
    assert!(out.contains("no parameters"), "{out}");

    let (_, all) = send(&app, "GET", "/api/produtos", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}
