//! # fiuba-chat Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests: building the command, an
//! isolated configuration directory, and an in-process mock of the
//! chunk-finding backend served by `axum` on an ephemeral port.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;

/// # Get fiuba-chat Command (`chat_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled binary, running inside
/// `workdir` with `HOME` and `XDG_CONFIG_HOME` pointing into it, so neither
/// user nor project configuration leaks into the test.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn chat_cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fiuba-chat").expect("Failed to find fiuba-chat binary");
    cmd.current_dir(workdir.path())
        .env("HOME", workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path().join(".config"))
        .env_remove("FIUBA_CHAT_ENDPOINT")
        .env_remove("RUST_LOG");
    cmd
}

/// A fresh temporary working directory.
pub fn isolated_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Serves `router` on `127.0.0.1:<ephemeral>` from a background thread and
/// returns its base URL. The server lives until the test process exits.
pub fn spawn_backend(router: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build mock backend runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind mock backend");
            tx.send(listener.local_addr().expect("No local address"))
                .expect("Failed to report mock backend address");
            axum::serve(listener, router)
                .await
                .expect("Mock backend stopped");
        });
    });
    let addr = rx.recv().expect("Mock backend did not start");
    format!("http://{}", addr)
}

/// Backend whose `/find_chunk` answers `Respuesta a: <query>`.
pub fn echo_backend() -> String {
    spawn_backend(Router::new().route(
        "/find_chunk",
        post(|Json(body): Json<Value>| async move {
            let query = body["query"].as_str().unwrap_or("<sin query>").to_string();
            Json(json!({ "answer": format!("Respuesta a: {}", query) }))
        }),
    ))
}

/// Backend whose `/find_chunk` always fails with the backend's error shape.
pub fn failing_backend() -> String {
    spawn_backend(Router::new().route(
        "/find_chunk",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "No se pudo responder la consulta." })),
            )
        }),
    ))
}

/// A base URL on which nothing is listening.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}
