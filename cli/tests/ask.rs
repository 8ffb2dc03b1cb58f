//! # fiuba-chat Ask & Graph Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! One-shot commands against mock backends: `ask` prints only the answer
//! text; `graph create` prints the backend's response.
//!

mod common;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::*;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn test_ask_prints_answer_only() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["ask", "--endpoint", &echo_backend(), "¿qué", "es", "FIUBA?"])
        .assert()
        .success()
        .stdout(predicate::eq("Respuesta a: ¿qué es FIUBA?\n"));
}

#[test]
fn test_ask_ignores_http_status() {
    let dir = isolated_dir();
    let endpoint = spawn_backend(Router::new().route(
        "/find_chunk",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "answer": "respuesta igual" })),
            )
        }),
    ));
    chat_cmd(&dir)
        .args(["ask", "--endpoint", &endpoint, "hola"])
        .assert()
        .success()
        .stdout(predicate::eq("respuesta igual\n"));
}

#[test]
fn test_ask_failure_prints_fallback_and_exits_non_zero() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["ask", "--endpoint", &unreachable_endpoint(), "hola"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error al obtener respuesta del servidor.",
        ))
        .stderr(predicate::str::contains("Error:"));

    chat_cmd(&dir)
        .args([
            "ask",
            "--variant",
            "guided",
            "--endpoint",
            &failing_backend(),
            "hola",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Hubo un error al procesar tu solicitud.",
        ));
}

#[test]
fn test_ask_blank_question_is_rejected_without_request() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["ask", "--endpoint", &unreachable_endpoint(), "   "])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be blank"));
}

#[test]
fn test_graph_create_prints_backend_response() {
    let dir = isolated_dir();
    let endpoint = spawn_backend(Router::new().route(
        "/create_kg",
        post(|| async { Json(json!({ "response": "Grafo creado exitosamente" })) }),
    ));
    chat_cmd(&dir)
        .args(["graph", "create", "--endpoint", &endpoint])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grafo creado exitosamente"));
}

#[test]
fn test_graph_create_surfaces_backend_detail() {
    let dir = isolated_dir();
    let endpoint = spawn_backend(Router::new().route(
        "/create_kg",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "No se pudo crear el grafo a partir del documento." })),
            )
        }),
    ));
    chat_cmd(&dir)
        .args(["graph", "create", "--endpoint", &endpoint])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No se pudo crear el grafo a partir del documento.",
        ));
}
