//! # fiuba-chat Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Runs `fiuba-chat chat` with questions piped on stdin against a mock
//! backend. Piped stdout is not a terminal, so output carries no colour codes.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_classic_chat_shows_question_and_answer() {
    let dir = isolated_dir();
    let endpoint = echo_backend();
    chat_cmd(&dir)
        .args(["chat", "--endpoint", &endpoint])
        .write_stdin("   ¿Qué es un chunk?   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("FIUBA Chatbot"))
        .stdout(predicate::str::contains("Vos > ¿Qué es un chunk?"))
        .stdout(predicate::str::contains("Bot > Respuesta a: ¿Qué es un chunk?"))
        .stdout(predicate::str::contains("Sesión finalizada."));
}

#[test]
fn test_blank_lines_produce_no_messages() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["chat", "--endpoint", &unreachable_endpoint()])
        .write_stdin("\n   \n\t\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vos >").not())
        .stdout(predicate::str::contains("Bot >").not());
}

#[test]
fn test_classic_chat_shows_fallback_when_backend_is_down() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["chat", "--endpoint", &unreachable_endpoint()])
        .write_stdin("hola\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bot > Error al obtener respuesta del servidor.",
        ));
}

#[test]
fn test_guided_chat_greets_profile_and_uses_its_fallback() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args([
            "chat",
            "--variant",
            "guided",
            "--name",
            "Ana",
            "--year",
            "2",
            "--endpoint",
            &failing_backend(),
        ])
        .write_stdin("hola\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("¡Hola, Ana! (2° año)"))
        .stdout(predicate::str::contains(
            "Bot > Hubo un error al procesar tu solicitud.",
        ));
}

#[test]
fn test_guided_chat_without_terminal_needs_profile_flags() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["chat", "--variant", "guided", "--endpoint", &echo_backend()])
        .write_stdin("hola\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("welcome screen"));
}

#[test]
fn test_variant_can_come_from_project_config() {
    let dir = isolated_dir();
    std::fs::write(
        dir.path().join(".fiuba-chat.toml"),
        "[chat]\nvariant = \"guided\"\n",
    )
    .unwrap();
    chat_cmd(&dir)
        .args([
            "chat",
            "--name",
            "Ana",
            "--year",
            "5",
            "--endpoint",
            &unreachable_endpoint(),
        ])
        .write_stdin("hola\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hubo un error al procesar tu solicitud."));
}

#[test]
fn test_classic_report_command_is_refused() {
    let dir = isolated_dir();
    chat_cmd(&dir)
        .args(["chat", "--endpoint", &unreachable_endpoint()])
        .write_stdin("/report\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("solo está disponible en la variante guiada"));
}

#[test]
fn test_project_config_overrides_user_config() {
    let dir = isolated_dir();
    let user_config_dir = dir.path().join(".config").join("fiuba-chat");
    std::fs::create_dir_all(&user_config_dir).unwrap();
    std::fs::write(
        user_config_dir.join("config.toml"),
        "[chat]\nvariant = \"guided\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(".fiuba-chat.toml"),
        "[chat]\nvariant = \"classic\"\n",
    )
    .unwrap();

    // Classic never asks for a profile, so this runs without --name/--year.
    chat_cmd(&dir)
        .args(["chat", "--endpoint", &unreachable_endpoint()])
        .write_stdin("hola\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bot > Error al obtener respuesta del servidor.",
        ));
}
