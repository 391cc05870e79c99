use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::oneshot;

use wordle_game::server::{ServerConfig, run_server};
use wordle_game::service::GameService;
use wordle_game::wordlists::Dictionary;

struct Client {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl Client {
    async fn request(&mut self, line: &str) -> Value {
        self.writer.write_all(line.as_bytes()).await.unwrap();
        self.writer.write_all(b"\n").await.unwrap();
        self.writer.flush().await.unwrap();

        let reply = tokio::time::timeout(Duration::from_secs(2), self.lines.next_line())
            .await
            .expect("server did not reply")
            .unwrap()
            .expect("connection closed");
        serde_json::from_str(&reply).unwrap()
    }
}

async fn start_server(config: ServerConfig) -> (Client, tokio::task::JoinHandle<()>) {
    let service = Arc::new(GameService::new(
        Dictionary::builtin(),
        config.service_config(),
    ));
    let (ready_tx, ready_rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let _ = run_server(config, service, Some(ready_tx)).await;
    });

    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not signal ready")
        .expect("ready channel dropped");

    let stream = TcpStream::connect(addr).await.expect("connect failed");
    let (read_half, writer) = stream.into_split();
    let client = Client {
        lines: BufReader::new(read_half).lines(),
        writer,
    };
    (client, handle)
}

fn test_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn word_check_hint_round_trip() {
    let (mut client, handle) = start_server(test_config()).await;

    let started = client.request(r#"{"type":"word","hardcore_mode":true}"#).await;
    assert_eq!(started["type"], "word");
    assert_eq!(started["mode"], "hardcore");
    assert_eq!(started["hints_remaining"], 3);
    let id = started["session_id"].as_str().unwrap().to_string();

    let hint = client
        .request(&format!(r#"{{"type":"hint","session_id":"{id}"}}"#))
        .await;
    assert_eq!(hint["type"], "hint");
    assert_eq!(hint["hints_remaining"], 2);
    assert!(hint["hint"].as_str().unwrap().starts_with("The word contains"));

    let checked = client
        .request(&format!(
            r#"{{"type":"check","session_id":"{id}","guess":"slate"}}"#
        ))
        .await;
    assert_eq!(checked["type"], "check");
    assert_eq!(checked["guesses_used"], 1);
    assert_eq!(checked["feedback"].as_array().unwrap().len(), 5);

    let state = client
        .request(&format!(r#"{{"type":"state","session_id":"{id}"}}"#))
        .await;
    assert_eq!(state["guesses"][0]["guess"], "SLATE");

    handle.abort();
}

#[tokio::test]
async fn errors_carry_kind_and_status() {
    let (mut client, handle) = start_server(test_config()).await;

    let bad = client.request("this is not json").await;
    assert_eq!(bad["type"], "error");
    assert_eq!(bad["kind"], "bad_request");
    assert_eq!(bad["status"], 400);

    let started = client.request(r#"{"type":"word"}"#).await;
    let id = started["session_id"].as_str().unwrap().to_string();

    let invalid = client
        .request(&format!(
            r#"{{"type":"check","session_id":"{id}","guess":"abc"}}"#
        ))
        .await;
    assert_eq!(invalid["kind"], "invalid_input");
    assert_eq!(invalid["status"], 400);

    let unsaved = client
        .request(&format!(r#"{{"type":"save-score","session_id":"{id}"}}"#))
        .await;
    assert_eq!(unsaved["kind"], "game_in_progress");
    assert_eq!(unsaved["status"], 409);

    handle.abort();
}

#[tokio::test]
async fn full_store_returns_503() {
    let config = ServerConfig {
        max_sessions: 1,
        ..test_config()
    };
    let (mut client, handle) = start_server(config).await;

    let first = client.request(r#"{"type":"word"}"#).await;
    assert_eq!(first["type"], "word");

    let second = client.request(r#"{"type":"word"}"#).await;
    assert_eq!(second["kind"], "capacity_reached");
    assert_eq!(second["status"], 503);

    handle.abort();
}

#[tokio::test]
async fn blank_lines_are_ignored() {
    let (mut client, handle) = start_server(test_config()).await;
    client.writer.write_all(b"\n\n").await.unwrap();

    let started = client.request(r#"{"type":"word","emoji_mode":true}"#).await;
    assert_eq!(started["type"], "word");
    assert!(started["emoji"].is_string());

    handle.abort();
}
