//! TCP server for remote play
//!
//! Handles incoming connections, one task per client. Each line read is a
//! [`Request`]; each reply is written back as one line of JSON.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::protocol::{Request, Response, bad_request, parse_request};
use crate::service::{GameService, NewGame, ServiceConfig};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub hint_budget: u8,
    pub max_sessions: usize,
    pub strict_dictionary: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let service = ServiceConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            hint_budget: service.hint_budget,
            max_sessions: service.max_sessions,
            strict_dictionary: service.strict_dictionary,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl ServerConfig {
    /// Create from `WORDLE_*` environment variables, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("WORDLE_HOST")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);

        let strict_dictionary = env::var("WORDLE_STRICT_DICTIONARY")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(defaults.strict_dictionary);

        Self {
            host,
            port: env_or("WORDLE_PORT", defaults.port),
            hint_budget: env_or("WORDLE_HINT_BUDGET", defaults.hint_budget),
            max_sessions: env_or("WORDLE_MAX_SESSIONS", defaults.max_sessions),
            strict_dictionary,
        }
    }

    /// # Errors
    /// Fails when host and port do not form a socket address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Rules for the game service behind this server
    #[must_use]
    pub const fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            hint_budget: self.hint_budget,
            max_sessions: self.max_sessions,
            strict_dictionary: self.strict_dictionary,
        }
    }
}

/// Apply one request to the service
#[must_use]
pub fn dispatch(service: &GameService, request: Request) -> Response {
    let result = match request {
        Request::Word {
            hardcore_mode,
            emoji_mode,
        } => service
            .new_game(NewGame {
                hardcore: hardcore_mode,
                emoji: emoji_mode,
            })
            .map(Response::Word),
        Request::Check { session_id, guess } => {
            service.check(session_id, &guess).map(Response::Check)
        }
        Request::Hint { session_id } => service.hint(session_id).map(Response::Hint),
        Request::SaveScore { session_id, player } => service
            .save_score(session_id, player.as_deref())
            .map(Response::SaveScore),
        Request::State { session_id } => service.view(session_id).map(Response::State),
    };

    result.unwrap_or_else(|err| {
        debug!(kind = err.kind(), %err, "request rejected");
        Response::from(err)
    })
}

/// Parse, apply and serialise one line
#[must_use]
pub fn handle_line(service: &GameService, line: &str) -> String {
    let response = match parse_request(line) {
        Ok(request) => dispatch(service, request),
        Err(e) => {
            warn!(error = %e, "malformed request");
            bad_request(&e.to_string())
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        warn!(error = %e, "failed to encode response");
        r#"{"type":"error","kind":"internal","status":500,"error":"failed to encode response"}"#
            .to_string()
    })
}

/// Run the server until the listener fails
///
/// `ready_tx` receives the bound address, which matters when `port` is 0.
///
/// # Errors
/// Fails if the address is invalid or the listener cannot bind or accept.
pub async fn run_server(
    config: ServerConfig,
    service: Arc<GameService>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let bound = listener.local_addr()?;
    info!(%bound, words = service.dictionary().len(), "server listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id_counter = 0usize;

    loop {
        let (socket, peer) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;
        info!(client_id, %peer, "client connected");

        let service = Arc::clone(&service);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, &service).await {
                warn!(client_id, error = %e, "client error");
            }
            info!(client_id, "client disconnected");
        });
    }
}

/// Handle a single client connection
async fn handle_client(socket: TcpStream, service: &GameService) -> anyhow::Result<()> {
    let (reader, mut writer) = socket.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let mut reply = handle_line(service, &line);
        reply.push('\n');
        writer.write_all(reply.as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}
