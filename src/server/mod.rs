//! Server module - remote play over TCP
//!
//! Line-delimited JSON on top of [`crate::service::GameService`].

pub mod protocol;
#[allow(clippy::module_inception)]
pub mod server;

pub use protocol::{ErrorBody, Request, Response};
pub use server::{ServerConfig, dispatch, handle_line, run_server};
