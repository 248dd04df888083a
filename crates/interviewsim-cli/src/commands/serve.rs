//! The `interviewsim serve` command.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;

use interviewsim_providers::config::load_config_from;
use interviewsim_providers::server::{serve, ServerState};

pub async fn execute(port: Option<u16>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let port = port.unwrap_or(config.server.port);
    let state = ServerState::from_config(&config);

    if state.api_key.is_none() {
        tracing::warn!("no server API key configured; callers must supply their own apiKey");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    serve(addr, state).await
}
