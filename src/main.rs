use std::sync::Arc;

use hinemos_mcp::{
    build_app, config::Config, hinemos::ReqwestTransport, logging, mcp::stdio::serve_stdio,
    AppState,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    if !config.verify_ssl {
        warn!("TLS certificate verification is disabled for the Hinemos manager");
    }

    let transport = Arc::new(ReqwestTransport::new(config.verify_ssl, config.timeout)?);
    let state = AppState::new(
        config.api_token.clone(),
        config.client_settings(),
        transport,
    );

    match std::env::args().nth(1).as_deref() {
        None | Some("http") => {
            let bind_socket = config.bind_socket()?;
            let app = build_app(state);
            let listener = tokio::net::TcpListener::bind(bind_socket).await?;

            info!(
                bind_addr = %config.bind_addr,
                bind_port = config.bind_port,
                hinemos_url = %config.base_url,
                auth = config.api_token.is_some(),
                "server starting"
            );

            axum::serve(listener, app.into_make_service()).await?;
        }
        Some("stdio") => {
            info!(hinemos_url = %config.base_url, "stdio server starting");
            serve_stdio(state).await?;
        }
        Some(other) => {
            eprintln!("unknown mode '{other}', expected 'http' or 'stdio'");
            std::process::exit(2);
        }
    }

    Ok(())
}
