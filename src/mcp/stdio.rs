//! Newline-delimited JSON-RPC over stdin/stdout.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::mcp::rpc::json_rpc_error;
use crate::mcp::server::handle_json_rpc_payload;
use crate::AppState;

pub async fn serve_stdio(state: AppState) -> std::io::Result<()> {
    info!("stdio transport ready");
    serve_lines(&state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Answers one line per request or batch until the reader reaches EOF.
pub async fn serve_lines<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Ok(payload) => handle_json_rpc_payload(state, payload).await,
            Err(err) => {
                warn!(error = %err, "discarding malformed json-rpc line");
                Some(json_rpc_error(None, -32700, "Parse error"))
            }
        };

        let Some(response) = response else {
            continue;
        };

        let mut frame = response.to_string();
        frame.push('\n');
        debug!(bytes = frame.len(), "writing json-rpc response");
        writer.write_all(frame.as_bytes()).await?;
        writer.flush().await?;
    }

    info!("stdin closed, stopping stdio transport");
    Ok(())
}
