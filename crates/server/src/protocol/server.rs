//! Line-delimited JSON-RPC server.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::{DEFAULT_PROTOCOL_VERSION, ErrorCode, JsonRpcRequest, JsonRpcResponse};
use crate::dispatch::{Dispatcher, GrafanaApi};
use crate::tools;

const SERVER_NAME: &str = "grafana-observer";

/// Serves tool calls one request at a time.
#[derive(Debug)]
pub(crate) struct McpServer<C> {
    dispatcher: Dispatcher<C>,
}

impl<C: GrafanaApi> McpServer<C> {
    pub(crate) fn new(dispatcher: Dispatcher<C>) -> Self {
        Self { dispatcher }
    }

    /// Read requests from `reader` until EOF, writing each response as one line.
    pub(crate) async fn run<R, W>(&self, mut reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line).await,
                Err(e) => {
                    warn!(error = %e, "Ignoring JSON-RPC message that is not UTF-8");
                    Some(JsonRpcResponse::failure(
                        Value::Null,
                        ErrorCode::ParseError,
                        format!("Parse error: {e}"),
                    ))
                }
            };
            let Some(response) = response else {
                continue;
            };
            let mut encoded = serde_json::to_string(&response)?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
            writer.flush().await?;
        }
        debug!("stdin closed");
        Ok(())
    }

    /// Handle one raw message. Notifications yield `None`.
    pub(crate) async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed JSON-RPC message");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(message.clone()) {
            Ok(request) => request,
            Err(e) => {
                let id = message.get("id").cloned().unwrap_or(Value::Null);
                return Some(JsonRpcResponse::failure(
                    id,
                    ErrorCode::InvalidRequest,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "Received notification");
            return None;
        };

        Some(match self.handle_request(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err((code, message)) => JsonRpcResponse::failure(id, code, message),
        })
    }

    async fn handle_request(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Value, (ErrorCode, String)> {
        debug!(method, "Handling request");
        match method {
            "initialize" => {
                let protocol_version = params
                    .get("protocolVersion")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_PROTOCOL_VERSION);
                Ok(json!({
                    "protocolVersion": protocol_version,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": SERVER_NAME,
                        "version": env!("CARGO_PKG_VERSION"),
                    },
                }))
            }
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tools::definitions() })),
            "tools/call" => {
                let Some(name) = params.get("name").and_then(Value::as_str) else {
                    return Err((
                        ErrorCode::InvalidParams,
                        "tools/call requires params.name".to_string(),
                    ));
                };
                let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
                let text = self.dispatcher.call(name, arguments).await;
                Ok(json!({ "content": [{ "type": "text", "text": text }] }))
            }
            other => Err((
                ErrorCode::MethodNotFound,
                format!("Method not found: {other}"),
            )),
        }
    }
}
