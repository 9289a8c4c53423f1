use super::state::AppState;
use crate::analysis::AnalysisMode;
use crate::session::{PresentationSession, SessionCommand, SessionTracker};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Control messages sent by the client as text frames; audio arrives as
/// binary frames.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum ClientMessage {
    EndStream,
    SetAnalysisMode { mode: AnalysisMode },
}

/// GET /sessions/stream
/// Upgrade to the session's duplex channel
pub async fn session_stream(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(state, socket))
}

async fn handle_socket(state: AppState, socket: WebSocket) {
    let session_id = format!("session-{}", uuid::Uuid::new_v4());
    info!("client connected: {}", session_id);

    let tracker = Arc::new(SessionTracker::new());
    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), Arc::clone(&tracker));
    }

    let (command_tx, command_rx) = mpsc::channel(64);
    let (event_tx, mut event_rx) = mpsc::channel(64);

    let mut config = state.session_config.clone();
    config.session_id = session_id.clone();

    let session = PresentationSession::new(
        config,
        Arc::clone(&state.transport),
        Arc::clone(&state.generation),
        tracker,
        event_tx,
    );
    let session_task = tokio::spawn(session.run(command_rx));

    let (mut ws_tx, mut ws_rx) = socket.split();

    // Outbound pump: session events → JSON text frames
    let outbound_task = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    error!("failed to encode session event: {}", e);
                    continue;
                }
            };
            if ws_tx.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    // Inbound loop: client frames → typed session commands
    while let Some(Ok(message)) = ws_rx.next().await {
        let command = match message {
            Message::Binary(bytes) => SessionCommand::SubmitAudio(bytes),
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(ClientMessage::EndStream) => SessionCommand::EndStream,
                Ok(ClientMessage::SetAnalysisMode { mode }) => {
                    SessionCommand::SetAnalysisMode(mode)
                }
                Err(e) => {
                    warn!("ignoring malformed client message: {}", e);
                    continue;
                }
            },
            Message::Close(_) => break,
            _ => continue,
        };

        if command_tx.send(command).await.is_err() {
            break;
        }
    }

    // Closing the command channel tells the session to tear down
    drop(command_tx);
    if let Err(e) = session_task.await {
        error!("session task panicked: {}", e);
    }
    outbound_task.abort();

    {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id);
    }

    info!("client disconnected: {}", session_id);
}
