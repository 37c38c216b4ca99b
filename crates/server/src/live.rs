// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interactive dashboard sessions over WebSocket.
//!
//! Each connection owns exactly one `SelectionState`. A `select` message
//! changes one dimension of that selection and the server answers with all
//! three charts recomputed from scratch. Selections are never shared
//! between connections; the dataset they read from is.
//!
//! # Protocol
//!
//! - Client → server: `{"type":"select","dimension":"region","value":"Goa"}`
//! - Server → client: `connected`, `figures`, or `error`
//!
//! A failed interaction produces an `error` message and leaves the
//! session's selection unchanged.

use axum::{
    extract::{
        Query, State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{Sink, SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use tourism_dash_api::{
    ApiError, DashboardResponse, apply_selection_change, initial_selection, render_selection,
};
use tourism_dash_domain::SelectionState;
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Messages a client may send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// One selector changed.
    Select {
        /// The dimension name (`year`, `region`, or `purpose`).
        dimension: String,
        /// The newly selected value.
        value: String,
    },
}

/// Messages the server sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
        /// The selection this session starts with.
        selection: SelectionState,
    },
    /// Freshly computed charts for the session's selection.
    Figures(DashboardResponse),
    /// The last interaction failed; the session continues.
    Error {
        /// Error message.
        message: String,
    },
}

impl From<ApiError> for ServerMessage {
    fn from(err: ApiError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}

/// Optional starting selection, so a reconnecting page keeps its choices.
#[derive(Debug, Default, Deserialize)]
pub struct LiveQuery {
    year: Option<i32>,
    region: Option<String>,
    purpose: Option<String>,
}

impl LiveQuery {
    fn requested_selection(&self) -> Option<SelectionState> {
        match (self.year, &self.region, &self.purpose) {
            (Some(year), Some(region), Some(purpose)) => {
                Some(SelectionState::new(year, region, purpose))
            }
            _ => None,
        }
    }
}

/// The per-connection dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    app_state: AppState,
    selection: SelectionState,
}

impl DashboardSession {
    /// Starts a session at the requested selection, or at the default when
    /// the request is absent or not made of available options.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoData` when the dataset is empty.
    pub fn start(app_state: AppState, requested: Option<&SelectionState>) -> Result<Self, ApiError> {
        let selection: SelectionState = initial_selection(&app_state.options, requested)?;
        Ok(Self {
            app_state,
            selection,
        })
    }

    /// The session's current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Computes the charts for the current selection.
    #[must_use]
    pub fn render(&self) -> ServerMessage {
        match render_selection(
            self.app_state.dataset.records(),
            &self.app_state.options,
            &self.selection,
        ) {
            Ok(response) => ServerMessage::Figures(response),
            Err(err) => err.into(),
        }
    }

    /// Handles one text frame from the client.
    pub fn handle_text(&mut self, text: &str) -> ServerMessage {
        let message: ClientMessage = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Unreadable session message");
                return ServerMessage::Error {
                    message: format!("Unreadable message: {e}"),
                };
            }
        };

        match message {
            ClientMessage::Select { dimension, value } => {
                match apply_selection_change(
                    &self.app_state.options,
                    &self.selection,
                    &dimension,
                    &value,
                ) {
                    Ok(next) => {
                        self.selection = next;
                        self.render()
                    }
                    Err(err) => {
                        warn!(error = %err, "Rejected selection change");
                        err.into()
                    }
                }
            }
        }
    }
}

/// Handles WebSocket upgrade requests for dashboard sessions.
///
/// # Arguments
///
/// * `ws` - WebSocket upgrade request
/// * `query` - Optional starting selection
/// * `app_state` - The shared read-only application state
///
/// # Returns
///
/// An HTTP response that upgrades the connection to WebSocket
pub async fn live_session_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<LiveQuery>,
    AxumState(app_state): AxumState<AppState>,
) -> Response {
    let requested: Option<SelectionState> = query.requested_selection();
    ws.on_upgrade(move |socket| handle_socket(socket, app_state, requested))
}

/// Runs one session until the client disconnects.
async fn handle_socket(
    socket: WebSocket,
    app_state: AppState,
    requested: Option<SelectionState>,
) {
    let (mut sender, mut receiver) = socket.split();

    let mut session: DashboardSession = match DashboardSession::start(app_state, requested.as_ref())
    {
        Ok(session) => session,
        Err(err) => {
            warn!(error = %err, "Cannot start dashboard session");
            let _ = send_message(&mut sender, &ServerMessage::from(err)).await;
            return;
        }
    };

    info!(
        year = session.selection().year,
        region = %session.selection().region,
        purpose = %session.selection().purpose,
        "Client connected to dashboard session"
    );

    let connected = ServerMessage::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
        selection: session.selection().clone(),
    };

    if send_message(&mut sender, &connected).await.is_err()
        || send_message(&mut sender, &session.render()).await.is_err()
    {
        warn!("Failed to send initial dashboard");
        return;
    }

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let reply: ServerMessage = session.handle_text(text.as_str());
                if send_message(&mut sender, &reply).await.is_err() {
                    // Client disconnected
                    break;
                }
            }
            Ok(Message::Binary(_)) => {
                warn!("Received binary message from client, ignoring");
            }
            Ok(Message::Close(_)) => {
                debug!("Client sent close frame");
                break;
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {
                // Ping/pong handled automatically by Axum
            }
            Err(e) => {
                error!(?e, "WebSocket receive error");
                break;
            }
        }
    }

    info!("Client disconnected from dashboard session");
}

async fn send_message<S>(sender: &mut S, message: &ServerMessage) -> Result<(), ()>
where
    S: Sink<Message> + Unpin,
{
    let json: String = serde_json::to_string(message).map_err(|e| {
        error!(?e, "Failed to serialize session message");
    })?;
    sender.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::tests::create_test_app_state;
    use tourism_dash_api::Trace;

    fn start_session() -> DashboardSession {
        DashboardSession::start(create_test_app_state(), None).unwrap()
    }

    fn select(dimension: &str, value: &str) -> String {
        serde_json::to_string(&ClientMessage::Select {
            dimension: dimension.to_string(),
            value: value.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_session_starts_at_default_selection() {
        let session: DashboardSession = start_session();
        assert_eq!(
            session.selection(),
            &SelectionState::new(2022, "Goa", "Business")
        );
    }

    #[test]
    fn test_session_is_refused_without_data() {
        let app_state: AppState = AppState::new(tourism_dash_dataset::Dataset::default());

        let err: ApiError = DashboardSession::start(app_state, None).unwrap_err();

        assert_eq!(err, ApiError::NoData);
        let json: serde_json::Value = serde_json::to_value(ServerMessage::from(err)).unwrap();
        assert_eq!(json["type"], "error");
    }

    #[test]
    fn test_session_starts_at_valid_requested_selection() {
        let requested: SelectionState = SelectionState::new(2023, "Goa", "Leisure");
        let session: DashboardSession =
            DashboardSession::start(create_test_app_state(), Some(&requested)).unwrap();
        assert_eq!(session.selection(), &requested);
    }

    #[test]
    fn test_select_message_rerenders_all_figures() {
        let mut session: DashboardSession = start_session();
        session.handle_text(&select("year", "2023"));
        let reply: ServerMessage = session.handle_text(&select("purpose", "Leisure"));

        let ServerMessage::Figures(response) = reply else {
            panic!("Expected figures, got {reply:?}");
        };
        assert_eq!(response.selection, SelectionState::new(2023, "Goa", "Leisure"));
        assert_eq!(response.row_count, 3);
        let Trace::Bar(bar) = &response.figures.revenue_growth.data[0] else {
            panic!("Expected a bar trace");
        };
        assert_eq!(bar.y, vec![1500.0, 300.0]);
    }

    #[test]
    fn test_rejected_change_keeps_selection() {
        let mut session: DashboardSession = start_session();
        let before: SelectionState = session.selection().clone();

        let reply: ServerMessage = session.handle_text(&select("region", "Atlantis"));

        assert!(matches!(reply, ServerMessage::Error { .. }));
        assert_eq!(session.selection(), &before);
    }

    #[test]
    fn test_unreadable_message_is_an_error_reply() {
        let mut session: DashboardSession = start_session();
        let reply: ServerMessage = session.handle_text("not json");
        assert!(matches!(reply, ServerMessage::Error { .. }));
    }

    #[test]
    fn test_sessions_do_not_share_selection() {
        let app_state: AppState = create_test_app_state();
        let mut first: DashboardSession = DashboardSession::start(app_state.clone(), None).unwrap();
        let second: DashboardSession = DashboardSession::start(app_state, None).unwrap();

        first.handle_text(&select("region", "Kerala"));

        assert_eq!(first.selection().region, "Kerala");
        assert_eq!(second.selection().region, "Goa");
    }

    #[test]
    fn test_client_message_wire_format() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"select","dimension":"region","value":"Goa"}"#)
                .unwrap();
        assert_eq!(
            message,
            ClientMessage::Select {
                dimension: String::from("region"),
                value: String::from("Goa"),
            }
        );
    }

    #[test]
    fn test_figures_message_is_tagged() {
        let session: DashboardSession = start_session();
        let json: serde_json::Value = serde_json::to_value(session.render()).unwrap();

        assert_eq!(json["type"], "figures");
        assert!(json["figures"]["revenue_growth"]["data"].is_array());
        assert_eq!(json["selection"]["region"], "Goa");
    }

    #[test]
    fn test_live_query_requires_all_three_values() {
        let partial: LiveQuery = LiveQuery {
            year: Some(2023),
            region: Some(String::from("Goa")),
            purpose: None,
        };
        assert_eq!(partial.requested_selection(), None);
    }
}
