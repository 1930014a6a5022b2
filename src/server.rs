//! HTTP move endpoint.
//!
//! `GET /?board=<nine characters>` plays O's best move and answers with
//! the resulting board as plain text.

use crate::config::ServerConfig;
use crate::games::tictactoe::{Board, InvalidBoardSpec, Player};
use crate::report;
use axum::Router;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The player the server moves for.
pub const SERVER_PLAYER: Player = Player::O;

/// Query string of a move request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveQuery {
    /// Board spec, nine characters.
    pub board: Option<String>,
}

/// Reasons a move request is refused.
#[derive(Debug, Display, Error, From)]
pub enum ServerError {
    /// The board could not be parsed.
    #[display("{}", _0)]
    #[from]
    InvalidBoard(InvalidBoardSpec),

    /// The board is closed or it is the other player's move.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// The board is open but has no empty square.
    #[display("no legal move")]
    NoLegalMove,

    /// The search task did not complete.
    #[display("evaluation failed: {}", _0)]
    Evaluation(#[error(not(source))] String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::Evaluation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        warn!(error = %self, %status, "Rejecting move request");
        (status, self.to_string()).into_response()
    }
}

/// Builds the application router.
#[instrument]
pub fn router(config: ServerConfig) -> Router {
    info!(debug = *config.debug(), "Building move router");
    Router::new()
        .route("/", get(play_move))
        .layer(middleware::from_fn(log_request))
        .with_state(Arc::new(config))
}

/// Binds the configured address and serves until the process exits.
#[instrument]
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/?board=<nine characters>",
        config.host(),
        config.port()
    );
    axum::serve(listener, router(config)).await
}

#[instrument(skip(config))]
async fn play_move(
    State(config): State<Arc<ServerConfig>>,
    Query(query): Query<MoveQuery>,
) -> Result<String, ServerError> {
    let board = Board::from_spec(query.board.as_deref())?;
    if !board.is_turn_of(SERVER_PLAYER) {
        return Err(ServerError::NotYourTurn(SERVER_PLAYER));
    }

    let evaluation = tokio::task::spawn_blocking(move || board.evaluate())
        .await
        .map_err(|e| ServerError::Evaluation(e.to_string()))?;

    let chosen = evaluation.best().ok_or(ServerError::NoLegalMove)?;
    debug!(position = %chosen.position, score = %chosen.score, "Move chosen");

    if *config.debug() {
        Ok(report::debug_report(&evaluation))
    } else {
        Ok(chosen.board.encode())
    }
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "Incoming HTTP request");
    let response = next.run(req).await;
    info!(status = ?response.status(), %uri, "Response sent");
    response
}
