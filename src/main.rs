use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use fairway::config::CONFIG;
use fairway::error::FairwayError;
use fairway::logger::in_memory::InMemoryAuditLogger;
use fairway::models::{
    AuditLogEntry, CardKind, CategoryWinners, GameKind, PenaltyCard, Player, Session,
    SessionStakes, SettlementReport, StandardCard,
};
use fairway::models::card::CardValues;
use fairway::models::scoring::PointsPayout;
use fairway::money::{cents_from_dollars, dollars_from_cents};
use fairway::service::SettlementService;
use fairway::storage::in_memory::InMemoryStore;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

type AppService = Arc<SettlementService<InMemoryStore, InMemoryAuditLogger>>;

// Request structs for JSON payloads. Money crosses this boundary in
// dollars; everything past it is cents.

#[derive(serde::Deserialize, ToSchema)]
struct CreateSessionRequest {
    name: String,
    player_names: Vec<String>,
    games: Vec<GameKind>,
    #[serde(default)]
    deck: Vec<CardKind>,
    stakes: StakesRequest,
}

#[derive(serde::Deserialize, ToSchema)]
struct StakesRequest {
    #[serde(default)]
    standard_card_values: HashMap<StandardCard, f64>,
    #[serde(default)]
    custom_card_values: HashMap<String, f64>,
    #[serde(default)]
    points_rate: f64,
    #[serde(default)]
    nassau_pot: f64,
    bbb_payout: Option<BbbPayoutRequest>,
}

#[derive(serde::Deserialize, ToSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum BbbPayoutRequest {
    PerPoint { rate: f64 },
    FrontBackTotal { pot: f64 },
}

#[derive(serde::Deserialize, ToSchema)]
struct AssignCardRequest {
    card_id: Uuid,
    player_id: Uuid,
    hole: u8,
}

#[derive(serde::Deserialize, ToSchema)]
struct RecordScoreRequest {
    player_id: Uuid,
    hole: u8,
    points: f64,
}

#[derive(serde::Deserialize, ToSchema)]
struct RecordWinnersRequest {
    hole: u8,
    bingo: Option<Uuid>,
    bango: Option<Uuid>,
    bongo: Option<Uuid>,
}

#[derive(serde::Serialize, ToSchema)]
struct NetPositionResponse {
    player_id: Uuid,
    player_name: String,
    amount: f64,
}

#[derive(serde::Serialize, ToSchema)]
struct TransactionResponse {
    from: Uuid,
    from_name: String,
    to: Uuid,
    to_name: String,
    amount: f64,
}

#[derive(serde::Serialize, ToSchema)]
struct SettlementResponse {
    session_id: String,
    nets: Vec<NetPositionResponse>,
    transactions: Vec<TransactionResponse>,
}

#[derive(serde::Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
}

// Newtype wrapper for FairwayError to implement IntoResponse
struct ApiError(FairwayError);

impl From<FairwayError> for ApiError {
    fn from(err: FairwayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            FairwayError::SessionNotFound(_) | FairwayError::CardNotInSession(_) => {
                StatusCode::NOT_FOUND
            }
            FairwayError::PlayerNotInRoster(_)
            | FairwayError::UnknownCustomCard(_)
            | FairwayError::UnknownStandardCard(_)
            | FairwayError::InvalidHoleNumber(_)
            | FairwayError::InvalidStake(_)
            | FairwayError::GameNotActive(_) => StatusCode::BAD_REQUEST,
            FairwayError::InvariantViolation(_)
            | FairwayError::StorageError(_)
            | FairwayError::LoggingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

#[utoipa::path(
    post,
    path = "/sessions",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session created"),
        (status = 400, description = "Invalid stakes", body = ErrorResponse),
    )
)]
async fn create_session(
    State(service): State<AppService>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let players = req
        .player_names
        .into_iter()
        .map(|name| Player {
            id: Uuid::new_v4(),
            name,
        })
        .collect();
    let deck = req
        .deck
        .into_iter()
        .map(|kind| PenaltyCard {
            id: Uuid::new_v4(),
            kind,
        })
        .collect();

    let bbb_payout = match req.stakes.bbb_payout {
        Some(BbbPayoutRequest::PerPoint { rate }) => PointsPayout::PerPoint {
            rate_cents: cents_from_dollars(rate),
        },
        Some(BbbPayoutRequest::FrontBackTotal { pot }) => PointsPayout::FrontBackTotal {
            pot_cents: cents_from_dollars(pot),
        },
        None => PointsPayout::PerPoint { rate_cents: 0 },
    };
    let stakes = SessionStakes {
        card_values: CardValues::new(
            req.stakes
                .standard_card_values
                .into_iter()
                .map(|(card, dollars)| (card, cents_from_dollars(dollars)))
                .collect(),
            req.stakes
                .custom_card_values
                .into_iter()
                .map(|(name, dollars)| (name, cents_from_dollars(dollars)))
                .collect(),
        ),
        points_rate_cents: cents_from_dollars(req.stakes.points_rate),
        nassau_pot_cents: cents_from_dollars(req.stakes.nassau_pot),
        bbb_payout,
    };

    let session = service
        .create_session(req.name, players, req.games, deck, stakes)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}",
    params(("session_id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session"),
        (status = 404, description = "Unknown session", body = ErrorResponse),
    )
)]
async fn get_session(
    State(service): State<AppService>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    let session = service
        .get_session(&session_id)
        .await?
        .ok_or_else(|| FairwayError::SessionNotFound(session_id))?;
    Ok(Json(session))
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/cards",
    params(("session_id" = String, Path, description = "Session id")),
    request_body = AssignCardRequest,
    responses(
        (status = 200, description = "Card assigned"),
        (status = 400, description = "Invalid reference", body = ErrorResponse),
    )
)]
async fn assign_card(
    State(service): State<AppService>,
    Path(session_id): Path<String>,
    Json(req): Json<AssignCardRequest>,
) -> Result<StatusCode, ApiError> {
    service
        .assign_card(&session_id, req.card_id, req.player_id, req.hole)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/scores",
    params(("session_id" = String, Path, description = "Session id")),
    request_body = RecordScoreRequest,
    responses(
        (status = 200, description = "Score recorded"),
        (status = 400, description = "Invalid reference", body = ErrorResponse),
    )
)]
async fn record_score(
    State(service): State<AppService>,
    Path(session_id): Path<String>,
    Json(req): Json<RecordScoreRequest>,
) -> Result<StatusCode, ApiError> {
    service
        .record_hole_score(&session_id, req.player_id, req.hole, req.points)
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/sessions/{session_id}/winners",
    params(("session_id" = String, Path, description = "Session id")),
    request_body = RecordWinnersRequest,
    responses(
        (status = 200, description = "Category winners recorded"),
        (status = 400, description = "Invalid reference", body = ErrorResponse),
    )
)]
async fn record_winners(
    State(service): State<AppService>,
    Path(session_id): Path<String>,
    Json(req): Json<RecordWinnersRequest>,
) -> Result<StatusCode, ApiError> {
    service
        .record_category_winners(
            &session_id,
            CategoryWinners {
                hole: req.hole,
                bingo: req.bingo,
                bango: req.bango,
                bongo: req.bongo,
            },
        )
        .await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/sessions/{session_id}/settlement",
    params(("session_id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Settlement report", body = SettlementResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
        (status = 500, description = "Ledger invariant violated", body = ErrorResponse),
    )
)]
async fn get_settlement(
    State(service): State<AppService>,
    Path(session_id): Path<String>,
) -> Result<Json<SettlementResponse>, ApiError> {
    let report = service.compute_settlement(&session_id).await?;
    Ok(Json(render_settlement(report)))
}

fn render_settlement(report: SettlementReport) -> SettlementResponse {
    let names: HashMap<Uuid, String> = report
        .nets
        .iter()
        .map(|n| (n.player_id, n.player_name.clone()))
        .collect();
    let display_name = |id: &Uuid| names.get(id).cloned().unwrap_or_else(|| id.to_string());

    SettlementResponse {
        session_id: report.session_id,
        nets: report
            .nets
            .iter()
            .map(|n| NetPositionResponse {
                player_id: n.player_id,
                player_name: n.player_name.clone(),
                amount: dollars_from_cents(n.amount_cents),
            })
            .collect(),
        transactions: report
            .transactions
            .iter()
            .map(|tx| TransactionResponse {
                from: tx.from,
                from_name: display_name(&tx.from),
                to: tx.to,
                to_name: display_name(&tx.to),
                amount: dollars_from_cents(tx.amount_cents),
            })
            .collect(),
    }
}

#[utoipa::path(
    get,
    path = "/logs",
    responses((status = 200, description = "Audit log entries"))
)]
async fn get_audit_logs(
    State(service): State<AppService>,
) -> Result<Json<Vec<AuditLogEntry>>, ApiError> {
    let logs = service.get_audit_logs().await?;
    Ok(Json(logs))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create_session,
        get_session,
        assign_card,
        record_score,
        record_winners,
        get_settlement,
        get_audit_logs
    ),
    components(schemas(
        CreateSessionRequest,
        StakesRequest,
        BbbPayoutRequest,
        AssignCardRequest,
        RecordScoreRequest,
        RecordWinnersRequest,
        SettlementResponse,
        NetPositionResponse,
        TransactionResponse,
        ErrorResponse,
    ))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(CONFIG.log_level.as_str())
        .init();

    let store = InMemoryStore::new();
    let audit = InMemoryAuditLogger::new();
    let service = Arc::new(SettlementService::new(store, audit));

    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "OK" }))
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session))
        .route("/sessions/{session_id}/cards", post(assign_card))
        .route("/sessions/{session_id}/scores", post(record_score))
        .route("/sessions/{session_id}/winners", post(record_winners))
        .route("/sessions/{session_id}/settlement", get(get_settlement))
        .route("/logs", get(get_audit_logs))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
        .with_state(service);

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
