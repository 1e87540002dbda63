//! ==============================================================================
//! server.rs - telemetry web api
//! ==============================================================================
//!
//! purpose:
//!     the read surface over the shared state (current sample, history,
//!     robot, alerts, notifications) plus the mutating entry points
//!     (acknowledge, clear notifications, robot mode, admin crud).
//!
//! relationships:
//!     - reads: state.rs (short read locks per request)
//!     - writes: only through the explicit mutation routes below; the
//!       simulator task remains the sole writer of telemetry itself
//!
//! ==============================================================================

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::domain::{AlertThreshold, RobotMode, Sensor};
use crate::state::SharedState;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/telemetry", get(current_sample))
        .route("/api/telemetry/history", get(history))
        .route("/api/robot", get(robot_status))
        .route("/api/robot/mode", post(set_robot_mode))
        .route("/api/alerts", get(list_alerts))
        .route("/api/alerts/:id/acknowledge", post(acknowledge_alert))
        .route("/api/notifications", get(list_notifications).delete(clear_notifications))
        .route("/api/sensors", get(list_sensors).post(create_sensor))
        .route("/api/sensors/:id", put(update_sensor).delete(delete_sensor))
        .route("/api/thresholds", get(list_thresholds).post(create_threshold))
        .route("/api/thresholds/:id", put(update_threshold).delete(delete_threshold))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// bind and serve until the process exits
pub async fn serve(state: SharedState, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("api listening on {addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// health-check root
async fn root() -> &'static str {
    "API is running..."
}

async fn current_sample(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.current.clone())
}

#[derive(Deserialize)]
struct HistoryParams {
    days: Option<u32>,
}

/// trailing history window; `?days=N` trims to the last N*24 points
async fn history(
    State(state): State<SharedState>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let state = state.read().await;
    match params.days {
        Some(days) => Json(state.history_window(days).to_vec()),
        None => Json(state.history.clone()),
    }
}

async fn robot_status(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.robot.clone())
}

#[derive(Deserialize)]
struct ModeBody {
    mode: String,
}

/// administrative mode switch - the one robot field the tick never touches
async fn set_robot_mode(
    State(state): State<SharedState>,
    Json(body): Json<ModeBody>,
) -> impl IntoResponse {
    let mode = match body.mode.as_str() {
        "idle" => RobotMode::Idle,
        "patrolling" => RobotMode::Patrolling,
        "charging" => RobotMode::Charging,
        "maintenance" => RobotMode::Maintenance,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"status": "error", "message": "unknown mode"})),
            )
                .into_response();
        }
    };

    let mut state = state.write().await;
    state.robot.mode = mode;
    Json(state.robot.clone()).into_response()
}

async fn list_alerts(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.store.alerts().to_vec())
}

async fn acknowledge_alert(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let found = state.store.acknowledge(id);
    // absent ids are a no-op, not an error
    Json(json!({"status": "ok", "acknowledged": found}))
}

async fn list_notifications(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.store.notifications().to_vec())
}

async fn clear_notifications(State(state): State<SharedState>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.store.clear_notifications();
    Json(json!({"status": "ok"}))
}

// ==============================================================================
// admin crud - sensors
// ==============================================================================

async fn list_sensors(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.sensors.clone())
}

async fn create_sensor(
    State(state): State<SharedState>,
    Json(sensor): Json<Sensor>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    if state.sensors.iter().any(|s| s.id == sensor.id) {
        return (
            StatusCode::CONFLICT,
            Json(json!({"status": "error", "message": "duplicate sensor id"})),
        )
            .into_response();
    }
    state.sensors.push(sensor.clone());
    (StatusCode::CREATED, Json(sensor)).into_response()
}

async fn update_sensor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(sensor): Json<Sensor>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.sensors.iter_mut().find(|s| s.id == id) {
        Some(existing) => {
            *existing = Sensor { id, ..sensor };
            Json(existing.clone()).into_response()
        }
        None => not_found("unknown sensor id"),
    }
}

async fn delete_sensor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let before = state.sensors.len();
    state.sensors.retain(|s| s.id != id);
    if state.sensors.len() == before {
        return not_found("unknown sensor id");
    }
    Json(json!({"status": "ok"})).into_response()
}

// ==============================================================================
// admin crud - thresholds
// ==============================================================================

async fn list_thresholds(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.thresholds.clone())
}

async fn create_threshold(
    State(state): State<SharedState>,
    Json(threshold): Json<AlertThreshold>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    if state.thresholds.iter().any(|t| t.id == threshold.id) {
        return (
            StatusCode::CONFLICT,
            Json(json!({"status": "error", "message": "duplicate threshold id"})),
        )
            .into_response();
    }
    state.thresholds.push(threshold.clone());
    (StatusCode::CREATED, Json(threshold)).into_response()
}

async fn update_threshold(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(threshold): Json<AlertThreshold>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.thresholds.iter_mut().find(|t| t.id == id) {
        Some(existing) => {
            *existing = AlertThreshold { id, ..threshold };
            Json(existing.clone()).into_response()
        }
        None => not_found("unknown threshold id"),
    }
}

async fn delete_threshold(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let before = state.thresholds.len();
    state.thresholds.retain(|t| t.id != id);
    if state.thresholds.len() == before {
        return not_found("unknown threshold id");
    }
    Json(json!({"status": "ok"})).into_response()
}

fn not_found(message: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": "error", "message": message})),
    )
        .into_response()
}
