//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::booking::{BookingOutcome, PathProvider, book};
use crate::domain::{GraphError, PassengerId, StationId, TrainId};
use crate::render::render;
use crate::travel_time::format_duration;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/route", get(plan_route))
        .route("/booking", post(create_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station with its index.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .stations
        .iter()
        .map(|(id, name)| StationResult {
            id,
            name: name.to_string(),
        })
        .collect();

    Json(StationsResponse { stations })
}

/// Shortest route between two stations, with its map view.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let from = StationId(req.from);
    let to = StationId(req.to);
    state.routes.graph().check_node(to)?;

    let paths = state.routes.shortest_paths(from)?;
    let route = paths.route_to(to)?;
    let map = render(&paths, &route, &state.stations);

    Ok(Json(RouteResponse {
        from,
        to,
        reachable: paths.is_reachable(to),
        distance: paths.distance(to),
        route: route.stations().to_vec(),
        map,
    }))
}

/// Validate and confirm a booking.
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let from = StationId(req.from);
    let to = StationId(req.to);
    let graph = state.routes.graph();
    graph.check_node(from)?;
    graph.check_node(to)?;

    let outcome = book(
        state.routes.as_ref(),
        &state.times,
        PassengerId(req.passenger_id),
        TrainId(req.train_id),
        from,
        to,
    );

    match outcome {
        BookingOutcome::Confirmed {
            booking,
            route,
            distance,
            travel_time,
        } => {
            let summary = booking
                .describe(&state.stations)
                .ok_or_else(|| AppError::Internal {
                    message: format!("no station name for booking {from} → {to}"),
                })?;
            info!(%summary, distance, "booking confirmed");

            Ok(Json(BookingResponse {
                booking,
                summary,
                route: route.stations().to_vec(),
                distance,
                travel_time: travel_time.map(format_duration),
            }))
        }
        BookingOutcome::NoRoute { start, end } => Err(AppError::NotFound {
            message: format!("no route between stations {start} and {end}"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
