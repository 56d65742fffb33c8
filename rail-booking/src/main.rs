use rail_booking::booking::{BookingOutcome, book};
use rail_booking::cache::CacheConfig;
use rail_booking::config::ServerConfig;
use rail_booking::domain::{PassengerId, TrainId};
use rail_booking::network::india_network;
use rail_booking::travel_time::format_duration;
use rail_booking::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");
    let network = india_network().expect("Failed to build station network");

    // Sample booking: Delhi to Chennai
    let stations = &network.stations;
    if let (Some(start), Some(end)) = (stations.id("Delhi"), stations.id("Chennai")) {
        match book(
            &network.graph,
            &network.times,
            PassengerId(1),
            TrainId(101),
            start,
            end,
        ) {
            BookingOutcome::Confirmed {
                booking,
                distance,
                travel_time,
                ..
            } => {
                info!(
                    booking = %booking.describe(stations).unwrap_or_default(),
                    distance,
                    travel_time = %travel_time.map(format_duration).unwrap_or_default(),
                    "route exists"
                );
            }
            BookingOutcome::NoRoute { .. } => warn!("no route found between Delhi and Chennai"),
        }
    }

    let state = AppState::new(network, &CacheConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.addr, "rail booking server listening");
    info!("endpoints: GET /health, GET /stations, GET /route?from=&to=, POST /booking");

    axum::serve(listener, app).await.expect("Server error");
}
