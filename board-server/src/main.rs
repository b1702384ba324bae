use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use board_server::timetable::{BoardConfig, Timetable};
use board_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // One shared store covering the whole service day
    let config = BoardConfig::default();
    let timetable = Timetable::new(config.day_start, config.day_end);
    let state = AppState::new(timetable, config);

    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    println!("Departure board listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /health                              - Health check");
    println!("  GET  /?from=HH:MM&format=json             - Departure board");
    println!("  GET  /add?routeName=&station=&time=HH:MM  - Add a stop");
    println!("  GET  /add-sample                          - Load sample data");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
