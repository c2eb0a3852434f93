use std::net::SocketAddr;
use tokio::net::TcpListener;
use tds_ingest::{app, AppState};

// Port the sensor firmware posts to; change it here if the deployment moves
const PORT: u16 = 5005;

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    // create shared state
    let state = AppState::new();

    let app = app(state);

    let addr: SocketAddr = ([0, 0, 0, 0], PORT).into();
    let listener = TcpListener::bind(addr).await
        .expect("Failed to bind to port 5005");
    println!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}
