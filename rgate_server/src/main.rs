mod config;
mod dex;
mod docs;
mod error;
mod gate;
mod health;
mod intelligence;
mod market;
mod router;
mod state;
mod upstream;
mod watch;

use std::env;

use dotenvy::dotenv;
use log::info;
use router::router;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let server_domain = env::var("SERVER_DOMAIN").unwrap_or("0.0.0.0:3000".to_string());

    let app = router().await;

    let listener = tokio::net::TcpListener::bind(&server_domain).await.unwrap();

    info!("rGate API listening on {server_domain}");

    axum::serve(listener, app).await.unwrap();
}
