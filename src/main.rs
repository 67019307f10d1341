use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;

use garage_server::config::Config;
use garage_server::garage::Garage;
use garage_server::routes::create_routes;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let garage = Arc::new(Garage::new());
    let app = create_routes(garage);

    tracing::info!("🚗 Parking garage server running at http://{}", config.bind_addr);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
