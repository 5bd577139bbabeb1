mod common;
mod config;
mod routes;
mod services;

mod ai;
mod analytics;
mod readings;
mod reports;
mod robots;
mod tables;
mod users;

use crate::config::Config;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

#[tokio::main]
async fn main() {
    // Set up tracing/logging
    tracing_subscriber::fmt::init();
    println!("Starting server...");

    // Load configuration and environment variables to pass to the application
    let config: Config = Config::from_env();

    let db: DatabaseConnection = Database::connect(config.db_url.as_ref().unwrap())
        .await
        .unwrap();

    if db.ping().await.is_ok() {
        println!("Connected to the database");
    } else {
        println!("Could not connect to the database");
    }

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    println!("DB migrations complete");

    // Every deployment needs the well-known robot the record generator
    // targets by default.
    robots::services::ensure_default_robot(&db)
        .await
        .expect("Failed to provision default robot");

    println!(
        "Starting server {} ({} deployment) ...",
        config.app_name,
        config.deployment.to_uppercase()
    );

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port).parse().unwrap();
    println!("Listening on {addr}");
    println!(
        "Dashboard API docs at http://localhost:{}/api/docs",
        config.port
    );

    let router = routes::build_router(&db, &config);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await.unwrap(),
        router.into_make_service(),
    )
    .await
    .unwrap();
}
