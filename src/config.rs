use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: Option<String>,
    pub db_name: String,
    pub app_name: String,
    pub deployment: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load from .env file if available
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "agrotico".to_string());
        let db_url = env::var("DB_URL").ok().or_else(|| {
            Some(format!(
                "{}://{}:{}@{}:{}/{}",
                env::var("DB_PREFIX").unwrap_or_else(|_| "postgresql".to_string()),
                env::var("DB_USER").expect("DB_USER must be set"),
                env::var("DB_PASSWORD").expect("DB_PASSWORD must be set"),
                env::var("DB_HOST").expect("DB_HOST must be set"),
                env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                db_name,
            ))
        });

        Config {
            app_name: env::var("APP_NAME")
                .unwrap_or_else(|_| "AgroTico Smart Dashboard".to_string()),
            deployment: env::var("DEPLOYMENT")
                .expect("DEPLOYMENT must be set, this can be local, dev, stage, or prod"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "agrotico-secret-key".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            db_name,
            db_url,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            app_name: "AgroTico Smart Dashboard".to_string(),
            deployment: "test".to_string(),
            jwt_secret: "agrotico-secret-key".to_string(),
            port: 0,
            db_name: "agrotico_test".to_string(),
            db_url: None,
        }
    }
}
