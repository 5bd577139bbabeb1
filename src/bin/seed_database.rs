#!/usr/bin/env cargo
//! AgroTico Database Seeder
//!
//! A terminal application for filling the AgroTico database with synthetic
//! sensor history through the public API. Each generated record writes one
//! `lecturas` row plus its four sensor rows, exactly as a field robot would.
//!
//! Usage:
//!   `cargo run --bin seed_database -- --url http://localhost:3001 --readings 200`
//!
//! Features:
//! - Drives the same `/api/registros/generate` endpoint the dashboard uses
//! - Optional per-robot attribution via `--robot <UUID>`
//! - Terminal UI with progress indicators
//! - Closes with the system totals reported by the analytics API

use clap::{Arg, Command};
use console::style;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::{Duration, sleep};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SeedingConfig {
    pub base_url: String,
    pub client: Client,
}

pub struct DatabaseSeeder {
    config: SeedingConfig,
    robot_uuid: Option<Uuid>,
    generated: Vec<Value>,
}

impl DatabaseSeeder {
    pub fn new(base_url: String, robot_uuid: Option<Uuid>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        Self {
            config: SeedingConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                client,
            },
            robot_uuid,
            generated: Vec::new(),
        }
    }

    /// Make multiple requests in parallel with controlled concurrency
    async fn make_parallel_requests(
        &self,
        requests: Vec<(String, String, Option<Value>)>, // (method, endpoint, data)
        max_concurrent: usize,
        pb: &ProgressBar,
    ) -> Result<Vec<Value>, String> {
        let semaphore = Arc::new(Semaphore::new(max_concurrent));
        let mut tasks = Vec::new();

        for (method, endpoint, data) in requests {
            let sem = Arc::clone(&semaphore);
            let config = self.config.clone();
            let pb_clone = pb.clone();

            let task = tokio::spawn(async move {
                let _permit = sem.acquire().await.unwrap();

                let client = &config.client;
                let url = format!("{}{}", config.base_url, endpoint);

                let response = match method.to_uppercase().as_str() {
                    "POST" => {
                        let mut request = client
                            .post(&url)
                            .header("content-type", "application/json");
                        if let Some(json_data) = data {
                            request = request.json(&json_data);
                        }
                        request.send().await
                    }
                    "GET" => client.get(&url).send().await,
                    _ => return Err("Unsupported HTTP method".to_string()),
                };

                let result = match response {
                    Ok(resp) if resp.status().is_success() => resp
                        .json::<Value>()
                        .await
                        .map_err(|e| format!("JSON parse error: {e}")),
                    Ok(resp) => {
                        let status = resp.status();
                        let error_text = resp.text().await.unwrap_or_default();
                        Err(format!("HTTP {} {}: {}", status, endpoint, error_text))
                    }
                    Err(e) => Err(format!("Request error {}: {e}", endpoint)),
                };

                pb_clone.inc(1);
                result
            });

            tasks.push(task);
        }

        let results: Result<Vec<_>, String> = join_all(tasks)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Task join error: {}", e))?
            .into_iter()
            .collect();

        results
    }

    async fn make_request(
        &self,
        method: &str,
        endpoint: &str,
        data: Option<Value>,
    ) -> Result<Value, Box<dyn std::error::Error>> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let response = match method.to_uppercase().as_str() {
            "GET" => self.config.client.get(&url).send().await?,
            "POST" => {
                let mut request = self
                    .config
                    .client
                    .post(&url)
                    .header("content-type", "application/json");
                if let Some(json_data) = data {
                    request = request.json(&json_data);
                }
                request.send().await?
            }
            _ => return Err("Unsupported HTTP method".into()),
        };

        if response.status().is_success() {
            let result = response.json::<Value>().await?;
            Ok(result)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(format!("HTTP {} {}: {}", status, endpoint, error_text).into())
        }
    }

    pub async fn check_api(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{} Checking API health...", style("[1/3]").bold().dim());

        let health = self.make_request("GET", "/api/health", None).await?;
        let database = health["database"].as_str().unwrap_or("?");
        println!(
            "{} Connected to database {}",
            style("✅").green(),
            style(database).bold()
        );

        Ok(())
    }

    pub async fn generate_readings(
        &mut self,
        count: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Generating sensor readings...",
            style("[2/3]").bold().dim()
        );

        let body = self.robot_uuid.map(|uuid| json!({"robotUuid": uuid}));

        let pb = ProgressBar::new(count as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} {msg}")
            .unwrap()
            .progress_chars("##-"));
        pb.set_message("POST /api/registros/generate");

        // Generate in small batches so a laptop deployment is not flooded.
        let batch_size = 10;
        for batch_start in (0..count).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(count);
            let batch_requests: Vec<_> = (batch_start..batch_end)
                .map(|_| {
                    (
                        "POST".to_string(),
                        "/api/registros/generate".to_string(),
                        body.clone(),
                    )
                })
                .collect();

            let batch_results = self
                .make_parallel_requests(batch_requests, 5, &pb)
                .await
                .map_err(|e| format!("Batch generation failed: {}", e))?;
            self.generated.extend(batch_results);

            sleep(Duration::from_millis(100)).await;
        }

        pb.finish_with_message("Readings generated!");
        println!(
            "{} Generated {} records",
            style("✅").green(),
            self.generated.len()
        );

        Ok(())
    }

    pub async fn seed_database(&mut self, count: usize) -> Result<(), Box<dyn std::error::Error>> {
        println!();
        println!("{}", style("AgroTico Database Seeder").bold().green());
        println!(
            "{}",
            style("Filling the dashboard with synthetic sensor history...").dim()
        );
        println!();

        self.check_api().await?;
        self.generate_readings(count).await?;
        self.display_summary().await?;

        Ok(())
    }

    async fn display_summary(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "{} Fetching system totals...",
            style("[3/3]").bold().dim()
        );

        let overview = self.make_request("GET", "/api/analytics/overview", None).await?;
        let data = &overview["data"];

        println!();
        println!("{}", style("🎉 Database Seeding Complete!").bold().green());
        println!("{}", style("═".repeat(50)).dim());

        let summary_data = vec![
            ("Robots", data["totalRobots"].as_u64().unwrap_or(0)),
            ("Active robots", data["activeRobots"].as_u64().unwrap_or(0)),
            ("Total readings", data["totalReadings"].as_u64().unwrap_or(0)),
            ("Readings today", data["todayReadings"].as_u64().unwrap_or(0)),
        ];

        for (name, count) in summary_data {
            println!(
                "{:.<20} {}",
                style(name).cyan(),
                style(count).bold().green()
            );
        }

        println!();
        println!("{} Next Steps:", style("🎯").cyan());
        println!(
            "  {} Open {}/api/dashboard for the full snapshot",
            style("•").dim(),
            self.config.base_url
        );
        println!(
            "  {} Try {}/api/ai/forecast once a few days of data exist",
            style("•").dim(),
            self.config.base_url
        );
        println!(
            "  {} Browse the API docs at {}/api/docs",
            style("•").dim(),
            self.config.base_url
        );
        println!();

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("AgroTico Database Seeder")
        .version("1.0")
        .author("AgroTico Development Team")
        .about("Fills the AgroTico database with synthetic sensor readings through the public API")
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .help("API base URL")
                .default_value("http://localhost:3001"),
        )
        .arg(
            Arg::new("readings")
                .short('n')
                .long("readings")
                .value_name("COUNT")
                .help("Number of sensor records to generate")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("robot")
                .short('r')
                .long("robot")
                .value_name("UUID")
                .help("Attribute records to this robot instead of the default one"),
        )
        .get_matches();

    let base_url = matches.get_one::<String>("url").unwrap().clone();
    let count = *matches.get_one::<usize>("readings").unwrap();
    let robot_uuid = matches
        .get_one::<String>("robot")
        .map(|raw| Uuid::parse_str(raw))
        .transpose()
        .map_err(|e| format!("Invalid robot UUID: {e}"))?;

    println!("{}", style("AgroTico Database Seeder v1.0").bold());
    println!("{}", style("━".repeat(40)).dim());
    println!("API URL: {}", style(&base_url).cyan());
    if let Some(uuid) = robot_uuid {
        println!("Robot:   {}", style(uuid).cyan());
    }

    let mut seeder = DatabaseSeeder::new(base_url, robot_uuid);
    seeder.seed_database(count).await?;

    Ok(())
}
