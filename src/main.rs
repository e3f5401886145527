mod aggregator;
mod config;
mod error;
mod models;
mod providers;
mod storage;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config};
use crate::models::SearchQuery;
use crate::providers::{HeadHunter, JobProvider, SuperJob};
use crate::storage::JsonlSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobfeed=info")),
        )
        .init();

    let config = Config::parse();

    match config.command.clone() {
        Command::Search {
            query,
            platform,
            count,
            experience,
        } => search(&config, &query, &platform, count, experience).await,
        Command::Saved => show_saved(&config.output),
        Command::Probe { keyword } => probe(&keyword).await,
    }
}

async fn search(
    config: &Config,
    query_text: &str,
    platform: &str,
    count: Option<u32>,
    experience: Option<u32>,
) -> anyhow::Result<()> {
    let mut query = SearchQuery::new(query_text);
    if let Some(count) = count {
        query = query.with_count(count);
    }
    if let Some(years) = experience {
        query = query.with_experience(years);
    }

    let mut boards: Vec<Box<dyn JobProvider>> = vec![Box::new(HeadHunter::new(platform))];
    match &config.superjob_app_id {
        Some(app_id) => boards.push(Box::new(SuperJob::new(app_id))),
        None => tracing::warn!("No SuperJob app id configured, searching HeadHunter only"),
    }

    let outcome = aggregator::aggregate(&boards, &query).await;

    let sink = JsonlSink::new(&config.output);
    for vacancy in &outcome.vacancies {
        println!("{vacancy}");
        sink.append(vacancy)?;
    }

    tracing::info!(
        "{} vacancies saved to {}, {} provider failure(s)",
        outcome.vacancies.len(),
        config.output,
        outcome.failures.len()
    );

    if outcome.vacancies.is_empty() && !outcome.failures.is_empty() {
        let (name, error) = &outcome.failures[0];
        anyhow::bail!("no results: {name} failed: {error}");
    }

    Ok(())
}

fn show_saved(output: &str) -> anyhow::Result<()> {
    let vacancies = JsonlSink::read_all(Path::new(output))?;
    for vacancy in &vacancies {
        println!("{vacancy}");
    }
    tracing::info!("{} vacancies in {output}", vacancies.len());
    Ok(())
}

async fn probe(keyword: &str) -> anyhow::Result<()> {
    let found = HeadHunter::new("").total_found(keyword).await?;
    println!("{keyword}: {found} vacancies found");
    Ok(())
}
