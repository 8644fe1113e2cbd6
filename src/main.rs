use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use career_graph::utils::logging::console::{
    format_recommendation_json, print_graph_summary, print_recommendations,
};
use career_graph::utils::logging::log_unknown_skills;
use career_graph::{OutputFormat, Recommender, RecommenderConfig, parse_skill_list, partition_skills};
use log::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // An optional JSON config file, with environment variables applied on top
    let config = match std::env::args().nth(1) {
        Some(path) => RecommenderConfig::from_json_file(Path::new(&path))
            .and_then(|config| config.with_env_overrides(|key| std::env::var(key).ok()))
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => RecommenderConfig::from_env().context("Invalid configuration in environment")?,
    };
    let output_format = config.output_format;
    let data_dir = config.data_dir.clone();

    info!("Loading skill tables from: {}", data_dir.display());
    let start = Instant::now();
    let recommender = Recommender::from_config_async(config)
        .await
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;
    info!(
        "Loaded {} skill tables and built the occupation network in {:?}",
        recommender.tables().len(),
        start.elapsed()
    );

    if recommender.tables().is_empty() {
        warn!("No skill tables found in {}", data_dir.display());
        return Ok(());
    }

    print_graph_summary(recommender.graph());

    let examples: Vec<&str> = recommender.skill_names().collect();
    println!(
        "Enter your soft skills (comma-separated, e.g., {}):",
        examples.join(", ")
    );
    std::io::stdout().flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("Failed to read skills from stdin")?;

    let requested = parse_skill_list(&input);
    let (valid, unknown) = partition_skills(&requested, recommender.tables());
    log_unknown_skills(&unknown);

    let recommendations = recommender.recommend(&valid);
    if recommendations.is_empty() {
        println!("No matching careers found.");
        return Ok(());
    }

    match output_format {
        OutputFormat::Table => print_recommendations(&recommendations),
        OutputFormat::Json => println!("{}", format_recommendation_json(&recommendations)?),
    }

    Ok(())
}
