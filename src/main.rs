// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use librero::{
    classify, describe_record, read_catalog, read_query, CatalogSearch, SearchConfig,
    DEFAULT_QUERY,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            catalog,
            payload,
            query,
            limit,
            fallback_limit,
            json,
        } => {
            let config = SearchConfig::from_env()?.with_overrides(limit, fallback_limit);
            config.validate()?;

            let query = match (payload, query) {
                (Some(path), _) => read_query(&path)
                    .with_context(|| format!("reading payload {}", path.display()))?,
                (None, Some(text)) => text,
                (None, None) => DEFAULT_QUERY.to_string(),
            };
            let rows = read_catalog(&catalog)
                .with_context(|| format!("reading catalog {}", catalog.display()))?;

            let envelope = CatalogSearch::new(config).search(&query, &rows);
            if json {
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else {
                display::print_envelope(&envelope);
                println!();
                print!("{}", envelope.summary);
            }
        }
        Commands::Classify { query } => {
            println!("{}", classify(&query));
        }
        Commands::Describe { catalog } => {
            let rows = read_catalog(&catalog)
                .with_context(|| format!("reading catalog {}", catalog.display()))?;
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    println!("---");
                }
                println!("{}", describe_record(row));
            }
        }
    }
    Ok(())
}
