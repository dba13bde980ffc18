//! greenlight - command-line front-end for the film success predictor.
//!
//! Runs the same orchestrator as the HTTP server against local data files,
//! for offline what-if runs and catalog inspection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

use artifacts::ArtifactSet;
use catalog::load_catalog;
use pipeline::PredictionRequest;
use server::PredictionService;

/// greenlight - film success prediction engine
#[derive(Parser)]
#[command(name = "greenlight")]
#[command(about = "Predicts commercial success of hypothetical films", long_about = None)]
struct Cli {
    /// Path to the cleaned film dataset (JSON array)
    #[arg(long, default_value = "data/films.json")]
    catalog: PathBuf,

    /// Directory holding scaler.json, vectorizer.json and model.json
    #[arg(long, default_value = "data/artifacts")]
    artifacts: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the commercial success of a hypothetical film
    Predict {
        /// Production budget in currency units
        #[arg(long)]
        budget: f64,

        /// Target audience rating on the 0-10 scale
        #[arg(long)]
        rating: f64,

        /// Comma-separated genre names, e.g. "Action, Adventure"
        #[arg(long)]
        genre: String,

        /// Seed the noise generator for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show one historical film by title (case-insensitive)
    Film {
        /// Film title to look up
        #[arg(long)]
        title: String,
    },

    /// Show catalog statistics
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(
        load_catalog(&cli.catalog)
            .with_context(|| format!("loading catalog from {}", cli.catalog.display()))?,
    );
    let artifacts = Arc::new(
        ArtifactSet::load(&cli.artifacts)
            .with_context(|| format!("loading artifacts from {}", cli.artifacts.display()))?,
    );

    match cli.command {
        Commands::Predict {
            budget,
            rating,
            genre,
            seed,
        } => {
            let service = match seed {
                Some(seed) => PredictionService::with_rng(
                    catalog,
                    artifacts,
                    StdRng::seed_from_u64(seed),
                ),
                None => PredictionService::new(catalog, artifacts),
            };

            let request = PredictionRequest {
                budget,
                rating,
                genre,
            };
            let report = service.predict(&request)?;

            println!("{}", "Input".bold().underline());
            println!(
                "  {} budget, rating {}, genre {}",
                report.input_summary.budget,
                report.input_summary.rating,
                report.input_summary.genre
            );
            println!("  \"{}\"", report.input_summary.generated_overview.italic());

            println!("\n{}", "Model signals".bold().underline());
            for model in &report.models {
                let label = if model.label == pipeline::SuccessLabel::Successful {
                    model.label.as_str().green()
                } else {
                    model.label.as_str().red()
                };
                let marker = if model.synthetic { " (synthetic)" } else { "" };
                println!(
                    "  {}{}: {} ({:.1}% success, {:.1}% confidence)",
                    model.model_name.bold(),
                    marker.dimmed(),
                    label,
                    model.success_probability,
                    model.confidence
                );
            }

            println!("\n{}", "Ensemble".bold().underline());
            let verdict = if report.ensemble.votes.successful >= 2 {
                report.ensemble.label.as_str().green().bold()
            } else {
                report.ensemble.label.as_str().red().bold()
            };
            println!(
                "  {} ({:.1}% average, {}-{} votes)",
                verdict,
                report.ensemble.average_probability,
                report.ensemble.votes.successful,
                report.ensemble.votes.not_successful
            );

            println!("\n{}", "Comparable films".bold().underline());
            if report.recommended_films.is_empty() {
                println!("  {}", "none in range".dimmed());
            }
            for (i, item) in report.recommended_films.iter().enumerate() {
                println!(
                    "  {}. {} - budget {}, revenue {}, roi {}, rated {} [{}]",
                    i + 1,
                    item.title.bold(),
                    item.budget_display,
                    item.revenue_display,
                    item.roi_display,
                    item.rating_display,
                    item.success_display
                );
            }
        }

        Commands::Film { title } => {
            let service = PredictionService::new(catalog, artifacts);
            match service.lookup_film(&title) {
                Some(detail) => {
                    println!("{}", detail.title.bold().underline());
                    println!("  {}", detail.overview);
                    println!(
                        "  Budget ${:.1}M, revenue ${:.1}M ({} gross return)",
                        detail.budget / 1e6,
                        detail.revenue / 1e6,
                        detail.roi_multiplier
                    );
                    println!(
                        "  Rated {:.1} by {} voters, {} min, released {}",
                        detail.vote_average,
                        detail.vote_count,
                        detail.runtime,
                        detail.release_date
                    );
                    println!("  Genres: {}", detail.genres.join(", "));
                    let verdict = if detail.success == "Successful" {
                        detail.success.green()
                    } else {
                        detail.success.red()
                    };
                    println!("  Verdict: {}", verdict);
                }
                None => {
                    println!("{}", format!("No film titled {:?}", title).red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Stats => {
            let successful = catalog
                .films()
                .iter()
                .filter(|f| f.is_successful)
                .count();
            println!("{}", "Catalog".bold().underline());
            println!("  {} films admitted", catalog.len());
            println!(
                "  {} successful ({:.1}%)",
                successful,
                successful as f64 / catalog.len() as f64 * 100.0
            );
        }
    }

    Ok(())
}
