//! Command-line bookmark classifier.
//!
//! Runs the same classification as `POST /classify` without starting the
//! HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Classify with arguments
//! cargo run --bin classify -- --url https://github.com/foo/bar --title "Awesome Python Tutorial"
//!
//! # Prompt for missing fields
//! cargo run --bin classify
//!
//! # Machine-readable output with custom tables
//! cargo run --bin classify -- -u https://intranet.local -t Handbook --tables tables.json --json
//! ```
//!
//! # Features
//!
//! - **Interactive Prompts**: URL and title are asked for when omitted
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate
//! - **JSON Output**: Same body as the HTTP endpoint with `--json`

use bookmark_classifier::api::dto::classify::ClassifyResponse;
use bookmark_classifier::prelude::*;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::Input;
use std::path::PathBuf;
use std::sync::Arc;

/// Classify a bookmark by URL, title and description.
#[derive(Parser)]
#[command(name = "classify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bookmark URL (prompted for if omitted)
    #[arg(short, long)]
    url: Option<String>,

    /// Bookmark title (prompted for if omitted)
    #[arg(short, long)]
    title: Option<String>,

    /// Optional description
    #[arg(short, long)]
    description: Option<String>,

    /// JSON file replacing the built-in category tables
    #[arg(long)]
    tables: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let tables = match &cli.tables {
        Some(path) => CategoryTables::from_json_file(path)
            .with_context(|| format!("Failed to load tables from {}", path.display()))?,
        None => CategoryTables::builtin(),
    };
    let service = ClassificationService::new(Arc::new(tables));

    let url = match cli.url {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()?,
    };

    let title = match cli.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()?,
    };

    let input = ClassificationInput::new(url, title, cli.description);
    let output = service.classify(&input);

    if cli.json {
        let body = serde_json::to_string_pretty(&ClassifyResponse::from(output))?;
        println!("{body}");
    } else {
        print_result(&input, &output);
    }

    Ok(())
}

/// Prints a colored classification summary.
///
/// # Output Format
///
/// ```text
/// 🔖 Classification
///
///   URL:        https://github.com/foo/bar
///   Category:   technology
///   Confidence: 90.0%
///   Tags:       github, awesome, python, tutorial
/// ```
fn print_result(input: &ClassificationInput, output: &ClassificationOutput) {
    println!("{}", "🔖 Classification".bright_blue().bold());
    println!();
    println!("  URL:        {}", input.url.cyan());

    let category = if output.is_uncategorized() {
        output.category.as_str().yellow()
    } else {
        output.category.as_str().green().bold()
    };
    println!("  Category:   {}", category);
    println!(
        "  Confidence: {}",
        format!("{:.1}%", output.confidence).bright_white()
    );

    if output.suggested_tags.is_empty() {
        println!("  Tags:       {}", "none".bright_black());
    } else {
        println!(
            "  Tags:       {}",
            output.suggested_tags.join(", ").bright_yellow()
        );
    }
    println!();
}
