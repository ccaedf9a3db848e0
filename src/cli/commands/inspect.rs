//! Inspect command implementation
//!
//! Classifies every placeholder in one file or string and prints the rule
//! outcome. Nothing is generated, so reference lists are not needed.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_SUCCESS};
use crate::config::load_config_or_default;
use crate::surrogate::classifier::{Category, PlaceholderClassifier, PlaceholderForm, RuleRegistry};
use crate::surrogate::rewriter::find_placeholders;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Document to inspect
    #[arg(value_name = "FILE", required_unless_present = "text")]
    pub file: Option<PathBuf>,

    /// Inspect this text instead of a file
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Classification of one placeholder occurrence
#[derive(Debug, Serialize)]
pub struct InspectRow {
    pub placeholder: String,
    pub category: Category,
    pub form: PlaceholderForm,
    pub cacheable: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let text = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => match tokio::fs::read(path).await {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => text,
                    Err(e) => {
                        eprintln!("{} is not valid UTF-8: {}", path.display(), e);
                        return Ok(EXIT_FATAL);
                    }
                },
                Err(e) => {
                    eprintln!("Failed to read {}: {}", path.display(), e);
                    return Ok(EXIT_FATAL);
                }
            },
            (None, None) => {
                eprintln!("Provide a FILE or --text");
                return Ok(EXIT_CONFIG);
            }
        };

        let registry = RuleRegistry::builtin()?;
        let rows = inspect_text(
            &registry,
            &text,
            config.surrogate.cache_bare_placeholders,
        )?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            print_table(&rows);
        }

        Ok(EXIT_SUCCESS)
    }
}

/// Classify every placeholder span of `text`, in order of appearance
pub fn inspect_text<C: PlaceholderClassifier + ?Sized>(
    classifier: &C,
    text: &str,
    cache_bare: bool,
) -> crate::domain::Result<Vec<InspectRow>> {
    Ok(find_placeholders(text)?
        .into_iter()
        .map(|raw| {
            let classification = classifier.classify(raw);
            InspectRow {
                placeholder: raw.to_string(),
                category: classification.category,
                form: classification.form,
                cacheable: classification.form.is_cacheable(cache_bare),
            }
        })
        .collect())
}

fn print_table(rows: &[InspectRow]) {
    if rows.is_empty() {
        println!("No placeholders found.");
        return;
    }

    let width = rows
        .iter()
        .map(|r| r.placeholder.chars().count())
        .max()
        .unwrap_or(0)
        .max("PLACEHOLDER".len());

    println!(
        "{:width$}  {:28}  {:9}  CACHED",
        "PLACEHOLDER", "CATEGORY", "FORM"
    );
    for row in rows {
        println!(
            "{:width$}  {:28}  {:9}  {}",
            row.placeholder,
            row.category.as_str(),
            row.form.to_string(),
            if row.cacheable { "yes" } else { "no" }
        );
    }

    let unrecognized = rows
        .iter()
        .filter(|r| r.form == PlaceholderForm::Fallback)
        .count();
    println!();
    println!(
        "{} placeholder(s), {} unrecognized",
        rows.len(),
        unrecognized
    );
}
