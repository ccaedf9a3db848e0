//! Dry-run reporting
//!
//! A dry run reads and classifies every document without writing anything.
//! The report shows how placeholders spread over categories and which ones no
//! rule recognizes.

use crate::surrogate::classifier::{Category, Classification, PlaceholderForm};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distinct unrecognized placeholders kept as samples
pub const MAX_UNRECOGNIZED_SAMPLES: usize = 20;

/// Dry-run report with classification statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DryRunReport {
    /// Documents analyzed
    pub total_documents: usize,

    /// Documents containing at least one placeholder
    pub documents_with_placeholders: usize,

    /// Placeholder spans found
    pub total_placeholders: usize,

    pub by_category: BTreeMap<Category, usize>,

    pub by_form: BTreeMap<String, usize>,

    /// Spans no rule recognized
    pub unrecognized: usize,

    /// Up to [`MAX_UNRECOGNIZED_SAMPLES`] distinct unrecognized spans
    pub unrecognized_samples: Vec<String>,

    /// Documents that could not be read
    pub warnings: Vec<String>,
}

impl DryRunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the classified placeholders of one document
    pub fn add_document<'a, I>(&mut self, placeholders: I)
    where
        I: IntoIterator<Item = (&'a str, &'a Classification)>,
    {
        self.total_documents += 1;
        let before = self.total_placeholders;

        for (raw, classification) in placeholders {
            self.total_placeholders += 1;
            *self.by_category.entry(classification.category).or_insert(0) += 1;
            *self
                .by_form
                .entry(classification.form.to_string())
                .or_insert(0) += 1;

            if classification.form == PlaceholderForm::Fallback {
                self.unrecognized += 1;
                if self.unrecognized_samples.len() < MAX_UNRECOGNIZED_SAMPLES
                    && !self.unrecognized_samples.iter().any(|s| s == raw)
                {
                    self.unrecognized_samples.push(raw.to_string());
                }
            }
        }

        if self.total_placeholders > before {
            self.documents_with_placeholders += 1;
        }
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                 SURROGATE DRY-RUN REPORT                      \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Documents Analyzed:          {}\n",
            self.total_documents
        ));
        output.push_str(&format!(
            "  Documents with Placeholders: {}\n",
            self.documents_with_placeholders
        ));
        output.push_str(&format!(
            "  Total Placeholders:          {}\n",
            self.total_placeholders
        ));
        output.push_str(&format!(
            "  Unrecognized Placeholders:   {}\n",
            self.unrecognized
        ));
        output.push('\n');

        if !self.by_category.is_empty() {
            output.push_str("🔍 PLACEHOLDERS BY CATEGORY\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut categories: Vec<_> = self.by_category.iter().collect();
            categories.sort_by(|a, b| b.1.cmp(a.1));

            for (category, count) in categories {
                output.push_str(&format!("  {:30} {:>7}\n", category.as_str(), count));
            }
            output.push('\n');
        }

        if !self.unrecognized_samples.is_empty() {
            output.push_str("❓ UNRECOGNIZED SAMPLES\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for sample in &self.unrecognized_samples {
                output.push_str(&format!("  {sample}\n"));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
