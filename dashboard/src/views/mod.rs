//! Dashboard views
//!
//! Each view holds its mock figures as USD literals and renders them as
//! Rupiah through the [`CurrencyNormalizer`]. Filters come from the
//! persisted [`DashboardPreferences`].

mod analytics;
mod financials;
mod inventory;
mod operations;

use std::fmt;

use serde::Serialize;
use shared::currency::CurrencyNormalizer;
use shared::preferences::DashboardPreferences;

/// One figure of a view, authored in USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub label: &'static str,
    pub usd: f64,
}

impl Figure {
    pub const fn new(label: &'static str, usd: f64) -> Self {
        Self { label, usd }
    }
}

/// A figure converted and rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: String,
    /// Whole Rupiah
    pub idr: i64,
    pub full: String,
    pub compact: String,
}

impl ReportLine {
    pub fn from_figure(normalizer: &CurrencyNormalizer, figure: &Figure) -> Self {
        let idr = normalizer.convert_to_local_currency(figure.usd);
        Self {
            label: figure.label.to_string(),
            idr,
            full: normalizer.format_currency(idr),
            compact: normalizer.format_compact_currency(idr),
        }
    }
}

/// Rendered view
#[derive(Debug, Clone, Serialize)]
pub struct ViewReport {
    pub view: View,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

/// Titled group of lines within a view
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub lines: Vec<ReportLine>,
}

impl Section {
    fn build<'a>(
        title: &'static str,
        normalizer: &CurrencyNormalizer,
        figures: impl IntoIterator<Item = &'a Figure>,
    ) -> Self {
        Self {
            title,
            lines: figures
                .into_iter()
                .map(|f| ReportLine::from_figure(normalizer, f))
                .collect(),
        }
    }
}

/// The four dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Operations,
    Analytics,
    Inventory,
    Financials,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Operations,
        View::Analytics,
        View::Inventory,
        View::Financials,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Operations => "Real-time Operations",
            View::Analytics => "Multi-outlet Performance Analytics",
            View::Inventory => "Inventory Intelligence & Procurement",
            View::Financials => "Financial Performance & Cost Analysis",
        }
    }

    pub fn report(&self, normalizer: &CurrencyNormalizer, prefs: &DashboardPreferences) -> ViewReport {
        let sections = match self {
            View::Operations => operations::sections(normalizer),
            View::Analytics => analytics::sections(normalizer, prefs),
            View::Inventory => inventory::sections(normalizer),
            View::Financials => financials::sections(normalizer, prefs),
        };
        ViewReport {
            view: *self,
            title: self.title(),
            sections,
        }
    }
}

impl fmt::Display for ViewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for section in &self.sections {
            writeln!(f, "-- {}", section.title)?;
            if section.lines.is_empty() {
                writeln!(f, "   (no figures for the current filter)")?;
                continue;
            }
            let label_width = section.lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
            let full_width = section.lines.iter().map(|l| l.full.chars().count()).max().unwrap_or(0);
            for line in &section.lines {
                writeln!(
                    f,
                    "   {:<label_width$}  {:>full_width$}  ({})",
                    line.label, line.full, line.compact
                )?;
            }
        }
        Ok(())
    }
}
