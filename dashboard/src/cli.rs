//! Command line interface

use std::io::Write;

use anyhow::{Context, ensure};
use clap::{Parser, Subcommand};
use serde_json::json;
use shared::currency::{FormatOverrides, parse_currency};
use shared::preferences::{
    AnalyticsPeriod, ComparisonMode, CostCenter, DashboardPreferences, DateRange,
    FinancialPeriod, Outlet, PreferenceStore, VarianceMode, delete_bookmark, list_bookmarks,
    save_bookmark,
};

use crate::core::Config;
use crate::views::View;

#[derive(Parser, Debug)]
#[command(name = "dashboard", version, about = "Restaurant operations dashboard in Rupiah")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render dashboard views
    Report {
        /// Only this view (default: all four)
        #[arg(long, value_enum)]
        view: Option<View>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Convert a USD amount to whole Rupiah
    Convert {
        #[arg(allow_negative_numbers = true)]
        usd: f64,
        /// USD → IDR rate (default: EXCHANGE_RATE)
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Format a Rupiah amount
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Compact notation (K, M, B, T)
        #[arg(long, conflicts_with = "fraction_digits")]
        compact: bool,
        /// Fixed number of fraction digits
        #[arg(long)]
        fraction_digits: Option<u8>,
    },
    /// Parse a displayed amount back to an integer
    Parse { text: String },
    /// Show or change saved selections
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Print selections and bookmarks as JSON
    Show,
    SetOutlet { outlet: Outlet },
    SetRange { range: DateRange },
    SetPeriod { period: FinancialPeriod },
    SetCostCenter { center: CostCenter },
    SetVariance { mode: VarianceMode },
    /// Save an analytics bookmark
    BookmarkAdd {
        name: String,
        /// Comma separated outlets
        #[arg(long = "outlets", value_delimiter = ',', default_value = "all")]
        outlets: Vec<Outlet>,
        #[arg(long, default_value = "month")]
        period: AnalyticsPeriod,
        #[arg(long, default_value = "outlet-vs-outlet")]
        comparison: ComparisonMode,
    },
    /// Delete an analytics bookmark by id
    BookmarkRm { id: i64 },
    /// Forget every saved selection and bookmark
    Reset,
}

impl Cli {
    /// Execute the parsed command, writing results to `out`
    pub fn run(self, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
        let normalizer = config.normalizer();

        match self.command {
            Command::Report { view, json } => {
                let store = open_store(config)?;
                let prefs = DashboardPreferences::load(&store);
                let views = view.map(|v| vec![v]).unwrap_or_else(|| View::ALL.to_vec());
                let reports: Vec<_> = views.iter().map(|v| v.report(&normalizer, &prefs)).collect();

                if json {
                    serde_json::to_writer_pretty(&mut *out, &reports)?;
                    writeln!(out)?;
                } else {
                    for report in &reports {
                        writeln!(out, "{report}")?;
                    }
                }
            }
            Command::Convert { usd, rate } => {
                let normalizer = match rate {
                    Some(rate) => {
                        ensure!(rate.is_finite() && rate > 0.0, "rate must be a positive number, got {rate}");
                        normalizer.with_exchange_rate(rate)
                    }
                    None => normalizer,
                };
                let idr = normalizer.convert_to_local_currency(usd);
                writeln!(out, "idr      {idr}")?;
                writeln!(out, "full     {}", normalizer.format_currency(idr))?;
                writeln!(out, "compact  {}", normalizer.format_compact_currency(idr))?;
            }
            Command::Format {
                amount,
                compact,
                fraction_digits,
            } => {
                let text = match (compact, fraction_digits) {
                    (true, _) => normalizer.format_compact_currency(amount),
                    (false, Some(digits)) => normalizer
                        .format_currency_with(amount, &FormatOverrides::fraction_digits(digits, digits)),
                    (false, None) => normalizer.format_currency(amount),
                };
                writeln!(out, "{text}")?;
            }
            Command::Parse { text } => {
                writeln!(out, "{}", parse_currency(&text))?;
            }
            Command::Prefs { action } => run_prefs(action, config, out)?,
        }

        Ok(())
    }
}

fn open_store(config: &Config) -> anyhow::Result<PreferenceStore> {
    PreferenceStore::open(&config.preferences_file).with_context(|| {
        format!("Failed to open preferences at {}", config.preferences_file.display())
    })
}

fn run_prefs(action: PrefsCommand, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let mut prefs = DashboardPreferences::load(&store);

    match action {
        PrefsCommand::Show => {
            let value = json!({
                "preferences": prefs,
                "bookmarks": list_bookmarks(&store),
            });
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)?;
            return Ok(());
        }
        PrefsCommand::SetOutlet { outlet } => prefs.selected_outlet = outlet,
        PrefsCommand::SetRange { range } => prefs.date_range = range,
        PrefsCommand::SetPeriod { period } => prefs.financial_period = period,
        PrefsCommand::SetCostCenter { center } => prefs.cost_center = center,
        PrefsCommand::SetVariance { mode } => prefs.variance_toggle = mode,
        PrefsCommand::BookmarkAdd {
            name,
            outlets,
            period,
            comparison,
        } => {
            let bookmark = save_bookmark(&mut store, &name, outlets, period, comparison)?;
            tracing::info!(id = bookmark.id, name = %bookmark.name, "Bookmark added");
            writeln!(out, "{}", bookmark.id)?;
            return Ok(());
        }
        PrefsCommand::BookmarkRm { id } => {
            let removed = delete_bookmark(&mut store, id)?;
            tracing::info!(id, name = %removed.name, "Bookmark removed");
            return Ok(());
        }
        PrefsCommand::Reset => {
            store.clear()?;
            tracing::info!("Preferences reset");
            return Ok(());
        }
    }

    prefs.save(&mut store)?;
    tracing::info!(
        path = %config.preferences_file.display(),
        "Preferences updated"
    );
    Ok(())
}
