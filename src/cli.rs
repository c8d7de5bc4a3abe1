//! Command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::books::{calculate, level_ranges, Inventory, LevelList, PlanRequest, RunEstimator};

/// Environment variable holding the log filter, e.g. `GITBCALC_LOG=debug`.
pub const LOG_ENV_VAR: &str = "GITBCALC_LOG";

/// Default log filter when neither the env var nor `--verbose` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "gitbcalc", version)]
#[command(about = "Count the Talent books needed to level Talents")]
pub struct Cli {
    /// Comma-separated current Talent levels, e.g. 1,6,6
    pub current_levels: LevelList,

    /// Comma-separated target Talent levels, e.g. 9,9,9
    pub target_levels: LevelList,

    /// Comma-separated owned books: Teachings,Guide,Philosophies
    #[arg(short = 'b', long = "books", value_name = "T,G,P")]
    pub books: Option<Inventory>,

    /// Convert excess owned books into higher tiers
    #[arg(short = 'a', long)]
    pub allow_conversion: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log each calculation stage to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter directive for this invocation.
    pub fn log_filter(&self) -> Option<&'static str> {
        self.verbose.then_some("debug")
    }
}

/// Run a parsed invocation and return the text to print.
pub fn execute(cli: &Cli) -> Result<String> {
    let ranges = level_ranges(cli.current_levels.levels(), cli.target_levels.levels())
        .context("invalid Talent levels")?;
    debug!(talents = ranges.len(), "validated Talent levels");

    let request = PlanRequest {
        ranges,
        inventory: cli.books,
        allow_conversion: cli.allow_conversion,
    };
    let report = calculate(&request, &RunEstimator::default())?;

    match cli.format {
        OutputFormat::Table => Ok(report.render()),
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&report)
                .context("failed to serialize book report")?;
            Ok(format!("{payload}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gitbcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let cli = parse(&["1,6", "9,9", "-b", "10,20,30", "-a"]);
        assert_eq!(cli.current_levels.levels(), &[1, 6]);
        assert_eq!(cli.target_levels.levels(), &[9, 9]);
        assert!(cli.books.is_some());
        assert!(cli.allow_conversion);
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.log_filter(), None);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = parse(&["1", "2", "--books", "1,2,3", "--allow-conversion", "--format", "json", "-v"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_filter(), Some("debug"));
    }

    #[test]
    fn test_parse_rejects_bad_inventory_shape() {
        let result = Cli::try_parse_from(["gitbcalc", "1", "2", "--books", "1,2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_mismatched_lengths() {
        let err = execute(&parse(&["1,2", "1"])).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("invalid Talent levels: number of current and target"));
    }

    #[test]
    fn test_execute_table() {
        console::set_colors_enabled(false);
        let output = execute(&parse(&["1,1", "10,10"])).unwrap();
        assert!(output.contains("Philosophies        76"));
        assert!(output.contains("Roughly estimating 68 more runs needed"));
    }

    #[test]
    fn test_execute_json() {
        let output = execute(&parse(&["1", "10", "--format", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["needed"]["guide"], 21);
        assert_eq!(value["estimated_runs"], 34);
    }
}
