//! Calculation results and their text rendering.

mod table;

use serde::{Deserialize, Serialize};

use crate::books::{BookCounts, ConversionPlan, Tier};

pub use table::{render as render_table, Column};

/// Outcome of a book calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookReport {
    /// Books still needed per tier, never negative
    pub needed: BookCounts,
    /// Conversions performed, if conversion ran
    pub crafted: Option<ConversionPlan>,
    /// Rough number of domain runs still required
    pub estimated_runs: u64,
    /// Whether the Craft column is shown
    pub allow_conversion: bool,
}

impl BookReport {
    /// Build the Tier / Name / Needed (/ Craft) table.
    pub fn table(&self) -> String {
        let mut columns = vec![
            Column::numeric("Tier", Tier::ALL.iter().map(|tier| tier.number().to_string()).collect()),
            Column::text("Name", Tier::ALL.iter().map(|tier| tier.name().to_string()).collect()),
            Column::numeric(
                "Needed",
                Tier::ALL.iter().map(|&tier| self.needed[tier].to_string()).collect(),
            ),
        ];

        if self.allow_conversion {
            let crafted = self.crafted.unwrap_or_default();
            let cells = Tier::ALL
                .iter()
                .map(|&tier| {
                    crafted
                        .crafted_into(tier)
                        .map(|count| count.to_string())
                        .unwrap_or_default()
                })
                .collect();
            columns.push(Column::numeric("Craft", cells));
        }

        render_table(&columns)
    }

    /// Full text report: table followed by the run estimate.
    pub fn render(&self) -> String {
        format!(
            "\n{}\n\n{}\n\n",
            self.table(),
            runs_line(self.estimated_runs)
        )
    }
}

/// `Roughly estimating N more run(s) needed`, singular only for exactly one.
pub fn runs_line(runs: u64) -> String {
    let plural = if runs == 1 { "" } else { "s" };
    format!("Roughly estimating {runs} more run{plural} needed")
}
