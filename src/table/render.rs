use std::fmt;

use super::describe::{ColumnSummary, Description};

const NUMERIC_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
const CATEGORICAL_ROWS: [&str; 4] = ["count", "unique", "top", "freq"];
const MAX_DECIMALS: usize = 6;

impl fmt::Display for Description {
    /// Fixed-width table: row labels left-aligned, one right-aligned
    /// column per described table column, two spaces between columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: &[&str] = if self.is_numeric() {
            &NUMERIC_ROWS
        } else {
            &CATEGORICAL_ROWS
        };

        let cells: Vec<Vec<String>> = self
            .columns()
            .iter()
            .map(|(_, summary)| column_cells(summary))
            .collect();

        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns()
            .iter()
            .zip(&cells)
            .map(|((name, _), column)| {
                column
                    .iter()
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for ((name, _), &width) in self.columns().iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }

        for (row, label) in labels.iter().enumerate() {
            write!(f, "\n{label:<label_width$}")?;
            for (column, &width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", column[row])?;
            }
        }

        Ok(())
    }
}

fn column_cells(summary: &ColumnSummary) -> Vec<String> {
    match summary {
        ColumnSummary::Numeric(s) => {
            let values = s.values();
            let decimals = values
                .iter()
                .map(|&v| decimals_needed(v))
                .max()
                .unwrap_or(1);
            values.iter().map(|&v| format_float(v, decimals)).collect()
        }
        ColumnSummary::Categorical(s) => vec![
            s.count.to_string(),
            s.unique.to_string(),
            s.top.clone().unwrap_or_else(|| "NaN".to_string()),
            s.freq.map_or_else(|| "NaN".to_string(), |n| n.to_string()),
        ],
    }
}

/// Decimals needed to show `value` exactly up to [`MAX_DECIMALS`], at least one.
fn decimals_needed(value: f64) -> usize {
    if !value.is_finite() {
        return 1;
    }
    let text = format!("{value:.MAX_DECIMALS$}");
    let fraction = text.split_once('.').map_or("", |(_, frac)| frac);
    fraction.trim_end_matches('0').len().max(1)
}

fn format_float(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}
