use std::collections::HashMap;

use super::{Column, Table, stats};

/// Statistics of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl NumericSummary {
    pub fn of(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            count: values.len(),
            mean: stats::mean(values),
            std: stats::std_dev(values),
            min: stats::min(values),
            q25: stats::quantile(&sorted, 0.25),
            q50: stats::quantile(&sorted, 0.5),
            q75: stats::quantile(&sorted, 0.75),
            max: stats::max(values),
        }
    }

    /// Values in row order: count, mean, std, min, 25%, 50%, 75%, max
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Statistics of a text column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    /// Most frequent value; the earliest one wins a tie
    pub top: Option<String>,
    pub freq: Option<usize>,
}

impl CategoricalSummary {
    pub fn of<'a>(cells: impl Iterator<Item = &'a str>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        let mut count = 0;

        for cell in cells {
            count += 1;
            let n = counts.entry(cell).or_insert(0);
            if *n == 0 {
                order.push(cell);
            }
            *n += 1;
        }

        // max_by_key keeps the last maximum, so walk first-seen order backwards
        let top = order.iter().rev().max_by_key(|v| counts[*v]).copied();

        Self {
            count,
            unique: order.len(),
            top: top.map(str::to_string),
            freq: top.map(|v| counts[v]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSummary {
    Numeric(NumericSummary),
    Categorical(CategoricalSummary),
}

/// The summary table of a [`Table`]: one summary per described column.
///
/// All summaries are of the same kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    columns: Vec<(String, ColumnSummary)>,
}

impl Description {
    pub fn of(table: &Table) -> Self {
        let numeric: Vec<(&Column, Vec<f64>)> = table
            .columns()
            .iter()
            .filter_map(|c| c.numeric_values().map(|v| (c, v)))
            .collect();

        let columns = if numeric.is_empty() {
            table
                .columns()
                .iter()
                .map(|c| {
                    let summary = CategoricalSummary::of(c.present());
                    (c.name.clone(), ColumnSummary::Categorical(summary))
                })
                .collect()
        } else {
            numeric
                .into_iter()
                .map(|(c, values)| {
                    let summary = NumericSummary::of(&values);
                    (c.name.clone(), ColumnSummary::Numeric(summary))
                })
                .collect()
        };

        Self { columns }
    }

    pub fn columns(&self) -> &[(String, ColumnSummary)] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn numeric(&self, name: &str) -> Option<&NumericSummary> {
        match self.get(name) {
            Some(ColumnSummary::Numeric(s)) => Some(s),
            _ => None,
        }
    }

    pub fn categorical(&self, name: &str) -> Option<&CategoricalSummary> {
        match self.get(name) {
            Some(ColumnSummary::Categorical(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.columns.first(), Some((_, ColumnSummary::Numeric(_))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_take_precedence() {
        let table = Table::from_csv_str("t.csv", "name,score\nann,1\nbob,3\ncy,5\n").unwrap();
        let description = table.describe();
        assert_eq!(description.columns().len(), 1);
        assert!(description.is_numeric());
        assert!(description.get("name").is_none());

        let score = description.numeric("score").unwrap();
        assert_eq!(score.count, 3);
        assert_eq!(score.mean, 3.0);
        assert_eq!(score.std, 2.0);
        assert_eq!(score.q25, 2.0);
        assert_eq!(score.q75, 4.0);
    }

    #[test]
    fn text_only_tables_are_described_categorically() {
        let table =
            Table::from_csv_str("t.csv", "city\nleeds\nyork\nleeds\nbath\nyork\n").unwrap();
        let city = table.describe().categorical("city").cloned().unwrap();
        assert_eq!(
            city,
            CategoricalSummary {
                count: 5,
                unique: 3,
                top: Some("leeds".to_string()),
                freq: Some(2),
            }
        );
    }

    #[test]
    fn ties_go_to_the_first_value_seen() {
        let summary = CategoricalSummary::of(["b", "a", "c"].into_iter());
        assert_eq!(summary.top.as_deref(), Some("b"));
        assert_eq!(summary.freq, Some(1));
    }

    #[test]
    fn all_missing_column_counts_as_numeric() {
        let table = Table::from_csv_str("t.csv", "empty,label\n,x\nNA,y\n").unwrap();
        let empty = table.describe().numeric("empty").copied().unwrap();
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan());
        assert!(empty.max.is_nan());
    }

    #[test]
    fn header_only_table_is_described_as_text() {
        let table = Table::from_csv_str("t.csv", "col1,col2\n").unwrap();
        let description = table.describe();
        assert!(!description.is_numeric());
        for column in ["col1", "col2"] {
            let summary = description.categorical(column).cloned().unwrap();
            assert_eq!(
                summary,
                CategoricalSummary {
                    count: 0,
                    unique: 0,
                    top: None,
                    freq: None,
                }
            );
        }

        let expected = "        col1  col2\n\
                        count      0     0\n\
                        unique     0     0\n\
                        top      NaN   NaN\n\
                        freq     NaN   NaN";
        assert_eq!(description.to_string(), expected);
    }

    #[test]
    fn empty_categorical_column_has_no_top() {
        let summary = CategoricalSummary::of(std::iter::empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.unique, 0);
        assert!(summary.top.is_none());
    }
}
