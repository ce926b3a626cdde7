//! In-memory tables parsed from comma-separated text.
//!
//! A [`Table`] keeps every cell as text and decides per column whether
//! the column is numeric when it is described.

mod describe;
mod render;
pub mod stats;

pub use describe::{CategoricalSummary, ColumnSummary, Description, NumericSummary};

use std::collections::HashMap;
use std::io::Read;

use crate::error::{Error, Result};

/// Cell values treated as missing, matching common CSV tooling.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One named column of raw cells; `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Option<String>>,
}

impl Column {
    /// Non-missing cells parsed as floats, or `None` for a text column:
    /// one without rows, or with a cell that is not a number.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        if self.cells.is_empty() {
            return None;
        }
        self.present()
            .map(|cell| cell.trim().parse::<f64>().ok())
            .collect()
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric_values().is_some()
    }

    /// Non-missing cells, in row order
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(|c| c.as_deref())
    }
}

/// A table with named columns and a common row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Read a whole entry and parse it; `name` labels parse errors.
    ///
    /// # Errors
    ///
    /// Read failures keep their own error; malformed text yields
    /// [`Error::Parse`].
    pub fn from_reader<R: Read>(name: &str, mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(Error::from_io)?;
        let text = String::from_utf8(bytes).map_err(|e| Error::parse(name, e))?;
        Self::from_csv_str(name, &text)
    }

    /// Parse comma-separated text with a header row.
    pub fn from_csv_str(name: &str, text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = rdr.headers().map_err(|e| Error::parse(name, e))?.clone();
        if headers.is_empty() {
            return Err(Error::parse(name, "no columns to parse from file"));
        }

        let mut columns: Vec<Column> = column_names(headers.iter())
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();

        let mut rows = 0;
        for record in rdr.records() {
            let record = record.map_err(|e| Error::parse(name, e))?;
            if record.len() > columns.len() {
                let line = record.position().map_or(0, |p| p.line());
                return Err(Error::parse(
                    name,
                    format!(
                        "expected {} fields in line {line}, saw {}",
                        columns.len(),
                        record.len()
                    ),
                ));
            }

            for (i, column) in columns.iter_mut().enumerate() {
                let cell = record
                    .get(i)
                    .filter(|v| !MISSING_MARKERS.contains(v))
                    .map(str::to_string);
                column.cells.push(cell);
            }
            rows += 1;
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Summary statistics for this table.
    ///
    /// When at least one column is numeric only the numeric columns are
    /// described; otherwise every column is described categorically.
    pub fn describe(&self) -> Description {
        Description::of(self)
    }
}

/// Header names made unique: blanks become `Unnamed: <i>` and repeats
/// get a `.1`, `.2`, ... suffix.
fn column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for (i, header) in headers.enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {i}")
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        while let Some(count) = seen.get_mut(&name) {
            *count += 1;
            name = format!("{base}.{count}");
        }
        seen.insert(name.clone(), 0);
        names.push(name);
    }

    names
}
