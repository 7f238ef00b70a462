//! Text readers for interaction tables.
//!
//! Both formats are whitespace-separated numbers, one row per line. Blank
//! lines and lines starting with `#` are ignored.
//!
//! **Rate tables** have two columns: `log10(gamma)` and the interaction
//! rate in units of 1/Mpc.
//!
//! **CDF tables** start with one row listing the `log10(eps / J)`
//! breakpoints. Each following row is `log10(gamma)` followed by one CDF
//! value per breakpoint.
//!
//! Parsed arrays are handed to [`RateTable::new`] and [`CdfTable::new`],
//! so structural validation happens in one place.

use std::fs;
use std::path::Path;

use radiant_core::units::MPC;
use radiant_interp::{CdfTable, RateTable, TableError};

/// Unit of the rate column in rate table files.
pub const RATE_UNIT: f64 = 1.0 / MPC;

/// Read a rate table file.
///
/// # Errors
///
/// [`TableError::Io`] if the file cannot be read, [`TableError::Parse`]
/// for malformed lines, or any validation error from [`RateTable::new`].
pub fn read_rate_table(path: &Path) -> Result<RateTable, TableError> {
    let text = read(path)?;
    parse_rate_table(&text, &path.display().to_string())
}

/// Read a CDF table file.
///
/// # Errors
///
/// As [`read_rate_table`], with validation by [`CdfTable::new`].
pub fn read_cdf_table(path: &Path) -> Result<CdfTable, TableError> {
    let text = read(path)?;
    parse_cdf_table(&text, &path.display().to_string())
}

/// Parse rate table text. `origin` names the source in errors.
///
/// # Errors
///
/// See [`read_rate_table`].
pub fn parse_rate_table(text: &str, origin: &str) -> Result<RateTable, TableError> {
    let mut lg = Vec::new();
    let mut rates = Vec::new();
    for (line, content) in data_lines(text) {
        let row = parse_row(content, line, origin)?;
        if row.len() != 2 {
            return Err(parse_error(
                origin,
                line,
                format!("expected 2 columns, found {}", row.len()),
            ));
        }
        lg.push(row[0]);
        rates.push(row[1] * RATE_UNIT);
    }
    RateTable::new(lg, rates)
}

/// Parse CDF table text. `origin` names the source in errors.
///
/// # Errors
///
/// See [`read_cdf_table`].
pub fn parse_cdf_table(text: &str, origin: &str) -> Result<CdfTable, TableError> {
    let mut lines = data_lines(text);
    let lgeps = match lines.next() {
        Some((line, content)) => parse_row(content, line, origin)?,
        None => return Err(parse_error(origin, 0, "missing log10(eps) axis row".into())),
    };

    let mut lg = Vec::new();
    let mut values = Vec::with_capacity(lgeps.len() * 16);
    for (line, content) in lines {
        let row = parse_row(content, line, origin)?;
        if row.len() != lgeps.len() + 1 {
            return Err(parse_error(
                origin,
                line,
                format!("expected {} columns, found {}", lgeps.len() + 1, row.len()),
            ));
        }
        lg.push(row[0]);
        values.extend_from_slice(&row[1..]);
    }
    CdfTable::new(lg, lgeps, values)
}

fn read(path: &Path) -> Result<String, TableError> {
    fs::read_to_string(path).map_err(|e| TableError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Non-comment, non-blank lines with their 1-based line numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
}

fn parse_row(content: &str, line: usize, origin: &str) -> Result<Vec<f64>, TableError> {
    content
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| parse_error(origin, line, format!("'{token}': {e}")))
        })
        .collect()
}

fn parse_error(origin: &str, line: usize, reason: String) -> TableError {
    TableError::Parse {
        path: origin.to_string(),
        line,
        reason,
    }
}
