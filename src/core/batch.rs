use crate::domain::model::Target;
use crate::utils::error::{ChartError, Result};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Read a batch table of `source_id ra dec` rows into targets, in file order.
///
/// The delimiter is auto-detected: a comma in the first data line selects CSV
/// parsing, otherwise fields are split on arbitrary whitespace. Blank lines
/// and `#` comments are skipped. A non-numeric first row is forgiven as a
/// header; any later malformed row aborts the whole batch.
pub fn read_targets(path: impl AsRef<Path>) -> Result<Vec<Target>> {
    let text = std::fs::read_to_string(path)?;
    parse_targets(&text)
}

pub fn parse_targets(text: &str) -> Result<Vec<Target>> {
    let comma_delimited = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .is_some_and(|line| line.contains(','));

    let rows = if comma_delimited {
        csv_rows(text)?
    } else {
        whitespace_rows(text)
    };

    let mut targets = Vec::with_capacity(rows.len());
    for (index, (line, fields)) in rows.iter().enumerate() {
        if fields.len() < 3 {
            return Err(ChartError::BatchRowError {
                line: *line,
                reason: format!(
                    "expected 3 columns (source_id ra dec), found {}",
                    fields.len()
                ),
            });
        }

        match (fields[1].parse::<f64>(), fields[2].parse::<f64>()) {
            (Ok(ra_deg), Ok(dec_deg)) => {
                targets.push(Target::new(fields[0].clone(), ra_deg, dec_deg));
            }
            // Only the very first row may be a column-name header.
            _ if index == 0 => continue,
            _ => {
                return Err(ChartError::BatchRowError {
                    line: *line,
                    reason: format!(
                        "ra/dec are not numeric ('{}', '{}')",
                        fields[1], fields[2]
                    ),
                });
            }
        }
    }

    Ok(targets)
}

fn whitespace_rows(text: &str) -> Vec<(usize, Vec<String>)> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let fields = line.split_whitespace().map(str::to_string).collect();
            Some((i + 1, fields))
        })
        .collect()
}

fn csv_rows(text: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(rows.len() + 1);
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        rows.push((line, fields));
    }
    Ok(rows)
}
