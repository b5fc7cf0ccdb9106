use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::constants::{CODE_COLUMN, COUNTRY_COLUMN, EMISSIONS_COLUMN, YEAR_COLUMN};
use crate::error::{PrepError, Result};
use crate::types::EmissionRecord;

/// Outcome counters for an augmenter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentReport {
    pub rows_in: usize,
    pub distinct_pairs: usize,
    pub rows_added: usize,
    pub rows_out: usize,
}

/// Reads a cleaned emissions CSV into typed records, failing fast when an
/// expected column is absent.
pub fn read_records(path: &Path) -> Result<Vec<EmissionRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for expected in [COUNTRY_COLUMN, CODE_COLUMN, YEAR_COLUMN, EMISSIONS_COLUMN] {
        if !headers.iter().any(|h| h == expected) {
            return Err(PrepError::MissingColumn(expected.to_string()));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Distinct (country, code) pairs in first-occurrence order, so synthetic
/// row order is deterministic for a given input.
pub fn distinct_pairs(records: &[EmissionRecord]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    for record in records {
        let pair = (record.country.clone(), record.code.clone());
        if seen.insert(pair.clone()) {
            pairs.push(pair);
        }
    }
    pairs
}

/// Generates one synthetic row per (pair, year), pair-major / year-minor,
/// with emissions drawn uniformly from `[0, max_emission)`.
pub fn synthesize_rows(
    pairs: &[(String, String)],
    years: &[i32],
    max_emission: f64,
    rng: &mut impl Rng,
) -> Vec<EmissionRecord> {
    let mut rows = Vec::with_capacity(pairs.len() * years.len());
    for (country, code) in pairs {
        for &year in years {
            let emissions = rng.gen_range(0.0..max_emission);
            rows.push(EmissionRecord::new(country.clone(), code.clone(), year, emissions));
        }
    }
    rows
}

/// Extends a cleaned emissions CSV with synthetic rows for `years`:
/// original rows first, generated rows after, same four-column schema.
pub fn augment_file(
    input: &Path,
    output: &Path,
    years: &[i32],
    max_emission: f64,
    rng: &mut impl Rng,
) -> Result<AugmentReport> {
    let records = read_records(input)?;
    let pairs = distinct_pairs(&records);
    let synthetic = synthesize_rows(&pairs, years, max_emission, rng);

    let report = AugmentReport {
        rows_in: records.len(),
        distinct_pairs: pairs.len(),
        rows_added: synthetic.len(),
        rows_out: records.len() + synthetic.len(),
    };

    let mut writer = csv::Writer::from_path(output)?;
    for record in records.iter().chain(synthetic.iter()) {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        rows_in = report.rows_in,
        distinct_pairs = report.distinct_pairs,
        rows_added = report.rows_added,
        output = %output.display(),
        "augment finished"
    );
    Ok(report)
}
