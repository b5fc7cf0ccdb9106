use std::path::Path;

use tracing::{info, warn};

use crate::constants::{CODE_COLUMN, COUNTRY_COLUMN, EXCLUDED_ENTITIES};
use crate::error::{PrepError, Result};
use crate::lookup::resolve_country_code;
use crate::types::CountryResolver;

/// Outcome counters for a normalizer run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub rows_in: usize,
    pub rows_dropped: usize,
    pub rows_out: usize,
    pub unresolved: usize,
}

/// Cleans a raw emissions CSV: drops rows naming an aggregate entity and
/// resolves each surviving country name to an alpha-3 code.
///
/// The output keeps the input's exact column set and order. Codes are
/// written into the existing `Code` column; when the input has no such
/// column the stage only filters. Unresolvable names are not errors: the
/// row is kept with an empty code and a warning is logged.
pub fn normalize_file(
    input: &Path,
    output: &Path,
    resolver: &dyn CountryResolver,
) -> Result<NormalizeReport> {
    let mut reader = csv::Reader::from_path(input)?;
    let headers = reader.headers()?.clone();

    let country_idx = headers
        .iter()
        .position(|h| h == COUNTRY_COLUMN)
        .ok_or_else(|| PrepError::MissingColumn(COUNTRY_COLUMN.to_string()))?;
    let code_idx = headers.iter().position(|h| h == CODE_COLUMN);
    if code_idx.is_none() {
        warn!("input has no {} column; filtering only", CODE_COLUMN);
    }

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(&headers)?;

    let mut report = NormalizeReport::default();
    for row in reader.records() {
        let record = row?;
        report.rows_in += 1;

        let country = record
            .get(country_idx)
            .unwrap_or_default()
            .to_string();
        if EXCLUDED_ENTITIES.contains(country.as_str()) {
            report.rows_dropped += 1;
            continue;
        }

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if let Some(idx) = code_idx {
            match resolve_country_code(&country, resolver) {
                Some(code) => fields[idx] = code,
                None => {
                    report.unresolved += 1;
                    warn!(country = %country, "no alpha-3 code resolved; needs manual review");
                    fields[idx] = String::new();
                }
            }
        }

        writer.write_record(&fields)?;
        report.rows_out += 1;
    }
    writer.flush()?;

    info!(
        rows_in = report.rows_in,
        rows_dropped = report.rows_dropped,
        rows_out = report.rows_out,
        unresolved = report.unresolved,
        output = %output.display(),
        "normalize finished"
    );
    Ok(report)
}
