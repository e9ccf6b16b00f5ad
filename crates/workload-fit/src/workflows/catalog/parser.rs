use std::io::Read;

use crate::workflows::suitability::AttributeRecord;

/// Reads a headered CSV export into flat attribute records, one per data row.
pub(crate) fn parse_csv_records<R: Read>(reader: R) -> Result<Vec<AttributeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let record = headers
            .iter()
            .zip(row.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect::<AttributeRecord>();
        records.push(record);
    }

    Ok(records)
}

/// Reads a JSON array of objects into flat attribute records.
pub(crate) fn parse_json_records<R: Read>(
    reader: R,
) -> Result<Vec<AttributeRecord>, serde_json::Error> {
    serde_json::from_reader(reader)
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}
