//! Delimited-text parsing.
//!
//! The first line is the header. Each following line is zipped positionally
//! against it: short lines lose their trailing keys, long lines have the
//! excess cells dropped. Quoting follows RFC 4180 (`"` quote, `""` escape).
//!
//! Header cells are trimmed of surrounding whitespace, as the ingest side
//! does before keying rows; data values are kept verbatim.

use csv::{ReaderBuilder, Trim};

use crate::error::ParseError;
use crate::household::{FamilyRecord, MemberRecord};
use crate::record::Record;

/// UTF-8 BOM bytes.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Parse raw CSV bytes into ordered records.
///
/// Empty input and header-only input both yield an empty `Vec`.
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>, ParseError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(data);

    let headers = reader.headers().map_err(ParseError::Header)?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| ParseError::Record {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        records.push(headers.iter().zip(row.iter()).collect::<Record>());
    }

    Ok(records)
}

/// Parse the families dataset.
pub fn parse_families(data: &[u8]) -> Result<Vec<FamilyRecord>, ParseError> {
    Ok(parse_records(data)?.into_iter().map(FamilyRecord::from).collect())
}

/// Parse the family-members dataset.
pub fn parse_members(data: &[u8]) -> Result<Vec<MemberRecord>, ParseError> {
    Ok(parse_records(data)?.into_iter().map(MemberRecord::from).collect())
}
