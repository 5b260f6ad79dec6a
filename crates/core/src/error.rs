/// Errors raised while turning raw delimited text into records.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The header line could not be decoded.
    #[error("Malformed CSV header: {0}")]
    Header(#[source] csv::Error),

    /// A data line could not be decoded.
    #[error("Malformed CSV at line {line}: {source}")]
    Record {
        /// 1-based line number reported by the reader (0 when unknown).
        line: u64,
        #[source]
        source: csv::Error,
    },
}
