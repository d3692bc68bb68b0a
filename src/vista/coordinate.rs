use std::fmt;
use std::str::FromStr;

use crate::error::VistaError;

/// A genomic interval on a single chromosome, half-open `[begin, end)`.
///
/// The chromosome is kept as an opaque token ("chr7"); no naming scheme is
/// assumed beyond what the source data uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeInterval {
    pub chrom: String,
    pub begin: u64,
    pub end: u64,
}

impl FromStr for GenomeInterval {
    type Err = VistaError;

    /// Parse the `CHROM:BEGIN-END` form used in VISTA record headers.
    /// Exactly one `:` and exactly one `-` after it are required.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || VistaError::MalformedCoordinates(text.to_string());
        let (chrom, span) = text.split_once(':').ok_or_else(malformed)?;
        if span.contains(':') {
            return Err(malformed());
        }
        let (begin, end) = span.split_once('-').ok_or_else(malformed)?;
        if end.contains('-') {
            return Err(malformed());
        }
        let begin = begin.parse().map_err(|_| malformed())?;
        let end = end.parse().map_err(|_| malformed())?;
        Ok(GenomeInterval {
            chrom: chrom.to_string(),
            begin,
            end,
        })
    }
}

impl fmt::Display for GenomeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.begin, self.end)
    }
}
