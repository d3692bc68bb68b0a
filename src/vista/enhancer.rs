use std::fmt;

use crate::error::VistaError;
use crate::vista::coordinate::GenomeInterval;

/// A positive human enhancer record extracted from the VISTA dump.
///
/// Immutable once constructed. Tissue tokens keep the order they appeared in
/// the source record.
#[derive(Debug, Clone)]
pub struct Enhancer {
    interval: GenomeInterval,
    name: String,
    tissues: Vec<String>,
}

impl Enhancer {
    /// Build an enhancer from the coordinate text and fields of a VISTA
    /// record. The name must not contain a tab, which is reserved as the
    /// BED4 column separator.
    pub fn new(coords: &str, name: &str, tissues: Vec<String>) -> Result<Self, VistaError> {
        if name.contains('\t') {
            return Err(VistaError::TabInName(name.to_string()));
        }
        let interval = coords.parse()?;
        Ok(Enhancer {
            interval,
            name: name.to_string(),
            tissues,
        })
    }

    pub fn interval(&self) -> &GenomeInterval {
        &self.interval
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tissues(&self) -> &[String] {
        &self.tissues
    }

    /// One line of BED4 input for liftOver. The name column carries the
    /// tissue list as `NAME(t1;t2)`; spaces in the name become underscores
    /// because liftOver treats any whitespace as a column separator.
    pub fn bed4_line(&self) -> String {
        let name = self.name.replace(' ', "_");
        format!(
            "{}\t{}\t{}\t{}({})",
            self.interval.chrom,
            self.interval.begin,
            self.interval.end,
            name,
            self.tissues.join(";")
        )
    }
}

impl fmt::Display for Enhancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.interval, self.tissues.join(";"))
    }
}
