use std::io::BufRead;

use crate::error::VistaError;
use crate::vista::enhancer::Enhancer;

const HUMAN_RECORD_PREFIX: &str = ">Human";
const BOILERPLATE_PREFIX: &str = "<pre>";

/// Outcome of scanning a VISTA export: the positive human enhancers in file
/// order, plus the record counts for reporting.
#[derive(Debug, Default)]
pub struct ExtractionSummary {
    pub enhancers: Vec<Enhancer>,
    pub n_positive: usize,
    pub n_negative: usize,
}

/// Scan the raw VISTA flat-text export and build one [`Enhancer`] per human
/// record not flagged `negative`. Negative records carry no tissue
/// annotations and are only counted. Mouse records are ignored entirely.
///
/// Record lines look like
/// `>Human|chr7:21003280-21003750|element 110|positive|forebrain[4/4]`,
/// with the first line of the dump carrying a `<pre>` boilerplate prefix.
pub fn extract_positive_enhancers<R: BufRead>(reader: R) -> Result<ExtractionSummary, VistaError> {
    let mut summary = ExtractionSummary::default();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_prefix(BOILERPLATE_PREFIX).unwrap_or(&line);
        if !line.starts_with(HUMAN_RECORD_PREFIX) {
            continue;
        }
        let fields: Vec<&str> = line.trim_end().split('|').collect();
        if fields.len() < 4 {
            return Err(VistaError::MalformedRecord(line.to_string()));
        }
        let coords = fields[1].trim();
        let name = fields[2].trim();
        let status = fields[3].trim();
        if status == "negative" {
            summary.n_negative += 1;
            continue;
        }
        // Any other status ("positive" in every dump seen so far) is treated
        // as a positive record and must carry at least one tissue field.
        summary.n_positive += 1;
        if fields.len() < 5 {
            return Err(VistaError::MissingTissues(line.to_string()));
        }
        let tissues = fields[4..].iter().map(|t| canonical_tissue_token(t)).collect();
        summary.enhancers.push(Enhancer::new(coords, name, tissues)?);
    }
    Ok(summary)
}

/// Canonical lookup form of a tissue label: whitespace-trimmed, embedded
/// spaces removed, parenthesized qualifiers flattened with an underscore,
/// e.g. `hindbrain (rhombencephalon)` becomes `hindbrain_rhombencephalon`.
pub fn canonical_tissue_token(raw: &str) -> String {
    raw.trim().replace(' ', "").replace('(', "_").replace(')', "")
}
