use thiserror::Error;

/// Errors produced while extracting, lifting, and annotating VISTA enhancers.
#[derive(Debug, Error)]
pub enum VistaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Parse failures. These are always fatal: downstream stages assume the
    // text they read is structurally 1:1 with what was written.
    #[error("malformed coordinates '{0}': expected CHROM:BEGIN-END")]
    MalformedCoordinates(String),

    #[error("malformed record line, expected at least 4 pipe-delimited fields: {0}")]
    MalformedRecord(String),

    #[error("record name contains a tab character: {0}")]
    TabInName(String),

    #[error("record is not negative but carries no tissue annotations: {0}")]
    MissingTissues(String),

    #[error("BED4 line does not have exactly 4 tab-separated columns: {0}")]
    MalformedBedLine(String),

    #[error("BED4 name field carries no tissue list: {0}")]
    MalformedNameField(String),

    // A miss here means the curated vocabulary is stale relative to the
    // VISTA data, not that the input is wrong.
    #[error("unmapped tissue token '{0}': the curated vocabulary needs an entry for it")]
    UnmappedTissue(String),

    #[error("liftOver exited with {0}")]
    LiftoverFailed(std::process::ExitStatus),
}
