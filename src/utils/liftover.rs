use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::VistaError;

/// Narrow interface over the external coordinate-liftover step, so tests can
/// substitute a fake instead of invoking a real binary.
pub trait LiftoverTool {
    /// Lift `bed4_in` into `lifted_out`, writing records that could not be
    /// mapped to `unlifted_out`. Both output files exist after a successful
    /// return.
    fn lift(&self, bed4_in: &Path, lifted_out: &Path, unlifted_out: &Path)
        -> Result<(), VistaError>;
}

/// The UCSC `liftOver` command-line tool driven with a chain file.
pub struct UcscLiftOver {
    binary: PathBuf,
    chain: PathBuf,
}

impl UcscLiftOver {
    pub fn new(binary: PathBuf, chain: PathBuf) -> Self {
        UcscLiftOver { binary, chain }
    }
}

impl LiftoverTool for UcscLiftOver {
    fn lift(
        &self,
        bed4_in: &Path,
        lifted_out: &Path,
        unlifted_out: &Path,
    ) -> Result<(), VistaError> {
        let status = Command::new(&self.binary)
            .arg(bed4_in)
            .arg(&self.chain)
            .arg(lifted_out)
            .arg(unlifted_out)
            .status()?;
        if !status.success() {
            return Err(VistaError::LiftoverFailed(status));
        }
        Ok(())
    }
}

/// Confirm the liftOver binary can be spawned at all before the pipeline
/// depends on it. Invoked bare it prints usage and exits non-zero, which is
/// fine here; only a failed spawn is an error.
pub fn check_liftover(binary: &Path) -> Result<()> {
    Command::new(binary)
        .output()
        .with_context(|| {
            format!(
                "{} not found or not executable. Delete it to re-download a copy from UCSC",
                binary.display()
            )
        })
        .map(|_| ())
}
