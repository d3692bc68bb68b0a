use std::path::Path;

use crate::uberon::UberonMap;
use crate::vista::lifted::{read_lifted_bed, LiftoverReport};

pub fn run(bed_file: String) -> Result<(), Box<dyn std::error::Error>> {
    let lifted = read_lifted_bed(Path::new(&bed_file))?;
    let report = LiftoverReport::tally(&lifted, 0);
    let vocabulary = UberonMap::new();

    println!(
        "{} records, {} distinct tissue tokens",
        report.n_lifted,
        report.tissue_tokens.len()
    );
    for token in &report.tissue_tokens {
        let term = vocabulary.resolve(token)?;
        println!("  {}\t{}", token, term);
    }

    Ok(())
}
