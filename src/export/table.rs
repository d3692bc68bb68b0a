use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::VistaError;
use crate::uberon::UberonMap;
use crate::vista::lifted::LiftedEnhancer;

const HEADER: [&str; 5] = ["name", "chr", "begin", "end", "tissues"];

/// Write the final tissue-annotated enhancer table.
///
/// Every tissue token must resolve against the vocabulary; rows are built
/// before the file is created so an unmapped token aborts the run without
/// leaving a partial table behind.
pub fn write_enhancer_table(
    path: &Path,
    enhancers: &[LiftedEnhancer],
    vocabulary: &UberonMap,
) -> Result<(), VistaError> {
    let mut rows = Vec::with_capacity(enhancers.len());
    for enhancer in enhancers {
        let terms = enhancer
            .tissues
            .iter()
            .map(|token| vocabulary.resolve(token).map(|term| term.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(format!(
            "{}\t{}\t{}\t{}\t{}",
            enhancer.name,
            enhancer.interval.chrom,
            enhancer.interval.begin,
            enhancer.interval.end,
            terms.join(";")
        ));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", HEADER.join("\t"))?;
    for row in rows {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()?;
    Ok(())
}
