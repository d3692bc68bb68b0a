use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::export::write_enhancer_table;
use crate::uberon::UberonMap;
use crate::utils::cache::DataCache;
use crate::utils::liftover::{check_liftover, LiftoverTool, UcscLiftOver};
use crate::vista::enhancer::Enhancer;
use crate::vista::lifted::{read_lifted_bed, read_unlifted_lines, LiftoverReport};
use crate::vista::parser::extract_positive_enhancers;

pub fn run(
    output_file: String,
    bed_dir: String,
    vista_file: Option<String>,
    liftover_bin: Option<String>,
    chain_file: Option<String>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let cache = DataCache::new(config)?;

    let vista_path = match vista_file {
        Some(path) => PathBuf::from(path),
        None => cache.fetch_vista_dump(force)?,
    };

    let summary = extract_positive_enhancers(BufReader::new(File::open(&vista_path)?))?;
    println!(
        "Extracted {} positive human enhancers ({} negative records skipped)",
        summary.n_positive, summary.n_negative
    );
    for enhancer in summary.enhancers.iter().take(5) {
        println!("  {}", enhancer);
    }

    let bed_dir = PathBuf::from(bed_dir);
    fs::create_dir_all(&bed_dir)?;
    let bed4_path = bed_dir.join("vista-hg19.bed");
    let lifted_path = bed_dir.join("vista-hg38.bed");
    let unlifted_path = bed_dir.join("unlifted.bed");

    if force || !bed4_path.exists() {
        write_bed4(&bed4_path, &summary.enhancers)?;
    } else {
        println!(
            "Reusing existing {} (pass --force to rewrite it)",
            bed4_path.display()
        );
    }

    let binary = match liftover_bin {
        Some(path) => PathBuf::from(path),
        None => cache.fetch_liftover_binary(force)?,
    };
    let chain = match chain_file {
        Some(path) => PathBuf::from(path),
        None => cache.fetch_chain_file(force)?,
    };
    check_liftover(&binary)?;
    let tool = UcscLiftOver::new(binary, chain);
    tool.lift(&bed4_path, &lifted_path, &unlifted_path)?;

    let lifted = read_lifted_bed(&lifted_path)?;
    let rejects = read_unlifted_lines(&unlifted_path)?;
    for line in &rejects {
        eprintln!("Warning: could not lift over: {}", line);
    }
    let report = LiftoverReport::tally(&lifted, rejects.len());
    if report.n_unlifted == 0 {
        println!("All {} enhancers lifted over", report.n_lifted);
    } else {
        println!(
            "Lifted over {} enhancers, {} could not be mapped",
            report.n_lifted, report.n_unlifted
        );
    }
    println!("Found {} distinct tissue tokens", report.tissue_tokens.len());

    let output_path = PathBuf::from(&output_file);
    if output_path.exists() && !force {
        return Err(format!(
            "{} already exists; pass --force to overwrite it",
            output_file
        )
        .into());
    }
    let vocabulary = UberonMap::new();
    write_enhancer_table(&output_path, &lifted, &vocabulary)?;
    println!("Wrote {} annotated enhancers to {}", lifted.len(), output_file);

    Ok(())
}

fn write_bed4(path: &Path, enhancers: &[Enhancer]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    for enhancer in enhancers {
        writeln!(writer, "{}", enhancer.bed4_line())?;
    }
    writer.flush()?;
    Ok(())
}
