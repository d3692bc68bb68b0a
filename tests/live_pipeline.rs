use std::fs::File;
use std::io::{BufReader, Write};

use vista_tools::config::Config;
use vista_tools::uberon::UberonMap;
use vista_tools::utils::cache::DataCache;
use vista_tools::utils::liftover::{LiftoverTool, UcscLiftOver};
use vista_tools::vista::lifted::{read_lifted_bed, read_unlifted_lines, LiftoverReport};
use vista_tools::vista::parser::extract_positive_enhancers;

// End-to-end run against the live VISTA export and the real UCSC liftOver
// binary. Downloads all three artifacts on first run and caches them; marked
// ignored by default.
//
// Run with:
//   cargo test --test live_pipeline -- --ignored --nocapture

#[test]
#[ignore]
fn live_extract_and_liftover() {
    let cache = DataCache::new(Config::default()).expect("init data cache");
    let dump = cache.fetch_vista_dump(false).expect("fetch VISTA export");
    let binary = cache.fetch_liftover_binary(false).expect("fetch liftOver");
    let chain = cache.fetch_chain_file(false).expect("fetch chain file");

    let summary = extract_positive_enhancers(BufReader::new(File::open(&dump).unwrap()))
        .expect("parse VISTA export");
    assert!(
        summary.n_positive > 1000,
        "expected >1000 positive human enhancers, got {}",
        summary.n_positive
    );

    let dir = tempfile::tempdir().unwrap();
    let bed4_path = dir.path().join("vista-hg19.bed");
    let lifted_path = dir.path().join("vista-hg38.bed");
    let unlifted_path = dir.path().join("unlifted.bed");

    let mut bed4 = File::create(&bed4_path).unwrap();
    for enhancer in &summary.enhancers {
        writeln!(bed4, "{}", enhancer.bed4_line()).unwrap();
    }
    drop(bed4);

    UcscLiftOver::new(binary, chain)
        .lift(&bed4_path, &lifted_path, &unlifted_path)
        .expect("run liftOver");

    let lifted = read_lifted_bed(&lifted_path).expect("read lifted BED4");
    let rejects = read_unlifted_lines(&unlifted_path).expect("read rejects");
    let report = LiftoverReport::tally(&lifted, rejects.len());
    eprintln!(
        "lifted {} enhancers, {} unlifted, {} distinct tissues",
        report.n_lifted, report.n_unlifted, report.tissue_tokens.len()
    );
    assert_eq!(report.n_lifted + report.n_unlifted, summary.enhancers.len());

    // Every observed token must be covered by the curated vocabulary
    let vocabulary = UberonMap::new();
    for token in &report.tissue_tokens {
        vocabulary
            .resolve(token)
            .unwrap_or_else(|e| panic!("stale vocabulary: {}", e));
    }
}
