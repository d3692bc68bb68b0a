use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::VistaError;
use crate::vista::coordinate::GenomeInterval;

/// An enhancer reconstructed from one line of liftOver's BED4 output.
///
/// Structurally equivalent to the [`Enhancer`](crate::vista::enhancer::Enhancer)
/// that was serialized, except the coordinates are on the target assembly and
/// the bracketed observation counts have been dropped from the tissue tokens.
#[derive(Debug, Clone)]
pub struct LiftedEnhancer {
    pub name: String,
    pub interval: GenomeInterval,
    pub tissues: Vec<String>,
}

impl LiftedEnhancer {
    /// Decode a lifted BED4 line. The name column is
    /// `NAME(tok1[c];tok2[c];...)`; underscores in NAME are restored to the
    /// spaces they replaced and each token is cut at its first `[`.
    pub fn parse_bed4_line(line: &str) -> Result<Self, VistaError> {
        let malformed = || VistaError::MalformedBedLine(line.to_string());
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            return Err(malformed());
        }
        let begin = fields[1].parse().map_err(|_| malformed())?;
        let end = fields[2].parse().map_err(|_| malformed())?;
        let interval = GenomeInterval {
            chrom: fields[0].to_string(),
            begin,
            end,
        };

        let name_field = fields[3];
        let open = name_field
            .find('(')
            .ok_or_else(|| VistaError::MalformedNameField(name_field.to_string()))?;
        let name = name_field[..open].replace('_', " ");
        let tissue_list = name_field[open + 1..].replace(')', "");
        let tissues = tissue_list
            .split(';')
            .map(|t| strip_observation_count(t).to_string())
            .collect();

        Ok(LiftedEnhancer {
            name,
            interval,
            tissues,
        })
    }
}

/// Drop the `[x/y]` observed-count suffix from a tissue token, if present.
fn strip_observation_count(token: &str) -> &str {
    match token.find('[') {
        Some(i) => &token[..i],
        None => token,
    }
}

/// Counts gathered from liftOver's two output files.
#[derive(Debug, Default)]
pub struct LiftoverReport {
    pub n_lifted: usize,
    pub n_unlifted: usize,
    pub tissue_tokens: BTreeSet<String>,
}

impl LiftoverReport {
    /// Tally the lifted records and the distinct canonical tissue tokens
    /// they carry.
    pub fn tally(lifted: &[LiftedEnhancer], n_unlifted: usize) -> Self {
        let mut tissue_tokens = BTreeSet::new();
        for enhancer in lifted {
            for token in &enhancer.tissues {
                tissue_tokens.insert(token.clone());
            }
        }
        LiftoverReport {
            n_lifted: lifted.len(),
            n_unlifted,
            tissue_tokens,
        }
    }
}

/// Read liftOver's target-assembly BED4 output back into structured records.
pub fn read_lifted_bed(path: &Path) -> Result<Vec<LiftedEnhancer>, VistaError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lifted = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        lifted.push(LiftedEnhancer::parse_bed4_line(&line)?);
    }
    Ok(lifted)
}

/// Read the records liftOver could not map. The rejects file interleaves
/// `#`-prefixed explanation lines with the original BED4 lines; only the
/// record lines are returned.
pub fn read_unlifted_lines(path: &Path) -> Result<Vec<String>, VistaError> {
    let reader = BufReader::new(File::open(path)?);
    let mut rejects = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        rejects.push(line);
    }
    Ok(rejects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn decodes_lifted_line_with_observation_count() {
        let e =
            LiftedEnhancer::parse_bed4_line("chr7\t21004280\t21004750\telement_110(forebrain[4/4])")
                .unwrap();
        assert_eq!(e.name, "element 110");
        assert_eq!(e.interval.to_string(), "chr7:21004280-21004750");
        assert_eq!(e.tissues, ["forebrain"]);
    }

    #[test]
    fn suffix_free_token_is_kept_whole() {
        let e = LiftedEnhancer::parse_bed4_line("chr1\t100\t200\telement_1(heart)").unwrap();
        assert_eq!(e.tissues, ["heart"]);
    }

    #[test]
    fn decodes_multiple_tissues_in_order() {
        let e = LiftedEnhancer::parse_bed4_line(
            "chr1\t100\t200\telement_1(neuraltube[12/12];hindbrain_rhombencephalon[12/12];limb[3/12])",
        )
        .unwrap();
        assert_eq!(e.tissues, ["neuraltube", "hindbrain_rhombencephalon", "limb"]);
    }

    #[test]
    fn round_trips_through_bed4_encoding() {
        use crate::vista::enhancer::Enhancer;

        let original = Enhancer::new(
            "chr7:21003280-21003750",
            "element 110",
            vec!["forebrain".to_string(), "neuraltube".to_string()],
        )
        .unwrap();
        let rebuilt = LiftedEnhancer::parse_bed4_line(&original.bed4_line()).unwrap();
        assert_eq!(rebuilt.name, original.name());
        assert_eq!(&rebuilt.interval, original.interval());
        assert_eq!(rebuilt.tissues, original.tissues());
    }

    #[test]
    fn wrong_column_count_is_fatal() {
        let err = LiftedEnhancer::parse_bed4_line("chr1\t100\t200").unwrap_err();
        assert!(matches!(err, VistaError::MalformedBedLine(_)));
    }

    #[test]
    fn name_field_without_tissue_list_is_fatal() {
        let err = LiftedEnhancer::parse_bed4_line("chr1\t100\t200\telement_1").unwrap_err();
        assert!(matches!(err, VistaError::MalformedNameField(_)));
    }

    #[test]
    fn tally_collects_distinct_tokens() {
        let lifted = vec![
            LiftedEnhancer::parse_bed4_line("chr1\t1\t2\ta(heart[1/2];limb[1/2])").unwrap(),
            LiftedEnhancer::parse_bed4_line("chr2\t3\t4\tb(heart[2/2])").unwrap(),
        ];
        let report = LiftoverReport::tally(&lifted, 1);
        assert_eq!(report.n_lifted, 2);
        assert_eq!(report.n_unlifted, 1);
        assert_eq!(
            report.tissue_tokens.iter().collect::<Vec<_>>(),
            ["heart", "limb"]
        );
    }

    #[test]
    fn unlifted_reader_skips_explanation_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unlifted.bed");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "#Deleted in new").unwrap();
        writeln!(file, "chr1\t100\t200\telement_1(heart)").unwrap();
        writeln!(file, "#Partially deleted in new").unwrap();
        writeln!(file, "chr2\t300\t400\telement_2(limb)").unwrap();
        drop(file);

        let rejects = read_unlifted_lines(&path).unwrap();
        assert_eq!(rejects.len(), 2);
        assert!(rejects[0].starts_with("chr1"));
    }
}
