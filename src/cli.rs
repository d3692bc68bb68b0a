use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract positive human VISTA enhancers, lift them hg19 -> hg38, and
    /// write the UBERON-annotated table
    Extract {
        /// Output file for the annotated enhancer table
        #[arg(short = 'o', long = "output", default_value = "hg38-vista-enhancers.tsv")]
        output_file: String,

        /// Directory for the intermediate BED4 files
        #[arg(long, default_value = ".")]
        bed_dir: String,

        /// Use a local VISTA export instead of downloading one
        #[arg(long)]
        vista_file: Option<String>,

        /// Use a local liftOver binary instead of the cached UCSC download
        #[arg(long)]
        liftover_bin: Option<String>,

        /// Use a local chain file instead of the cached UCSC download
        #[arg(long)]
        chain_file: Option<String>,

        /// Re-download cached artifacts and overwrite existing output files
        #[arg(long)]
        force: bool,
    },

    /// Resolve the distinct tissue tokens of a lifted BED4 file against the
    /// curated vocabulary
    Tissues {
        /// Lifted BED4 file
        bed_file: String,
    },
}
