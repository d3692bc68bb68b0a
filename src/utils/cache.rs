use chrono::{Datelike, Local};
use directories::ProjectDirs;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

const VISTA_URL: &str = "https://enhancer.lbl.gov/cgi-bin/imagedb3.pl?page_size=100;show=1;search.result=yes;page=1;form=search;search.form=no;action=search;search.sequence=1";
const LIFTOVER_URL: &str = "http://hgdownload.cse.ucsc.edu/admin/exe/linux.x86_64/liftOver";
const CHAIN_URL: &str = "http://hgdownload.cse.ucsc.edu/goldenPath/hg19/liftOver/hg19ToHg38.over.chain.gz";

/// On-disk cache for the three upstream artifacts the pipeline needs: the
/// VISTA flat-text export, the UCSC liftOver binary, and the hg19→hg38
/// chain file.
pub struct DataCache {
    cache_dir: PathBuf,
    config: Config,
}

impl DataCache {
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let proj_dirs = ProjectDirs::from("com", "vistatools", "vista-tools")
            .ok_or("Failed to determine project directories")?;
        let cache_dir = proj_dirs.cache_dir().to_path_buf();
        fs::create_dir_all(&cache_dir)?;

        Ok(DataCache { cache_dir, config })
    }

    /// The VISTA export grows as curation proceeds, so cache it per ISO week.
    pub fn fetch_vista_dump(&self, force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let now = Local::now();
        let path = self
            .cache_dir
            .join(format!("vista-hg19_{}_w{:02}.txt", now.year(), now.iso_week().week()));
        if force {
            let _ = fs::remove_file(&path);
        }
        if !path.exists() {
            download(
                VISTA_URL,
                &path,
                self.config.download_timeout,
                "Downloading VISTA enhancer export...",
            )?;
        }
        Ok(path)
    }

    pub fn fetch_liftover_binary(&self, force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.cache_dir.join("liftOver");
        if force {
            let _ = fs::remove_file(&path);
        }
        if !self.is_fresh(&path) {
            download(
                LIFTOVER_URL,
                &path,
                self.config.download_timeout,
                "Downloading UCSC liftOver binary...",
            )?;
            make_executable(&path)?;
        }
        Ok(path)
    }

    pub fn fetch_chain_file(&self, force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.cache_dir.join("hg19ToHg38.over.chain.gz");
        if force {
            let _ = fs::remove_file(&path);
        }
        if !self.is_fresh(&path) {
            download(
                CHAIN_URL,
                &path,
                self.config.download_timeout,
                "Downloading hg19ToHg38 chain file...",
            )?;
        }
        Ok(path)
    }

    fn is_fresh(&self, path: &Path) -> bool {
        if !path.exists() {
            return false;
        }
        if let Ok(metadata) = fs::metadata(path) {
            if let Some(modified) = metadata.modified().ok() {
                if let Ok(elapsed) = modified.elapsed() {
                    return elapsed.as_secs() < self.config.cache_max_age_days * 24 * 3600;
                }
            }
        }
        false
    }
}

fn download(
    url: &str,
    dest: &Path,
    timeout_secs: u64,
    message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    progress.set_message(message.to_string());

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()?;
    let resp = client.get(url).send()?;
    if !resp.status().is_success() {
        progress.finish_and_clear();
        return Err(format!("Failed to download (status {}): {}", resp.status(), url).into());
    }
    let bytes = resp.bytes()?;
    if bytes.len() < 100 {
        // Likely an error page or empty payload; do not cache it
        progress.finish_and_clear();
        return Err(format!(
            "Downloaded file is unexpectedly small ({} bytes): {}",
            bytes.len(),
            url
        )
        .into());
    }
    fs::write(dest, &bytes)?;
    progress.finish_with_message(format!("Cached {}", dest.display()));
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
