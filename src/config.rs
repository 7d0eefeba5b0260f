use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Error, Result, BASE_URL, DELAY_SECS, FIRST_DAY, LAST_DAY, OUTPUT_DIR};

/// Everything the fetch loop needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub year: String,
    pub session: String,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub days: RangeInclusive<u8>,
    pub delay: Duration,
    /// Don't request days whose input file already has content.
    pub skip_existing: bool,
}

impl Config {
    /// Builds a config with the default output dir, host, day range and delay.
    pub fn new(year: impl Into<String>, session: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            session: session.into(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            base_url: BASE_URL.to_string(),
            days: FIRST_DAY..=LAST_DAY,
            delay: Duration::from_secs(DELAY_SECS),
            skip_existing: false,
        }
    }

    /// Reads the year and session files. Either one missing fails the whole run.
    pub async fn load(year_file: impl AsRef<Path>, session_file: impl AsRef<Path>) -> Result<Self> {
        let year = read_trimmed(year_file.as_ref()).await?;
        let session = read_trimmed(session_file.as_ref()).await?;
        Ok(Self::new(year, session))
    }
}

async fn read_trimmed(path: &Path) -> Result<String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(contents.trim().to_string())
}
