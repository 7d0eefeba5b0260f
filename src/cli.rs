//! Command-line arguments. Every option has a default, so running the binary
//! with no arguments fetches days 1 through 31 into `./input`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::{Config, Result, BASE_URL, DELAY_SECS, LAST_DAY, OUTPUT_DIR, SESSION_FILE, YEAR_FILE};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// File holding the year to download, e.g. `2023`
    #[arg(long, default_value = YEAR_FILE)]
    pub year_file: PathBuf,

    /// File holding the session cookie value
    #[arg(long, default_value = SESSION_FILE)]
    pub session_file: PathBuf,

    /// Directory the `NN.txt` inputs are written to
    #[arg(short, long, default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Scheme and host of the puzzle site
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Only fetch this day. If not supplied, all days are fetched.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=LAST_DAY as i64))]
    pub day: Option<u8>,

    /// Seconds to wait after each successful download
    #[arg(long, default_value_t = DELAY_SECS)]
    pub delay_secs: u64,

    /// Don't download days whose input file is already non-empty
    #[arg(long)]
    pub skip_existing: bool,
}

impl Cli {
    /// Reads the year and session files and applies the remaining options on top.
    pub async fn into_config(self) -> Result<Config> {
        let mut config = Config::load(&self.year_file, &self.session_file).await?;
        config.output_dir = self.output_dir;
        config.base_url = self.base_url;
        if let Some(day) = self.day {
            config.days = day..=day;
        }
        config.delay = Duration::from_secs(self.delay_secs);
        config.skip_existing = self.skip_existing;
        Ok(config)
    }
}
