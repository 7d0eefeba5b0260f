use std::path::{Path, PathBuf};

use chrono::Local;
use reqwest::Client;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::request::{request_day, DayStatus};
use crate::{error_time, info_time, Config, Error, Result};

/// What happened to each day of a run that wasn't cut short.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: Vec<u8>,
    /// `(day, status code)` for responses that were neither 200, 400 nor 404.
    pub failed: Vec<(u8, u16)>,
    /// Only filled when `skip_existing` is set.
    pub skipped: Vec<u8>,
}

/// Two digit, zero padded day label used in file names and log lines.
pub fn day_label(day: u8) -> String {
    format!("{day:02}")
}

pub fn input_path(output_dir: &Path, day: u8) -> PathBuf {
    output_dir.join(format!("{}.txt", day_label(day)))
}

pub async fn process_days(config: &Config) -> Result<RunSummary> {
    let client = reqwest::Client::new();
    process_days_with(&client, config).await
}

/// Fetches every configured day in order, one request at a time.
/// A 400 or 404 stops the run with an error, any other non-200 just moves on to the next day.
pub async fn process_days_with(client: &Client, config: &Config) -> Result<RunSummary> {
    let start_time = Local::now();
    tokio::fs::create_dir_all(&config.output_dir).await?;

    let mut summary = RunSummary::default();
    for day in config.days.clone() {
        let tag = format!("[Y{}D{}]", config.year, day_label(day));
        let path = input_path(&config.output_dir, day);

        if has_content(&path).await {
            info_time!("[+]{tag} Input already exists. Skipping.");
            // Only skip when asked to.
            if config.skip_existing {
                summary.skipped.push(day);
                continue;
            }
        }

        info_time!("[+]{tag} Downloading...");
        let res = request_day(client, config, day).await?;

        match res.status {
            DayStatus::BadRequest => return Err(Error::SessionExpired { day }),
            DayStatus::NotFound => return Err(Error::DayUnavailable { day }),
            DayStatus::Other(code) => {
                error_time!(
                    "[-] Error getting input for day {day} (status code {code}). Expired session cookie or day input not yet available?"
                );
                summary.failed.push((day, code));
                continue;
            }
            DayStatus::Ok => {}
        }

        let mut file = File::create(&path).await?;
        file.write_all(res.body.as_bytes()).await?;
        file.flush().await?;
        summary.saved.push(day);
        info_time!(
            "[+]{tag} Successfully downloaded. Waiting {} secs for the next one...",
            config.delay.as_secs()
        );
        tokio::time::sleep(config.delay).await;
    }

    info_time!(
        start_time,
        "Year {}: {} saved, {} failed, {} skipped",
        config.year,
        summary.saved.len(),
        summary.failed.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

async fn has_content(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.len() > 0)
        .unwrap_or(false)
}
