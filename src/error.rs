use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading {}. Doesn't exist? {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[-] Error getting input for day {day} (status code 400). Expired session cookie?")]
    SessionExpired { day: u8 },
    #[error("[-] Error getting input for day {day} (status code 404). Day input not yet available?")]
    DayUnavailable { day: u8 },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
