//! Downloads the daily puzzle inputs for one year, one request at a time,
//! and stores each body as `<output dir>/<NN>.txt`.

pub mod cli;
pub mod config;
mod error;
mod macros;
pub mod process;
pub mod request;

pub use config::Config;
pub use error::{Error, Result};

pub const YEAR_FILE: &str = "year.txt";
pub const SESSION_FILE: &str = "session.txt";
pub const OUTPUT_DIR: &str = "input";
pub const BASE_URL: &str = "https://adventofcode.com";
pub const FIRST_DAY: u8 = 1;
pub const LAST_DAY: u8 = 31;
/// Pause after every successful download.
pub const DELAY_SECS: u64 = 10;
