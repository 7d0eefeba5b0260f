use reqwest::{header::COOKIE, Client, StatusCode};

use crate::{Config, Result};

/// How the loop reacts to a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Ok,
    /// 400, usually an expired session cookie. Ends the run.
    BadRequest,
    /// 404, the day isn't unlocked yet. Ends the run.
    NotFound,
    /// Anything else: logged and the day is left alone.
    Other(u16),
}

impl From<StatusCode> for DayStatus {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => DayStatus::Ok,
            StatusCode::BAD_REQUEST => DayStatus::BadRequest,
            StatusCode::NOT_FOUND => DayStatus::NotFound,
            other => DayStatus::Other(other.as_u16()),
        }
    }
}

#[derive(Debug)]
pub struct DayResponse {
    pub status: DayStatus,
    pub body: String,
}

pub fn day_url(base_url: &str, year: &str, day: u8) -> String {
    format!("{}/{year}/day/{day}/input", base_url.trim_end_matches('/'))
}

/// Requests the input for `day`, sending the session as the `session` cookie.
/// The body is only read for a 200.
pub(crate) async fn request_day(client: &Client, config: &Config, day: u8) -> Result<DayResponse> {
    let res = client
        .get(day_url(&config.base_url, &config.year, day))
        .header(COOKIE, format!("session={}", config.session))
        .send()
        .await?;

    let status = DayStatus::from(res.status());
    let body = match status {
        DayStatus::Ok => res.text().await?,
        _ => String::new(),
    };
    Ok(DayResponse { status, body })
}
