//! Minimal HTTP/1.1 server standing in for the puzzle site in integration tests.
//!
//! Answers `GET /<year>/day/<n>/input` with whatever the responder returns for `n`
//! and records every request line and cookie it sees.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seen {
    pub path: String,
    pub cookie: Option<String>,
}

pub struct DayServer {
    pub url: String,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl DayServer {
    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    /// Day numbers requested so far, in order.
    pub fn days(&self) -> Vec<u8> {
        self.seen()
            .iter()
            .filter_map(|s| s.path.split('/').nth(3).and_then(|d| d.parse().ok()))
            .collect()
    }
}

/// Starts the server on a background thread. `respond` maps a day to `(status, body)`.
/// The server runs until the process exits.
pub fn start<F>(respond: F) -> DayServer
where
    F: Fn(u8) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);
    thread::spawn({
        let seen = Arc::clone(&seen);
        move || {
            for stream in listener.incoming().flatten() {
                let seen = Arc::clone(&seen);
                let respond = Arc::clone(&respond);
                thread::spawn(move || handle(stream, &seen, respond.as_ref()));
            }
        }
    });
    DayServer {
        url: format!("http://127.0.0.1:{port}"),
        seen,
    }
}

fn handle(mut stream: TcpStream, seen: &Mutex<Vec<Seen>>, respond: &(dyn Fn(u8) -> (u16, String) + Send + Sync)) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&raw);

    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();
    let cookie = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("cookie"))
        .map(|(_, value)| value.trim().to_string());

    let day = path.split('/').nth(3).and_then(|d| d.parse::<u8>().ok());
    seen.lock().unwrap().push(Seen { path, cookie });

    let (status, body) = match day {
        Some(day) => respond(day),
        None => (404, String::new()),
    };
    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
