//! Minimal HTTP/1.1 server answering every request with a fixed status.
//!
//! Used to stand in for a configured host when probing. Responds to HEAD and
//! GET alike; for 3xx statuses a `Location` header is added.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Starts a server in a background thread that answers with `status`
/// (e.g. "301 Moved Permanently"). Returns the `host:port` it listens on.
/// The server runs until the process exits.
pub fn start(status: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream, status));
        }
    });
    format!("127.0.0.1:{}", port)
}

/// A `host:port` with nothing listening on it.
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, status: &str) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let location = if status.starts_with('3') {
        "Location: https://target.example/\r\n"
    } else {
        ""
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 0\r\n{}Connection: close\r\n\r\n",
        status, location
    );
    let _ = stream.write_all(response.as_bytes());
}
