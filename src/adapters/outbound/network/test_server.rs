//! Minimal HTTP/1.1 server answering with canned responses.
//!
//! Also compiled into `tests/test_utilities` for the CLI end-to-end tests,
//! so it depends on std only.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A canned response served for requests whose path starts with `prefix`
pub struct Route {
    pub prefix: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(prefix: &'static str, body: impl Into<String>) -> Self {
        Self {
            prefix,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(prefix: &'static str, status: u16) -> Self {
        Self {
            prefix,
            status,
            body: "{\"error\":\"unavailable\"}".to_string(),
        }
    }
}

/// A recorded request: request line plus raw headers and body
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub head: String,
    pub body: String,
}

pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle(stream, &routes, &recorded);
            }
        });

        Self { base_url, requests }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, routes: &[Route], recorded: &Mutex<Vec<RecordedRequest>>) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(read) => read,
        };
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(read) => buffer.extend_from_slice(&chunk[..read]),
        }
    }

    let request_line = head.lines().next().unwrap_or_default().to_string();
    let path = request_line.split_whitespace().nth(1).unwrap_or_default();
    let body = String::from_utf8_lossy(&buffer[header_end..]).to_string();

    let (status, response_body) = routes
        .iter()
        .find(|route| path.starts_with(route.prefix))
        .map(|route| (route.status, route.body.clone()))
        .unwrap_or((404, "{}".to_string()));

    recorded.lock().unwrap().push(RecordedRequest {
        request_line,
        head,
        body,
    });

    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        response_body.len(),
        response_body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
