use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

const SHUTDOWN_PATH: &str = "/__shutdown";

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
  pub request_line: String,
  pub headers: Vec<(String, String)>,
  pub body: String,
}

impl CapturedRequest {
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.iter()
      .find(|(k, _)| k.eq_ignore_ascii_case(name))
      .map(|(_, v)| v.as_str())
  }

  pub fn target(&self) -> &str {
    self.request_line.split(' ').nth(1).unwrap_or("")
  }
}

pub type Responder = fn(&CapturedRequest) -> (u16, Vec<u8>);

// answers every request with 200 and an echo of its request line
pub fn echo(req: &CapturedRequest) -> (u16, Vec<u8>) {
  (200, format!("{{\"echo\": \"{}\"}}", req.request_line).into_bytes())
}

/// Accepts one request per connection, records it and replies with
/// `Connection: close` until `finish` is called.
pub struct CaptureServer {
  port: u16,
  handle: JoinHandle<Vec<CapturedRequest>>,
}

impl CaptureServer {
  pub fn start(responder: Responder) -> CaptureServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
      let mut captured = vec![];
      for st in listener.incoming() {
        let mut st = st.unwrap();
        let req = read_request(&mut st);
        if req.target() == SHUTDOWN_PATH {
          break
        }
        let (status, body) = responder(&req);
        write_response(&mut st, status, &body);
        captured.push(req);
      }
      captured
    });

    CaptureServer { port, handle }
  }

  pub fn base_url(&self) -> String {
    format!("http://127.0.0.1:{}", self.port)
  }

  pub fn finish(self) -> Vec<CapturedRequest> {
    let mut st = TcpStream::connect(("127.0.0.1", self.port)).unwrap();
    st.write_all(format!("GET {} HTTP/1.1\r\nhost: 127.0.0.1\r\n\r\n", SHUTDOWN_PATH).as_bytes()).unwrap();
    self.handle.join().unwrap()
  }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
  buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn read_request(st: &mut TcpStream) -> CapturedRequest {
  let mut buf = vec![];
  let mut chunk = [0u8; 8192];

  let header_end = loop {
    if let Some(pos) = find_header_end(&buf) {
      break pos
    }
    let n = st.read(&mut chunk).unwrap();
    assert!(n > 0, "connection closed before headers were complete");
    buf.extend_from_slice(&chunk[..n]);
  };

  let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
  let mut lines = head.split("\r\n");
  let request_line = lines.next().unwrap_or("").to_string();
  let headers: Vec<(String, String)> = lines
    .filter_map(|l| {
      let mut kv = l.splitn(2, ':');
      Some((kv.next()?.trim().to_string(), kv.next()?.trim().to_string()))
    })
    .collect();

  let content_length: usize = headers.iter()
    .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
    .map(|(_, v)| v.parse().unwrap())
    .unwrap_or(0);

  let body_start = header_end + 4;
  while buf.len() < body_start + content_length {
    let n = st.read(&mut chunk).unwrap();
    assert!(n > 0, "connection closed before body was complete");
    buf.extend_from_slice(&chunk[..n]);
  }
  let body = String::from_utf8(buf[body_start..body_start + content_length].to_vec()).unwrap();

  CapturedRequest { request_line, headers, body }
}

fn write_response(st: &mut TcpStream, status: u16, body: &[u8]) {
  let reason = match status {
    200 => "OK",
    201 => "Created",
    404 => "Not Found",
    422 => "Unprocessable Entity",
    _ => "Unknown",
  };
  let head = format!(
    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
    status, reason, body.len(),
  );
  st.write_all(head.as_bytes()).unwrap();
  st.write_all(body).unwrap();
  st.flush().unwrap();
}
