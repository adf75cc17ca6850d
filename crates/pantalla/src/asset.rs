//! Local asset origin.
//!
//! Serves deterministic synthetic pages over loopback HTTP so scenarios
//! never depend on live network content. Given the same index, the origin
//! returns byte-identical title, content and URL for the lifetime of one
//! server instance; distinct indices yield distinct URLs and content.

use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use crate::result::{HarnessError, HarnessResult};

/// Path prefix under which generic fixture pages are served
pub const ASSET_PATH_PREFIX: &str = "/pages/generic-";

/// A deterministically generated synthetic page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFixture {
    /// Index this fixture was generated from
    pub index: u32,
    /// Absolute URL the page is served at
    pub url: String,
    /// Page title embedded in the served HTML
    pub title: String,
    /// Recognizable content marker embedded in the served body
    pub content: String,
}

fn fixture_title(index: u32) -> String {
    format!("Test_Page_{index}")
}

fn fixture_content(index: u32) -> String {
    format!("Page content: {index}")
}

fn fixture_html(index: u32) -> String {
    format!(
        "<html>\n<head><title>{}</title></head>\n<body>\n<h1>{}</h1>\n<p class=\"page-marker\">{}</p>\n</body>\n</html>\n",
        fixture_title(index),
        fixture_title(index),
        fixture_content(index),
    )
}

/// Scenario-scoped origin for synthetic page fixtures.
///
/// Each scenario attempt owns its own instance; `stop` (also invoked on
/// drop) releases the port so sequential attempts never collide.
#[derive(Debug, Default)]
pub struct AssetServer {
    port: Option<u16>,
    stop_flag: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
    worker: Option<JoinHandle<()>>,
}

impl AssetServer {
    /// Create a server that is not yet listening
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a loopback listener on an ephemeral port and start serving.
    ///
    /// Bind failures surface as `HarnessError::Bind` and are never retried
    /// here; a broken fixture invalidates the whole attempt.
    pub fn start(&mut self) -> HarnessResult<()> {
        if self.worker.is_some() {
            return Ok(());
        }

        let listener = TcpListener::bind("127.0.0.1:0").map_err(|e| HarnessError::Bind {
            message: e.to_string(),
        })?;
        listener
            .set_nonblocking(true)
            .map_err(|e| HarnessError::Bind {
                message: e.to_string(),
            })?;
        let port = listener
            .local_addr()
            .map_err(|e| HarnessError::Bind {
                message: e.to_string(),
            })?
            .port();

        let stop_flag = Arc::new(AtomicBool::new(false));
        let requests = Arc::clone(&self.requests);
        let flag = Arc::clone(&stop_flag);

        let worker = std::thread::spawn(move || {
            while !flag.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        requests.fetch_add(1, Ordering::SeqCst);
                        if let Err(e) = serve_connection(stream) {
                            tracing::debug!(error = %e, "asset origin connection error");
                        }
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        std::thread::sleep(Duration::from_millis(5));
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "asset origin accept error");
                        break;
                    }
                }
            }
        });

        self.port = Some(port);
        self.stop_flag = stop_flag;
        self.worker = Some(worker);
        tracing::debug!(port, "asset origin listening");
        Ok(())
    }

    /// Whether the server is currently listening
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Port the server is bound to, if started
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Base URL of the origin
    pub fn base_url(&self) -> HarnessResult<String> {
        let port = self.port.ok_or_else(|| HarnessError::Configuration {
            message: "asset origin not started".into(),
        })?;
        Ok(format!("http://127.0.0.1:{port}"))
    }

    /// Get the page fixture for `index`.
    ///
    /// Pure function of the index within one server lifetime: repeated
    /// calls return identical fixtures.
    pub fn page(&self, index: u32) -> HarnessResult<PageFixture> {
        let base = self.base_url()?;
        Ok(PageFixture {
            index,
            url: format!("{base}{ASSET_PATH_PREFIX}{index}.html"),
            title: fixture_title(index),
            content: fixture_content(index),
        })
    }

    /// Number of requests accepted so far
    #[must_use]
    pub fn requests_served(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Stop listening and release the port. Idempotent; safe to call even
    /// if never started.
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.port = None;
    }
}

impl Drop for AssetServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Answer a single HTTP request on `stream`
fn serve_connection(mut stream: TcpStream) -> std::io::Result<()> {
    stream.set_read_timeout(Some(Duration::from_secs(2)))?;

    let mut buf = [0u8; 2048];
    let n = stream.read(&mut buf)?;
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = match parse_asset_index(path) {
        Some(index) => {
            let body = fixture_html(index);
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            )
        }
        None => {
            let body = "not found";
            format!(
                "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            )
        }
    };

    stream.write_all(response.as_bytes())?;
    stream.flush()
}

fn parse_asset_index(path: &str) -> Option<u32> {
    path.strip_prefix(ASSET_PATH_PREFIX)?
        .strip_suffix(".html")?
        .parse()
        .ok()
}

/// A page retrieved over HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Title extracted from the document
    pub title: String,
    /// Raw response body
    pub body: String,
}

/// Perform a blocking GET against a loopback fixture URL.
///
/// Any transport or status problem is a navigation failure: the action
/// (loading the page) could not complete, and a fresh attempt may succeed.
pub fn fetch_page(url: &str) -> HarnessResult<FetchedPage> {
    let nav = |detail: &str| HarnessError::navigation(format!("load {url}: {detail}"), 0);

    let rest = url
        .strip_prefix("http://")
        .ok_or_else(|| nav("only http URLs are fetchable"))?;
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };

    let mut stream = TcpStream::connect(authority).map_err(|e| nav(&e.to_string()))?;
    stream
        .set_read_timeout(Some(Duration::from_secs(2)))
        .map_err(|e| nav(&e.to_string()))?;
    stream
        .write_all(
            format!("GET {path} HTTP/1.1\r\nHost: {authority}\r\nConnection: close\r\n\r\n")
                .as_bytes(),
        )
        .map_err(|e| nav(&e.to_string()))?;

    let mut raw = String::new();
    stream
        .read_to_string(&mut raw)
        .map_err(|e| nav(&e.to_string()))?;

    let (head, body) = raw
        .split_once("\r\n\r\n")
        .ok_or_else(|| nav("malformed response"))?;
    let status_line = head.lines().next().unwrap_or_default();
    if !status_line.contains(" 200 ") {
        return Err(nav(&format!("status line '{status_line}'")));
    }

    let title = extract_title(body)
        .unwrap_or_else(|| path.rsplit('/').next().unwrap_or_default().to_string());
    Ok(FetchedPage {
        title,
        body: body.to_string(),
    })
}

fn extract_title(html: &str) -> Option<String> {
    let start = html.find("<title>")? + "<title>".len();
    let end = html[start..].find("</title>")? + start;
    Some(html[start..end].to_string())
}
