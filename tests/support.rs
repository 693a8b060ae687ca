use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// Request as seen by the test server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl ServerHandle {
    /// Requests received so far.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler thread panicked while holding the lock.
    pub fn captured(&self) -> Result<Vec<CapturedRequest>, String> {
        self.captured
            .lock()
            .map(|guard| guard.clone())
            .map_err(|err| format!("captured lock poisoned: {}", err))
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server that answers every request with `status`
/// after sleeping for `delay`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(status: u16, delay: Duration) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let sink = Arc::clone(&sink);
                    thread::spawn(move || handle_client(stream, status, delay, &sink));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(2));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            captured,
        },
    ))
}

/// Like [`spawn_http_server`], but returns `None` where sockets are not
/// permitted.
///
/// # Errors
///
/// Returns any other server setup error.
pub fn spawn_http_server_or_skip(
    status: u16,
    delay: Duration,
) -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_http_server(status, delay) {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Returns a URL on a local port that nothing listens on.
///
/// # Errors
///
/// Returns an error if no ephemeral port can be reserved.
pub fn closed_port_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/rerank", addr))
}

fn header_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos.saturating_add(4))
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then(|| value.trim().to_owned())
    })
}

fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_len = loop {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
        if let Some(end) = header_end(&buffer) {
            break end;
        }
    };

    let head = String::from_utf8_lossy(buffer.get(..head_len)?).into_owned();
    let content_length = header_value(&head, "content-length")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    let wanted = head_len.saturating_add(content_length);
    while buffer.len() < wanted {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    }

    let body = buffer.get(head_len..).unwrap_or_default();
    Some(CapturedRequest {
        content_type: header_value(&head, "content-type"),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

fn handle_client(
    mut stream: TcpStream,
    status: u16,
    delay: Duration,
    sink: &Mutex<Vec<CapturedRequest>>,
) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    if let Ok(mut guard) = sink.lock() {
        guard.push(request);
    }
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}",
        status
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Write a dataset file of `count` numbered fragments.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_dataset(dir: &Path, count: usize) -> Result<String, String> {
    let items: Vec<String> = (0..count).map(|idx| format!("passage {}", idx)).collect();
    let path = dir.join("dataset.json");
    let content =
        serde_json::to_string(&items).map_err(|err| format!("encode dataset failed: {}", err))?;
    std::fs::write(&path, content).map_err(|err| format!("write dataset failed: {}", err))?;
    Ok(path.to_string_lossy().into_owned())
}

/// Run the `servebench` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_servebench<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_servebench_in(Path::new("."), args)
}

/// Run the `servebench` binary from `dir` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_servebench_in<I, S>(dir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = servebench_bin()?;
    Command::new(bin)
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("SERVEBENCH_LOG")
        .output()
        .map_err(|err| format!("run servebench failed: {}", err))
}

fn servebench_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_servebench").map_or_else(
        || Err("CARGO_BIN_EXE_servebench missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
