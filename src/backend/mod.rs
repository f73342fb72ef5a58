//! LLM backends used by the `llm` engine.
//!
//! A backend turns a prompt into a completion. The only shipped backend runs
//! a local model through the `ollama` CLI, but anything implementing
//! [`RewriteBackend`] can be plugged into the simplifier.
//!
//! Backends are stateless and may be shared between threads.

pub mod ollama;

pub use ollama::OllamaBackend;

use std::time::Duration;
use thiserror::Error;

/// Default time allowed for one completion.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// A text completion service.
pub trait RewriteBackend: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Check if the backend can be reached.
    fn is_available(&self) -> bool;

    /// Send `prompt` and return the cleaned completion.
    fn invoke(&self, prompt: &str, timeout: Duration) -> BackendResult<String>;
}

/// Errors from LLM backends.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("LLM backend not found: {0}")]
    NotAvailable(String),

    #[error("LLM timed out after {0:?}")]
    Timeout(Duration),

    #[error("Exit code {code}: {}", truncate_stderr(stderr))]
    ExitCode { code: i32, stderr: String },

    #[error("LLM returned an empty response")]
    EmptyResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wait for child process with timeout.
///
/// Polls `try_wait` since std::process has no native timeout. Both pipes are
/// drained on their own threads meanwhile, so a child writing more than a
/// pipe buffer never stalls. On expiry the child is killed and reaped before
/// returning `ErrorKind::TimedOut`; the readers are left to finish on their
/// own once the pipes close.
pub(crate) fn wait_with_timeout(
    child: &mut std::process::Child,
    timeout: Duration,
) -> std::io::Result<std::process::Output> {
    use std::thread;
    use std::time::Instant;

    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(std::io::Error::new(
                    std::io::ErrorKind::TimedOut,
                    "Process timed out",
                ));
            }
            None => thread::sleep(poll_interval),
        }
    };

    Ok(std::process::Output {
        status,
        stdout: join_reader(stdout)?,
        stderr: join_reader(stderr)?,
    })
}

type PipeReader = std::thread::JoinHandle<std::io::Result<Vec<u8>>>;

fn spawn_reader<R: std::io::Read + Send + 'static>(mut pipe: R) -> PipeReader {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_reader(reader: Option<PipeReader>) -> std::io::Result<Vec<u8>> {
    match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "pipe reader panicked"))?,
        None => Ok(Vec::new()),
    }
}

/// Normalise a raw completion.
///
/// Trims whitespace and unwraps a response fenced in a markdown code block.
/// Returns `EmptyResponse` when nothing is left.
pub fn clean_response(raw: &str) -> BackendResult<String> {
    let trimmed = raw.trim();
    let unfenced = unwrap_code_fence(trimmed).unwrap_or(trimmed).trim();
    if unfenced.is_empty() {
        return Err(BackendError::EmptyResponse);
    }
    Ok(unfenced.to_string())
}

/// Body of a response that is entirely one fenced code block.
fn unwrap_code_fence(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("```")?.strip_suffix("```")?;
    // Drop an optional language tag on the opening line
    match inner.find('\n') {
        Some(newline) if !inner[..newline].trim().contains(' ') => Some(&inner[newline + 1..]),
        _ => Some(inner),
    }
}

/// First line of stderr, capped at 200 characters.
fn truncate_stderr(stderr: &str) -> String {
    let first_line = stderr.lines().next().unwrap_or("").trim();
    if first_line.chars().count() <= 200 {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(200).collect();
        format!("{}...", cut)
    }
}

/// Check if a command is available in PATH.
///
/// Uses `which` on Unix and `where` on Windows.
pub fn command_exists(command: &str) -> bool {
    #[cfg(windows)]
    let lookup_cmd = "where";
    #[cfg(not(windows))]
    let lookup_cmd = "which";

    std::process::Command::new(lookup_cmd)
        .arg(command)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
