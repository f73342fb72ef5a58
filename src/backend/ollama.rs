//! Ollama backend.
//!
//! Runs `ollama run <model>` with the prompt on stdin and reads the
//! completion from stdout.

use super::{clean_response, wait_with_timeout, BackendError, BackendResult, RewriteBackend};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

/// Default model pulled with `ollama pull`.
pub const DEFAULT_MODEL: &str = "llama3";

/// Default executable.
pub const DEFAULT_COMMAND: &str = "ollama";

/// Backend for a local Ollama install.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    command: String,
    model: String,
    extra_args: Vec<String>,
}

impl Default for OllamaBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl OllamaBackend {
    pub fn new(model: &str) -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            model: model.to_string(),
            extra_args: Vec::new(),
        }
    }

    /// Use a different executable (a wrapper script, a full path...).
    pub fn with_command(mut self, command: &str) -> Self {
        self.command = command.to_string();
        self
    }

    /// Extra arguments appended after the model name.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl RewriteBackend for OllamaBackend {
    fn name(&self) -> &'static str {
        "Ollama"
    }

    fn is_available(&self) -> bool {
        super::command_exists(&self.command)
    }

    fn invoke(&self, prompt: &str, timeout: Duration) -> BackendResult<String> {
        if !self.is_available() {
            return Err(BackendError::NotAvailable(format!(
                "{} not found in PATH",
                self.command
            )));
        }

        let mut cmd = Command::new(&self.command);
        cmd.args(["run", &self.model]);
        cmd.args(&self.extra_args);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(command = %self.command, model = %self.model, "invoking LLM");
        let mut child = cmd.spawn()?;

        // Fed from a thread: a child echoing a long prompt would otherwise
        // fill its stdout while we block on stdin
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_owned();
            std::thread::spawn(move || stdin.write_all(prompt.as_bytes()))
        });

        let waited = wait_with_timeout(&mut child, timeout);
        // The child is reaped by now. A failed exit explains itself better than
        // the broken pipe it caused, so the write error only counts on success
        if matches!(&waited, Ok(output) if output.status.success()) {
            if let Some(writer) = writer {
                match writer.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => return Err(BackendError::Io(e)),
                    Err(_) => {
                        let e = std::io::Error::new(std::io::ErrorKind::Other, "prompt writer panicked");
                        return Err(BackendError::Io(e));
                    }
                }
            }
        }

        match waited {
            Ok(output) => {
                if output.status.success() {
                    clean_response(&String::from_utf8_lossy(&output.stdout))
                } else {
                    Err(BackendError::ExitCode {
                        code: output.status.code().unwrap_or(-1),
                        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                    })
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                Err(BackendError::Timeout(timeout))
            }
            Err(e) => Err(BackendError::Io(e)),
        }
    }
}
