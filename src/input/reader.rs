use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Collects the question for `chef ask`.
pub struct InputReader;

impl InputReader {
    /// Returns the question from the argument, else the file, else piped stdin.
    ///
    /// Trailing line breaks are dropped from file and stdin input. An
    /// interactive terminal on stdin yields an empty question instead of
    /// blocking; the caller turns that into the usual blank-question warning.
    pub fn read(argument: Option<&str>, file: Option<&Path>) -> Result<String> {
        if let Some(text) = argument {
            return Ok(text.to_string());
        }

        let text = if let Some(path) = file {
            Self::read_file(path)?
        } else if io::stdin().is_terminal() {
            String::new()
        } else {
            Self::read_limited(io::stdin().lock(), "stdin")?
        };

        Ok(text.trim_end_matches(['\n', '\r']).to_string())
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(too_large(size));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn read_limited(reader: impl Read, source: &str) -> Result<String> {
        let mut buffer = Vec::new();
        // Read one byte past the limit to detect oversized input.
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read from {source}"))?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(too_large(buffer.len()));
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn too_large(size: usize) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
        size as f64 / 1024.0 / 1024.0
    )
}
