use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Where the text to translate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    Text(&'a str),
    File(&'a str),
    Stdin,
}

impl<'a> InputSource<'a> {
    /// Inline text wins over a file; with neither, stdin is read.
    pub fn select(text: Option<&'a str>, file: Option<&'a str>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Text(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn read(source: InputSource<'_>) -> Result<String> {
        match source {
            InputSource::Text(text) => Self::read_text(text),
            InputSource::File(path) => Self::read_file(path),
            InputSource::Stdin => Self::read_stdin(),
        }
    }

    fn read_text(text: &str) -> Result<String> {
        if text.len() > MAX_INPUT_SIZE {
            bail!(size_error(text.len(), "text"));
        }
        Ok(text.to_string())
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(size_error(size, "file"));
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(size_error(buffer.len(), "input"));
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn size_error(size: usize, what: &str) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the {what} into smaller parts.",
        size as f64 / 1024.0 / 1024.0
    )
}
