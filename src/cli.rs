//! File plumbing shared by the `lnedit` and `lnview` binaries.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};

/// A text buffer loaded from disk or stdin.
///
/// `text` excludes the final `\n`, which is remembered in `trailing_newline`
/// and restored by [`Input::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    pub trailing_newline: bool,
}

impl Input {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.contains(&0) {
            bail!("binary input rejected (NUL byte found)");
        }
        let text = String::from_utf8(bytes).context("non-UTF8 input rejected")?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(mut text: String) -> Self {
        let trailing_newline = text.ends_with('\n');
        if trailing_newline {
            text.pop();
        }
        Self { text, trailing_newline }
    }

    /// Full file content for `text`, with the original trailing newline.
    pub fn render(&self, text: &str) -> String {
        let mut s = text.to_string();
        if self.trailing_newline {
            s.push('\n');
        }
        s
    }
}

/// Read `path`, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<Input> {
    let bytes = if path == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("failed to read {path}"))?
    };
    Input::from_bytes(bytes)
}

/// Read all of stdin as text, dropping one trailing newline.
pub fn read_stdin_text() -> Result<String> {
    let mut s = String::new();
    io::stdin()
        .read_to_string(&mut s)
        .context("failed to read stdin")?;
    Ok(Input::from_text(s).text)
}

/// Replace `path` with `content` through a temp file and rename.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string());

    let perms = fs::metadata(path).map(|m| m.permissions()).ok();

    let pid = process::id();
    let mut attempt: u64 = 0;
    let tmp_path: PathBuf = loop {
        let candidate = dir.join(format!(".{file_name}.lnedit.tmp.{pid}.{attempt}"));
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(mut f) => {
                f.write_all(content.as_bytes())?;
                f.sync_all()?;
                if let Some(p) = perms.clone() {
                    let _ = fs::set_permissions(&candidate, p);
                }
                break candidate;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e),
        }
    };

    fs::rename(&tmp_path, path)
}
