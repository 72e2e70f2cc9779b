use crate::domain::errors::FlattenError;
#[cfg(feature = "clipboard-support")]
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to file: {}", self.path.display());
        fs::write(&self.path, content).map_err(|source| FlattenError::OutputWrite {
            path: self.path.clone(),
            source,
        })?;
        info!("Output written to file: {}", self.path.display());
        Ok(())
    }
}

#[cfg(feature = "clipboard-support")]
pub struct ClipboardWriter;

#[cfg(feature = "clipboard-support")]
impl OutputWriter for ClipboardWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing output to clipboard");

        let mut ctx = ClipboardContext::new()
            .map_err(|e| FlattenError::Clipboard(format!("failed to access clipboard: {}", e)))?;

        ctx.set_contents(content.to_owned())
            .map_err(|e| FlattenError::Clipboard(format!("failed to copy to clipboard: {}", e)))?;

        info!("Output copied to clipboard (size: {} bytes)", content.len());
        Ok(())
    }
}

fn print_colored<W: Write>(out: &mut W, color: Color, message: &str) -> io::Result<()> {
    out.execute(SetForegroundColor(color))?;
    writeln!(out, "{}", message)?;
    out.execute(ResetColor)?;
    Ok(())
}

/// Writes the aggregate to `output_path` and tells the operator how it went.
///
/// A failed write is reported, not returned: the caller still reports the
/// excluded files afterwards. Returns whether the file was written.
pub fn write_output<W: Write>(
    out: &mut W,
    content: &str,
    output_path: &Path,
    clipboard_output: bool,
) -> io::Result<bool> {
    let written = match FileWriter::new(output_path).write(content) {
        Ok(()) => {
            print_colored(
                out,
                Color::Green,
                &format!("\n✓ Everything was saved to {}", output_path.display()),
            )?;
            true
        }
        Err(e) => {
            warn!("{:#}", e);
            print_colored(out, Color::Red, &format!("\n✗ Error writing file: {:#}", e))?;
            false
        }
    };

    if clipboard_output {
        copy_to_clipboard(out, content)?;
    }

    Ok(written)
}

#[cfg(feature = "clipboard-support")]
fn copy_to_clipboard<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    match ClipboardWriter.write(content) {
        Ok(()) => print_colored(out, Color::Green, "📋 Content copied to clipboard!"),
        Err(e) => {
            warn!("{:#}", e);
            print_colored(out, Color::Yellow, &format!("Clipboard copy failed: {:#}", e))
        }
    }
}

#[cfg(not(feature = "clipboard-support"))]
fn copy_to_clipboard<W: Write>(out: &mut W, _content: &str) -> io::Result<()> {
    warn!("Clipboard support was not compiled in");
    print_colored(
        out,
        Color::Yellow,
        "Clipboard support is not available in this build.",
    )
}

pub fn report_summary<W: Write>(out: &mut W, included: usize, word_count: usize) -> io::Result<()> {
    writeln!(
        out,
        "\nFiles included: {}, approximate word count: {}",
        included, word_count
    )
}

pub fn report_excluded<W: Write>(out: &mut W, excluded: &[PathBuf]) -> io::Result<()> {
    if excluded.is_empty() {
        writeln!(out, "\nNo files were excluded.")?;
        return Ok(());
    }

    writeln!(out, "\nThe following files were excluded and their content was not written:")?;
    for path in excluded {
        writeln!(out, "- {}", path.display())?;
    }
    Ok(())
}
