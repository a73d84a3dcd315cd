use crate::error::IconError;
use crate::rendering::image_io::{encode_png, load_image, optimize_png};
use crate::rendering::recolor::{to_notification_icon_with_stats, RecolorStats};
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Prefix of the temporary file written next to the output.
pub const TEMP_PREFIX: &str = ".notify-icon";

/// Options for a conversion run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertOptions {
    /// Re-compress the output with oxipng before writing.
    pub optimize: bool,
}

/// Summary of a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub width: u32,
    pub height: u32,
    pub stats: RecolorStats,
    pub bytes_written: usize,
}

/// Loads a source icon, recolors it and writes the notification icon.
pub struct IconConverter {
    options: ConvertOptions,
}

impl IconConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Run the full load → recolor → write pass.
    ///
    /// A missing input fails with [`IconError::InputNotFound`] before anything
    /// is written. The output is replaced atomically, so on any error an
    /// existing file at `output` is left as it was.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport, IconError> {
        let source = load_image(input)?;
        let (icon, stats) = to_notification_icon_with_stats(&source);
        drop(source);

        let mut png_bytes = encode_png(&icon)?;
        if self.options.optimize {
            png_bytes = optimize_png(png_bytes);
        }

        write_atomically(output, &png_bytes)?;

        let report = ConversionReport {
            width: icon.width(),
            height: icon.height(),
            stats,
            bytes_written: png_bytes.len(),
        };
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = report.width,
            height = report.height,
            foreground = stats.foreground,
            background = stats.background,
            bytes = report.bytes_written,
            "Converted notification icon"
        );
        Ok(report)
    }
}

impl Default for IconConverter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

/// Write `bytes` to a temporary file next to `path`, then rename it over
/// `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = create_temp_file(dir, path)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| IconError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote output file");
    Ok(())
}

/// Create the temporary output file with the mode a plain `fs::write` would
/// leave behind: the existing target's permissions, or 0o666 minus the umask
/// for a new file.
fn create_temp_file(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(TEMP_PREFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Some(existing) = std::fs::metadata(target).ok().filter(|m| m.is_file()) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    Ok(tmp)
}
