use std::fs;
use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::canvas::Canvas;
use crate::error::{RectPackError, Result};

/// Encodes `canvas` as an 8-bit RGBA PNG (row stride `width * 4`).
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let img = canvas.image();
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Writes `canvas` as PNG to `path`, replacing any existing file.
///
/// The bytes go to a temporary file next to `path` which is then renamed over it, so a failed
/// write leaves neither a partial file nor a modified original behind. An existing file keeps its
/// permissions; a new one gets the usual umask-derived mode.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;
    let write_err = |source| RectPackError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir).map_err(write_err)?;
    if let Ok(meta) = fs::metadata(path) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_err)?;
        }
    }
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "png written");
    Ok(())
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    // 0o666 lets the process umask decide, as a plain create would.
    Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
