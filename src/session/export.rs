use super::Session;
use crate::draw::Frame;
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CURRENT_VERSION: u32 = 1;

/// On-disk form of one view's frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameExport {
    pub version: u32,
    pub window: usize,
    pub width: i32,
    pub height: i32,
    pub frame: Frame,
}

fn export_path(dir: &Path, window: usize, extension: &str) -> PathBuf {
    dir.join(format!("window-{window}.{extension}"))
}

/// Writes `window-<n>.json` for every view of the session into `dir`.
///
/// Files are written to a temporary name first and renamed into place.
pub fn export_json(session: &Session, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let (width, height) = {
        let board = session.board();
        (board.width(), board.height())
    };

    let mut written = Vec::with_capacity(session.views().len());
    for (window, view) in session.views().iter().enumerate() {
        let export = FrameExport {
            version: CURRENT_VERSION,
            window,
            width,
            height,
            frame: view.frame().clone(),
        };
        let bytes =
            serde_json::to_vec_pretty(&export).context("failed to serialise frame export")?;

        let path = export_path(dir, window, "json");
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, bytes)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path).with_context(|| {
            format!(
                "failed to move {} into place at {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        written.push(path);
    }

    info!("Exported {} frame(s) to {}", written.len(), dir.display());
    Ok(written)
}

/// Reads back a file written by [`export_json`].
pub fn read_export(path: &Path) -> Result<FrameExport> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let export: FrameExport = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse frame export {}", path.display()))?;
    if export.version != CURRENT_VERSION {
        anyhow::bail!(
            "unsupported frame export version {} in {}",
            export.version,
            path.display()
        );
    }
    Ok(export)
}

/// Rasterizes every view's frame to `window-<n>.png` in `dir`.
#[cfg(feature = "png")]
pub fn export_png(session: &Session, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let (width, height) = {
        let board = session.board();
        (board.width(), board.height())
    };

    let mut written = Vec::with_capacity(session.views().len());
    for (window, view) in session.views().iter().enumerate() {
        let path = export_path(dir, window, "png");
        crate::draw::render::write_png(&view.frame(), width, height, &path)?;
        written.push(path);
    }

    info!("Rendered {} PNG(s) to {}", written.len(), dir.display());
    Ok(written)
}
