//! JSON load/save and result rendering.
//! The on-disk format is an array of `{ "name", "org_id", "paths" }` objects.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::folder::Folder;

/// Default location of the sample data file (`<data_dir>/folder_tree/sample.json`).
pub fn default_data_path() -> Result<PathBuf> {
    if let Some(mut base) = dirs::data_dir() {
        base.push("folder_tree");
        base.push("sample.json");
        return Ok(base);
    }
    let home = std::env::var_os("HOME").context("neither a data dir nor HOME is available")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("folder_tree")
        .join("sample.json"))
}

pub fn load_folders(path: &Path) -> Result<Vec<Folder>> {
    let bytes = fs::read(path).with_context(|| format!("read folder data '{}'", path.display()))?;
    let folders: Vec<Folder> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse folder data '{}'", path.display()))?;
    debug!(path = %path.display(), count = folders.len(), "Loaded folders");
    Ok(folders)
}

/// Write folders as tab-indented JSON, creating the parent directory if needed.
pub fn save_folders(path: &Path, folders: &[Folder]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create data directory '{}'", parent.display()))?;
    }
    let bytes = to_pretty_json(folders)?;
    fs::write(path, bytes).with_context(|| format!("write folder data '{}'", path.display()))?;
    info!(path = %path.display(), count = folders.len(), "Saved folders");
    Ok(())
}

/// Serialize with tab indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut ser).context("serialize folders")?;
    Ok(buf)
}

/// One `name | paths | org_id` line per folder.
pub fn render_text(folders: &[Folder]) -> String {
    let mut out = String::new();
    for f in folders {
        out.push_str(&format!("{} | {} | {}\n", f.name, f.paths, f.org_id));
    }
    out
}
