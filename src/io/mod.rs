//! Input reading and assessment writers.

pub mod output;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

use crate::core::ProfileRecord;

/// Read a normalized profile record from a JSON file, or stdin when the
/// path is `-`.
pub fn read_profile(path: &Path) -> anyhow::Result<ProfileRecord> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading profile record from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading profile record from {}", path.display()))?
    };
    let record: ProfileRecord =
        serde_json::from_str(&raw).context("parsing profile record JSON")?;
    Ok(record)
}
