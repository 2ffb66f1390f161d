use std::{fs, path::Path};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

/// Read and deserialize an IDM file.
pub fn load_idm<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| {
        format!("load_idm: cannot read {}", path.display())
    })?;
    idm::from_str(&text)
        .with_context(|| format!("load_idm: cannot parse {}", path.display()))
}

/// Serialize a value into an IDM file, replacing any previous contents.
pub fn save_idm<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let text = idm::to_string(value)?;
    fs::write(path, text)
        .with_context(|| format!("save_idm: cannot write {}", path.display()))
}
