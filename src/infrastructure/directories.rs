use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
    pub store_root: PathBuf,
}

pub fn ensure_directories(config: &AppConfig) -> Result<ResolvedPaths> {
    let logs_dir = ensure_dir(&config.directories.logs_dir)?;
    let store_root = PathBuf::from(&config.store.root_dir);
    if !store_root.is_dir() {
        anyhow::bail!(
            "message store directory {} does not exist",
            store_root.display()
        );
    }

    let write_check = logs_dir.join(".write-test");
    fs::write(&write_check, b"ok")
        .with_context(|| format!("logs directory {} is not writable", logs_dir.display()))?;
    fs::remove_file(&write_check)?;
    Ok(ResolvedPaths {
        logs_dir,
        store_root: store_root.canonicalize().unwrap_or(store_root),
    })
}

fn ensure_dir(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(path);
    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| format!("failed to create directory {}", path))?;
    }
    Ok(dir.canonicalize().unwrap_or(dir))
}
