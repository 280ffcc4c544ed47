//! # Paths
//!
//! Where configuration is looked up and how exported files are named.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

pub const APP_DIR: &str = "gtm-wizard";
pub const CONFIG_FILE: &str = "config.yaml";
pub const LOCAL_CONFIG_PATH: &str = "data/config.yaml";
pub const EXPORT_PREFIX: &str = "gtm-strategy-";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static PATH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\]").expect("separator pattern is valid"));

/// Config files tried in order when no `--config` is given.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(APP_DIR).join(CONFIG_FILE));
    }
    candidates
}

/// Lower-cases the product name and replaces each whitespace run with `-`.
/// Path separators also become `-` and NULs are dropped, so the slug is
/// always a single file name component.
pub fn product_slug(product_name: &str) -> String {
    let lowered = product_name.to_lowercase().replace('\0', "");
    let spaced = WHITESPACE_RUN.replace_all(&lowered, "-");
    PATH_SEPARATOR.replace_all(&spaced, "-").into_owned()
}

/// e.g. `gtm-strategy-acme-cloud.txt`
pub fn export_file_name(product_name: &str, extension: &str) -> String {
    format!("{}{}.{}", EXPORT_PREFIX, product_slug(product_name), extension)
}
