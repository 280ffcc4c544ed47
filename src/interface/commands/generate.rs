//! # Generate Command
//!
//! Builds a strategy from a YAML answers file without the wizard.

use crate::application::export::{self, ExportFormat};
use crate::application::strategy;
use crate::domain::config::AppConfig;
use crate::domain::error::StrategyError;
use crate::domain::types::Answers;
use crate::strings::{logs, messages};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_answers(path: &Path) -> Result<Answers> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).with_context(|| logs::answers_read_error(&shown))?;
    let answers: Answers =
        serde_yaml::from_str(&content).with_context(|| logs::answers_parse_error(&shown))?;
    tracing::debug!("{}", logs::answers_loaded(&shown));
    Ok(answers)
}

/// Returns what should be printed: the document itself with `to_stdout`,
/// otherwise a confirmation naming the written file.
pub fn handle_generate(
    config: &AppConfig,
    answers_path: &Path,
    format: ExportFormat,
    to_stdout: bool,
) -> Result<String> {
    let answers = load_answers(answers_path)?;

    let missing = answers.missing_fields();
    if !missing.is_empty() {
        return Err(StrategyError::IncompleteAnswers { missing }.into());
    }

    let strategy = strategy::generate_checked(&answers, config.lookup_policy())?;

    if to_stdout {
        return export::render(&answers, &strategy, format, &config.report.attribution);
    }

    let path = export::write_export(
        &config.export.directory,
        &answers,
        &strategy,
        format,
        &config.report.attribution,
    )?;
    Ok(messages::strategy_exported(&path.display().to_string()))
}
