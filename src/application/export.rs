//! # Strategy Export
//!
//! Serializes a generated strategy into the plain-text report (or JSON) and
//! writes it next to the configured output directory.

use crate::domain::paths;
use crate::domain::types::{Answers, Strategy};
use crate::strings::logs;
use crate::strings::templates::{self, TemplateRenderer};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// Fixed-layout report. Product name is upper-cased in the title; nothing is
/// escaped.
pub fn render_document(product_name: &str, strategy: &Strategy, attribution: &[String]) -> String {
    let characteristics = bullets(&strategy.icp.characteristics);

    let channels = strategy
        .channels
        .iter()
        .map(|c| format!("{} ({} Priority)\n  Rationale: {}", c.name, c.priority, c.rationale))
        .collect::<Vec<_>>()
        .join("\n\n");

    let tactics = strategy
        .tactics
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n");

    let phases = strategy
        .phases
        .iter()
        .map(|p| format!("{} - {}\n  {}", p.phase, p.focus, p.activities))
        .collect::<Vec<_>>()
        .join("\n\n");

    TemplateRenderer::new(templates::REPORT_TEMPLATE)
        .set("{{PRODUCT_NAME}}", product_name.to_uppercase())
        .set("{{POSITIONING}}", strategy.positioning.as_str())
        .set("{{ICP_SIZE}}", strategy.icp.size.as_str())
        .set("{{ICP_DECISION}}", strategy.icp.decision.as_str())
        .set("{{ICP_CYCLE}}", strategy.icp.cycle.as_str())
        .set("{{ICP_CHARACTERISTICS}}", characteristics)
        .set("{{CHANNELS}}", channels)
        .set("{{TACTICS}}", tactics)
        .set("{{METRICS}}", bullets(&strategy.metrics))
        .set("{{PHASES}}", phases)
        .set("{{FOOTER}}", footer(attribution))
        .render()
        .trim()
        .to_string()
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn footer(attribution: &[String]) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = Vec::with_capacity(attribution.len() + 2);
    lines.push(rule.as_str());
    lines.extend(attribution.iter().map(String::as_str));
    lines.push(rule.as_str());
    lines.join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    product_name: &'a str,
    generated_at: String,
    answers: &'a Answers,
    strategy: &'a Strategy,
}

pub fn render_json(answers: &Answers, strategy: &Strategy) -> Result<String> {
    let export = JsonExport {
        product_name: &answers.product_name,
        generated_at: chrono::Local::now().to_rfc3339(),
        answers,
        strategy,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize strategy")
}

/// Document contents for `format`, without touching the file system.
pub fn render(
    answers: &Answers,
    strategy: &Strategy,
    format: ExportFormat,
    attribution: &[String],
) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_document(&answers.product_name, strategy, attribution)),
        ExportFormat::Json => render_json(answers, strategy),
    }
}

/// Writes `gtm-strategy-<slug>.<ext>` into `directory`, creating it if needed.
pub fn write_export(
    directory: &Path,
    answers: &Answers,
    strategy: &Strategy,
    format: ExportFormat,
    attribution: &[String],
) -> Result<PathBuf> {
    let content = render(answers, strategy, format, attribution)?;

    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create output directory {}", directory.display()))?;
    let path = directory.join(paths::export_file_name(
        &answers.product_name,
        format.extension(),
    ));
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("{}", logs::strategy_exported(&path.display().to_string()));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::strategy::generate;

    fn acme() -> Answers {
        Answers {
            product_name: "Acme Cloud".to_string(),
            product_type: "saas".to_string(),
            business_model: "b2b".to_string(),
            target_market: "smb".to_string(),
            product_stage: "mvp".to_string(),
            budget: "low".to_string(),
            timeline: "short".to_string(),
            differentiator: "fast onboarding".to_string(),
            primary_goal: "leads".to_string(),
        }
    }

    const EXPECTED: &str = "GTM STRATEGY FOR ACME CLOUD

POSITIONING
For smb who need fast onboarding, our software solution delivers exceptional value by solving their key challenges in a way that no other solution can match.

IDEAL CUSTOMER PROFILE
Company Size: 10-200 employees
Decision Maker: Director or VP level
Sales Cycle: 1-3 months
Key Characteristics:
- Budget-conscious
- Quick decision-making
- Self-service preferred

RECOMMENDED CHANNELS
LinkedIn Organic (High Priority)
  Rationale: Cost-effective reach to B2B audience

Content Marketing (High Priority)
  Rationale: Build authority and SEO presence

Email Outreach (Medium Priority)
  Rationale: Direct connection with prospects

Industry Communities (Medium Priority)
  Rationale: Build credibility in niche

KEY TACTICS
1. Create gated content (whitepapers, guides)
2. Launch targeted ad campaigns
3. Optimize website for conversion
4. Implement lead magnets
5. Host webinars and workshops

SUCCESS METRICS
- Marketing Qualified Leads (MQLs)
- Lead conversion rate
- Cost per lead
- Lead-to-opportunity rate

TIMELINE & PHASES
Week 1-2 - Foundation
  Set up tracking, finalise messaging, prepare assets

Week 3-6 - Launch
  Execute initial campaigns, start content creation

Week 7-12 - Optimise
  Analyse results, optimise channels, scale what works

────────────────────────────────────────────────────────────
Generated by Acme
────────────────────────────────────────────────────────────";

    #[test]
    fn test_render_document_layout() {
        let answers = acme();
        let strategy = generate(&answers);
        let document = render_document(&answers.product_name, &strategy, &["Generated by Acme".to_string()]);
        assert_eq!(document, EXPECTED);
    }

    #[test]
    fn test_render_document_does_not_escape() {
        let answers = Answers {
            differentiator: "{{TACTICS}} & <b>speed</b>".to_string(),
            ..acme()
        };
        let strategy = generate(&answers);
        let document = render_document(&answers.product_name, &strategy, &[]);
        assert!(document.contains("who need {{TACTICS}} & <b>speed</b>,"));
        assert!(document.ends_with(&format!("{}\n{}", "─".repeat(60), "─".repeat(60))));
    }

    #[test]
    fn test_write_export_text_and_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("reports");
        let answers = acme();
        let strategy = generate(&answers);

        let path = write_export(&out, &answers, &strategy, ExportFormat::Text, &[]).expect("text export");
        assert_eq!(path, out.join("gtm-strategy-acme-cloud.txt"));
        let written = fs::read_to_string(&path).expect("read export");
        assert!(written.starts_with("GTM STRATEGY FOR ACME CLOUD\n\nPOSITIONING\n"));

        let path = write_export(&out, &answers, &strategy, ExportFormat::Json, &[]).expect("json export");
        assert_eq!(path, out.join("gtm-strategy-acme-cloud.json"));
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read json")).expect("valid json");
        assert_eq!(value["productName"], "Acme Cloud");
        assert_eq!(value["answers"]["primaryGoal"], "leads");
        assert_eq!(value["strategy"]["channels"][0]["priority"], "High");
        assert_eq!(value["strategy"]["icp"]["size"], "10-200 employees");
    }

    #[test]
    fn test_write_export_keeps_separators_out_of_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("reports");
        let answers = Answers {
            product_name: "AC/DC".to_string(),
            ..acme()
        };
        let strategy = generate(&answers);

        let path = write_export(&out, &answers, &strategy, ExportFormat::Text, &[]).expect("text export");
        assert_eq!(path, out.join("gtm-strategy-ac-dc.txt"));
        assert!(fs::read_to_string(&path).expect("read export").starts_with("GTM STRATEGY FOR AC/DC\n"));
    }
}
