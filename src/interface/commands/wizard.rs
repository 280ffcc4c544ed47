//! # Wizard Command Handler
//!
//! Drives the interactive questionnaire over a `Console`. The session keeps
//! the wizard state value plus a cursor into the current step's fields; all
//! answer changes go through `WizardState::apply`.

use crate::application::export::{self, ExportFormat};
use crate::application::router::{self, Command};
use crate::application::state::{Outcome, WizardEvent, WizardState, WizardStep};
use crate::domain::config::AppConfig;
use crate::domain::error::StrategyError;
use crate::domain::traits::Console;
use crate::domain::types::{Field, LookupPolicy};
use crate::strings::{help, logs, messages, wizard as text};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Continue,
    Export(ExportFormat),
    Quit,
}

#[derive(Debug)]
pub struct Reply {
    pub messages: Vec<String>,
    pub action: WizardAction,
}

impl Reply {
    fn say(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            action: WizardAction::Continue,
        }
    }

    fn silent() -> Self {
        Self {
            messages: Vec::new(),
            action: WizardAction::Continue,
        }
    }
}

pub struct Session {
    state: WizardState,
    /// Index into the current step's fields of the one being asked.
    cursor: usize,
    policy: LookupPolicy,
}

impl Session {
    pub fn new(policy: LookupPolicy) -> Self {
        Self {
            state: WizardState::new(),
            cursor: 0,
            policy,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    fn current_field(&self) -> Option<Field> {
        self.state.step().fields().get(self.cursor).copied()
    }

    fn apply(&mut self, event: WizardEvent) -> Outcome {
        let transition = std::mem::take(&mut self.state).apply(event, self.policy);
        self.state = transition.state;
        transition.outcome
    }

    /// What to show before reading the next line.
    pub fn prompt(&self) -> String {
        let step = self.state.step();
        let Some(field) = self.current_field() else {
            return messages::RESULTS_MENU.to_string();
        };

        let mut output = String::new();
        if self.cursor == 0 {
            output.push_str(&text::format_step_header(step));
            output.push_str("\n\n");
        }
        output.push_str(&text::format_field_prompt(field, self.state.answers()));
        if self.cursor + 1 == step.fields().len() {
            output.push('\n');
            output.push_str(&messages::advance_hint(text::advance_label(step)));
        }
        output
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match router::parse_command(line) {
            Command::Quit => Reply {
                messages: vec![messages::WIZARD_QUIT.to_string()],
                action: WizardAction::Quit,
            },
            Command::Help => Reply::say(help::MAIN),
            // `.NET` is a valid product name.
            Command::Unknown(_) if self.current_field().is_some_and(Field::is_free_text) => {
                self.answer(line.trim_end_matches(['\r', '\n']))
            }
            Command::Unknown(_) => Reply::say(messages::UNKNOWN_COMMAND),
            Command::Back => self.back(),
            Command::Reset => {
                self.apply(WizardEvent::Reset);
                self.cursor = 0;
                tracing::info!("{}", logs::WIZARD_RESET);
                Reply::say(messages::WIZARD_RESET)
            }
            Command::Export(format) => {
                if self.state.strategy().is_some() && self.state.step() == WizardStep::Results {
                    Reply {
                        messages: Vec::new(),
                        action: WizardAction::Export(format),
                    }
                } else {
                    Reply::say(messages::RESULTS_ONLY)
                }
            }
            Command::Answer(input) => self.answer(&input),
        }
    }

    fn back(&mut self) -> Reply {
        match self.apply(WizardEvent::Back) {
            Outcome::Retreated(step) => {
                self.cursor = 0;
                tracing::debug!("{}", logs::wizard_step(step.number()));
                Reply::silent()
            }
            _ => Reply::say(messages::ALREADY_FIRST_STEP),
        }
    }

    fn answer(&mut self, input: &str) -> Reply {
        let Some(field) = self.current_field() else {
            return Reply::say(messages::ANSWERS_FROZEN);
        };

        let keep_current = input.trim().is_empty() && !self.state.answers().get(field).is_empty();
        if !keep_current {
            let value = router::resolve_choice(field, &self.state.answers().business_model, input);
            self.apply(WizardEvent::Set { field, value });
        }

        if self.answers_missing(field) {
            return Reply::silent();
        }

        self.cursor += 1;
        if self.cursor < self.state.step().fields().len() {
            return Reply::silent();
        }
        self.advance()
    }

    fn answers_missing(&self, field: Field) -> bool {
        self.state.answers().get(field).is_empty()
    }

    fn advance(&mut self) -> Reply {
        match self.apply(WizardEvent::Next) {
            Outcome::Advanced(step) => {
                self.cursor = 0;
                tracing::debug!("{}", logs::wizard_step(step.number()));
                Reply::silent()
            }
            Outcome::Generated(strategy) => {
                self.cursor = 0;
                Reply::say(text::format_results(self.state.answers(), &strategy))
            }
            Outcome::Blocked { missing } => {
                let fields = self.state.step().fields();
                self.cursor = missing
                    .first()
                    .and_then(|field| fields.iter().position(|f| f == field))
                    .unwrap_or(0);
                Reply::say(messages::missing_fields(&missing))
            }
            Outcome::Failed(err) => {
                self.cursor = 0;
                tracing::warn!("{}", err);
                Reply::say(messages::generation_failed(&err.to_string()))
            }
            _ => Reply::silent(),
        }
    }

    /// Writes the generated strategy to the configured output directory.
    pub fn export(&self, config: &AppConfig, format: ExportFormat) -> Result<PathBuf> {
        let strategy = self.state.strategy().ok_or(StrategyError::NotGenerated)?;
        export::write_export(
            &config.export.directory,
            self.state.answers(),
            strategy,
            format,
            &config.report.attribution,
        )
    }
}

/// Runs the wizard until `.quit` or end of input.
pub async fn run(config: &AppConfig, console: &impl Console) -> Result<()> {
    let mut session = Session::new(config.lookup_policy());
    tracing::info!("{}", logs::WIZARD_STARTED);
    console.send_message(messages::WELCOME).await?;

    loop {
        console.send_message(&session.prompt()).await?;
        let Some(line) = console.read_line().await? else {
            break;
        };

        let reply = session.handle_line(&line);
        for message in &reply.messages {
            console.send_message(message).await?;
        }

        match reply.action {
            WizardAction::Continue => {}
            WizardAction::Quit => break,
            WizardAction::Export(format) => match session.export(config, format) {
                Ok(path) => {
                    console
                        .send_message(&messages::strategy_exported(&path.display().to_string()))
                        .await?
                }
                Err(err) => {
                    tracing::error!("{:#}", err);
                    console
                        .send_message(&messages::export_failed(&format!("{err:#}")))
                        .await?
                }
            },
        }
    }

    tracing::info!("{}", logs::WIZARD_ENDED);
    Ok(())
}
