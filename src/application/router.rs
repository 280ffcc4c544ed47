//! # Input Router
//!
//! Turns a raw input line into a wizard command: dot-commands are matched
//! by name, everything else is an answer for the field being asked.

use crate::application::export::ExportFormat;
use crate::domain::types::Field;
use crate::strings::wizard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Back,
    Reset,
    Help,
    Quit,
    Export(ExportFormat),
    Unknown(String),
    Answer(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        ".back" => Command::Back,
        ".reset" => Command::Reset,
        ".help" => Command::Help,
        ".quit" => Command::Quit,
        ".export" => Command::Export(ExportFormat::Text),
        ".json" => Command::Export(ExportFormat::Json),
        cmd if cmd.starts_with('.') && !cmd.contains(char::is_whitespace) => {
            Command::Unknown(cmd.to_string())
        }
        _ => Command::Answer(line.to_string()),
    }
}

/// Maps an answer onto the stored value for `field`.
///
/// Enumerated fields accept the option number, value or label (any case).
/// Anything else is kept verbatim and will take the lookup fallback later.
pub fn resolve_choice(field: Field, business_model: &str, input: &str) -> String {
    if field.is_free_text() {
        return input.to_string();
    }

    let options = wizard::options_for(field, business_model);
    let trimmed = input.trim();

    if let Ok(number) = trimmed.parse::<usize>()
        && let Some(choice) = number.checked_sub(1).and_then(|i| options.get(i))
    {
        return choice.value.to_string();
    }

    options
        .iter()
        .find(|choice| {
            choice.value.eq_ignore_ascii_case(trimmed) || choice.label.eq_ignore_ascii_case(trimmed)
        })
        .map(|choice| choice.value.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::help;

    #[test]
    fn test_parse_dot_commands() {
        assert_eq!(parse_command(".back"), Command::Back);
        assert_eq!(parse_command(" .reset \r\n"), Command::Reset);
        assert_eq!(parse_command(".json"), Command::Export(ExportFormat::Json));
        assert_eq!(parse_command(".frobnicate"), Command::Unknown(".frobnicate".to_string()));
        assert_eq!(
            parse_command(".NET migration tooling"),
            Command::Answer(".NET migration tooling".to_string())
        );
        assert_eq!(parse_command("Acme\n"), Command::Answer("Acme".to_string()));
    }

    #[test]
    fn test_only_documented_commands_are_recognized() {
        for word in [".new", ".exit", ".cancel"] {
            assert_eq!(parse_command(word), Command::Unknown(word.to_string()));
        }
        for word in [".back", ".reset", ".help", ".quit", ".export", ".json"] {
            assert!(help::MAIN.contains(word), "{word} is not in the help text");
        }
    }

    #[test]
    fn test_resolve_choice_by_number_value_and_label() {
        assert_eq!(resolve_choice(Field::ProductType, "", "1"), "saas");
        assert_eq!(resolve_choice(Field::ProductType, "", "Platform"), "platform");
        assert_eq!(resolve_choice(Field::BusinessModel, "", "B2C"), "b2c");
        assert_eq!(resolve_choice(Field::PrimaryGoal, "", "lead generation"), "leads");
        assert_eq!(resolve_choice(Field::Budget, "", " 3 "), "high");
    }

    #[test]
    fn test_target_market_numbers_depend_on_model() {
        assert_eq!(resolve_choice(Field::TargetMarket, "b2b", "2"), "midmarket");
        assert_eq!(resolve_choice(Field::TargetMarket, "b2c", "2"), "premium");
    }

    #[test]
    fn test_unknown_choices_and_free_text_pass_through() {
        assert_eq!(resolve_choice(Field::ProductType, "", "9"), "9");
        assert_eq!(resolve_choice(Field::Timeline, "", "someday"), "someday");
        assert_eq!(resolve_choice(Field::ProductName, "", " Acme 2 "), " Acme 2 ");
    }
}
