//! # Help Text
//!
//! Help for the wizard's dot-commands and the option listing printed by the
//! `options` subcommand.

use crate::domain::types::Field;
use crate::strings::wizard::{self, FieldOption};

pub const MAIN: &str = concat!(
    "**🧭 GTM Wizard Help**\n",
    "Answer each question by number, value or label.\n",
    "Press Enter to keep the current answer.\n",
    "\n",
    "**⚡ Commands**\n",
    "* .back: Previous step\n",
    "* .reset: Clear all answers and start over\n",
    "* .help: Show this help\n",
    "* .quit: Leave the wizard\n",
    "\n",
    "**📄 Results**\n",
    "* .export: Save the strategy as text\n",
    "* .json: Save the strategy as JSON\n"
);

fn format_options(options: &[FieldOption]) -> String {
    options
        .iter()
        .map(|choice| match choice.description {
            Some(description) => format!("  {:<12} {} ({})", choice.value, choice.label, description),
            None => format!("  {:<12} {}", choice.value, choice.label),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Valid values for every enumerated field, keyed as in answer files.
pub fn options_text() -> String {
    let mut sections = Vec::new();
    for field in Field::ALL {
        if field.is_free_text() {
            sections.push(format!("{field}: free text"));
        } else if field == Field::TargetMarket {
            sections.push(format!(
                "{field} (businessModel b2b):\n{}",
                format_options(wizard::COMPANY_SIZES)
            ));
            sections.push(format!(
                "{field} (businessModel b2c):\n{}",
                format_options(wizard::CUSTOMER_SEGMENTS)
            ));
        } else {
            sections.push(format!(
                "{field}:\n{}",
                format_options(wizard::options_for(field, ""))
            ));
        }
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_text_covers_every_field() {
        let text = options_text();
        for field in Field::ALL {
            assert!(text.contains(field.key()), "{field}");
        }
        assert!(text.contains("midmarket"));
        assert!(text.contains("premium"));
        assert!(text.contains("productName: free text"));
    }
}
