use crate::domain::error::LookupMiss;

pub const STARTUP: &str = "Starting GTM wizard...";
pub const CONFIG_DEFAULTS: &str = "No config file found, using defaults";
pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML config";
pub const WIZARD_STARTED: &str = "Interactive wizard started";
pub const WIZARD_ENDED: &str = "Interactive wizard ended";
pub const WIZARD_RESET: &str = "Wizard reset";

pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub fn config_read_error(path: &str) -> String {
    format!("Failed to read config file {path}")
}

pub fn answers_loaded(path: &str) -> String {
    format!("Loaded answers from {path}")
}

pub fn answers_read_error(path: &str) -> String {
    format!("Failed to read answers file {path}")
}

pub fn answers_parse_error(path: &str) -> String {
    format!("Failed to parse answers file {path}")
}

pub fn wizard_step(number: u8) -> String {
    format!("Wizard moved to step {number}")
}

pub fn lookup_fallback(miss: &LookupMiss) -> String {
    format!("Lookup fallback: {miss}")
}

pub fn strategy_generated(product_name: &str) -> String {
    format!("Strategy generated for '{product_name}'")
}

pub fn strategy_exported(path: &str) -> String {
    format!("Strategy exported to {path}")
}
