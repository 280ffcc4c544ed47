//! # Command Handlers
//!
//! One handler per subcommand: the interactive `wizard` and the
//! answers-file driven `generate`.

pub mod generate;
pub mod wizard;
