//! Line-oriented command input.
//!
//! - **command.rs**: command definitions and conversion to AppEvent
//! - **parser.rs**: string parsing for `@` and `:` prefixes; anything else is a prompt

pub mod command;
pub mod parser;

pub use command::{command_to_app_event, ReplCommand};
pub use parser::parse_repl_input;

pub const HELP_TEXT: &str = "\
Type anything to have it rewritten.
  @<path>    render the sentences of a text file
  @@         render the sentences on the clipboard
  :h, :help  show this help
  :q, :quit  quit";
