use super::ReplCommand;

/// Parse one input line into a command
///
/// - `:q` / `:quit` → Quit
/// - `:h` / `:help` → Help
/// - `@@` (or a bare `@`) → LoadClipboard
/// - `@path` → LoadFile
/// - blank → Empty
/// - any other text → Prompt
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Empty;
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            _ => ReplCommand::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Prompt(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_repl_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_repl_input(":h"), ReplCommand::Help);
        assert_eq!(parse_repl_input(":help"), ReplCommand::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_repl_input("@  poems.txt"),
            ReplCommand::LoadFile("poems.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_repl_input("@@"), ReplCommand::LoadClipboard);
        assert_eq!(parse_repl_input("@"), ReplCommand::LoadClipboard);
    }

    #[test]
    fn test_parse_prompt() {
        assert_eq!(
            parse_repl_input("  Tell me about the sea "),
            ReplCommand::Prompt("Tell me about the sea".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_repl_input(""), ReplCommand::Empty);
        assert_eq!(parse_repl_input(" \t "), ReplCommand::Empty);
    }

    #[test]
    fn test_parse_unknown_colon_command() {
        assert!(matches!(parse_repl_input(":wq"), ReplCommand::Unknown(_)));
    }
}
