//! Command parsing for the sentence field
//!
//! Enter in the sentence field submits the text through this parser:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - any other `:` input → Unknown command
//! - anything else → the sentence to analyze, as typed

use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Analyze(String),
    Empty,
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Command::Empty;
    }

    if let Some(cmd) = trimmed.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(trimmed.to_string()),
        }
    } else {
        // the sentence echo shows the text exactly as typed
        Command::Analyze(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Analyze(sentence) => AppEvent::Submit(sentence),
        Command::Empty => AppEvent::None,
        Command::Unknown(input) => AppEvent::Invalid(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
        assert_eq!(parse_command("  :q "), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_sentence_kept_as_typed() {
        assert_eq!(
            parse_command(" Кот сидит. "),
            Command::Analyze(" Кот сидит. ".to_string())
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command(":open"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event_submit() {
        let event = command_to_app_event(Command::Analyze("кот".to_string()));
        assert_eq!(event, AppEvent::Submit("кот".to_string()));
    }

    #[test]
    fn test_command_to_app_event_quit() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
    }

    #[test]
    fn test_command_to_app_event_empty() {
        assert_eq!(command_to_app_event(Command::Empty), AppEvent::None);
    }

    #[test]
    fn test_command_to_app_event_unknown() {
        let event = command_to_app_event(Command::Unknown(":x".to_string()));
        assert!(matches!(event, AppEvent::Invalid(_)));
    }
}
