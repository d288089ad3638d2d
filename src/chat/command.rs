use inquire::autocompletion::{Autocomplete, Replacement};

/// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/answer", "Show the last answer and meal plan again"),
    ("/clear", "Clear the last question and answer"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/meal", "Generate a personalized meal prep plan"),
    ("/quit", "Exit Chef Maestro"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        Ok(SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(ToString::to_string)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Answer,
    Clear,
    Config,
    Help,
    Meal,
    Quit,
    Unknown(String),
}

/// One line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A question for Chef Maestro. May be blank.
    Question(String),
    Command(SlashCommand),
}

/// Splits a line into a slash command or a question.
///
/// Surrounding whitespace only matters for command detection; questions keep
/// the line exactly as typed.
pub fn parse_input(input: &str) -> Input {
    input.trim().strip_prefix('/').map_or_else(
        || Input::Question(input.to_string()),
        |cmd| Input::Command(parse_slash_command(cmd)),
    )
}

fn parse_slash_command(cmd: &str) -> SlashCommand {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("answer" | "last") => SlashCommand::Answer,
        Some("clear") => SlashCommand::Clear,
        Some("config") => SlashCommand::Config,
        Some("help" | "?") => SlashCommand::Help,
        Some("meal" | "mealprep") => SlashCommand::Meal,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_input_is_blank_question() {
        assert_eq!(parse_input(""), Input::Question(String::new()));
        assert_eq!(parse_input("   "), Input::Question("   ".to_string()));
    }

    #[test]
    fn test_parse_question_keeps_text_as_typed() {
        assert_eq!(
            parse_input("  How can I replace eggs in baking? "),
            Input::Question("  How can I replace eggs in baking? ".to_string())
        );
    }

    #[test]
    fn test_parse_command_ignores_surrounding_whitespace() {
        assert_eq!(parse_input("  /meal  "), Input::Command(SlashCommand::Meal));
    }

    #[test]
    fn test_parse_commands() {
        let cases = [
            ("/answer", SlashCommand::Answer),
            ("/clear", SlashCommand::Clear),
            ("/config", SlashCommand::Config),
            ("/help", SlashCommand::Help),
            ("/meal", SlashCommand::Meal),
            ("/mealprep", SlashCommand::Meal),
            ("/quit", SlashCommand::Quit),
            ("/exit", SlashCommand::Quit),
            ("/q", SlashCommand::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(parse_input(line), Input::Command(expected), "{line}");
        }
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/bake bread"),
            Input::Command(SlashCommand::Unknown("bake bread".to_string()))
        );
    }

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        assert!(completer.get_suggestions("soufflé").unwrap().is_empty());
    }

    #[test]
    fn test_completer_lists_all_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_filters_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/m").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/meal"));

        let suggestions = completer.get_suggestions("/c").unwrap();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/meal  Generate a personalized meal prep plan".to_string();
        let completion = completer.get_completion("/m", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/meal".to_string()));

        assert!(completer.get_completion("/x", None).unwrap().is_none());
    }
}
