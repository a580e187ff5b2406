use crate::error::{PokedexError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

pub struct CommandInfo {
    pub usage: &'static str,
    pub description: &'static str,
}

/// Help table, in display order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        usage: "map",
        description: "Displays the next page of location areas",
    },
    CommandInfo {
        usage: "mapb",
        description: "Displays the previous page of location areas",
    },
    CommandInfo {
        usage: "explore <location>",
        description: "Lists the pokemon found in a location area",
    },
    CommandInfo {
        usage: "catch <pokemon>",
        description: "Throws a Pokeball; harder pokemon have a higher base experience",
    },
    CommandInfo {
        usage: "inspect <pokemon>",
        description: "Shows the details of a caught pokemon (alias: identify)",
    },
    CommandInfo {
        usage: "pokedex",
        description: "Lists the pokemon you have caught",
    },
    CommandInfo {
        usage: "exit",
        description: "Exits the Pokedex",
    },
];

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match word.to_lowercase().as_str() {
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => Self::Explore(required(arg, "explore", "location")?),
            "catch" => Self::Catch(required(arg, "catch", "pokemon")?),
            "inspect" | "identify" => Self::Inspect(required(arg, "inspect", "pokemon")?),
            "pokedex" => Self::Pokedex,
            _ => return Err(PokedexError::UnknownCommand(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn required(arg: Option<&str>, command: &'static str, argument: &'static str) -> Result<String> {
    arg.map(str::to_lowercase)
        .ok_or(PokedexError::MissingArgument { command, argument })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
    }

    #[test]
    fn simple_commands() {
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("map").unwrap(), Some(Command::Map));
        assert_eq!(Command::parse("mapb").unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse("pokedex").unwrap(), Some(Command::Pokedex));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn command_word_is_case_insensitive() {
        assert_eq!(Command::parse("  MAP  ").unwrap(), Some(Command::Map));
    }

    #[test]
    fn argument_is_lowercased() {
        assert_eq!(
            Command::parse("catch Pikachu").unwrap(),
            Some(Command::Catch("pikachu".into()))
        );
    }

    #[test]
    fn identify_is_an_alias_for_inspect() {
        assert_eq!(
            Command::parse("identify eevee").unwrap(),
            Some(Command::Inspect("eevee".into()))
        );
    }

    #[test]
    fn missing_argument_is_an_error() {
        let err = Command::parse("explore").unwrap_err();
        assert_eq!(err.to_string(), "usage: explore <location>");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = Command::parse("fly pallet-town").unwrap_err();
        assert!(matches!(err, PokedexError::UnknownCommand(ref w) if w == "fly"));
    }

    #[test]
    fn help_table_covers_every_command() {
        for info in COMMANDS {
            let word = info.usage.split_whitespace().next().unwrap();
            let line = format!("{word} x");
            assert!(Command::parse(&line).is_ok(), "{word} should parse");
        }
    }
}
