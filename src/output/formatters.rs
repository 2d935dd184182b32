//! Formatting utilities for terminal output

use crate::core::{Code, Colour};
use colored::{ColoredString, Colorize};

/// A colour name painted in (roughly) its own colour
#[must_use]
pub fn coloured_name(colour: Colour) -> ColoredString {
    match colour {
        Colour::Pink => colour.name().bright_magenta(),
        Colour::Red => colour.name().red(),
        Colour::Green => colour.name().green(),
        Colour::Blue => colour.name().blue(),
        Colour::Purple => colour.name().magenta(),
        Colour::Yellow => colour.name().yellow(),
    }
}

/// A full code as painted colour names
#[must_use]
pub fn coloured_code(code: &Code) -> String {
    code.colours()
        .iter()
        .map(|&c| coloured_name(c).to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coloured_code_contains_every_name() {
        let code = Code::parse("red green blue yellow").unwrap();
        let rendered = coloured_code(&code);

        for name in ["red", "green", "blue", "yellow"] {
            assert!(rendered.contains(name));
        }
    }
}
