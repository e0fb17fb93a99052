//! Level colors
//!
//! Colors are named by the tokens used in level definitions
//! (`"blue"`, `"yellowBright"`, `"gray"`, ...).

use std::fmt;
use std::str::FromStr;

use colored::{Color, Colorize};

use crate::error::LogError;

/// Display color of a level tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,
}

impl LevelColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelColor::Black => "black",
            LevelColor::Red => "red",
            LevelColor::Green => "green",
            LevelColor::Yellow => "yellow",
            LevelColor::Blue => "blue",
            LevelColor::Magenta => "magenta",
            LevelColor::Cyan => "cyan",
            LevelColor::White => "white",
            LevelColor::Gray => "gray",
            LevelColor::RedBright => "redBright",
            LevelColor::GreenBright => "greenBright",
            LevelColor::YellowBright => "yellowBright",
            LevelColor::BlueBright => "blueBright",
            LevelColor::MagentaBright => "magentaBright",
            LevelColor::CyanBright => "cyanBright",
            LevelColor::WhiteBright => "whiteBright",
        }
    }

    fn terminal_color(&self) -> Color {
        match self {
            LevelColor::Black => Color::Black,
            LevelColor::Red => Color::Red,
            LevelColor::Green => Color::Green,
            LevelColor::Yellow => Color::Yellow,
            LevelColor::Blue => Color::Blue,
            LevelColor::Magenta => Color::Magenta,
            LevelColor::Cyan => Color::Cyan,
            LevelColor::White => Color::White,
            LevelColor::Gray => Color::BrightBlack,
            LevelColor::RedBright => Color::BrightRed,
            LevelColor::GreenBright => Color::BrightGreen,
            LevelColor::YellowBright => Color::BrightYellow,
            LevelColor::BlueBright => Color::BrightBlue,
            LevelColor::MagentaBright => Color::BrightMagenta,
            LevelColor::CyanBright => Color::BrightCyan,
            LevelColor::WhiteBright => Color::BrightWhite,
        }
    }

    /// Wrap text in this color's ANSI escape codes
    pub fn paint(&self, text: &str) -> String {
        text.color(self.terminal_color()).to_string()
    }
}

impl fmt::Display for LevelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelColor {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s {
            "black" => LevelColor::Black,
            "red" => LevelColor::Red,
            "green" => LevelColor::Green,
            "yellow" => LevelColor::Yellow,
            "blue" => LevelColor::Blue,
            "magenta" => LevelColor::Magenta,
            "cyan" => LevelColor::Cyan,
            "white" => LevelColor::White,
            "gray" | "grey" | "blackBright" => LevelColor::Gray,
            "redBright" => LevelColor::RedBright,
            "greenBright" => LevelColor::GreenBright,
            "yellowBright" => LevelColor::YellowBright,
            "blueBright" => LevelColor::BlueBright,
            "magentaBright" => LevelColor::MagentaBright,
            "cyanBright" => LevelColor::CyanBright,
            "whiteBright" => LevelColor::WhiteBright,
            other => {
                return Err(LogError::invalid_definition(format!(
                    "unknown color: {}",
                    other
                )))
            }
        };
        Ok(color)
    }
}
