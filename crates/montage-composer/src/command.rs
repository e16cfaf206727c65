//! Wireless command decoding and resolution
//!
//! A write goes through two stages: [`decode`] turns the raw payload into
//! text, then [`CommandParser::parse`] tokenizes it and resolves both tokens.
//! Each stage fails with its own [`CommandError`] variant.

use core::fmt;

use heapless::String;

use crate::Rgb;
use crate::geometry::{Montage, MontageTable, Selection};
use crate::palette::Palette;

/// Longest token kept for diagnostics
pub const MAX_TOKEN_LEN: usize = 24;

/// Token captured for diagnostics, truncated to [`MAX_TOKEN_LEN`] bytes
pub type Token = String<MAX_TOKEN_LEN>;

/// Rejection reasons for a wireless command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Payload is not valid UTF-8
    Decode,
    /// Wrong number of whitespace separated tokens
    Malformed { tokens: usize },
    /// First token names no montage
    UnknownMontage(Token),
    /// Second token names no color
    UnknownColor(Token),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Decode => write!(f, "payload is not valid UTF-8"),
            CommandError::Malformed { tokens } => {
                write!(f, "expected '<montage> <color>', got {} token(s)", tokens)
            }
            CommandError::UnknownMontage(token) => write!(f, "unknown montage '{}'", token),
            CommandError::UnknownColor(token) => write!(f, "unknown color '{}'", token),
        }
    }
}

impl core::error::Error for CommandError {}

/// A fully resolved command, ready for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRequest<'a> {
    /// Turn every chain off
    Off,
    /// Light a montage in a color
    Montage { montage: &'a Montage, color: Rgb },
}

impl RenderRequest<'_> {
    /// Name of the requested montage, `off` included
    pub const fn name(&self) -> &'static str {
        match self {
            RenderRequest::Off => crate::geometry::OFF,
            RenderRequest::Montage { montage, .. } => montage.name,
        }
    }
}

/// Decode a raw characteristic payload into command text
///
/// Trailing NUL padding left by fixed size attribute buffers is dropped.
pub fn decode(payload: &[u8]) -> Result<&str, CommandError> {
    let text = core::str::from_utf8(payload).map_err(|_| CommandError::Decode)?;
    Ok(text.trim_end_matches('\0'))
}

/// Resolves command text against a montage table and a palette
#[derive(Debug, Clone, Copy)]
pub struct CommandParser<'a> {
    montages: &'a MontageTable,
    palette: Palette,
}

impl<'a> CommandParser<'a> {
    pub const fn new(montages: &'a MontageTable, palette: Palette) -> Self {
        Self { montages, palette }
    }

    /// Parse `"<montage> <color>"`
    ///
    /// The `off` sentinel needs no color; a second token after it is
    /// ignored without being resolved. Anything else needs exactly two
    /// tokens.
    pub fn parse(&self, text: &str) -> Result<RenderRequest<'a>, CommandError> {
        let mut tokens = text.split_whitespace();
        let Some(montage_token) = tokens.next() else {
            return Err(CommandError::Malformed { tokens: 0 });
        };
        let color_token = tokens.next();
        let extra = tokens.count();
        if extra > 0 {
            return Err(CommandError::Malformed { tokens: 2 + extra });
        }

        let selection = self.montages.resolve(montage_token);
        if selection == Some(Selection::Off) {
            return Ok(RenderRequest::Off);
        }

        let Some(color_token) = color_token else {
            return Err(CommandError::Malformed { tokens: 1 });
        };

        let Some(Selection::Montage(montage)) = selection else {
            return Err(CommandError::UnknownMontage(capture(montage_token)));
        };

        let color = self
            .palette
            .resolve(color_token)
            .ok_or_else(|| CommandError::UnknownColor(capture(color_token)))?;

        Ok(RenderRequest::Montage { montage, color })
    }
}

/// Copy a token for diagnostics, stopping at the capacity on a char boundary
fn capture(token: &str) -> Token {
    let mut captured = Token::new();
    for c in token.chars() {
        if captured.push(c).is_err() {
            break;
        }
    }
    captured
}
