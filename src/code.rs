//! Semaphore codes: a dot/dash sequence packed into an integer.
//!
//! The sequence is written as binary behind a leading `1` bit, with a dot as `1`
//! and a dash as `0`. The leading bit keeps dashes at the front from vanishing:
//! `"-"` is `0b10` (2) and `"---"` is `0b1000` (8).

use crate::consts::{CODE_SPACE, MAX_ELEMENTS};
use crate::error::{MorseError, MorseResult};
use crate::table;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum Element {
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "-")]
    Dash,
}

impl Element {
    pub fn symbol(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }

    #[inline(always)]
    pub fn bit(self) -> u8 {
        match self {
            Self::Dot => 1,
            Self::Dash => 0,
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Dot),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MorseCode(u8);

impl MorseCode {
    /// The leading bit alone: a sequence with no elements yet.
    pub const EMPTY: MorseCode = MorseCode(1);

    /// Index 0 of the table. Not a sequence at all.
    pub const PADDING: MorseCode = MorseCode(0);

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn from_value(value: u8) -> MorseResult<Self> {
        if usize::from(value) >= CODE_SPACE {
            return Err(MorseError::OutOfRange {
                code: usize::from(value),
            });
        }
        Ok(MorseCode(value))
    }

    #[inline(always)]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn is_padding(self) -> bool {
        self.0 == 0
    }

    /// Number of dots and dashes (the leading bit is not counted).
    pub fn len(self) -> usize {
        let bits = (u8::BITS - self.0.leading_zeros()) as usize;
        bits.saturating_sub(1)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Appends one element. Padding is treated as the empty sequence.
    pub fn push(self, element: Element) -> MorseResult<Self> {
        let len = self.len();
        if len >= MAX_ELEMENTS {
            return Err(MorseError::PatternTooLong { len: len + 1 });
        }
        let base = if self.is_padding() { Self::EMPTY.0 } else { self.0 };
        Ok(MorseCode((base << 1) | element.bit()))
    }

    pub fn append_dot(self) -> MorseResult<Self> {
        self.push(Element::Dot)
    }

    pub fn append_dash(self) -> MorseResult<Self> {
        self.push(Element::Dash)
    }

    /// Elements in keying order (first keyed element first).
    pub fn elements(self) -> impl Iterator<Item = Element> {
        let value = self.0;
        (0..self.len()).rev().map(move |shift| {
            if (value >> shift) & 1 == 1 {
                Element::Dot
            } else {
                Element::Dash
            }
        })
    }

    pub fn from_pattern(pattern: &str) -> MorseResult<Self> {
        if pattern.is_empty() {
            return Err(MorseError::EmptyPattern);
        }

        let len = pattern.chars().count();
        if len > MAX_ELEMENTS {
            return Err(MorseError::PatternTooLong { len });
        }

        let mut code = Self::EMPTY;
        for (position, ch) in pattern.chars().enumerate() {
            let element =
                Element::from_symbol(ch).ok_or(MorseError::InvalidElement { ch, position })?;
            code = code.push(element)?;
        }
        Ok(code)
    }

    /// Dot/dash rendering. `None` for padding, `""` for the empty sequence.
    pub fn pattern(self) -> Option<String> {
        if self.is_padding() {
            return None;
        }
        Some(self.elements().map(Element::symbol).collect())
    }

    pub fn lookup(self) -> MorseResult<Option<char>> {
        table::lookup(self.index())
    }

    pub fn decode(self) -> MorseResult<char> {
        table::decode(self.index())
    }
}

impl Default for MorseCode {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromStr for MorseCode {
    type Err = MorseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pattern(s.trim())
    }
}

impl fmt::Display for MorseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pattern() {
            Some(p) => f.write_str(&p),
            None => f.write_str("<pad>"),
        }
    }
}

impl TryFrom<usize> for MorseCode {
    type Error = MorseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| MorseError::OutOfRange { code: value })
            .and_then(Self::from_value)
    }
}

/// Every value below `end` (capped at the code space) with its pattern.
/// This is the binary-counting listing the reference table was laid out from.
pub fn listing(end: usize) -> Vec<MorseCode> {
    (0..end.min(CODE_SPACE))
        .map(|v| MorseCode(v as u8))
        .collect()
}
