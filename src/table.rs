//! The reference table: semaphore code -> decoded character.
//!
//! Values are taken as-is from the published table rather than derived from
//! the binary listing, since some punctuation assignments are conventional
//! and do not follow from counting alone.

use crate::code::MorseCode;
use crate::consts::{LINE_BREAK, SEMAPHORE_MAX};
use crate::error::{MorseError, MorseResult};
use serde::Serialize;
use tracing::debug;

#[rustfmt::skip]
pub static REF_TABLE: [Option<char>; SEMAPHORE_MAX] = [
    None,        // padding
    None,        // leading bit only
    Some('t'),   // 2 -
    Some('e'),   // 3 .
    Some('m'),   // 4 --
    Some('n'),   // 5 -.
    Some('a'),   // 6 .-
    Some('i'),   // 7 ..
    Some('o'),   // 8 ---
    Some('g'),   // 9 --.
    Some('k'),   // 10 -.-
    Some('d'),   // 11 -..
    Some('w'),   // 12 .--
    Some('r'),   // 13 .-.
    Some('u'),   // 14 ..-
    Some('s'),   // 15 ...
    None,        // 16 ----
    None,        // 17 ---.
    Some('q'),   // 18 --.-
    Some('z'),   // 19 --..
    Some('y'),   // 20 -.--
    Some('c'),   // 21 -.-.
    Some('x'),   // 22 -..-
    Some('b'),   // 23 -...
    Some('j'),   // 24 .---
    Some('p'),   // 25 .--.
    Some('\r'),  // 26 .-.-
    Some('l'),   // 27 .-..
    None,        // 28 ..--
    Some('f'),   // 29 ..-.
    Some('v'),   // 30 ...-
    Some('h'),   // 31 ....
    Some('0'),   // 32 -----
    Some('9'),   // 33 ----.
    None,        // 34 ---.-
    Some('8'),   // 35 ---..
    None,        // 36 --.--
    None,        // 37 --.-.
    None,        // 38 --..-
    Some('7'),   // 39 --...
    None,        // 40 -.---
    Some('('),   // 41 -.--.
    None,        // 42 -.-.-
    None,        // 43 -.-..
    None,        // 44 -..--
    Some('/'),   // 45 -..-.
    Some('='),   // 46 -...-
    Some('6'),   // 47 -....
    Some('1'),   // 48 .----
    None,        // 49 .---.
    None,        // 50 .--.-
    None,        // 51 .--..
    None,        // 52 .-.--
    Some('+'),   // 53 .-.-.
    None,        // 54 .-..-
    Some('&'),   // 55 .-...
    Some('2'),   // 56 ..---
    None,        // 57 ..--.
    None,        // 58 ..-.-
    None,        // 59 ..-..
    Some('3'),   // 60 ...--
    None,        // 61 ...-.
    Some('4'),   // 62 ....-
    Some('5'),   // 63 .....
    None,        // 64 ------
    None,        // 65 -----.
    None,        // 66 ----.-
    None,        // 67 ----..
    None,        // 68 ---.--
    None,        // 69 ---.-.
    None,        // 70 ---..-
    Some(':'),   // 71 ---...
    None,        // 72 --.---
    None,        // 73 --.--.
    None,        // 74 --.-.-
    None,        // 75 --.-..
    Some(','),   // 76 --..--
    None,        // 77 --..-.
    None,        // 78 --...-
    None,        // 79 --....
    None,        // 80 -.----
    None,        // 81 -.---.
    Some(')'),   // 82 -.--.-
    None,        // 83 -.--..
    Some('!'),   // 84 -.-.--
    None,        // 85 -.-.-.
    None,        // 86 -.-..-
    None,        // 87 -.-...
    None,        // 88 -..---
    None,        // 89 -..--.
    None,        // 90 -..-.-
    None,        // 91 -..-..
    None,        // 92 -...--
    None,        // 93 -...-.
    Some('-'),   // 94 -....-
    None,        // 95 -.....
    None,        // 96 .-----
    Some('\''),  // 97 .----.
    None,        // 98 .---.-
    None,        // 99 .---..
    None,        // 100 .--.--
    Some('@'),   // 101 .--.-.
    None,        // 102 .--..-
    None,        // 103 .--...
    None,        // 104 .-.---
    None,        // 105 .-.--.
    Some('.'),   // 106 .-.-.-
    None,        // 107 .-.-..
    None,        // 108 .-..--
    Some('"'),   // 109 .-..-.
    None,        // 110 .-...-
    None,        // 111 .-....
    None,        // 112 ..----
    None,        // 113 ..---.
    None,        // 114 ..--.-
    Some('?'),   // 115 ..--..
];

/// Entry for `code`, or `None` when the code has no assigned character.
#[inline]
pub fn lookup(code: usize) -> MorseResult<Option<char>> {
    REF_TABLE
        .get(code)
        .copied()
        .ok_or(MorseError::OutOfRange { code })
}

/// Like `lookup`, but an unassigned code is an error.
pub fn decode(code: usize) -> MorseResult<char> {
    lookup(code)?.ok_or(MorseError::Unassigned { code })
}

pub fn lookup_pattern(pattern: &str) -> MorseResult<Option<char>> {
    let code = MorseCode::from_pattern(pattern)?;
    let symbol = code.lookup();
    debug!("Pattern '{}' -> code {} -> {:?}", pattern, code.value(), symbol);
    symbol
}

pub fn is_line_break(ch: char) -> bool {
    ch == LINE_BREAK
}

pub fn assigned_count() -> usize {
    REF_TABLE.iter().filter(|s| s.is_some()).count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub code: usize,
    pub pattern: String,
    pub symbol: Option<char>,
}

/// One row per table index, skipping unassigned codes unless asked for.
pub fn rows(include_unassigned: bool) -> Vec<TableRow> {
    let rows: Vec<TableRow> = REF_TABLE
        .iter()
        .enumerate()
        .filter(|(_, symbol)| include_unassigned || symbol.is_some())
        .map(|(code, symbol)| TableRow {
            code,
            pattern: MorseCode::try_from(code)
                .ok()
                .and_then(MorseCode::pattern)
                .unwrap_or_default(),
            symbol: *symbol,
        })
        .collect();

    debug!(
        "Built {} table rows (include_unassigned = {})",
        rows.len(),
        include_unassigned
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_bounds() {
        assert_eq!(REF_TABLE.len(), 116);
        assert!(lookup(115).is_ok());
        assert!(matches!(lookup(116), Err(MorseError::OutOfRange { code: 116 })));
    }

    #[test]
    fn test_line_break_is_not_unassigned() {
        assert_eq!(decode(26).unwrap(), '\r');
        assert!(is_line_break(decode(26).unwrap()));
        assert!(matches!(decode(28), Err(MorseError::Unassigned { code: 28 })));
    }

    #[test]
    fn test_row_patterns_match_codes() {
        for row in rows(true).iter().skip(1) {
            let code = MorseCode::from_value(row.code as u8).unwrap();
            assert_eq!(row.pattern, code.pattern().unwrap());
        }
    }
}
