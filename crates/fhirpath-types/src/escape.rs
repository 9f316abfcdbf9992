//! Escape sequence decoding for quoted FHIRPath literals
//!
//! Recognised escapes: `\'`, `\"`, `` \` ``, `\r`, `\n`, `\t`, `\f`, `\\`,
//! `\/` and `\uXXXX`. Decoding is a single left-to-right pass, so a
//! double-escaped sequence such as `\\n` decodes to a backslash followed by
//! `n` rather than to a newline.

use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// Errors produced while decoding escape sequences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// Backslash followed by a character that is not a known escape
    #[error("invalid escape sequence '\\{0}'")]
    UnknownEscape(char),

    /// Input ends with a lone backslash
    #[error("dangling escape at end of input")]
    Dangling,

    /// `\u` not followed by exactly four hex digits
    #[error("invalid unicode escape '\\u{0}'")]
    InvalidUnicode(String),

    /// High surrogate without a low surrogate, or a lone low surrogate
    #[error("unpaired surrogate '\\u{0:04x}'")]
    UnpairedSurrogate(u32),
}

/// Decode all escape sequences in `input`.
///
/// Characters that are not part of an escape pass through unchanged.
pub fn unescape(input: &str) -> Result<String, EscapeError> {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let escaped = chars.next().ok_or(EscapeError::Dangling)?;
        match escaped {
            '\'' | '"' | '`' | '\\' | '/' => result.push(escaped),
            'r' => result.push('\r'),
            'n' => result.push('\n'),
            't' => result.push('\t'),
            'f' => result.push('\u{000c}'),
            'u' => result.push(unicode_escape(&mut chars)?),
            other => return Err(EscapeError::UnknownEscape(other)),
        }
    }

    Ok(result)
}

fn unicode_escape(chars: &mut Peekable<Chars<'_>>) -> Result<char, EscapeError> {
    let high = hex4(chars)?;

    if (0xDC00..=0xDFFF).contains(&high) {
        return Err(EscapeError::UnpairedSurrogate(high));
    }

    if (0xD800..=0xDBFF).contains(&high) {
        // A high surrogate must be followed immediately by `\uXXXX` low surrogate
        if chars.next_if_eq(&'\\').is_none() || chars.next_if_eq(&'u').is_none() {
            return Err(EscapeError::UnpairedSurrogate(high));
        }
        let low = hex4(chars)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(EscapeError::UnpairedSurrogate(high));
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).ok_or(EscapeError::UnpairedSurrogate(high));
    }

    char::from_u32(high).ok_or_else(|| EscapeError::InvalidUnicode(format!("{:04x}", high)))
}

fn hex4(chars: &mut Peekable<Chars<'_>>) -> Result<u32, EscapeError> {
    let mut digits = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next_if(char::is_ascii_hexdigit) {
            Some(d) => digits.push(d),
            None => return Err(EscapeError::InvalidUnicode(digits)),
        }
    }
    u32::from_str_radix(&digits, 16).map_err(|_| EscapeError::InvalidUnicode(digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(unescape("hello world").unwrap(), "hello world");
        assert_eq!(unescape("").unwrap(), "");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(unescape(r"\n").unwrap(), "\n");
        assert_eq!(unescape(r"\r").unwrap(), "\r");
        assert_eq!(unescape(r"\t").unwrap(), "\t");
        assert_eq!(unescape(r"\f").unwrap(), "\u{000c}");
        assert_eq!(unescape(r"\'").unwrap(), "'");
        assert_eq!(unescape(r#"\""#).unwrap(), "\"");
        assert_eq!(unescape(r"\`").unwrap(), "`");
        assert_eq!(unescape(r"\\").unwrap(), "\\");
        assert_eq!(unescape(r"\/").unwrap(), "/");
    }

    #[test]
    fn test_double_escape_is_preserved() {
        assert_eq!(unescape(r"\\n").unwrap(), r"\n");
        assert_eq!(unescape(r"\\'").unwrap(), r"\'");
        assert_eq!(unescape(r"\\\\").unwrap(), r"\\");
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(unescape(r"\u044d\u0442\u043e").unwrap(), "это");
        assert_eq!(unescape(r"\u0041\u0042C").unwrap(), "ABC");
    }

    #[test]
    fn test_surrogate_pair_combines() {
        assert_eq!(unescape(r"\ud83d\ude00").unwrap(), "\u{1F600}");
    }

    #[test]
    fn test_unpaired_surrogates_fail() {
        assert_eq!(
            unescape(r"\ud83d"),
            Err(EscapeError::UnpairedSurrogate(0xd83d))
        );
        assert_eq!(
            unescape(r"\ude00"),
            Err(EscapeError::UnpairedSurrogate(0xde00))
        );
        assert_eq!(
            unescape(r"\ud83dA"),
            Err(EscapeError::UnpairedSurrogate(0xd83d))
        );
    }

    #[test]
    fn test_malformed_input_fails() {
        assert_eq!(unescape(r"abc\"), Err(EscapeError::Dangling));
        assert_eq!(unescape(r"\q"), Err(EscapeError::UnknownEscape('q')));
        assert_eq!(
            unescape(r"\u12"),
            Err(EscapeError::InvalidUnicode("12".to_string()))
        );
        assert_eq!(
            unescape(r"\u12g4"),
            Err(EscapeError::InvalidUnicode("12".to_string()))
        );
    }
}
