//! Plain text: one item per line.

use super::split_lines;
use crate::error::{ListCompareError, ParseErrorKind, Result};

pub(super) fn parse_text(bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        ListCompareError::parse("reading text file", ParseErrorKind::InvalidEncoding(e.to_string()))
    })?;
    Ok(split_lines(text.strip_prefix('\u{feff}').unwrap_or(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_strips_bom_and_blank_lines() {
        let bytes = "\u{feff}Apple\r\n\r\n  Banana  \n".as_bytes();
        assert_eq!(parse_text(bytes).unwrap(), vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_parse_text_rejects_invalid_utf8() {
        let err = parse_text(&[0x66, 0x6f, 0xff, 0x6f]).unwrap_err();
        assert!(matches!(
            err,
            ListCompareError::Parse {
                source: ParseErrorKind::InvalidEncoding(_),
                ..
            }
        ));
    }
}
