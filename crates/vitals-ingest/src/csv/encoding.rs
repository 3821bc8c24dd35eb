//! Text encoding detection for uploaded exports.

use std::borrow::Cow;

use encoding_rs::{Encoding, SHIFT_JIS};

use crate::error::{IngestError, Result};

/// Decodes raw file bytes to text.
///
/// A byte-order mark selects UTF-8 or UTF-16 and is stripped. Without a BOM
/// the bytes must be UTF-8, otherwise they are decoded as Shift_JIS, which
/// is what spreadsheet tools on Japanese systems write.
pub fn decode_text(bytes: &[u8]) -> Result<Cow<'_, str>> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(encoding, &bytes[bom_len..]);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            tracing::debug!("input is not UTF-8, falling back to Shift_JIS");
            decode_with(SHIFT_JIS, bytes)
        }
    }
}

fn decode_with<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(IngestError::UnsupportedEncoding {
            encoding: encoding.name(),
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_borrowed() {
        let text = decode_text("Date,Steps".as_bytes()).unwrap();
        assert!(matches!(text, Cow::Borrowed("Date,Steps")));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let text = decode_text("\u{feff}日付,歩数".as_bytes()).unwrap();
        assert_eq!(text, "日付,歩数");
    }

    #[test]
    fn shift_jis_is_decoded() {
        let (bytes, _, _) = SHIFT_JIS.encode("日付,体重");
        let text = decode_text(&bytes).unwrap();
        assert_eq!(text, "日付,体重");
    }

    #[test]
    fn utf16_le_with_bom_is_decoded() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "date,steps".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_text(&bytes).unwrap(), "date,steps");
    }
}
