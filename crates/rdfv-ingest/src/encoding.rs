//! Text encoding normalization.
//!
//! Graph engines do not agree on the encoding of their textual output. Every
//! byte buffer that becomes report text goes through [`normalize_text`], which
//! applies a fixed fallback chain and always yields UTF-8:
//!
//! 1. UTF-8 byte order mark: strip it, decode strictly as UTF-8
//! 2. UTF-16LE / UTF-16BE byte order mark: decode as that encoding
//! 3. no byte order mark, valid UTF-8: decode as UTF-8
//! 4. anything else: decode as windows-1252 and flag the result as lossy
//!
//! Step 4 cannot fail, so normalization is total. Callers that must reject
//! anything but one specific encoding use [`normalize_strict`].

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use tracing::warn;

use crate::error::EncodingError;

/// Encodings the fallback chain can settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Windows1252,
}

impl TextEncoding {
    fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Utf16Le => UTF_16LE,
            Self::Utf16Be => UTF_16BE,
            Self::Windows1252 => WINDOWS_1252,
        }
    }

    fn from_encoding(encoding: &'static Encoding) -> Self {
        if encoding == UTF_16LE {
            Self::Utf16Le
        } else if encoding == UTF_16BE {
            Self::Utf16Be
        } else if encoding == WINDOWS_1252 {
            Self::Windows1252
        } else {
            Self::Utf8
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoding().name())
    }
}

/// Decoded text and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    pub encoding: TextEncoding,
    /// A byte order mark was present and removed.
    pub had_bom: bool,
    /// The text may not match what the producer meant: either the encoding
    /// was guessed (windows-1252 fallback) or malformed sequences were
    /// replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode bytes of unknown encoding into UTF-8 text.
pub fn normalize_text(bytes: &[u8]) -> NormalizedText {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let body = &bytes[bom_len..];
        let (text, had_errors) = encoding.decode_without_bom_handling(body);
        if had_errors {
            warn!(
                encoding = encoding.name(),
                "replaced malformed sequences while decoding"
            );
        }
        return NormalizedText {
            text: text.into_owned(),
            encoding: TextEncoding::from_encoding(encoding),
            had_bom: true,
            lossy: had_errors,
        };
    }

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return NormalizedText {
            text: text.into_owned(),
            encoding: TextEncoding::Utf8,
            had_bom: false,
            lossy: false,
        };
    }

    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    warn!(
        byte_len = bytes.len(),
        "input is not UTF-8, decoded as windows-1252"
    );
    NormalizedText {
        text: text.into_owned(),
        encoding: TextEncoding::Windows1252,
        had_bom: false,
        lossy: true,
    }
}

/// Decode bytes that must be in `encoding`. A matching byte order mark is
/// stripped; malformed input is rejected instead of replaced.
pub fn normalize_strict(bytes: &[u8], encoding: TextEncoding) -> Result<String, EncodingError> {
    let target = encoding.encoding();
    let (body, had_bom) = match Encoding::for_bom(bytes) {
        Some((found, bom_len)) if found == target => (&bytes[bom_len..], true),
        Some(_) => return Err(EncodingError::Malformed { encoding }),
        None => (bytes, false),
    };
    let decoded: Option<Cow<'_, str>> = if target == UTF_8 {
        UTF_8.decode_without_bom_handling_and_without_replacement(body)
    } else {
        let (text, had_errors) = target.decode_without_bom_handling(body);
        (!had_errors).then_some(text)
    };
    match decoded {
        Some(text) => {
            if had_bom {
                tracing::trace!(%encoding, "stripped byte order mark");
            }
            Ok(text.into_owned())
        }
        None => Err(EncodingError::Malformed { encoding }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_passes_through() {
        let out = normalize_text("café".as_bytes());
        assert_eq!(out.text, "café");
        assert_eq!(out.encoding, TextEncoding::Utf8);
        assert!(!out.had_bom);
        assert!(!out.lossy);
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"<a> <b> <c> .");
        let out = normalize_text(&bytes);
        assert_eq!(out.text, "<a> <b> <c> .");
        assert!(out.had_bom);
        assert_eq!(out.encoding, TextEncoding::Utf8);
    }

    #[test]
    fn utf16_is_detected_by_bom() {
        let mut le = vec![0xFF, 0xFE];
        for unit in "hé".encode_utf16() {
            le.extend_from_slice(&unit.to_le_bytes());
        }
        let out = normalize_text(&le);
        assert_eq!(out.text, "hé");
        assert_eq!(out.encoding, TextEncoding::Utf16Le);

        let mut be = vec![0xFE, 0xFF];
        for unit in "hé".encode_utf16() {
            be.extend_from_slice(&unit.to_be_bytes());
        }
        let out = normalize_text(&be);
        assert_eq!(out.text, "hé");
        assert_eq!(out.encoding, TextEncoding::Utf16Be);
    }

    #[test]
    fn invalid_utf8_falls_back_to_windows_1252() {
        // "caf\xE9" is latin-1 / windows-1252 for "café".
        let out = normalize_text(b"caf\xE9 \x93quoted\x94");
        assert_eq!(out.text, "café \u{201C}quoted\u{201D}");
        assert_eq!(out.encoding, TextEncoding::Windows1252);
        assert!(out.lossy);
    }

    #[test]
    fn empty_input_is_empty_utf8() {
        let out = normalize_text(b"");
        assert_eq!(out.text, "");
        assert_eq!(out.encoding, TextEncoding::Utf8);
        assert!(!out.lossy);
    }

    #[test]
    fn strict_rejects_malformed_input() {
        assert_eq!(
            normalize_strict(b"caf\xE9", TextEncoding::Utf8),
            Err(EncodingError::Malformed {
                encoding: TextEncoding::Utf8
            })
        );
        assert_eq!(
            normalize_strict(b"\xEF\xBB\xBFok", TextEncoding::Utf8).as_deref(),
            Ok("ok")
        );
        assert!(normalize_strict(b"\xFF\xFEo\x00", TextEncoding::Utf8).is_err());
        assert_eq!(
            normalize_strict(b"caf\xE9", TextEncoding::Windows1252).as_deref(),
            Ok("café")
        );
    }
}
