//! The "encryption" toy and the glyph substitution cipher
//!
//! No confidentiality is provided or pretended at: a transmission is the
//! base64 form of the text with its characters reversed, which makes
//! decode(encode(x)) == x for any UTF-8 input.

use crate::content::{GLYPH_CIPHER, OMINOUS_FALLBACK};
use crate::TerminalError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode a message into its "secure transmission" form
pub fn encode_transmission(message: &str) -> String {
    STANDARD.encode(message.as_bytes()).chars().rev().collect()
}

/// Reverse of [`encode_transmission`]
///
/// Fails on anything that does not reverse into valid base64 of UTF-8 text.
pub fn decode_transmission(code: &str) -> Result<String, TerminalError> {
    let reversed: String = code.chars().rev().collect();
    let bytes = STANDARD
        .decode(reversed.as_bytes())
        .map_err(|e| TerminalError::DecodeFailure(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TerminalError::DecodeFailure(e.to_string()))
}

/// Substitute every known glyph in the input with its decoded word
///
/// Input with no known glyphs "decodes" to the fixed ominous line instead.
pub fn decode_glyphs(input: &str) -> String {
    let mut decoded = String::with_capacity(input.len());
    let mut substituted = false;

    for ch in input.chars() {
        match GLYPH_CIPHER.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, word)) => {
                decoded.push_str(word);
                substituted = true;
            }
            None => decoded.push(ch),
        }
    }

    if substituted {
        decoded
    } else {
        OMINOUS_FALLBACK.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transmission_round_trips() {
        for message in ["HELLO", "the operator is near", "x", "spaces and 123!?"] {
            let encoded = encode_transmission(message);
            assert_eq!(decode_transmission(&encoded).unwrap(), message);
        }
    }

    #[test]
    fn hello_encodes_to_reversed_base64() {
        // base64("HELLO") == "SEVMTE8=", reversed
        assert_eq!(encode_transmission("HELLO"), "=8ETMVES");
        assert_eq!(decode_transmission("=8ETMVES").unwrap(), "HELLO");
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(decode_transmission("not!valid!").is_err());
        // valid base64 shape but not UTF-8 once decoded
        let reversed: String = STANDARD.encode([0xff, 0xfe, 0xfd]).chars().rev().collect();
        assert!(decode_transmission(&reversed).is_err());
    }

    #[test]
    fn glyphs_substitute_everywhere() {
        assert_eq!(decode_glyphs("▲ ▲"), "WATCH WATCH");
        assert_eq!(decode_glyphs("█a░"), "FOLLOWaCONNECT");
    }

    #[test]
    fn glyph_free_input_is_ominous() {
        assert_eq!(decode_glyphs("just text"), OMINOUS_FALLBACK);
    }
}
