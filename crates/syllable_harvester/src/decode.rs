use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode raw page bytes into UTF-8 using: BOM -> Content-Type charset ->
/// chardetng fallback. Decoding is lossy; a page with a few bad bytes still
/// yields its pronunciation line.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> DecodedText {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim_matches([' ', '"', '\''].as_ref()))
        })
        .next()
        .map(|s| s.to_string())
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedText {
    let (text, used, had_errors) = enc.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
        had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_header_wins_over_detection() {
        // "ka·ra" in ISO-8859-1: the mid-dot is a single 0xB7 byte.
        let bytes = b"ka\xB7ra";
        let decoded = decode_text(bytes, Some("text/html; Charset=\"ISO-8859-1\""));
        assert_eq!(decoded.text, "ka\u{b7}ra");
        assert!(!decoded.had_errors);
    }

    #[test]
    fn utf8_bom_is_honoured() {
        let bytes = b"\xEF\xBB\xBFka\xC2\xB7ra";
        let decoded = decode_text(bytes, Some("text/html; charset=iso-8859-1"));
        assert_eq!(decoded.encoding_label, "UTF-8");
        assert_eq!(decoded.text, "ka\u{b7}ra");
    }

    #[test]
    fn plain_utf8_is_detected() {
        let decoded = decode_text("data=\"dic\u{b7}tion\"".as_bytes(), None);
        assert_eq!(decoded.text, "data=\"dic\u{b7}tion\"");
    }
}
