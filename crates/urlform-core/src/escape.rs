//! Percent-escaping for form keys and values.
//!
//! The allowed set is the URL query character class with every RFC 3986
//! general delimiter (`: # [ ] @`) and sub-delimiter (`! $ & ' ( ) * + , ; =`)
//! removed, except `?` and `/`, which RFC 3986 §3.4 permits inside a query.
//! What remains unescaped:
//!
//! ```text
//! ALPHA / DIGIT / "-" / "." / "_" / "~" / "/" / "?"
//! ```
//!
//! Every other byte of the UTF-8 encoding becomes `%HH` with uppercase hex.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Whether `b` passes through unescaped.
pub fn is_allowed(b: u8) -> bool {
    matches!(b,
        b'A'..=b'Z'
        | b'a'..=b'z'
        | b'0'..=b'9'
        | b'-' | b'.' | b'_' | b'~'
        | b'/' | b'?'
    )
}

/// Percent-escape a string for use as a form key or value.
///
/// Keys and values go through the same function. Because a `&str` is always
/// valid UTF-8, escaping cannot fail.
///
/// ```
/// use urlform_core::escape;
///
/// assert_eq!(escape("a b&c"), "a%20b%26c");
/// assert_eq!(escape("tags[]"), "tags%5B%5D");
/// assert_eq!(escape("a/b?c"), "a/b?c");
/// ```
pub fn escape(s: &str) -> String {
    escape_bytes(s.as_bytes())
}

/// Percent-escape arbitrary bytes with the same policy as [`escape`].
pub fn escape_bytes(bytes: &[u8]) -> String {
    // Worst case every byte becomes "%XX"
    let mut out = String::with_capacity(bytes.len() * 3);
    for &b in bytes {
        if is_allowed(b) {
            out.push(b as char);
            continue;
        }
        out.push('%');
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0F) as usize] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_and_query_carve_outs_pass_through() {
        let s = "AZaz09-._~/?";
        assert_eq!(escape(s), s);
    }

    #[test]
    fn general_delimiters_are_escaped() {
        assert_eq!(escape(":#[]@"), "%3A%23%5B%5D%40");
    }

    #[test]
    fn sub_delimiters_are_escaped() {
        assert_eq!(escape("!$&'()*+,;="), "%21%24%26%27%28%29%2A%2B%2C%3B%3D");
    }

    #[test]
    fn space_percent_and_binary() {
        assert_eq!(escape(" %"), "%20%25");
        assert_eq!(escape_bytes(&[0x00, 0xFF, b'a']), "%00%FFa");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(escape("café"), "caf%C3%A9");
        assert_eq!(escape("你"), "%E4%BD%A0");
    }

    #[test]
    fn empty_string() {
        assert_eq!(escape(""), "");
    }
}
