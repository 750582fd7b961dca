//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for first escapable character,
//! then bulk-copies segments between escapes.

use memchr::{memchr, memchr3};

/// Lookup table for escapable characters in text content.
/// Index by byte value, true if needs escaping.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into output buffer.
///
/// Escapes `<`, `>`, `&` and `"` to their HTML entity equivalents.
///
/// # Example
/// ```
/// use marktag::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"<script>");
/// assert_eq!(out, b"&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut Vec<u8>, input: &[u8]) {
    let Some(mut pos) = first_text_escape(input) else {
        out.extend_from_slice(input);
        return;
    };

    out.extend_from_slice(&input[..pos]);

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !TEXT_ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }

        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }

        if pos < input.len() {
            let escape_seq: &[u8] = match input[pos] {
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'&' => b"&amp;",
                b'"' => b"&quot;",
                _ => unreachable!(),
            };
            out.extend_from_slice(escape_seq);
            pos += 1;
        }
    }
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
