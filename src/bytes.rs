//! Byte-level helpers for reading CoNLL-U lines without UTF-8 validation
//! on the hot path

use atoi::FromRadix10Checked;
use bstr::ByteSlice;

/// Split a line into its tab-separated columns
#[inline]
pub fn split_fields(line: &[u8]) -> Vec<&[u8]> {
    let mut fields = Vec::with_capacity(10);
    let mut start = 0;
    for tab in memchr::memchr_iter(b'\t', line) {
        fields.push(&line[start..tab]);
        start = tab + 1;
    }
    fields.push(&line[start..]);
    fields
}

// Divide a bytestring into two at delim
#[inline]
pub fn bs_split_once(bytes: &[u8], delim: u8) -> Option<(&[u8], &[u8])> {
    let pos = memchr::memchr(delim, bytes)?;
    Some((&bytes[..pos], &bytes[pos + 1..]))
}

/// Parse a non-empty run of ASCII digits; anything else (or overflow) is `None`
#[inline]
pub fn bs_atoi(bytes: &[u8]) -> Option<usize> {
    if bytes.is_empty() {
        return None;
    }
    match usize::from_radix_10_checked(bytes) {
        (Some(n), used) if used == bytes.len() => Some(n),
        _ => None,
    }
}

/// Owned string from column bytes, replacing invalid UTF-8
#[inline]
pub fn bs_string(bytes: &[u8]) -> String {
    bytes.to_str_lossy().into_owned()
}
