/**********************************************
  > File Name		: utils.rs
  > Author		    : lunar
  > Email			: lunar_ubuntu@qq.com
  > Created Time	: Mon 12 Oct 2026 03:54:41 PM CST
  > Location        : Shanghai
  > Copyright@ https://github.com/xiaoqixian
 **********************************************/

/*
 * Utils for global usage.
 *
 * FixedText is a text field of exactly N bytes: the text is left
 * justified and zero padded. At most N-1 bytes are meaningful, the
 * last byte is always a terminator.
 * Equality compares the whole padded array, so a field read back
 * from a file equals the one that was written, padding included.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedText<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedText<N> {
    pub const CAPACITY: usize = N - 1;

    //text longer than CAPACITY is cut at the last char boundary that fits.
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(Self::CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut bytes = [0u8; N];
        bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self { bytes }
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /*
     * The meaningful part of the field: everything before the first
     * zero byte, with trailing whitespace stripped.
     * Only for display, invalid utf-8 is replaced.
     */
    pub fn text(&self) -> Cow<'_, str> {
        let end = self.bytes.iter().position(|&b| b == 0).unwrap_or(N);
        match String::from_utf8_lossy(&self.bytes[..end]) {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_end()),
            Cow::Owned(s) => Cow::Owned(s.trim_end().to_string()),
        }
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self { bytes: [0u8; N] }
    }
}

impl<const N: usize> fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
