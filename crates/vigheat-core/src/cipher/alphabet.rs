// crates/vigheat-core/src/cipher/alphabet.rs
//
// Lowercase Latin alphabet arithmetic (a=0 .. z=25).

pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const LEN: u8 = 26;

#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_lowercase() {
        Some(c as u8 - b'a')
    } else {
        None
    }
}

#[inline]
pub fn letter_at(i: u8) -> char {
    ALPHABET[(i % LEN) as usize] as char
}

/// Shift a lowercase letter forward by `by` positions, wrapping at 'z'.
#[inline]
pub fn shift_forward(c: char, by: u8) -> Option<char> {
    index_of(c).map(|i| letter_at((i + by % LEN) % LEN))
}

/// Shift a lowercase letter backward by `by` positions, wrapping at 'a'.
#[inline]
pub fn shift_backward(c: char, by: u8) -> Option<char> {
    index_of(c).map(|i| letter_at((i + LEN - by % LEN) % LEN))
}
