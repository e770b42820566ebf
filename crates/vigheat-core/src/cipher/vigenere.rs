// crates/vigheat-core/src/cipher/vigenere.rs
//
// Classic Vigenère over a..=z.
//
// Rules:
// - The key cursor starts at 0 and advances only after a letter is shifted.
// - Any character outside a..=z is copied verbatim and leaves the cursor alone.
// - Output has exactly as many chars as the input.

use crate::cipher::alphabet;
use crate::cipher::key::Key;

pub fn encrypt(plaintext: &str, key: &Key) -> String {
    apply(plaintext, key, alphabet::shift_forward)
}

/// Known-key inverse of `encrypt`.
pub fn decrypt(ciphertext: &str, key: &Key) -> String {
    apply(ciphertext, key, alphabet::shift_backward)
}

fn apply(input: &str, key: &Key, shift: fn(char, u8) -> Option<char>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0usize;
    for c in input.chars() {
        match shift(c, key.shift_at(cursor)) {
            Some(shifted) => {
                out.push(shifted);
                cursor = (cursor + 1) % key.len();
            }
            None => out.push(c),
        }
    }
    out
}
