pub mod alphabet;
pub mod key;
pub mod vigenere;
