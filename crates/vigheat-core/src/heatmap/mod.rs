pub mod color;
pub mod grid;
pub mod text;

pub const TITLE: &str = "Vigenere Decryption Accuracy Heatmap";
pub const X_LABEL: &str = "Key Length";
pub const Y_LABEL: &str = "Text Length";
