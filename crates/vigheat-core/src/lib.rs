pub mod error;
pub mod validate;

pub mod cipher;
pub mod grid;
pub mod session;
pub mod results;
pub mod heatmap;

pub use crate::cipher::key::{random_key, Key};
pub use crate::cipher::vigenere::{decrypt, encrypt};
pub use crate::grid::grid::{EvalGrid, TextLength};
pub use crate::heatmap::grid::HeatmapGrid;
pub use crate::results::table::{ResultEntry, ResultTable};
pub use crate::session::accuracy::Accuracy;
