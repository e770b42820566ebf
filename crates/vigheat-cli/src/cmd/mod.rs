// crates/vigheat-cli/src/cmd/mod.rs

pub mod cipher;
pub mod grid_args;
pub mod keygen;
pub mod plan;
pub mod plot;
pub mod run;
