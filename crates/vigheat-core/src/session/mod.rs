pub mod accuracy;
pub mod case;
pub mod driver;
pub mod prompt;
