pub mod grid_file;
pub mod results_file;
