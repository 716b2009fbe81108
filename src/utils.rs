pub mod helpers;

pub use helpers::{ensure_directory_exists, write_to_file};
