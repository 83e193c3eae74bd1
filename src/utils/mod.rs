pub mod fs;
pub mod terminal;

pub use fs::{unique_path, validate_file_size, write_atomic};
pub use terminal::{single_line, strip_control};
