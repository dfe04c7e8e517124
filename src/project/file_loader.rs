mod collection;
mod reading;

// Re-export file loading functions (generic, no VHDL dependencies)
pub use collection::{collect_file_paths, has_extension, normalize_path};
pub use reading::load_file;
