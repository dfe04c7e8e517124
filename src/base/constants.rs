//! Domain constants.

/// Library that unqualified paths and selectors belong to.
pub const DEFAULT_LIBRARY: &str = "WORK";

/// The library alias VHDL uses for "the library being compiled into".
pub const WORK_LIBRARY: &str = "WORK";

/// File extensions collected when walking a directory (compared case-insensitively).
pub const VHDL_EXTENSIONS: &[&str] = &["vhd", "vhdl"];
