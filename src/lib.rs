// File operations module
pub mod file;

// Position tracking module
pub mod position;

// Removal pattern module
pub mod pattern;

// Patch engine module
pub mod patch;

// Run report module
pub mod report;

// Logging setup
pub mod logging;

// Re-exports
pub use file::{FileContent, FileError, checksum, read_file, write_file};
pub use patch::{
    MatchSite, PatchError, PatchOptions, PatchOutcome, Removal, patch_file, strip,
};
pub use pattern::{DEFAULT_TARGET, EXPORT_BUTTON_BLOCK, Pattern, PatternError};
pub use position::{Position, Span, byte_to_position, span_to_positions};
pub use report::{PatchReport, SUCCESS_MESSAGE, generate_run_id};
