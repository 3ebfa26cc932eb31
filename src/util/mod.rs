//! Utility modules

pub mod collate;
pub mod file_validation;
pub mod number;

pub use collate::{collate, compare_text};
pub use file_validation::{
    filename_for_display, has_accepted_extension, validate_source, SourceInfo, MAX_FILE_SIZE,
};
pub use number::{format_file_size, format_fixed, parse_finite, parse_leading_float};
