//! Utility modules

pub mod text;

pub use text::{char_len, char_to_byte, split_at_char};
