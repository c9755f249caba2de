//! Single-line text editing core.
//!
//! The pieces compose bottom-up:
//!
//! - [`TextBuffer`]: length-limited content gated by a validator
//! - [`Selection`]: cursor and anchor, always clamped to the content
//! - [`Viewport`]: horizontal scroll offset that keeps the anchor visible
//! - [`word_boundary`]: space-delimited word navigation
//! - [`EditHistory`]: bounded snapshot undo/redo
//! - [`EditEngine`]: the commands that tie them together and notify a
//!   [`ChangeListener`]
//!
//! # Example
//!
//! ```
//! use linefield::editable::{EditConstraints, EditEngine};
//! use linefield::measure::MonospaceMeasure;
//!
//! let mut engine = EditEngine::new(
//!     0,
//!     EditConstraints::default().with_max_length(5),
//!     MonospaceMeasure::default(),
//!     120.0,
//! )
//! .with_text("abc");
//!
//! engine.insert_text("xyz");
//! assert_eq!(engine.text(), "abcxy");
//! assert_eq!(engine.cursor(), 5);
//!
//! engine.undo();
//! assert_eq!(engine.text(), "abc");
//! ```

mod buffer;
mod constraints;
mod engine;
mod history;
mod listener;
mod selection;
mod viewport;
mod word;

pub use buffer::{truncate_chars, BufferError, TextBuffer, Validator, DEFAULT_MAX_LENGTH};
pub use constraints::{filter_allowed, is_allowed_character, CharFilter, EditConstraints};
pub use engine::EditEngine;
pub use history::{EditHistory, FieldSnapshot, DEFAULT_HISTORY_DEPTH};
pub use listener::{ChangeListener, FieldId};
pub use selection::{clamp_position, Selection};
pub use viewport::Viewport;
pub use word::word_boundary;
