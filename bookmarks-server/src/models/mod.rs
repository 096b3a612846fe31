//! Domain models with validation at construction
//!
//! Request bodies arrive as a loose `BookmarkInput` bag and are turned into
//! `NewBookmark` / `BookmarkPatch` only if they pass validation.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod rating;
pub mod bookmark;

pub use validation::ValidationError;
pub use rating::Rating;
pub use bookmark::{Bookmark, BookmarkInput, BookmarkPatch, NewBookmark};
