//! Todolist Core Domain Types
//!
//! In-memory to-do items and ordered to-do lists. This crate has no
//! dependencies on:
//! - Network
//! - Storage
//! - Async runtimes
//!
//! Items are shared handles, so a list and its caller observe the same
//! completion state.

pub mod convert;
pub mod error;
pub mod item;
pub mod list;
pub mod render;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use item::{Todo, TodoItem};
pub use list::TodoList;
pub use render::RenderStyle;
