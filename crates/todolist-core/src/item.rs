//! Todo item types.

use crate::{RenderStyle, TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Capabilities a value needs to live in a [`TodoList`](crate::TodoList).
///
/// Completion state is toggled through `&self`: items are shared between the
/// list and any handles the caller keeps, so implementors use interior
/// mutability.
pub trait TodoItem {
    /// Title of the item.
    fn title(&self) -> &str;

    /// Whether the item is done.
    fn is_done(&self) -> bool;

    /// Mark the item as done.
    fn mark_done(&self);

    /// Mark the item as not done.
    fn mark_undone(&self);

    /// Render the item as a single checkbox line.
    fn render_line(&self, style: &RenderStyle) -> String {
        style.line(self.title(), self.is_done())
    }
}

#[derive(Debug)]
struct TodoInner {
    title: String,
    done: Cell<bool>,
}

/// A single to-do entry.
///
/// `Todo` is a shared handle: cloning it does not copy the item, so marking a
/// clone done is visible through every other handle, including the one held
/// by a list.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "TodoRecord", into = "TodoRecord")]
pub struct Todo {
    inner: Rc<TodoInner>,
}

impl Todo {
    /// Create a new Todo that is not done.
    ///
    /// `title` is expected to be non-empty; use [`Todo::try_new`] for
    /// titles that come from outside the program.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(TodoInner {
                title: title.into(),
                done: Cell::new(false),
            }),
        }
    }

    /// Create a new Todo, rejecting blank titles.
    pub fn try_new(title: impl Into<String>) -> TodoResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self::new(title))
    }

    /// Builder method to create the todo already done.
    pub fn done(self) -> Self {
        self.inner.done.set(true);
        self
    }

    /// Returns true if both handles refer to the same item.
    pub fn ptr_eq(a: &Todo, b: &Todo) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl TodoItem for Todo {
    fn title(&self) -> &str {
        &self.inner.title
    }

    fn is_done(&self) -> bool {
        self.inner.done.get()
    }

    fn mark_done(&self) {
        self.inner.done.set(true);
    }

    fn mark_undone(&self) {
        self.inner.done.set(false);
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.title() == other.title() && self.is_done() == other.is_done()
    }
}

impl Eq for Todo {}

impl fmt::Debug for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Todo")
            .field("title", &self.title())
            .field("done", &self.is_done())
            .finish()
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_line(&RenderStyle::default()))
    }
}

/// Wire shape of a [`Todo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TodoRecord {
    title: String,
    #[serde(default)]
    done: bool,
}

impl TryFrom<TodoRecord> for Todo {
    type Error = TodoError;

    fn try_from(record: TodoRecord) -> Result<Self, Self::Error> {
        let todo = Todo::try_new(record.title)?;
        if record.done {
            todo.mark_done();
        }
        Ok(todo)
    }
}

/// Titles must contain at least one non-whitespace character.
fn validate_title(title: &str) -> TodoResult<()> {
    if title.trim().is_empty() {
        return Err(TodoError::InvalidInput(
            "todo title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

impl From<Todo> for TodoRecord {
    fn from(todo: Todo) -> Self {
        Self {
            title: todo.title().to_string(),
            done: todo.is_done(),
        }
    }
}
