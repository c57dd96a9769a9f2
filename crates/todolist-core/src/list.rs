//! Todo list collection.

use crate::{RenderStyle, Todo, TodoError, TodoItem, TodoResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::slice;
use tracing::{debug, warn};

/// A named, ordered list of todos.
///
/// The list holds item handles, not copies: with [`Todo`] items, marking an
/// item done through the list is visible to every handle the caller kept.
///
/// Position-addressed operations fail with [`TodoError::IndexOutOfRange`];
/// title-addressed operations return `None` or do nothing when no title
/// matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList<T = Todo> {
    /// Descriptive label shown in the rendered header.
    #[serde(default)]
    name: String,

    /// Items in insertion order.
    #[serde(default = "Vec::new")]
    todos: Vec<T>,
}

impl<T> Default for TodoList<T> {
    fn default() -> Self {
        Self {
            name: String::new(),
            todos: Vec::new(),
        }
    }
}

impl<T: TodoItem + Clone> TodoList<T> {
    /// Create a new empty list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Get the list name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a todo to the end of the list.
    pub fn add(&mut self, todo: T) {
        debug!(list = %self.name, title = todo.title(), "Adding todo");
        self.todos.push(todo);
    }

    /// Number of todos in the list.
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the list has no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Shallow copy of the todos, in order.
    ///
    /// Changing the returned vector does not change the list; the items
    /// themselves are still shared.
    pub fn to_vec(&self) -> Vec<T> {
        self.todos.clone()
    }

    /// Iterate over the todos in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.todos.iter()
    }

    /// Get the first todo, if any.
    pub fn first(&self) -> Option<&T> {
        self.todos.first()
    }

    /// Get the last todo, if any.
    pub fn last(&self) -> Option<&T> {
        self.todos.last()
    }

    /// Remove and return the first todo.
    pub fn shift(&mut self) -> Option<T> {
        if self.todos.is_empty() {
            return None;
        }
        let todo = self.todos.remove(0);
        debug!(list = %self.name, title = todo.title(), "Shifted todo");
        Some(todo)
    }

    /// Remove and return the last todo.
    pub fn pop(&mut self) -> Option<T> {
        let todo = self.todos.pop()?;
        debug!(list = %self.name, title = todo.title(), "Popped todo");
        Some(todo)
    }

    /// Get the todo at `index`.
    pub fn item_at(&self, index: usize) -> TodoResult<&T> {
        self.todos
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Mark the todo at `index` as done.
    pub fn mark_done_at(&self, index: usize) -> TodoResult<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Mark the todo at `index` as not done.
    pub fn mark_undone_at(&self, index: usize) -> TodoResult<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Remove and return the todo at `index`. Later todos move down by one.
    pub fn remove_at(&mut self, index: usize) -> TodoResult<T> {
        if index >= self.todos.len() {
            return Err(self.out_of_range(index));
        }
        let todo = self.todos.remove(index);
        debug!(list = %self.name, index, title = todo.title(), "Removed todo");
        Ok(todo)
    }

    /// Returns true if every todo is done. An empty list is done.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(|todo| todo.is_done())
    }

    /// Mark every todo as done.
    pub fn mark_all_done(&self) {
        debug!(list = %self.name, size = self.todos.len(), "Marking all todos done");
        self.for_each(|todo| todo.mark_done());
    }

    /// Mark every todo as not done.
    pub fn mark_all_undone(&self) {
        debug!(list = %self.name, size = self.todos.len(), "Marking all todos undone");
        self.for_each(|todo| todo.mark_undone());
    }

    /// Call `f` once per todo, in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.todos.iter().for_each(f);
    }

    /// Build a new list with the same name holding the todos that match
    /// `predicate`, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            name: self.name.clone(),
            todos: self
                .todos
                .iter()
                .filter(|&todo| predicate(todo))
                .cloned()
                .collect(),
        }
    }

    /// First todo whose title equals `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&T> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    /// Mark the first todo titled `title` as done. Does nothing if no todo
    /// has that title.
    pub fn mark_done(&self, title: &str) {
        match self.find_by_title(title) {
            Some(todo) => todo.mark_done(),
            None => debug!(list = %self.name, title, "No todo with title"),
        }
    }

    /// New list of the todos that are done.
    pub fn all_done(&self) -> Self {
        self.filter(|todo| todo.is_done())
    }

    /// New list of the todos that are not done.
    pub fn all_not_done(&self) -> Self {
        self.filter(|todo| !todo.is_done())
    }

    /// Render the header and one line per todo with the given style.
    pub fn render(&self, style: &RenderStyle) -> String {
        let mut lines = Vec::with_capacity(self.todos.len() + 1);
        lines.push(style.header(&self.name));
        lines.extend(self.todos.iter().map(|todo| todo.render_line(style)));
        lines.join("\n")
    }

    fn out_of_range(&self, index: usize) -> TodoError {
        let size = self.todos.len();
        warn!(list = %self.name, index, size, "Index out of range");
        TodoError::IndexOutOfRange { index, size }
    }
}

impl TodoList<Todo> {
    /// Add a todo decoded from a dynamic value.
    ///
    /// Strings, numbers, serialized lists and other values without a title
    /// are rejected with [`TodoError::TypeMismatch`], blank titles with
    /// [`TodoError::InvalidInput`]. The list is left unchanged on error.
    pub fn try_add_value(&mut self, value: &Value) -> TodoResult<()> {
        let todo = Todo::try_from(value).map_err(|e| {
            warn!(list = %self.name, error = %e, "Rejected value");
            e
        })?;
        self.add(todo);
        Ok(())
    }
}

impl<T: Serialize> TodoList<T> {
    /// Serialize the list to a JSON string.
    pub fn to_json(&self) -> TodoResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> TodoList<T> {
    /// Parse a list from a JSON string.
    pub fn from_json(json: &str) -> TodoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T: TodoItem + Clone> fmt::Display for TodoList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderStyle::default()))
    }
}

impl<'a, T> IntoIterator for &'a TodoList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
