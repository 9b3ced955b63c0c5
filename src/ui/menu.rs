//! ui::menu
//!
//! Menus and the navigation state machine.
//!
//! # States
//!
//! ```text
//! Rendering -> AwaitingKey -> Up/Down/Other -> Rendering
//!                          -> Confirm       -> Committed(index)
//! ```
//!
//! The selection wraps in both directions. Keys other than the two arrows
//! and Enter change nothing and only cause a re-render.

use std::io::Write;

use thiserror::Error;

use super::input::{InputSource, Key};
use super::render::Renderer;
use crate::engine::SessionError;

/// One labeled entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Selecting this entry leaves the menu instead of running an action.
    pub is_terminal: bool,
}

impl MenuItem {
    pub fn action(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_terminal: false,
        }
    }

    pub fn terminal(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_terminal: true,
        }
    }
}

/// A menu was built without entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("menu '{title}' has no entries")]
pub struct EmptyMenu {
    pub title: String,
}

/// A titled, ordered list of entries. Order is display order.
///
/// Never empty, so a selection always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
}

impl Menu {
    /// # Errors
    ///
    /// Returns [`EmptyMenu`] when `items` is empty.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Result<Self, EmptyMenu> {
        let title = title.into();
        if items.is_empty() {
            return Err(EmptyMenu { title });
        }
        Ok(Self { title, items })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Cursor position within a menu of fixed length.
///
/// Always in `0..len`; `len` is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// Start at `index`, clamped into range.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero; an empty menu has nothing to select.
    pub fn new(index: usize, len: usize) -> Self {
        assert!(len > 0, "a menu needs at least one item");
        Self {
            index: index.min(len - 1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn up(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn down(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

/// What one key did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Draw again and wait for the next key.
    Render,
    /// The operator chose this index.
    Committed(usize),
}

/// Drives one menu until the operator commits a choice.
#[derive(Debug)]
pub struct MenuController<'m> {
    menu: &'m Menu,
    selection: Selection,
    footer: &'m str,
}

impl<'m> MenuController<'m> {
    /// A controller starting at `index` showing `footer`.
    pub fn new(menu: &'m Menu, index: usize, footer: &'m str) -> Self {
        Self {
            menu,
            selection: Selection::new(index, menu.items().len()),
            footer,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Apply one key.
    pub fn handle(&mut self, key: Key) -> Transition {
        match key {
            Key::Up => self.selection.up(),
            Key::Down => self.selection.down(),
            Key::Confirm => return Transition::Committed(self.selection.index()),
            Key::Other => {}
        }
        Transition::Render
    }

    /// Render, read keys and return the committed index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if drawing or reading input fails.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &Renderer,
        out: &mut dyn Write,
    ) -> Result<usize, SessionError> {
        loop {
            renderer.render(out, self.menu, self.selection.index(), self.footer)?;
            if let Transition::Committed(index) = self.handle(input.read_key()?) {
                return Ok(index);
            }
        }
    }
}
