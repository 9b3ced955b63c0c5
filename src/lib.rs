//! gitmenu - A keyboard-driven menu for everyday git commands
//!
//! gitmenu draws a menu in the terminal, moves a highlight with the arrow
//! keys and runs the chosen git command when Enter is pressed. The combined
//! output of the last command stays on screen below the menu until the next
//! one replaces it.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, sets up logging)
//! - [`engine`] - Menu stack, action catalog, dispatch and confirmation
//! - [`core`] - Configuration, validated argument types, ignore-file editing
//! - [`git`] - Single interface for running the git program
//! - [`ui`] - Input sources, prompts, menu controller and rendering
//!
//! # Invariants
//!
//! 1. The highlighted index is always valid for the menu on screen
//! 2. At most one git process runs at a time
//! 3. Destructive actions run only after the affirmative token is typed
//! 4. An empty answer to a prompt runs nothing and keeps the footer

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod ui;
