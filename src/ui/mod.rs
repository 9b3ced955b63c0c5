//! ui
//!
//! Operator interaction.
//!
//! # Modules
//!
//! - [`input`] - Key and line input sources (terminal and scripted)
//! - [`prompts`] - Free-text parameter prompts
//! - [`menu`] - Menus and the navigation state machine
//! - [`render`] - Frame rendering
//!
//! # Design
//!
//! All input goes through the [`input::InputSource`] trait and all drawing
//! through [`render::Renderer`], so the whole interaction can be scripted in
//! tests without a terminal.

pub mod input;
pub mod menu;
pub mod prompts;
pub mod render;
