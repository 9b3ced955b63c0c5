//! engine::session
//!
//! The menu stack and the top-level loop.
//!
//! The root frame is pushed at startup. Each committed choice either runs an
//! action (its footer becomes the frame's footer), opens a sub-menu (a new
//! frame on top), returns (the top frame is popped and its last footer is
//! handed to the parent) or exits. Returning from the root also ends the
//! session.

use std::io::{self, Write};

use tracing::{debug, info};

use super::catalog::{Binding, MenuId, MenuSpec};
use super::dispatch::Dispatcher;
use super::{ActionContext, Outcome, SessionError};
use crate::core::config::Settings;
use crate::git::Git;
use crate::ui::input::InputSource;
use crate::ui::menu::{EmptyMenu, Menu, MenuController};
use crate::ui::render::Renderer;

/// Line written when the session ends.
pub const EXIT_MESSAGE: &str = "Bye.";

/// One menu on the stack.
#[derive(Debug)]
struct Frame {
    spec: MenuSpec,
    menu: Menu,
    index: usize,
    footer: String,
}

impl Frame {
    fn open(id: MenuId, footer: String) -> Result<Self, EmptyMenu> {
        let spec = MenuSpec::for_menu(id);
        let menu = spec.menu()?;
        Ok(Self {
            spec,
            menu,
            index: 0,
            footer,
        })
    }
}

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of actions dispatched, including aborted ones.
    pub actions_run: usize,
    /// Every footer an action produced, in order.
    pub footers: Vec<String>,
    /// Footer of the last frame on the stack when the session ended.
    pub final_footer: String,
}

/// A running menu session.
pub struct Session<'a> {
    git: &'a mut Git,
    input: &'a mut dyn InputSource,
    out: &'a mut dyn Write,
    settings: &'a Settings,
    renderer: Renderer,
    dispatcher: Dispatcher,
    stack: Vec<Frame>,
}

impl<'a> Session<'a> {
    pub fn new(
        git: &'a mut Git,
        input: &'a mut dyn InputSource,
        out: &'a mut dyn Write,
        settings: &'a Settings,
    ) -> Self {
        Self {
            git,
            input,
            out,
            settings,
            renderer: Renderer::new(settings.display),
            dispatcher: Dispatcher::standard(),
            stack: Vec::new(),
        }
    }

    /// Replace the action table.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Current stack depth; zero outside [`run`](Self::run).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Run until the operator exits.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when input or drawing fails, or when git cannot
    /// be started at all.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        info!(workdir = %self.git.workdir().display(), "session started");
        self.stack.clear();
        self.stack.push(Frame::open(MenuId::Main, String::new())?);
        let mut summary = SessionSummary::default();

        loop {
            let Some(frame) = self.stack.last_mut() else {
                break;
            };
            let index = MenuController::new(&frame.menu, frame.index, &frame.footer).run(
                &mut *self.input,
                &self.renderer,
                &mut *self.out,
            )?;
            frame.index = index;

            match frame.spec.binding(index) {
                Some(Binding::Run(id)) => {
                    let mut ctx = ActionContext::new(
                        &mut *self.git,
                        &mut *self.input,
                        &mut *self.out,
                        self.settings,
                    );
                    summary.actions_run += 1;
                    match self.dispatcher.invoke_at(&frame.spec, index, &mut ctx)? {
                        Outcome::Footer(footer) => {
                            summary.footers.push(footer.clone());
                            frame.footer = footer;
                        }
                        Outcome::Aborted => debug!(action = ?id, "action aborted"),
                    }
                }
                Some(Binding::Open(id)) => {
                    info!(menu = ?id, "opening menu");
                    self.stack.push(Frame::open(id, String::new())?);
                }
                Some(Binding::Return) => {
                    let Some(child) = self.stack.pop() else {
                        break;
                    };
                    match self.stack.last_mut() {
                        Some(parent) => {
                            info!(from = ?child.spec.id, to = ?parent.spec.id, "returning");
                            parent.footer = child.footer;
                        }
                        None => {
                            summary.final_footer = child.footer;
                            break;
                        }
                    }
                }
                Some(Binding::Exit) => {
                    summary.final_footer = frame.footer.clone();
                    break;
                }
                None => debug!(index, "selection outside the catalog"),
            }
        }

        self.stack.clear();
        self.finish()?;
        info!(actions = summary.actions_run, "session ended");
        Ok(summary)
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "{EXIT_MESSAGE}")?;
        self.out.flush()
    }
}
