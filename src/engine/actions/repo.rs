//! engine::actions::repo
//!
//! Whole-repository operations.

use crate::engine::{ActionContext, ActionResult};

use super::join_nonempty;

/// Untrack everything, then hard-reset the index.
///
/// Working tree files stay on disk.
pub fn clear(ctx: &mut ActionContext<'_>) -> ActionResult {
    ctx.confirm(
        "Clear the repository index? Every file will be untracked and staged changes lost",
        |git| {
            let removed = git.text(&["rm", "-r", "--cached", "."])?;
            let reset = git.text(&["reset", "--hard"])?;
            Ok(join_nonempty([
                removed.as_str(),
                "All files kept in the working directory.",
                reset.as_str(),
                "Repository index cleared.",
            ]))
        },
    )
}
