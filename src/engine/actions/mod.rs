//! engine::actions
//!
//! Action handlers, one module per menu.
//!
//! Each handler has the [`Handler`](super::dispatch::Handler) signature:
//! it prompts through the context, validates what was typed, and runs git
//! through the context's [`Git`](crate::git::Git). Handlers never spawn
//! processes themselves.

pub mod basic;
pub mod branch;
pub mod ignore;
pub mod remote;
pub mod repo;

use crate::git::{RunError, ERROR_TAG};

use super::ActionContext;

/// Run `per_item` for every name and collect one result line each.
///
/// A failing name does not stop the batch.
pub(crate) fn batch(
    ctx: &mut ActionContext<'_>,
    names: &[String],
    mut per_item: impl FnMut(&mut ActionContext<'_>, &str) -> Result<String, RunError>,
) -> Result<String, RunError> {
    let mut lines = Vec::with_capacity(names.len());
    for name in names {
        lines.push(per_item(ctx, name)?);
    }
    Ok(lines.join("\n"))
}

/// Footer line for a name git does not know about.
pub(crate) fn not_tracked(name: &str) -> String {
    format!("{ERROR_TAG} File {name} is not found or not tracked.")
}

/// Join non-empty parts with newlines.
pub(crate) fn join_nonempty<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_nonempty(["a", "", "b"]), "a\nb");
        assert_eq!(join_nonempty(Vec::<String>::new()), "");
    }
}
