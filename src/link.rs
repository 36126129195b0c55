//! Hyperlink detection under the current selection

use crate::document::{DocumentSelection, InlineNode};

/// Find the hyperlink the selection touches
///
/// Only the first intersecting link is considered, and only if the selection
/// starts or ends inside it. A selection that merely passes across a link
/// among other content yields `None`.
///
/// Query faults are swallowed: the selection and the tree can disagree for a
/// moment during an edit, and that must never reach the render path.
pub fn find_link_in_selection(value: &dyn DocumentSelection, link_type: &str) -> Option<InlineNode> {
    match lookup(value, link_type) {
        Ok(link) => link,
        Err(e) => {
            tracing::trace!("link lookup failed, treating as no link: {:#}", e);
            None
        }
    }
}

fn lookup(value: &dyn DocumentSelection, link_type: &str) -> anyhow::Result<Option<InlineNode>> {
    let Some(link) = value
        .inlines_in_selection()?
        .into_iter()
        .find(|node| node.is_type(link_type))
    else {
        return Ok(None);
    };

    if value.has_edge_in(&link)? {
        Ok(Some(link))
    } else {
        Ok(None)
    }
}
