//! In-memory document used by the simulator and tests
//!
//! Blocks and inlines live in a single flat offset space. A block covers
//! `start..end`; an inline covers `start..end` inside some block. The selection
//! is an `anchor..focus` pair of offsets in the same space.

use anyhow::{anyhow, bail};

use super::{BlockNode, DocumentSelection, InlineNode, NodeKey};

#[derive(Debug, Clone)]
struct Span<T> {
    node: T,
    start: usize,
    end: usize,
}

impl<T> Span<T> {
    /// Inclusive containment: a caret sitting on either edge counts as inside
    fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    blocks: Vec<Span<BlockNode>>,
    inlines: Vec<Span<InlineNode>>,
    anchor: usize,
    focus: usize,
    next_key: u64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_key(&mut self) -> NodeKey {
        self.next_key += 1;
        NodeKey(self.next_key)
    }

    /// Total length of the document in offsets
    pub fn len(&self) -> usize {
        self.blocks.last().map(|b| b.end).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a block of `len` offsets, returning its key
    pub fn push_block(&mut self, node_type: &str, len: usize) -> NodeKey {
        let key = self.allocate_key();
        let start = self.len();
        self.blocks.push(Span {
            node: BlockNode {
                key,
                node_type: node_type.to_string(),
            },
            start,
            end: start + len,
        });
        key
    }

    /// Add an inline covering `start..end`
    pub fn push_inline(
        &mut self,
        node_type: &str,
        start: usize,
        end: usize,
        href: Option<&str>,
    ) -> NodeKey {
        let key = self.allocate_key();
        self.inlines.push(Span {
            node: InlineNode {
                key,
                node_type: node_type.to_string(),
                href: href.map(str::to_string),
            },
            start: start.min(end),
            end: start.max(end),
        });
        self.inlines.sort_by_key(|span| span.start);
        key
    }

    /// Convenience for `push_inline("link", ..)`
    pub fn push_link(&mut self, start: usize, end: usize, href: &str) -> NodeKey {
        self.push_inline("link", start, end, Some(href))
    }

    /// Move the selection. `anchor == focus` is a caret.
    pub fn select(&mut self, anchor: usize, focus: usize) {
        self.anchor = anchor;
        self.focus = focus;
    }

    /// Builder-style variant of [`MemoryDocument::select`]
    pub fn with_selection(mut self, anchor: usize, focus: usize) -> Self {
        self.select(anchor, focus);
        self
    }

    pub fn inline(&self, key: NodeKey) -> Option<&InlineNode> {
        self.inlines
            .iter()
            .find(|span| span.node.key == key)
            .map(|span| &span.node)
    }

    fn range(&self) -> (usize, usize) {
        (self.anchor.min(self.focus), self.anchor.max(self.focus))
    }

    fn check_selection(&self) -> anyhow::Result<()> {
        let (_, end) = self.range();
        if end > self.len() {
            bail!(
                "selection {}..{} is outside the document (len {})",
                self.anchor,
                self.focus,
                self.len()
            );
        }
        Ok(())
    }
}

impl DocumentSelection for MemoryDocument {
    fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    fn start_block(&self) -> Option<&BlockNode> {
        let (start, _) = self.range();
        let last = self.blocks.len().checked_sub(1)?;
        // Half-open: an offset on a boundary opens the next block. Only the
        // end of the document belongs to the block before it.
        self.blocks
            .iter()
            .enumerate()
            .find(|(index, span)| {
                span.start <= start && (start < span.end || (*index == last && start == span.end))
            })
            .map(|(_, span)| &span.node)
    }

    fn inlines_in_selection(&self) -> anyhow::Result<Vec<InlineNode>> {
        self.check_selection()?;
        let (start, end) = self.range();

        let found = self
            .inlines
            .iter()
            .filter(|span| {
                if start == end {
                    span.contains(start)
                } else {
                    span.start < end && span.end > start
                }
            })
            .map(|span| span.node.clone())
            .collect();
        Ok(found)
    }

    fn has_edge_in(&self, node: &InlineNode) -> anyhow::Result<bool> {
        self.check_selection()?;
        let span = self
            .inlines
            .iter()
            .find(|span| span.node.key == node.key)
            .ok_or_else(|| anyhow!("inline {} is not part of this document", node.key))?;

        Ok(span.contains(self.anchor) || span.contains(self.focus))
    }
}
