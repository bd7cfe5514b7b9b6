//! The player's clue notebook
//!
//! A binary search tree of clue text ordered by byte-wise string comparison.
//! Nodes live in an arena and are linked by index; inserting a clue that is
//! already present leaves the tree untouched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClueNode {
    text: String,
    left: Option<usize>,
    right: Option<usize>,
}

/// Sorted set of unique clues collected during play
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueCollection {
    nodes: Vec<ClueNode>,
    root: Option<usize>,
}

impl ClueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue, returning `false` if it was already collected
    pub fn insert(&mut self, clue: &str) -> bool {
        let mut link = self.root;
        let mut parent: Option<(usize, Ordering)> = None;

        while let Some(idx) = link {
            let ordering = clue.cmp(self.nodes[idx].text.as_str());
            link = match ordering {
                Ordering::Less => self.nodes[idx].left,
                Ordering::Greater => self.nodes[idx].right,
                Ordering::Equal => return false,
            };
            parent = Some((idx, ordering));
        }

        let new_idx = self.nodes.len();
        self.nodes.push(ClueNode {
            text: clue.to_string(),
            left: None,
            right: None,
        });

        match parent {
            None => self.root = Some(new_idx),
            Some((idx, Ordering::Less)) => self.nodes[idx].left = Some(new_idx),
            Some((idx, _)) => self.nodes[idx].right = Some(new_idx),
        }
        true
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut link = self.root;
        while let Some(idx) = link {
            link = match clue.cmp(self.nodes[idx].text.as_str()) {
                Ordering::Less => self.nodes[idx].left,
                Ordering::Greater => self.nodes[idx].right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clues in ascending order
    ///
    /// The walk is lazy and borrows the notebook, so it can be restarted at
    /// any time by calling `iter` again.
    pub fn iter(&self) -> InOrder<'_> {
        let mut walk = InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        walk.push_left_spine(self.root);
        walk
    }

    /// Height of the tree (0 when empty)
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|idx| (idx, 1)).into_iter().collect();
        while let Some((idx, level)) = stack.pop() {
            tallest = tallest.max(level);
            let node = &self.nodes[idx];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        tallest
    }
}

impl<'a> IntoIterator for &'a ClueCollection {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClueCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut collection = ClueCollection::new();
        for clue in iter {
            collection.insert(clue.as_ref());
        }
        collection
    }
}

/// In-order walk over a `ClueCollection`
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    nodes: &'a [ClueNode],
    stack: Vec<usize>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut link: Option<usize>) {
        while let Some(idx) = link {
            self.stack.push(idx);
            link = self.nodes[idx].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let idx = self.stack.pop()?;
        let node = &self.nodes[idx];
        self.push_left_spine(node.right);
        Some(node.text.as_str())
    }
}
