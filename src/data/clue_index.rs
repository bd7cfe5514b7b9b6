//! Clue → suspect index
//!
//! A fixed number of buckets, each holding a singly linked chain of entries.
//! Entries live in an arena and chains link them by index. New entries are
//! pushed at the head of their chain, so a later association for the same
//! clue shadows an earlier one on lookup.

use crate::GameError;
use serde::{Deserialize, Serialize};

/// Bucket count used by the stock mansion
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Largest bucket table an index will allocate
pub const MAX_BUCKET_COUNT: usize = 1 << 16;

/// Polynomial string hash: `h = (h * 31 + byte) mod bucket_count`, seeded at 0
///
/// Collisions are expected and handled by chaining. The running value is
/// kept in `u128` so `h * 31 + byte` cannot overflow for any `usize` modulus.
pub fn bucket_for(text: &str, bucket_count: usize) -> usize {
    let modulus = bucket_count as u128;
    let h = text
        .bytes()
        .fold(0u128, |h, byte| (h * 31 + u128::from(byte)) % modulus);
    h as usize
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    clue: String,
    suspect: String,
    next: Option<usize>,
}

/// Maps clue text to the suspect it implicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueIndex {
    buckets: Vec<Option<usize>>,
    entries: Vec<IndexEntry>,
}

impl ClueIndex {
    pub fn new(bucket_count: usize) -> Result<Self, GameError> {
        if bucket_count == 0 {
            return Err(GameError::InvalidConfig(
                "the clue index needs at least one bucket".to_string(),
            ));
        }
        if bucket_count > MAX_BUCKET_COUNT {
            return Err(GameError::InvalidConfig(format!(
                "the clue index allows at most {} buckets, got {}",
                MAX_BUCKET_COUNT, bucket_count
            )));
        }
        Ok(Self {
            buckets: vec![None; bucket_count],
            entries: Vec::new(),
        })
    }

    /// Build an index from clue/suspect pairs, inserted in order
    pub fn from_pairs<'a, I>(bucket_count: usize, pairs: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = Self::new(bucket_count)?;
        for (clue, suspect) in pairs {
            index.insert(clue, suspect);
        }
        Ok(index)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a clue hashes to in this index
    pub fn bucket_of(&self, clue: &str) -> usize {
        bucket_for(clue, self.buckets.len())
    }

    /// Associate a clue with a suspect
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        let bucket = self.bucket_of(clue);
        let idx = self.entries.len();
        self.entries.push(IndexEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(idx);
    }

    /// Suspect implicated by `clue`, or `None` if the clue is unknown
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.chain(self.bucket_of(clue))
            .find(|(candidate, _)| *candidate == clue)
            .map(|(_, suspect)| suspect)
    }

    /// Entries of one bucket, newest first
    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            link: self.buckets.get(bucket).copied().flatten(),
        }
    }

    /// Total number of associations, shadowed ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn longest_chain(&self) -> usize {
        (0..self.buckets.len())
            .map(|bucket| self.chain(bucket).count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for ClueIndex {
    fn default() -> Self {
        Self {
            buckets: vec![None; DEFAULT_BUCKET_COUNT],
            entries: Vec::new(),
        }
    }
}

/// Walk along one bucket's chain
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    entries: &'a [IndexEntry],
    link: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    /// `(clue, suspect)`
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = &self.entries[self.link?];
        self.link = entry.next;
        Some((entry.clue.as_str(), entry.suspect.as_str()))
    }
}
