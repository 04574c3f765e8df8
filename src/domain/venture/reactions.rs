//! Reaction kinds and the fixed six-counter record attached to every venture.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Percentage, ValidationError};

/// One of the six emotional responses a reader can register against a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Heart,
    Sad,
    Laugh,
    Surprise,
    Angry,
    Thinking,
}

impl ReactionKind {
    /// All kinds in canonical display order.
    pub const ALL: [ReactionKind; 6] = [
        ReactionKind::Heart,
        ReactionKind::Sad,
        ReactionKind::Laugh,
        ReactionKind::Surprise,
        ReactionKind::Angry,
        ReactionKind::Thinking,
    ];

    /// Wire key used in persisted snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "heart",
            ReactionKind::Sad => "sad",
            ReactionKind::Laugh => "laugh",
            ReactionKind::Surprise => "surprise",
            ReactionKind::Angry => "angry",
            ReactionKind::Thinking => "thinking",
        }
    }

    /// Human-readable label shown next to the counter.
    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "Inspired",
            ReactionKind::Sad => "Sad",
            ReactionKind::Laugh => "Funny",
            ReactionKind::Surprise => "Surprised",
            ReactionKind::Angry => "Frustrated",
            ReactionKind::Thinking => "Thought-Provoking",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Heart => "\u{2764}\u{fe0f}",
            ReactionKind::Sad => "\u{1f622}",
            ReactionKind::Laugh => "\u{1f602}",
            ReactionKind::Surprise => "\u{1f62e}",
            ReactionKind::Angry => "\u{1f621}",
            ReactionKind::Thinking => "\u{1f914}",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ReactionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReactionKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("reactionKind", format!("unknown reaction '{}'", s))
            })
    }
}

/// Per-kind reaction counters.
///
/// Every field is required on deserialization, so a snapshot can never carry
/// fewer than the six counters, and unsigned storage rules out negatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub heart: u64,
    pub sad: u64,
    pub laugh: u64,
    pub surprise: u64,
    pub angry: u64,
    pub thinking: u64,
}

impl Reactions {
    /// All six counters at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::Sad => self.sad,
            ReactionKind::Laugh => self.laugh,
            ReactionKind::Surprise => self.surprise,
            ReactionKind::Angry => self.angry,
            ReactionKind::Thinking => self.thinking,
        }
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::Heart => &mut self.heart,
            ReactionKind::Sad => &mut self.sad,
            ReactionKind::Laugh => &mut self.laugh,
            ReactionKind::Surprise => &mut self.surprise,
            ReactionKind::Angry => &mut self.angry,
            ReactionKind::Thinking => &mut self.thinking,
        }
    }

    /// Adds one to the named counter, leaving the other five untouched.
    pub fn increment(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    /// Sum of all six counters.
    pub fn total(&self) -> u64 {
        ReactionKind::ALL
            .iter()
            .fold(0u64, |acc, kind| acc.saturating_add(self.get(*kind)))
    }

    /// Share of one kind among this venture's reactions, rounded to a whole
    /// percent. Zero when nobody has reacted yet.
    pub fn share(&self, kind: ReactionKind) -> Percentage {
        Percentage::of(self.get(kind), self.total())
    }

    /// `(kind, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ReactionKind, u64)> + '_ {
        ReactionKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
