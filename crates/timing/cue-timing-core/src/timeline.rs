//! Timeline composition: an ordered list of entries with declarative
//! anchors resolves into absolute start/end windows.
//!
//! Resolution is a single left-to-right pass: entry `i`'s anchor is
//! evaluated against entry `i - 1`'s already-resolved window, never
//! iterated to a fixed point. Timelines need not be monotonic in start
//! time; only each entry's own `start <= end` is guaranteed.

use serde::{Deserialize, Serialize};

use crate::error::TimingError;
use crate::stagger::{plan, StaggerSpec};

/// Position of an entry within the timeline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    /// Right after the previous entry's end: back-to-back, no gap.
    #[default]
    Auto,
    /// Absolute seconds from the timeline origin.
    At(f32),
    /// Seconds of gap after the previous entry's end.
    After(f32),
    /// Seconds of overlap into the previous entry; start clamps at 0.
    Before(f32),
}

impl Anchor {
    /// Anchors that need a previous entry to resolve against. `Auto` is
    /// excluded: a leading `Auto` simply means the timeline origin.
    #[inline]
    pub fn needs_predecessor(&self) -> bool {
        matches!(self, Self::After(_) | Self::Before(_))
    }
}

/// A grouped entry target: `items` staggered starts sharing one duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub items: usize,
    pub stagger: StaggerSpec,
}

/// One declarative timeline entry. Order in the containing list is
/// significant: relative anchors resolve against the previous entry by
/// list position, not by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    /// Seconds; for grouped entries this is the per-item duration.
    pub duration: f32,
    #[serde(default)]
    pub anchor: Anchor,
    #[serde(default)]
    pub group: Option<GroupSpec>,
}

impl TimelineEntry {
    pub fn new(id: impl Into<String>, duration: f32) -> Self {
        Self {
            id: id.into(),
            duration,
            anchor: Anchor::default(),
            group: None,
        }
    }
}

/// An entry with its absolute window populated. Derived by `resolve`;
/// `end - start` spans the whole group for grouped entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntry {
    pub id: String,
    pub start: f32,
    pub end: f32,
    /// Per-item stagger offsets for grouped entries, relative to the
    /// entry's base instant; empty for plain entries.
    pub item_offsets: Vec<f32>,
}

impl ResolvedEntry {
    #[inline]
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// The resolved timeline. Windows and the total duration are derived
/// values; callers read them but never set them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTimeline {
    entries: Vec<ResolvedEntry>,
    total_duration: f32,
}

impl ResolvedTimeline {
    #[inline]
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    /// `max(end)` across all entries; 0 for an empty timeline.
    #[inline]
    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    pub fn get(&self, id: &str) -> Option<&ResolvedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a list of entries into absolute windows.
///
/// An empty list is valid and resolves to an empty timeline with total
/// duration 0. Errors from grouped stagger specs propagate unchanged.
pub fn resolve(entries: &[TimelineEntry]) -> Result<ResolvedTimeline, TimingError> {
    let mut resolved: Vec<ResolvedEntry> = Vec::with_capacity(entries.len());
    let mut prev_end = 0.0f32;

    for (i, entry) in entries.iter().enumerate() {
        if i == 0 && entry.anchor.needs_predecessor() {
            return Err(TimingError::InvalidFirstAnchor {
                id: entry.id.clone(),
            });
        }
        let base = match entry.anchor {
            Anchor::Auto => {
                if i == 0 {
                    0.0
                } else {
                    prev_end
                }
            }
            Anchor::At(t) => t.max(0.0),
            Anchor::After(m) => (prev_end + m).max(0.0),
            Anchor::Before(m) => (prev_end - m).max(0.0),
        };

        let duration = entry.duration.max(0.0);
        let (start, end, item_offsets) = match &entry.group {
            None => (base, base + duration, Vec::new()),
            Some(group) => {
                let offsets = plan(group.items, &group.stagger)?;
                match (
                    offsets.iter().copied().fold(f32::INFINITY, f32::min),
                    offsets.iter().copied().fold(f32::NEG_INFINITY, f32::max),
                ) {
                    // Zero-item group: nothing plays, zero-length window.
                    (min, _) if !min.is_finite() => (base, base, offsets),
                    (min, max) => (base + min, base + max + duration, offsets),
                }
            }
        };

        prev_end = end;
        resolved.push(ResolvedEntry {
            id: entry.id.clone(),
            start,
            end,
            item_offsets,
        });
    }

    let total_duration = resolved.iter().fold(0.0f32, |acc, e| acc.max(e.end));
    Ok(ResolvedTimeline {
        entries: resolved,
        total_duration,
    })
}
