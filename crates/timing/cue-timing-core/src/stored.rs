//! Loader for declarative stored-timeline JSON documents.
//!
//! Notes:
//! - Durations and anchor magnitudes are seconds, as in the in-memory model.
//! - Anchors take the position-string forms of the source notation: a bare
//!   number is absolute, `"+=0.3"` is a gap after the previous entry,
//!   `"-=0.1"` overlaps into it, and an absent anchor means back-to-back.
//! - `origin` is `"first" | "last" | "center"` or a bare item index;
//!   `curve` is a named ease or a 4-number bezier control array.
//! - Parsed documents are validated by a resolve pass before they are
//!   returned; validation failures surface with their own error variants,
//!   never default-and-continue.

use serde::Deserialize;

use crate::easing::Easing;
use crate::error::TimingError;
use crate::stagger::{StaggerOrigin, StaggerSpec};
use crate::timeline::{resolve, Anchor, GroupSpec, TimelineEntry};

/// A parsed stored-timeline document.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredTimeline {
    pub name: String,
    pub entries: Vec<TimelineEntry>,
}

/// Public API: parse a stored-timeline JSON document into timeline entries.
pub fn parse_stored_timeline_json(s: &str) -> Result<StoredTimeline, TimingError> {
    let doc: StoredDoc = serde_json::from_str(s).map_err(|e| TimingError::Parse {
        reason: e.to_string(),
    })?;

    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(doc.entries.len());
    for raw in doc.entries {
        let anchor = match raw.at {
            None => Anchor::Auto,
            Some(a) => to_anchor(&raw.id, &a)?,
        };
        let group = raw.group.map(to_group).transpose()?;
        entries.push(TimelineEntry {
            id: raw.id,
            duration: raw.duration as f32,
            anchor,
            group,
        });
    }

    // Validation pass: anchor placement and grouped stagger specs.
    resolve(&entries)?;
    Ok(StoredTimeline {
        name: doc.name,
        entries,
    })
}

fn to_anchor(id: &str, raw: &RawAnchor) -> Result<Anchor, TimingError> {
    match raw {
        RawAnchor::Number(t) => {
            if !t.is_finite() || *t < 0.0 {
                return Err(TimingError::Parse {
                    reason: format!("entry '{id}': absolute anchor must be >= 0 seconds, got {t}"),
                });
            }
            Ok(Anchor::At(*t as f32))
        }
        RawAnchor::Position(s) => {
            let (ctor, magnitude): (fn(f32) -> Anchor, &str) = if let Some(m) = s.strip_prefix("+=")
            {
                (Anchor::After, m)
            } else if let Some(m) = s.strip_prefix("-=") {
                (Anchor::Before, m)
            } else {
                return Err(TimingError::Parse {
                    reason: format!("entry '{id}': anchor '{s}' is not a number, \"+=s\", or \"-=s\""),
                });
            };
            let magnitude: f32 = magnitude.parse().map_err(|_| TimingError::Parse {
                reason: format!("entry '{id}': anchor '{s}' has a non-numeric magnitude"),
            })?;
            if !magnitude.is_finite() || magnitude < 0.0 {
                return Err(TimingError::Parse {
                    reason: format!("entry '{id}': anchor magnitude must be >= 0, got {magnitude}"),
                });
            }
            Ok(ctor(magnitude))
        }
    }
}

fn to_group(raw: SdGroup) -> Result<GroupSpec, TimingError> {
    let origin = match raw.stagger.origin {
        None => StaggerOrigin::default(),
        Some(RawOrigin::Index(k)) => StaggerOrigin::Index(k),
        Some(RawOrigin::Name(name)) => match name.as_str() {
            "first" => StaggerOrigin::First,
            "last" => StaggerOrigin::Last,
            "center" => StaggerOrigin::Center,
            other => {
                return Err(TimingError::Parse {
                    reason: format!("unknown stagger origin '{other}'"),
                })
            }
        },
    };
    let curve = match raw.stagger.curve {
        None => Easing::default(),
        Some(RawCurve::Points(ctrl)) => Easing::CubicBezier(ctrl),
        Some(RawCurve::Name(name)) => match name.as_str() {
            "linear" => Easing::Linear,
            "easeIn" => Easing::EaseIn,
            "easeOut" => Easing::EaseOut,
            "easeInOut" => Easing::EaseInOut,
            other => {
                return Err(TimingError::Parse {
                    reason: format!("unknown easing '{other}'"),
                })
            }
        },
    };
    Ok(GroupSpec {
        items: raw.items,
        stagger: StaggerSpec {
            step: raw.stagger.step as f32,
            start_delay: raw.stagger.start_delay as f32,
            origin,
            curve,
        },
    })
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredDoc {
    pub name: String,
    pub entries: Vec<SdEntry>,
}

#[derive(Debug, Deserialize)]
struct SdEntry {
    pub id: String,
    pub duration: f64,
    #[serde(default)]
    pub at: Option<RawAnchor>,
    #[serde(default)]
    pub group: Option<SdGroup>,
}

#[derive(Debug, Deserialize)]
struct SdGroup {
    pub items: usize,
    pub stagger: SdStagger,
}

#[derive(Debug, Deserialize)]
struct SdStagger {
    pub step: f64,
    #[serde(default)]
    #[serde(rename = "startDelay")]
    pub start_delay: f64,
    #[serde(default)]
    pub origin: Option<RawOrigin>,
    #[serde(default)]
    pub curve: Option<RawCurve>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAnchor {
    Number(f64),
    Position(String),
}

// Put more specific shapes BEFORE less specific to avoid untagged
// matching pitfalls.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOrigin {
    Index(usize),
    Name(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCurve {
    Points([f32; 4]),
    Name(String),
}
