//! Cue Timing Core (renderer-agnostic)
//!
//! Declarative motion timing: stagger distribution, timeline composition,
//! and tick-driven notice scheduling. The crate turns timing intent ("what
//! moves, relative to what, and when") into absolute start/end instants;
//! hosts apply the numbers to whatever visual primitive they control and
//! drive the scheduler from their own clock.

pub mod config;
pub mod easing;
pub mod error;
pub mod ids;
pub mod notify;
pub mod stagger;
pub mod stored;
pub mod timeline;

// Re-exports for consumers (hosts)
pub use config::Config;
pub use easing::Easing;
pub use error::TimingError;
pub use ids::NoticeId;
pub use notify::{NoticeEvent, NoticeLevel, NoticeScheduler, NoticeSnapshot, NoticeState};
pub use stagger::{plan, StaggerOrigin, StaggerSpec};
pub use stored::{parse_stored_timeline_json, StoredTimeline};
pub use timeline::{resolve, Anchor, GroupSpec, ResolvedEntry, ResolvedTimeline, TimelineEntry};
