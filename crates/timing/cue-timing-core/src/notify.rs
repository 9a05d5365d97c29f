//! Tick-driven notice scheduling.
//!
//! Notices expire independently; the host drives the scheduler with
//! `tick(now_ms)` on its own cadence and applies the resulting events and
//! snapshots to its presentation layer. The scheduler holds no timers and
//! never reads a wall clock of its own, which makes it trivially testable
//! by feeding synthetic `now` values. A host that never ticks leaves
//! notices frozen in their current state.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ids::{IdAllocator, NoticeId};

/// Lifecycle of a notice.
///
/// `Pending` covers the entry-animation grace period between the create
/// request and the first tick; `Active` is the countdown; `Dismissing` is
/// the exit-transition window; `Removed` is terminal and purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeState {
    Pending,
    Active,
    Dismissing,
    Removed,
}

impl NoticeState {
    /// Get the name of this state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Dismissing => "dismissing",
            Self::Removed => "removed",
        }
    }

    /// Check if the notice still occupies the live set
    #[inline]
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Removed)
    }

    /// Check if a dismiss request would take effect
    #[inline]
    pub fn can_dismiss(&self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }
}

/// Severity tag carried opaquely to the presentation layer; the scheduler
/// never interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NoticeEvent {
    Activated { id: NoticeId },
    Expired { id: NoticeId },
    Dismissed { id: NoticeId },
    Removed { id: NoticeId },
}

/// Consistent-read view of one live notice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeSnapshot {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub state: NoticeState,
    /// Fraction of the countdown remaining, in [0, 1].
    pub progress_remaining: f32,
}

#[derive(Debug, Clone)]
struct Notice {
    id: NoticeId,
    level: NoticeLevel,
    duration_ms: f64,
    state: NoticeState,
    progress_remaining: f32,
    /// Stamped by the first tick that observes the notice.
    activated_at: Option<f64>,
    /// Removal instant; stamped when the exit transition begins.
    dismiss_deadline: Option<f64>,
}

/// Scheduler for concurrently expiring notices.
///
/// The scheduler exclusively owns the live set and is the only writer of
/// state and progress; callers may only request creation or dismissal.
/// All mutation happens on the host's single logical thread of control.
#[derive(Debug)]
pub struct NoticeScheduler {
    cfg: Config,
    ids: IdAllocator,
    /// Live notices in creation order (ids are monotonic, so this is also
    /// `created_at` ascending, the ordering callers stack by).
    live: Vec<Notice>,
    /// Events exposed by the most recent tick.
    events: Vec<NoticeEvent>,
    /// Events recorded between ticks (manual dismissals).
    queued_events: Vec<NoticeEvent>,
}

impl NoticeScheduler {
    pub fn new(cfg: Config) -> Self {
        Self {
            live: Vec::with_capacity(cfg.capacity),
            events: Vec::with_capacity(cfg.capacity),
            queued_events: Vec::new(),
            ids: IdAllocator::new(),
            cfg,
        }
    }

    /// Add a notice in `Pending`; it activates on the next tick.
    ///
    /// Never fails: degenerate durations (non-positive or non-finite) are
    /// clamped and expire on the first tick after activation.
    pub fn create(&mut self, duration_ms: f64) -> NoticeId {
        self.create_with_level(duration_ms, NoticeLevel::default())
    }

    /// `create` with a severity tag echoed back in snapshots.
    pub fn create_with_level(&mut self, duration_ms: f64, level: NoticeLevel) -> NoticeId {
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            log::warn!("notice created with degenerate duration {duration_ms}ms; clamping");
            f64::EPSILON
        };
        let id = self.ids.alloc_notice();
        self.live.push(Notice {
            id,
            level,
            duration_ms,
            state: NoticeState::Pending,
            progress_remaining: 1.0,
            activated_at: None,
            dismiss_deadline: None,
        });
        id
    }

    /// Request dismissal. `Pending`/`Active` notices move to `Dismissing`
    /// immediately regardless of remaining progress; anything else
    /// (already dismissing, removed, or unknown) is a benign no-op.
    pub fn dismiss(&mut self, id: NoticeId) {
        if let Some(notice) = self.live.iter_mut().find(|n| n.id == id) {
            if notice.state.can_dismiss() {
                notice.state = NoticeState::Dismissing;
                // Deadline is stamped by the next tick: dismissal itself
                // stays clock-free.
                self.queued_events.push(NoticeEvent::Dismissed { id });
                log::debug!("notice {id:?} dismissed");
            }
        }
    }

    /// Step every live notice against the host clock. One pass per
    /// invocation; each notice's transition depends only on its own
    /// timestamps. Returns the events for this tick (plus any dismissals
    /// recorded since the previous tick); the slice is valid until the
    /// next call.
    pub fn tick(&mut self, now_ms: f64) -> &[NoticeEvent] {
        self.events.clear();
        self.events.append(&mut self.queued_events);

        let grace = self.cfg.exit_grace_ms;
        for notice in &mut self.live {
            match notice.state {
                NoticeState::Pending => {
                    notice.state = NoticeState::Active;
                    notice.activated_at = Some(now_ms);
                    self.events.push(NoticeEvent::Activated { id: notice.id });
                }
                NoticeState::Active => {
                    let activated_at = notice.activated_at.unwrap_or(now_ms);
                    let elapsed = (now_ms - activated_at).max(0.0);
                    let remaining = (1.0 - (elapsed / notice.duration_ms) as f32).max(0.0);
                    // A clock that runs backwards clamps rather than
                    // rewinding progress.
                    notice.progress_remaining = notice.progress_remaining.min(remaining);
                    if notice.progress_remaining <= 0.0 {
                        notice.state = NoticeState::Dismissing;
                        notice.dismiss_deadline = Some(now_ms + grace);
                        self.events.push(NoticeEvent::Expired { id: notice.id });
                    }
                }
                NoticeState::Dismissing => match notice.dismiss_deadline {
                    None => notice.dismiss_deadline = Some(now_ms + grace),
                    Some(deadline) if deadline <= now_ms => {
                        notice.state = NoticeState::Removed;
                        self.events.push(NoticeEvent::Removed { id: notice.id });
                    }
                    Some(_) => {}
                },
                NoticeState::Removed => {}
            }
        }

        self.live.retain(|n| n.state.is_live());
        &self.events
    }

    /// Snapshot of one notice, if still live.
    pub fn get(&self, id: NoticeId) -> Option<NoticeSnapshot> {
        self.live.iter().find(|n| n.id == id).map(snapshot_of)
    }

    /// Snapshots of the live set in creation order.
    pub fn snapshot(&self) -> Vec<NoticeSnapshot> {
        self.live.iter().map(snapshot_of).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for NoticeScheduler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn snapshot_of(notice: &Notice) -> NoticeSnapshot {
    NoticeSnapshot {
        id: notice.id,
        level: notice.level,
        state: notice.state,
        progress_remaining: notice.progress_remaining,
    }
}
