//! A single-slot debouncer for search input.
//!
//! Every keystroke calls [`Model::trigger`], which stores the latest term and
//! schedules a [`SettledMsg`] after the configured delay. Each trigger bumps the
//! debouncer's tag, so only the message scheduled by the most recent keystroke
//! is accepted by [`Model::update`]; earlier ones arrive stale and are dropped.
//! There is never more than one pending term.
//!
//! ```rust
//! use usertable::debounce::{self, SettledMsg};
//! use std::time::Duration;
//!
//! let mut search = debounce::new(Duration::from_millis(300));
//! let _first = search.trigger("ad");
//! let stale: bubbletea_rs::Msg = Box::new(SettledMsg { id: search.id(), tag: search.tag() });
//! let _second = search.trigger("adm");
//! let latest: bubbletea_rs::Msg = Box::new(SettledMsg { id: search.id(), tag: search.tag() });
//!
//! assert_eq!(search.update(&stale), None);
//! assert_eq!(search.update(&latest), Some("adm".to_string()));
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay used when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

static LAST_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent when the delay after a keystroke has elapsed.
///
/// Carries the id of the debouncer that scheduled it and the tag it had at the
/// time, so several debouncers can coexist and superseded messages can be told
/// apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledMsg {
    /// Id of the scheduling debouncer.
    pub id: u64,
    /// Tag of the keystroke that scheduled this message.
    pub tag: u64,
}

/// The debouncer state.
#[derive(Debug, Clone)]
pub struct Model {
    id: u64,
    tag: u64,
    delay: Duration,
    pending: Option<String>,
}

/// Creates a debouncer with the given delay.
pub fn new(delay: Duration) -> Model {
    Model {
        id: next_id(),
        tag: 0,
        delay,
        pending: None,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(DEFAULT_DELAY)
    }
}

impl Model {
    /// This debouncer's id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The tag of the most recent trigger.
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The term waiting to settle, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Records `term` as the latest input and schedules its settle message,
    /// superseding whatever was pending.
    pub fn trigger(&mut self, term: impl Into<String>) -> Cmd {
        self.tag = self.tag.wrapping_add(1);
        self.pending = Some(term.into());

        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.delay, move |_| Box::new(SettledMsg { id, tag }) as Msg)
    }

    /// Drops the pending term; any message already scheduled becomes stale.
    pub fn cancel(&mut self) {
        self.tag = self.tag.wrapping_add(1);
        self.pending = None;
    }

    /// Returns the settled term when `msg` is this debouncer's latest settle
    /// message. Anything else, including stale settle messages, yields `None`.
    pub fn update(&mut self, msg: &Msg) -> Option<String> {
        let settled = msg.downcast_ref::<SettledMsg>()?;
        if settled.id != self.id || settled.tag != self.tag {
            return None;
        }
        self.pending.take()
    }
}
