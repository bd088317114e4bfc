use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};

/// Identifies one load attempt of the embedded chat frame. Also used as the
/// iframe `key`, so a new value makes Yew rebuild the frame from scratch.
pub type SessionKey = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    ErrorLoad,
    ErrorTimeout,
}

/// Clock plus one-shot timer. Dropping the returned handle must cancel the
/// timer, which is how `gloo_timers::callback::Timeout` behaves.
pub trait Scheduler {
    type Handle;

    fn now(&self) -> DateTime<Utc>;

    /// Arms a timer that reports `key` back through `on_timeout` after `after_ms`.
    fn arm(&self, key: SessionKey, after_ms: u32) -> Self::Handle;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub key: SessionKey,
    pub state: LoadState,
    pub deadline: Option<DateTime<Utc>>,
    pub started_at: DateTime<Utc>,
    /// 1 for the session created by `open()`, +1 for every reload after it.
    pub attempt: u32,
}

pub struct EmbeddedContentLoader<S: Scheduler> {
    scheduler: S,
    timeout_ms: u32,
    last_key: SessionKey,
    session: Option<Session>,
    // Some iff the session is Pending.
    timer: Option<S::Handle>,
}

impl<S: Scheduler> EmbeddedContentLoader<S> {
    pub fn new(scheduler: S, timeout_ms: u32) -> Self {
        Self {
            scheduler,
            timeout_ms,
            last_key: 0,
            session: None,
            timer: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<LoadState> {
        self.session.as_ref().map(|s| s.state)
    }

    pub fn current_key(&self) -> Option<SessionKey> {
        self.session.as_ref().map(|s| s.key)
    }

    /// Begins a brand-new session, discarding whatever came before it.
    pub fn start(&mut self) -> SessionKey {
        self.discard();
        self.enter_pending(1)
    }

    /// Retries from any state. Returns `None` when there is no session to
    /// retry (the modal is closed).
    pub fn reload(&mut self) -> Option<SessionKey> {
        let attempt = self.session.as_ref()?.attempt + 1;
        // Old timer goes first so it can never fire into the new key.
        self.timer = None;
        Some(self.enter_pending(attempt))
    }

    pub fn on_load_success(&mut self, key: SessionKey) -> bool {
        let now = self.scheduler.now();
        let Some(session) = self.settle(key, LoadState::Ready, "load success") else {
            return false;
        };
        info!(
            "chat session {} ready after {} ms",
            session.key,
            (now - session.started_at).num_milliseconds()
        );
        true
    }

    pub fn on_load_failure(&mut self, key: SessionKey) -> bool {
        let Some(session) = self.settle(key, LoadState::ErrorLoad, "load failure") else {
            return false;
        };
        warn!(
            "chat session {} failed to load (attempt {})",
            session.key, session.attempt
        );
        true
    }

    pub fn on_timeout(&mut self, key: SessionKey) -> bool {
        let timeout_ms = self.timeout_ms;
        let Some(session) = self.settle(key, LoadState::ErrorTimeout, "timeout") else {
            return false;
        };
        warn!(
            "chat session {} timed out after {} ms (attempt {})",
            session.key, timeout_ms, session.attempt
        );
        true
    }

    /// Drops the session and cancels its timer. The key counter is kept so the
    /// next `start()` still issues a larger key.
    pub fn discard(&mut self) {
        self.timer = None;
        if let Some(session) = self.session.take() {
            debug!("chat session {} discarded in {:?}", session.key, session.state);
        }
    }

    fn enter_pending(&mut self, attempt: u32) -> SessionKey {
        self.last_key += 1;
        let key = self.last_key;
        let now = self.scheduler.now();
        let deadline = now + Duration::milliseconds(i64::from(self.timeout_ms));
        self.session = Some(Session {
            key,
            state: LoadState::Pending,
            deadline: Some(deadline),
            started_at: now,
            attempt,
        });
        self.timer = Some(self.scheduler.arm(key, self.timeout_ms));
        info!(
            "chat session {} pending until {} (attempt {})",
            key,
            deadline.format("%H:%M:%S"),
            attempt
        );
        key
    }

    // Moves the current Pending session into `next` if `key` is still the
    // active one. Anything else is a stale or duplicate signal.
    fn settle(&mut self, key: SessionKey, next: LoadState, signal: &str) -> Option<&Session> {
        match self.session.as_mut() {
            Some(session) if session.key == key && session.state == LoadState::Pending => {
                self.timer = None;
                session.state = next;
                session.deadline = None;
                Some(&*session)
            }
            Some(session) => {
                debug!(
                    "ignoring {} for chat session {} (active {} in {:?})",
                    signal, key, session.key, session.state
                );
                None
            }
            None => {
                debug!("ignoring {} for chat session {} (no active session)", signal, key);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug)]
    pub struct ArmedTimer {
        pub key: SessionKey,
        pub fires_at: DateTime<Utc>,
        pub cancelled: Rc<Cell<bool>>,
    }

    /// Manual clock with a record of every timer armed through it.
    #[derive(Clone)]
    pub struct FakeScheduler {
        pub now: Rc<Cell<DateTime<Utc>>>,
        pub timers: Rc<RefCell<Vec<ArmedTimer>>>,
    }

    pub struct FakeHandle(Rc<Cell<bool>>);

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl FakeScheduler {
        pub fn new() -> Self {
            let epoch = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
            Self {
                now: Rc::new(Cell::new(epoch)),
                timers: Rc::new(RefCell::new(Vec::new())),
            }
        }

        pub fn advance(&self, ms: i64) {
            self.now.set(self.now.get() + Duration::milliseconds(ms));
        }

        /// Keys of timers that are due and were never cancelled, as the
        /// browser would deliver them.
        pub fn due(&self) -> Vec<SessionKey> {
            let now = self.now.get();
            self.timers
                .borrow()
                .iter()
                .filter(|t| !t.cancelled.get() && t.fires_at <= now)
                .map(|t| t.key)
                .collect()
        }

        pub fn live_timers(&self) -> usize {
            self.timers.borrow().iter().filter(|t| !t.cancelled.get()).count()
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }

        fn arm(&self, key: SessionKey, after_ms: u32) -> FakeHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.timers.borrow_mut().push(ArmedTimer {
                key,
                fires_at: self.now.get() + Duration::milliseconds(i64::from(after_ms)),
                cancelled: cancelled.clone(),
            });
            FakeHandle(cancelled)
        }
    }
}
