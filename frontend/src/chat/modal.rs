use log::{debug, info};

use super::session::{EmbeddedContentLoader, Scheduler, Session, SessionKey};
#[cfg(test)]
use super::session::LoadState;

/// The page-wide side effects of an open overlay.
///
/// `acquire` locks background scrolling and binds the cancel-key listener.
/// Both are released when the returned lease is dropped, so an overlay that
/// disappears without a `close()` still restores the page.
pub trait HostPage {
    type Lease;

    fn acquire(&mut self) -> Self::Lease;
}

pub struct ModalVisibilityController<H: HostPage, S: Scheduler> {
    host: H,
    // Held exactly while the modal is open.
    lease: Option<H::Lease>,
    loader: EmbeddedContentLoader<S>,
}

impl<H: HostPage, S: Scheduler> ModalVisibilityController<H, S> {
    pub fn new(host: H, scheduler: S, timeout_ms: u32) -> Self {
        Self {
            host,
            lease: None,
            loader: EmbeddedContentLoader::new(scheduler, timeout_ms),
        }
    }

    pub fn is_open(&self) -> bool {
        self.lease.is_some()
    }

    /// Shows the overlay and starts a fresh session. Opening an open modal
    /// changes nothing and returns the active key.
    pub fn open(&mut self) -> SessionKey {
        if self.is_open() {
            if let Some(key) = self.loader.current_key() {
                debug!("chat modal already open on session {}", key);
                return key;
            }
        } else {
            self.lease = Some(self.host.acquire());
            info!("chat modal opened");
        }
        self.loader.start()
    }

    pub fn close(&mut self) {
        self.loader.discard();
        if self.lease.take().is_some() {
            info!("chat modal closed");
        }
    }

    pub fn reload(&mut self) -> Option<SessionKey> {
        if !self.is_open() {
            return None;
        }
        self.loader.reload()
    }

    pub fn on_load_success(&mut self, key: SessionKey) -> bool {
        self.is_open() && self.loader.on_load_success(key)
    }

    pub fn on_load_failure(&mut self, key: SessionKey) -> bool {
        self.is_open() && self.loader.on_load_failure(key)
    }

    pub fn on_timeout(&mut self, key: SessionKey) -> bool {
        self.is_open() && self.loader.on_timeout(key)
    }

    pub fn session(&self) -> Option<&Session> {
        self.loader.session()
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<LoadState> {
        self.loader.state()
    }

    #[cfg(test)]
    pub fn current_key(&self) -> Option<SessionKey> {
        self.loader.current_key()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HostPage;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts leases handed out and returned.
    #[derive(Clone, Default)]
    pub struct FakeHost {
        pub acquired: Rc<Cell<u32>>,
        pub released: Rc<Cell<u32>>,
    }

    pub struct FakeLease(Rc<Cell<u32>>);

    impl Drop for FakeLease {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl FakeHost {
        pub fn held(&self) -> u32 {
            self.acquired.get() - self.released.get()
        }
    }

    impl HostPage for FakeHost {
        type Lease = FakeLease;

        fn acquire(&mut self) -> FakeLease {
            self.acquired.set(self.acquired.get() + 1);
            FakeLease(self.released.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeHost;
    use super::*;
    use crate::chat::session::testing::FakeScheduler;

    type Controller = ModalVisibilityController<FakeHost, FakeScheduler>;

    fn controller() -> (Controller, FakeHost, FakeScheduler) {
        let host = FakeHost::default();
        let clock = FakeScheduler::new();
        let controller = ModalVisibilityController::new(host.clone(), clock.clone(), 30_000);
        (controller, host, clock)
    }

    #[test]
    fn starts_closed_and_dormant() {
        let (controller, host, clock) = controller();
        assert!(!controller.is_open());
        assert!(controller.session().is_none());
        assert_eq!(host.acquired.get(), 0);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn open_acquires_lease_and_starts_pending_session() {
        let (mut controller, host, clock) = controller();
        let key = controller.open();

        assert!(controller.is_open());
        assert_eq!(host.held(), 1);
        assert_eq!(controller.current_key(), Some(key));
        assert_eq!(controller.state(), Some(LoadState::Pending));
        assert_eq!(clock.live_timers(), 1);
    }

    #[test]
    fn open_twice_is_idempotent() {
        let (mut controller, host, clock) = controller();
        let first = controller.open();
        let second = controller.open();

        assert_eq!(first, second);
        assert_eq!(host.acquired.get(), 1);
        assert_eq!(clock.timers.borrow().len(), 1);
    }

    #[test]
    fn close_releases_everything_from_any_state() {
        let outcomes = [
            None,
            Some(LoadState::Ready),
            Some(LoadState::ErrorLoad),
            Some(LoadState::ErrorTimeout),
        ];
        for settle in outcomes {
            let (mut controller, host, clock) = controller();
            let key = controller.open();
            match settle {
                Some(LoadState::Ready) => assert!(controller.on_load_success(key)),
                Some(LoadState::ErrorLoad) => assert!(controller.on_load_failure(key)),
                Some(LoadState::ErrorTimeout) => {
                    clock.advance(30_000);
                    assert!(controller.on_timeout(key));
                }
                _ => {}
            }

            controller.close();
            assert!(!controller.is_open());
            assert!(controller.session().is_none());
            assert_eq!(host.held(), 0);
            assert_eq!(clock.live_timers(), 0);
        }
    }

    #[test]
    fn close_when_closed_is_harmless() {
        let (mut controller, host, _) = controller();
        controller.close();
        assert_eq!(host.released.get(), 0);
        assert!(!controller.is_open());
    }

    #[test]
    fn close_while_pending_then_reopen_ignores_old_timer() {
        let (mut controller, host, clock) = controller();
        let first = controller.open();

        clock.advance(5_000);
        controller.close();
        assert_eq!(clock.live_timers(), 0);

        let second = controller.open();
        assert_eq!(second, first + 1);
        assert_eq!(host.acquired.get(), 2);
        assert_eq!(host.held(), 1);

        // The first timer would have been due at t=30s; it never reaches us
        // and a late delivery is ignored anyway.
        clock.advance(25_000);
        assert!(clock.due().is_empty());
        assert!(!controller.on_timeout(first));
        assert_eq!(controller.state(), Some(LoadState::Pending));

        clock.advance(5_000);
        assert_eq!(clock.due(), vec![second]);
        assert!(controller.on_timeout(second));
        assert_eq!(controller.state(), Some(LoadState::ErrorTimeout));
    }

    #[test]
    fn signals_after_close_are_discarded() {
        let (mut controller, _, _) = controller();
        let key = controller.open();
        controller.close();

        assert!(!controller.on_load_success(key));
        assert!(!controller.on_load_failure(key));
        assert!(!controller.on_timeout(key));
        assert_eq!(controller.reload(), None);
        assert!(controller.state().is_none());
    }

    #[test]
    fn failure_then_reload_keeps_modal_open() {
        let (mut controller, host, clock) = controller();
        let key = controller.open();

        clock.advance(1_000);
        assert!(controller.on_load_failure(key));
        let next = controller.reload().unwrap();

        assert_eq!(next, key + 1);
        assert_eq!(controller.state(), Some(LoadState::Pending));
        assert_eq!(host.held(), 1);
        assert_eq!(
            controller.session().unwrap().deadline,
            Some(clock.now() + chrono::Duration::seconds(30))
        );
    }

    #[test]
    fn dropping_open_controller_releases_lease_and_timer() {
        let (mut controller, host, clock) = controller();
        controller.open();
        drop(controller);

        assert_eq!(host.held(), 0);
        assert_eq!(clock.live_timers(), 0);
    }
}
