use std::cell::RefCell;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent, Window};
use yew::Callback;

use super::modal::HostPage;
use super::session::{Scheduler, SessionKey};

/// Browser timers. Expiry is reported through `on_expire` with the key the
/// timer was armed for.
pub struct WebScheduler {
    on_expire: Callback<SessionKey>,
}

impl WebScheduler {
    pub fn new(on_expire: Callback<SessionKey>) -> Self {
        Self { on_expire }
    }
}

impl Scheduler for WebScheduler {
    type Handle = Timeout;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn arm(&self, key: SessionKey, after_ms: u32) -> Timeout {
        let on_expire = self.on_expire.clone();
        Timeout::new(after_ms, move || on_expire.emit(key))
    }
}

/// The real page: body scroll lock plus a window-level Escape listener.
pub struct WebHostPage {
    on_cancel: Callback<()>,
}

impl WebHostPage {
    pub fn new(on_cancel: Callback<()>) -> Self {
        Self { on_cancel }
    }
}

impl HostPage for WebHostPage {
    type Lease = PageLease;

    fn acquire(&mut self) -> PageLease {
        PageLease {
            _scroll: ScrollLock::engage(),
            _cancel_key: CancelKeyListener::bind(self.on_cancel.clone()),
        }
    }
}

/// Either half may be missing when the browser API is unavailable; the
/// modal still works, it just doesn't lock scroll or hear Escape.
pub struct PageLease {
    _scroll: Option<ScrollLock>,
    _cancel_key: Option<CancelKeyListener>,
}

thread_local! {
    // Holder count and the overflow value to put back when it reaches zero.
    static SCROLL_LOCK: RefCell<Option<(usize, String)>> = RefCell::new(None);
}

/// Page-wide lock on body scrolling. Nested locks share one saved value, so
/// they can be released in any order and the last one restores the page.
pub struct ScrollLock {
    body: HtmlElement,
}

impl ScrollLock {
    pub fn engage() -> Option<Self> {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            warn!("no document body, background scroll stays unlocked");
            return None;
        };
        let locked = SCROLL_LOCK.with(|lock| {
            let mut lock = lock.borrow_mut();
            if let Some((holders, _)) = lock.as_mut() {
                *holders += 1;
                return true;
            }
            let style = body.style();
            let previous = style.get_property_value("overflow").unwrap_or_default();
            if style.set_property("overflow", "hidden").is_err() {
                return false;
            }
            *lock = Some((1, previous));
            true
        });
        if !locked {
            warn!("failed to lock background scroll");
            return None;
        }
        Some(Self { body })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let previous = SCROLL_LOCK.with(|lock| {
            let mut lock = lock.borrow_mut();
            match lock.as_mut() {
                Some((holders, _)) if *holders > 1 => {
                    *holders -= 1;
                    None
                }
                _ => lock.take().map(|(_, previous)| previous),
            }
        });
        let Some(previous) = previous else {
            return;
        };
        let style = self.body.style();
        let restored = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &previous)
        };
        if restored.is_err() {
            warn!("failed to restore background scroll");
        }
    }
}

pub struct CancelKeyListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl CancelKeyListener {
    pub fn bind(on_cancel: Callback<()>) -> Option<Self> {
        let Some(window) = window() else {
            warn!("no window, Escape will not close the modal");
            return None;
        };
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_cancel.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("failed to bind Escape listener");
            return None;
        }
        Some(Self { window, callback })
    }
}

impl Drop for CancelKeyListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body() -> HtmlElement {
        window().unwrap().document().unwrap().body().unwrap()
    }

    fn overflow() -> String {
        body().style().get_property_value("overflow").unwrap()
    }

    fn set_overflow(value: &str) {
        let style = body().style();
        if value.is_empty() {
            style.remove_property("overflow").unwrap();
        } else {
            style.set_property("overflow", value).unwrap();
        }
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window().unwrap().dispatch_event(&event).unwrap();
    }

    fn counting_host() -> (WebHostPage, Rc<Cell<u32>>) {
        let cancels = Rc::new(Cell::new(0));
        let counter = cancels.clone();
        let host = WebHostPage::new(Callback::from(move |_: ()| counter.set(counter.get() + 1)));
        (host, cancels)
    }

    #[wasm_bindgen_test]
    fn lease_hides_overflow_and_removes_it_again() {
        set_overflow("");
        let (mut host, _) = counting_host();

        let lease = host.acquire();
        assert_eq!(overflow(), "hidden");

        drop(lease);
        assert_eq!(overflow(), "");
    }

    #[wasm_bindgen_test]
    fn lease_puts_back_the_previous_overflow() {
        set_overflow("scroll");
        let (mut host, _) = counting_host();

        let lease = host.acquire();
        assert_eq!(overflow(), "hidden");

        drop(lease);
        assert_eq!(overflow(), "scroll");
        set_overflow("");
    }

    #[wasm_bindgen_test]
    fn nested_leases_released_out_of_order_restore_the_page() {
        set_overflow("auto");
        let (mut chat, _) = counting_host();
        let (mut project, _) = counting_host();

        let outer = chat.acquire();
        let inner = project.acquire();
        drop(outer);
        assert_eq!(overflow(), "hidden");

        drop(inner);
        assert_eq!(overflow(), "auto");
        set_overflow("");
    }

    #[wasm_bindgen_test]
    fn escape_cancels_only_while_the_lease_is_held() {
        let (mut host, cancels) = counting_host();
        press("Escape");
        assert_eq!(cancels.get(), 0);

        let lease = host.acquire();
        press("Enter");
        assert_eq!(cancels.get(), 0);
        press("Escape");
        assert_eq!(cancels.get(), 1);

        drop(lease);
        press("Escape");
        assert_eq!(cancels.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn timer_reports_its_key_when_it_fires() {
        let fired = Rc::new(Cell::new(None));
        let sink = fired.clone();
        let scheduler = WebScheduler::new(Callback::from(move |key| sink.set(Some(key))));

        let cancelled = scheduler.arm(7, 0);
        drop(cancelled);
        let _armed = scheduler.arm(8, 0);
        gloo_timers::future::TimeoutFuture::new(10).await;
        assert_eq!(fired.get(), Some(8));
    }
}
