use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

/// Quiet period after the last scroll event before scrolling counts as settled.
pub const DEFAULT_SCROLL_SETTLE_DELAY_MS: u64 = 100;

/// A trailing-edge debounce timer driven by caller-supplied timestamps.
///
/// Every `schedule` call pushes the deadline out, so only the last event of a burst fires.
/// There is no background thread: the adapter polls `fire_if_due` from its frame/timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTimer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl DebounceTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay. An armed deadline keeps its original value.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn schedule(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Disarms the timer and returns `true` if its deadline has passed.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
struct SignalState {
    resolved: bool,
    wakers: Vec<Waker>,
}

/// The resolving half of a settle signal. Owned by the tracker, one per scroll session.
#[derive(Debug)]
struct SettleSignal {
    state: Rc<RefCell<SignalState>>,
}

impl SettleSignal {
    fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SignalState::default())),
        }
    }

    fn subscribe(&self) -> ScrollSettled {
        ScrollSettled {
            state: Some(Rc::clone(&self.state)),
        }
    }
}

/// Resolves on drop, so awaiters are released both when the session settles and when the
/// tracker (or its engine) goes away mid-session.
impl Drop for SettleSignal {
    fn drop(&mut self) {
        let wakers = {
            let mut state = self.state.borrow_mut();
            state.resolved = true;
            core::mem::take(&mut state.wakers)
        };
        // Woken outside the borrow: a waker may poll the future synchronously.
        for waker in wakers {
            waker.wake();
        }
    }
}

/// Resolves when the current scroll session settles.
///
/// All handles obtained during one session share the same state and observe the same
/// resolution. A handle obtained while not scrolling is already resolved.
#[derive(Clone, Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct ScrollSettled {
    state: Option<Rc<RefCell<SignalState>>>,
}

impl ScrollSettled {
    pub fn ready() -> Self {
        Self { state: None }
    }

    pub fn is_settled(&self) -> bool {
        self.state.as_ref().is_none_or(|s| s.borrow().resolved)
    }

    /// Whether both handles belong to the same scroll session.
    pub fn same_session(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Future for ScrollSettled {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(state) = &self.state else {
            return Poll::Ready(());
        };
        let mut state = state.borrow_mut();
        if state.resolved {
            return Poll::Ready(());
        }
        if !state.wakers.iter().any(|w| w.will_wake(cx.waker())) {
            state.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}

/// Derives a scrolling/settled flag from a stream of scroll events.
///
/// The first event of a session sets `is_scrolling` and lazily creates the shared settle
/// signal; each event re-arms the debounce timer. When the timer fires, the signal resolves,
/// `is_scrolling` drops to `false`, and the signal is discarded so the next event starts a
/// fresh session.
#[derive(Debug)]
pub struct SettleTracker {
    timer: DebounceTimer,
    is_scrolling: bool,
    pending: Option<SettleSignal>,
}

impl Default for SettleTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_SETTLE_DELAY_MS)
    }
}

impl SettleTracker {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            timer: DebounceTimer::new(delay_ms),
            is_scrolling: false,
            pending: None,
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn timer(&self) -> &DebounceTimer {
        &self.timer
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.timer.set_delay_ms(delay_ms);
    }

    pub fn on_scroll_event(&mut self, now_ms: u64) {
        self.is_scrolling = true;
        if self.pending.is_none() {
            self.pending = Some(SettleSignal::new());
        }
        self.timer.schedule(now_ms);
    }

    /// Fires the settle action if the debounce deadline has passed.
    ///
    /// Returns `true` exactly when a session settled during this call.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.timer.fire_if_due(now_ms) {
            return false;
        }
        self.settle_now()
    }

    /// Settles immediately, regardless of the timer. Returns `false` if nothing was scrolling.
    pub fn settle_now(&mut self) -> bool {
        self.timer.cancel();
        // Dropping the signal resolves it.
        drop(self.pending.take());
        let was_scrolling = self.is_scrolling;
        self.is_scrolling = false;
        was_scrolling
    }

    /// Returns the shared settle future for the current session, or a resolved one when idle.
    pub fn settled(&self) -> ScrollSettled {
        match (&self.pending, self.is_scrolling) {
            (Some(signal), true) => signal.subscribe(),
            _ => ScrollSettled::ready(),
        }
    }
}
