//! Rate limiting for noisy browser events (scroll).
//!
//! [`Throttle`] is the clock-injected decision core: it says whether a call
//! runs now, arms a trailing timer, or folds into an already-armed one. The
//! hydrate-only [`throttle`] wrapper drives it with `Date.now()` and a
//! `gloo_timers` sleep.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// What the caller should do with one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call<A> {
    /// Execute immediately with these arguments.
    Run(A),
    /// Arm a trailing timer; call [`Throttle::fire`] after `delay_ms`.
    Schedule { delay_ms: f64 },
    /// A trailing execution is already armed and will use these arguments.
    Coalesced,
}

/// What the trailing timer should do when it elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum Fire<A> {
    /// Execute with the most recent arguments.
    Run(A),
    /// Still inside a window; wait `delay_ms` more, then fire again.
    Reschedule { delay_ms: f64 },
    /// Nothing pending; the timer is done.
    Idle,
}

/// At most one execution per `wait_ms` window, trailing call guaranteed.
///
/// Calls inside a window replace the pending arguments, so the trailing
/// execution always sees the most recent call.
#[derive(Debug, Clone)]
pub struct Throttle<A> {
    wait_ms: f64,
    last_run_ms: Option<f64>,
    pending: Option<A>,
    armed: bool,
}

impl<A> Throttle<A> {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, last_run_ms: None, pending: None, armed: false }
    }

    pub fn call(&mut self, now_ms: f64, args: A) -> Call<A> {
        let elapsed = self.last_run_ms.map_or(f64::INFINITY, |last| now_ms - last);
        if elapsed >= self.wait_ms {
            self.last_run_ms = Some(now_ms);
            self.pending = None;
            return Call::Run(args);
        }
        self.pending = Some(args);
        if self.armed {
            return Call::Coalesced;
        }
        self.armed = true;
        Call::Schedule { delay_ms: self.wait_ms - elapsed }
    }

    /// The trailing timer elapsed.
    ///
    /// A call that ran after the timer was armed may have opened a fresh
    /// window; pending arguments then wait out the rest of that window.
    pub fn fire(&mut self, now_ms: f64) -> Fire<A> {
        if self.pending.is_none() {
            self.armed = false;
            return Fire::Idle;
        }
        let elapsed = self.last_run_ms.map_or(f64::INFINITY, |last| now_ms - last);
        if elapsed < self.wait_ms {
            return Fire::Reschedule { delay_ms: self.wait_ms - elapsed };
        }
        self.armed = false;
        self.last_run_ms = Some(now_ms);
        self.pending.take().map_or(Fire::Idle, Fire::Run)
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Wrap `f` so it runs at most once per `wait_ms`, with a trailing call.
#[cfg(feature = "hydrate")]
pub fn throttle<A, F>(wait_ms: u32, f: F) -> impl FnMut(A)
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use gloo_timers::future::sleep;
    use js_sys::Date;
    use wasm_bindgen_futures::spawn_local;

    let state = Rc::new(RefCell::new(Throttle::new(f64::from(wait_ms))));
    let f = Rc::new(RefCell::new(f));

    move |args: A| {
        let decision = state.borrow_mut().call(Date::now(), args);
        match decision {
            Call::Run(args) => (f.borrow_mut())(args),
            Call::Schedule { delay_ms } => {
                let state = Rc::clone(&state);
                let f = Rc::clone(&f);
                spawn_local(async move {
                    let mut delay_ms = delay_ms;
                    loop {
                        sleep(Duration::from_millis(u64::from(timer_ms(delay_ms)))).await;
                        let fired = state.borrow_mut().fire(Date::now());
                        match fired {
                            Fire::Run(args) => {
                                (f.borrow_mut())(args);
                                break;
                            }
                            Fire::Reschedule { delay_ms: more } => delay_ms = more,
                            Fire::Idle => break,
                        }
                    }
                });
            }
            Call::Coalesced => {}
        }
    }
}

/// Round a fractional delay up to whole timer milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn timer_ms(delay_ms: f64) -> u32 {
    if delay_ms.is_nan() {
        return 0;
    }
    delay_ms.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}
