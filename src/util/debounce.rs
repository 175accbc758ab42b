//! Trailing-edge debounce: only the last call of a burst runs, once the burst
//! has been quiet for the wait period.
//!
//! Each call takes a ticket; when its timer elapses the ticket is honored
//! only if no newer call has been made since.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Issued per call. Compare with [`Debounce::settles`] when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct Debounce {
    latest: u64,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call and return its ticket. Invalidates every older ticket.
    pub fn schedule(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Whether `ticket` belongs to the most recent call.
    #[must_use]
    pub fn settles(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Wrap `f` so it runs `wait_ms` after the last call of a burst.
#[cfg(feature = "hydrate")]
pub fn debounce<A, F>(wait_ms: u32, f: F) -> impl FnMut(A)
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    let state = Rc::new(RefCell::new(Debounce::new()));
    let f = Rc::new(RefCell::new(f));
    // Replacing the held timeout drops, and so clears, the superseded one.
    let pending = RefCell::new(None::<Timeout>);

    move |args: A| {
        let ticket = state.borrow_mut().schedule();
        let state = Rc::clone(&state);
        let f = Rc::clone(&f);
        let timeout = Timeout::new(wait_ms, move || {
            if state.borrow().settles(ticket) {
                (f.borrow_mut())(args);
            }
        });
        *pending.borrow_mut() = Some(timeout);
    }
}
