//! Scroll reveal bookkeeping.
//!
//! The reveal-eligible elements are captured once, in document order, and each
//! keeps the index it had then. An element fires at most once: the first
//! qualifying intersection yields its delay, every later one yields nothing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Parse the leading integer of `raw` the way HTML attribute values are
/// usually read: skip leading whitespace, optional sign, then digits up to
/// the first non-digit. `"120ms"` is 120; `"ms"` is `None`.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Delay before revealing the element at `index`.
///
/// A present, non-empty `explicit` value wins (unparsable or negative means
/// 0); otherwise the delay staggers by position.
#[must_use]
pub fn reveal_delay(explicit: Option<&str>, index: usize, stagger_ms: u32) -> u32 {
    match explicit {
        Some(raw) if !raw.is_empty() => parse_leading_int(raw)
            .map_or(0, |ms| u32::try_from(ms.max(0)).unwrap_or(u32::MAX)),
        _ => u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(stagger_ms),
    }
}

/// One-shot reveal state for the captured element list.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    delays: Vec<u32>,
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Capture the per-element delays, in document order.
    pub fn new<I, S>(explicit_delays: I, stagger_ms: u32) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let delays = explicit_delays
            .into_iter()
            .enumerate()
            .map(|(index, explicit)| reveal_delay(explicit.as_ref().map(|s| s.as_ref()), index, stagger_ms))
            .collect::<Vec<_>>();
        let revealed = vec![false; delays.len()];
        Self { delays, revealed }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.delays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// The element at `index` intersected. Returns its delay the first time,
    /// `None` on every later call or for an unknown index.
    pub fn on_intersect(&mut self, index: usize) -> Option<u32> {
        let revealed = self.revealed.get_mut(index)?;
        if *revealed {
            return None;
        }
        *revealed = true;
        self.delays.get(index).copied()
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still waiting for their first intersection.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
