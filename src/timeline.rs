//! Virtual-clock timers
//!
//! One-shot and repeating timers keyed by handle. Time only moves when the
//! owner calls [`Scheduler::advance_to`], which makes the whole schedule
//! testable by stepping a simulated clock.

use std::time::Duration;

/// Handle for cancelling a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    event: E,
}

#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer<E>>,
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Events of every pending timer, in no particular order
    pub fn pending(&self) -> impl Iterator<Item = &E> + '_ {
        self.timers.iter().map(|t| &t.event)
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Fire `event` once, `delay` from now
    pub fn once(&mut self, delay: Duration, event: E) -> TimerId {
        self.insert(delay, None, event)
    }

    /// Fire `event` every `period`, first time one period from now
    pub fn every(&mut self, period: Duration, event: E) -> TimerId {
        // A zero period would never let advance_to finish
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period), event)
    }

    /// Returns whether the timer was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        before != self.timers.len()
    }

    /// Move the clock forward and return every event that came due, in due
    /// order. Timers due at the same instant fire in the order they were
    /// scheduled. Repeating timers fire once per elapsed period.
    pub fn advance_to(&mut self, now: Duration) -> Vec<(TimerId, E)> {
        let mut fired = Vec::new();
        if now < self.now {
            return fired;
        }

        while let Some(index) = self.next_due(now) {
            let timer = &mut self.timers[index];
            fired.push((timer.id, timer.event.clone()));
            match timer.period {
                Some(period) => timer.due += period,
                None => {
                    self.timers.remove(index);
                }
            }
        }

        self.now = now;
        fired
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            period,
            event,
        });
        id
    }

    /// Earliest timer due at or before `now`; ties go to the older handle
    fn next_due(&self, now: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(i, _)| i)
    }
}

impl<E: Clone> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
