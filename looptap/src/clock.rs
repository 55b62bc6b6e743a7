use std::{cell::Cell, rc::Rc};

/// Wall clock with whole-second resolution.
pub trait Clock {
    fn now_secs(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<i64>>);

impl ManualClock {
    pub fn new(secs: i64) -> Self {
        Self(Rc::new(Cell::new(secs)))
    }

    pub fn set(&self, secs: i64) {
        self.0.set(secs);
    }

    pub fn advance(&self, secs: i64) {
        self.0.set(self.0.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_is_shared() {
        let clock = ManualClock::new(10);
        let other = clock.clone();
        other.advance(3);
        assert_eq!(clock.now_secs(), 13);
        clock.set(1);
        assert_eq!(other.now_secs(), 1);
    }
}
