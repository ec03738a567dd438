use std::time::Duration;

use leptos::prelude::{set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle};

use crate::error::SiteError;

/// Something that can run callbacks later and cancel them again.
pub trait Timers {
    type Handle;

    fn set_timeout(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<Self::Handle, SiteError>;

    fn set_interval(
        &self,
        period: Duration,
        callback: impl Fn() + 'static,
    ) -> Result<Self::Handle, SiteError>;

    /// Clearing a handle that already fired is a no-op.
    fn clear(&self, handle: Self::Handle);
}

/// `window.setTimeout` / `window.setInterval` through Leptos' helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

#[derive(Debug, Clone, Copy)]
pub enum BrowserHandle {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

impl Timers for BrowserTimers {
    type Handle = BrowserHandle;

    fn set_timeout(
        &self,
        delay: Duration,
        callback: impl FnOnce() + 'static,
    ) -> Result<Self::Handle, SiteError> {
        set_timeout_with_handle(callback, delay)
            .map(BrowserHandle::Timeout)
            .map_err(SiteError::timer)
    }

    fn set_interval(
        &self,
        period: Duration,
        callback: impl Fn() + 'static,
    ) -> Result<Self::Handle, SiteError> {
        set_interval_with_handle(callback, period)
            .map(BrowserHandle::Interval)
            .map_err(SiteError::timer)
    }

    fn clear(&self, handle: Self::Handle) {
        match handle {
            BrowserHandle::Timeout(h) => h.clear(),
            BrowserHandle::Interval(h) => h.clear(),
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualClock;


#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_manual_clock_fires_in_due_order() {
        let clock = ManualClock::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("c", 300), ("a", 100), ("b", 200)] {
            let fired = fired.clone();
            clock
                .set_timeout(Duration::from_millis(ms), move || fired.borrow_mut().push(name))
                .unwrap();
        }

        clock.advance_ms(150);
        assert_eq!(*fired.borrow(), vec!["a"]);
        clock.advance_ms(1000);
        assert_eq!(*fired.borrow(), vec!["a", "b", "c"]);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.now(), Duration::from_millis(1150));
    }

    #[test]
    fn test_manual_clock_interval_and_clear() {
        let clock = ManualClock::new();
        let ticks = Rc::new(RefCell::new(0));
        let handle = {
            let ticks = ticks.clone();
            clock
                .set_interval(Duration::from_millis(100), move || *ticks.borrow_mut() += 1)
                .unwrap()
        };

        clock.advance_ms(350);
        assert_eq!(*ticks.borrow(), 3);

        clock.clear(handle);
        clock.advance_ms(1000);
        assert_eq!(*ticks.borrow(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_manual_clock_schedules_from_callbacks() {
        let clock = ManualClock::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        {
            let inner_clock = clock.clone();
            let fired = fired.clone();
            clock
                .set_timeout(Duration::from_millis(10), move || {
                    let at = inner_clock.now();
                    fired.borrow_mut().push(at);
                    let fired = fired.clone();
                    let clock = inner_clock.clone();
                    inner_clock
                        .set_timeout(Duration::from_millis(5), move || {
                            fired.borrow_mut().push(clock.now())
                        })
                        .unwrap();
                })
                .unwrap();
        }

        clock.advance_ms(20);
        assert_eq!(
            *fired.borrow(),
            vec![Duration::from_millis(10), Duration::from_millis(15)]
        );
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let clock = ManualClock::new();
        assert!(matches!(
            clock.set_interval(Duration::ZERO, || {}),
            Err(SiteError::Timer(_))
        ));
    }
}
