use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::timers::Timers;

/// Delay between mount and the first cycle.
pub const STARTUP_DELAY: Duration = Duration::from_millis(1000);
/// Steady-state spacing between cycle starts.
pub const CYCLE_PERIOD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Mounted, first cycle not started yet.
    #[default]
    Waiting,
    CursorHidden,
    Exiting,
    Entering,
    Settling,
    Idle,
}

impl Phase {
    /// How long the cycle stays in this phase before moving on.
    pub fn hold(self) -> Option<Duration> {
        match self {
            Phase::CursorHidden => Some(Duration::from_millis(500)),
            Phase::Exiting => Some(Duration::from_millis(250)),
            Phase::Entering => Some(Duration::from_millis(500)),
            Phase::Settling => Some(Duration::from_millis(100)),
            Phase::Waiting | Phase::Idle => None,
        }
    }

    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::CursorHidden => Some(Phase::Exiting),
            Phase::Exiting => Some(Phase::Entering),
            Phase::Entering => Some(Phase::Settling),
            Phase::Settling => Some(Phase::Idle),
            Phase::Waiting | Phase::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleAnimation {
    #[default]
    None,
    Exit,
    Enter,
}

impl RoleAnimation {
    pub fn class(self) -> &'static str {
        match self {
            RoleAnimation::None => "",
            RoleAnimation::Exit => "animate-role-exit",
            RoleAnimation::Enter => "animate-role-enter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleState {
    pub index: usize,
    pub phase: Phase,
    pub animation: RoleAnimation,
    pub cursor_visible: bool,
}

impl Default for CycleState {
    fn default() -> Self {
        Self {
            index: 0,
            phase: Phase::Waiting,
            animation: RoleAnimation::None,
            cursor_visible: true,
        }
    }
}

struct CyclerInner<T: Timers> {
    timers: T,
    len: usize,
    state: RefCell<CycleState>,
    startup: RefCell<Option<T::Handle>>,
    interval: RefCell<Option<T::Handle>>,
    /// Handles scheduled by the cycle currently in flight.
    pending: RefCell<Vec<T::Handle>>,
    on_change: Box<dyn Fn(&CycleState)>,
}

/// Drives the role label through its exit/enter animation on a fixed period.
///
/// The cycler owns every timer it schedules. Callbacks only hold weak
/// references, so dropping the cycler (or calling [`RoleCycler::stop`])
/// leaves nothing behind that can fire.
pub struct RoleCycler<T: Timers + 'static> {
    inner: Rc<CyclerInner<T>>,
}

impl<T: Timers + 'static> RoleCycler<T> {
    pub fn new(timers: T, len: usize, on_change: impl Fn(&CycleState) + 'static) -> Self {
        Self {
            inner: Rc::new(CyclerInner {
                timers,
                len: len.max(1),
                state: RefCell::new(CycleState::default()),
                startup: RefCell::new(None),
                interval: RefCell::new(None),
                pending: RefCell::new(Vec::new()),
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn state(&self) -> CycleState {
        *self.inner.state.borrow()
    }

    /// Schedules the first cycle after [`STARTUP_DELAY`]; the repeating
    /// trigger is armed once that first cycle has started.
    pub fn start(&self) {
        self.stop();
        let weak = Rc::downgrade(&self.inner);
        let scheduled = self.inner.timers.set_timeout(STARTUP_DELAY, move || {
            if let Some(inner) = weak.upgrade() {
                inner.run_cycle();
                inner.arm_interval();
            }
        });
        match scheduled {
            Ok(handle) => *self.inner.startup.borrow_mut() = Some(handle),
            Err(e) => log::warn!("role cycler didn't start: {e}"),
        }
    }

    /// Cancels the startup delay, the repeating trigger and any phase still pending.
    pub fn stop(&self) {
        let inner = &self.inner;
        if let Some(handle) = inner.startup.borrow_mut().take() {
            inner.timers.clear(handle);
        }
        if let Some(handle) = inner.interval.borrow_mut().take() {
            inner.timers.clear(handle);
        }
        inner.clear_pending();
    }
}

impl<T: Timers + 'static> Drop for RoleCycler<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T: Timers + 'static> CyclerInner<T> {
    fn arm_interval(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        match self.timers.set_interval(CYCLE_PERIOD, move || {
            if let Some(inner) = weak.upgrade() {
                inner.run_cycle();
            }
        }) {
            Ok(handle) => {
                if let Some(old) = self.interval.borrow_mut().replace(handle) {
                    self.timers.clear(old);
                }
            }
            Err(e) => log::warn!("role cycler interval failed: {e}"),
        }
    }

    fn clear_pending(&self) {
        let handles = self.pending.borrow_mut().drain(..).collect::<Vec<_>>();
        for handle in handles {
            self.timers.clear(handle);
        }
    }

    fn run_cycle(self: &Rc<Self>) {
        self.clear_pending();
        self.enter(Phase::CursorHidden);
    }

    fn enter(self: &Rc<Self>, phase: Phase) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.phase = phase;
            match phase {
                Phase::CursorHidden => state.cursor_visible = false,
                Phase::Exiting => state.animation = RoleAnimation::Exit,
                Phase::Entering => {
                    state.index = (state.index + 1) % self.len;
                    state.animation = RoleAnimation::Enter;
                }
                Phase::Settling => state.animation = RoleAnimation::None,
                Phase::Idle => state.cursor_visible = true,
                Phase::Waiting => {}
            }
            *state
        };
        (self.on_change)(&snapshot);

        if let (Some(hold), Some(next)) = (phase.hold(), phase.next()) {
            self.schedule(hold, next);
        }
    }

    fn schedule(self: &Rc<Self>, delay: Duration, phase: Phase) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let scheduled = self.timers.set_timeout(delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.enter(phase);
            }
        });
        match scheduled {
            Ok(handle) => self.pending.borrow_mut().push(handle),
            Err(e) => log::warn!("role cycler phase {phase:?} not scheduled: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::timers::ManualClock;

    fn setup(len: usize) -> (ManualClock, RoleCycler<ManualClock>, Rc<Cell<usize>>) {
        let clock = ManualClock::new();
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let cycler = RoleCycler::new(clock.clone(), len, move |_| {
            counter.set(counter.get() + 1)
        });
        (clock, cycler, changes)
    }

    #[test]
    fn test_waits_before_first_cycle() {
        let (clock, cycler, changes) = setup(3);
        cycler.start();

        clock.advance_ms(999);
        assert_eq!(cycler.state(), CycleState::default());
        assert_eq!(changes.get(), 0);

        clock.advance_ms(1);
        let state = cycler.state();
        assert_eq!(state.phase, Phase::CursorHidden);
        assert!(!state.cursor_visible);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_phase_timeline_of_first_cycle() {
        let (clock, cycler, _) = setup(3);
        cycler.start();
        // first trigger at t=1000
        clock.advance_ms(1000);

        let expect = |at: u64, phase: Phase, animation: RoleAnimation, index: usize, cursor: bool| {
            let target = Duration::from_millis(at);
            clock.advance(target - clock.now());
            let state = cycler.state();
            assert_eq!(state.phase, phase, "phase at {at}");
            assert_eq!(state.animation, animation, "animation at {at}");
            assert_eq!(state.index, index, "index at {at}");
            assert_eq!(state.cursor_visible, cursor, "cursor at {at}");
        };

        expect(1499, Phase::CursorHidden, RoleAnimation::None, 0, false);
        expect(1500, Phase::Exiting, RoleAnimation::Exit, 0, false);
        expect(1749, Phase::Exiting, RoleAnimation::Exit, 0, false);
        expect(1750, Phase::Entering, RoleAnimation::Enter, 1, false);
        expect(2249, Phase::Entering, RoleAnimation::Enter, 1, false);
        expect(2250, Phase::Settling, RoleAnimation::None, 1, false);
        expect(2350, Phase::Idle, RoleAnimation::None, 1, true);
        // back to the resting look well before the next trigger at 3000
        expect(2999, Phase::Idle, RoleAnimation::None, 1, true);
        expect(3000, Phase::CursorHidden, RoleAnimation::None, 1, false);
    }

    #[test]
    fn test_steady_state_period_is_two_seconds() {
        let (clock, cycler, _) = setup(100);
        cycler.start();
        clock.advance_ms(1000);

        let mut starts = Vec::new();
        let mut last = cycler.state().phase;
        for _ in 0..10_000 {
            clock.advance_ms(1);
            let phase = cycler.state().phase;
            if phase == Phase::CursorHidden && last != Phase::CursorHidden {
                starts.push(clock.now().as_millis());
            }
            last = phase;
        }
        assert_eq!(starts, vec![3000, 5000, 7000, 9000, 11000]);
        assert_eq!(cycler.state().index, 5);
    }

    #[test]
    fn test_index_wraps() {
        let (clock, cycler, _) = setup(3);
        cycler.start();
        clock.advance_ms(1000);

        let mut seen = Vec::new();
        for _ in 0..4 {
            clock.advance_ms(1500);
            seen.push(cycler.state().index);
            clock.advance_ms(500);
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_single_role_stays_on_zero() {
        let (clock, cycler, _) = setup(1);
        cycler.start();
        clock.advance_ms(5000);
        assert_eq!(cycler.state().index, 0);
    }

    #[test]
    fn test_only_one_chain_in_flight() {
        let (clock, cycler, _) = setup(5);
        cycler.start();
        clock.advance_ms(1000);
        for _ in 0..4000 {
            clock.advance_ms(1);
            // the interval plus at most one pending phase step
            assert!(clock.pending() <= 2, "pending {}", clock.pending());
        }
    }

    #[test]
    fn test_stop_cancels_everything() {
        for stop_at in [0, 500, 1000, 1200, 1600, 1800, 2300, 2900, 7777] {
            let (clock, cycler, changes) = setup(4);
            cycler.start();
            clock.advance_ms(stop_at);
            cycler.stop();

            assert_eq!(clock.pending(), 0, "stopped at {stop_at}");
            let before = (cycler.state(), changes.get());
            clock.advance_ms(20_000);
            assert_eq!((cycler.state(), changes.get()), before, "stopped at {stop_at}");
        }
    }

    #[test]
    fn test_drop_cancels_everything() {
        let (clock, cycler, changes) = setup(4);
        cycler.start();
        clock.advance_ms(1600);
        drop(cycler);

        assert_eq!(clock.pending(), 0);
        let before = changes.get();
        clock.advance_ms(10_000);
        assert_eq!(changes.get(), before);
    }

    #[test]
    fn test_restart_does_not_double_up() {
        let (clock, cycler, _) = setup(10);
        cycler.start();
        clock.advance_ms(1200);
        cycler.start();
        clock.advance_ms(1000 + 2000 * 3 + 1500);
        // restarted at 1200, so cycles run at 2200, 4200, 6200 and 8200; the one cut off
        // at 1200 never reached its index step
        assert_eq!(cycler.state().index, 4);
    }

    #[test]
    fn test_animation_classes() {
        assert_eq!(RoleAnimation::None.class(), "");
        assert_eq!(RoleAnimation::Exit.class(), "animate-role-exit");
        assert_eq!(RoleAnimation::Enter.class(), "animate-role-enter");
    }

    #[test]
    fn test_phase_holds_sum_to_cycle_body() {
        let mut phase = Phase::CursorHidden;
        let mut total = Duration::ZERO;
        while let Some(hold) = phase.hold() {
            total += hold;
            phase = phase.next().expect("held phases have a successor");
        }
        assert_eq!(phase, Phase::Idle);
        assert_eq!(total, Duration::from_millis(1350));
        assert!(total < CYCLE_PERIOD);
    }
}
