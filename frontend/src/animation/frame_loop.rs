use std::cell::Cell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::animation::orb_state::{OrbState, BASELINE_INTENSITY};
use crate::error::DomError;

pub type FrameCallback = Box<dyn FnOnce()>;

/// Id of one requested frame callback, as returned by `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Something that can run a callback on the next display refresh.
pub trait FrameScheduler {
    /// Wall-clock milliseconds.
    fn now(&self) -> f64;

    fn request(&self, callback: FrameCallback) -> Result<FrameId, DomError>;

    /// Cancelling an id that already ran, or was already cancelled, is a no-op.
    fn cancel(&self, id: FrameId);
}

/// Drives a pulse intensity from an `OrbState`, one frame at a time.
///
/// At most one frame callback is in flight. Every transition and the drop
/// cancel it first, and bump an epoch that queued callbacks check before
/// touching anything, so a callback that outlives its transition is inert.
pub struct PulseLoop<S: FrameScheduler + 'static> {
    shared: Rc<Shared<S>>,
}

struct Shared<S: FrameScheduler> {
    scheduler: S,
    state: Cell<OrbState>,
    intensity: Cell<f64>,
    pending: Cell<Option<FrameId>>,
    epoch: Cell<u64>,
    on_sample: Box<dyn Fn(f64)>,
}

impl<S: FrameScheduler + 'static> PulseLoop<S> {
    /// Creates an idle loop. `on_sample` receives every new intensity.
    pub fn new(scheduler: S, on_sample: impl Fn(f64) + 'static) -> Self {
        PulseLoop {
            shared: Rc::new(Shared {
                scheduler,
                state: Cell::new(OrbState::Idle),
                intensity: Cell::new(BASELINE_INTENSITY),
                pending: Cell::new(None),
                epoch: Cell::new(0),
                on_sample: Box::new(on_sample),
            }),
        }
    }

    pub fn state(&self) -> OrbState {
        self.shared.state.get()
    }

    #[cfg(test)]
    pub fn intensity(&self) -> f64 {
        self.shared.intensity.get()
    }

    /// Whether a frame callback is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.shared.pending.get().is_some()
    }

    pub fn set_state(&self, state: OrbState) {
        self.stop();
        debug!("orb pulse: {} -> {}", self.shared.state.get(), state);
        self.shared.state.set(state);
        if state.is_active() {
            Shared::tick(&self.shared);
        } else {
            self.shared.publish(BASELINE_INTENSITY);
        }
    }

    /// Cancels the in-flight callback without changing state or intensity.
    pub fn stop(&self) {
        self.shared.epoch.set(self.shared.epoch.get() + 1);
        if let Some(id) = self.shared.pending.take() {
            self.shared.scheduler.cancel(id);
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for PulseLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: FrameScheduler + 'static> Shared<S> {
    fn publish(&self, intensity: f64) {
        self.intensity.set(intensity);
        (self.on_sample)(intensity);
    }

    fn tick(this: &Rc<Self>) {
        let state = this.state.get();
        if !state.is_active() {
            return;
        }
        let epoch = this.epoch.get();
        this.publish(state.intensity_at(this.scheduler.now()));
        // `on_sample` may have stopped, restarted or dropped the loop.
        if this.epoch.get() != epoch {
            return;
        }

        let weak: Weak<Self> = Rc::downgrade(this);
        let next = Box::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if shared.epoch.get() != epoch {
                return;
            }
            shared.pending.set(None);
            Shared::tick(&shared);
        });

        match this.scheduler.request(next) {
            Ok(id) => this.pending.set(Some(id)),
            Err(e) => {
                warn!("orb pulse stopped, could not schedule frame: {}", e);
                this.pending.set(None);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    /// Frame scheduler with a hand-cranked clock.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        inner: Rc<ManualInner>,
    }

    #[derive(Default)]
    struct ManualInner {
        clock: Cell<f64>,
        next_id: Cell<i32>,
        queue: RefCell<Vec<(FrameId, FrameCallback)>>,
        ignore_cancel: Cell<bool>,
        fail_requests: Cell<bool>,
    }

    impl ManualFrames {
        pub fn starting_at(clock: f64) -> Self {
            let frames = ManualFrames::default();
            frames.inner.clock.set(clock);
            frames
        }

        pub fn scheduled(&self) -> usize {
            self.inner.queue.borrow().len()
        }

        /// Makes `cancel` forget to dequeue, like a scheduler that lost a race.
        pub fn ignore_cancel(&self) {
            self.inner.ignore_cancel.set(true);
        }

        pub fn fail_requests(&self) {
            self.inner.fail_requests.set(true);
        }

        /// Moves the clock forward and runs everything that was queued.
        pub fn advance(&self, ms: f64) {
            self.inner.clock.set(self.inner.clock.get() + ms);
            let due: Vec<_> = self.inner.queue.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback();
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        fn now(&self) -> f64 {
            self.inner.clock.get()
        }

        fn request(&self, callback: FrameCallback) -> Result<FrameId, DomError> {
            if self.inner.fail_requests.get() {
                return Err(DomError::Js {
                    api: "requestAnimationFrame",
                    reason: "refused".to_string(),
                });
            }
            let id = FrameId(self.inner.next_id.get() + 1);
            self.inner.next_id.set(id.0);
            self.inner.queue.borrow_mut().push((id, callback));
            Ok(id)
        }

        fn cancel(&self, id: FrameId) {
            if !self.inner.ignore_cancel.get() {
                self.inner.queue.borrow_mut().retain(|(queued, _)| *queued != id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::testing::ManualFrames;
    use super::*;

    const EPOCH_MS: f64 = 1_763_000_000_000.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn recording_loop(frames: &ManualFrames) -> (PulseLoop<ManualFrames>, Rc<RefCell<Vec<f64>>>) {
        let samples = Rc::new(RefCell::new(Vec::new()));
        let sink = samples.clone();
        let pulse = PulseLoop::new(frames.clone(), move |v| sink.borrow_mut().push(v));
        (pulse, samples)
    }

    #[test]
    fn test_new_loop_is_idle() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, samples) = recording_loop(&frames);
        assert_eq!(pulse.state(), OrbState::Idle);
        assert_eq!(pulse.intensity(), BASELINE_INTENSITY);
        assert!(!pulse.is_running());
        assert_eq!(frames.scheduled(), 0);
        assert!(samples.borrow().is_empty());
    }

    #[test]
    fn test_active_state_samples_immediately_and_every_frame() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Thinking);
        assert_eq!(samples.borrow().len(), 1);
        assert_eq!(frames.scheduled(), 1);
        assert!(pulse.is_running());

        for _ in 0..10 {
            frames.advance(FRAME_MS);
            // Never more than one callback in flight.
            assert_eq!(frames.scheduled(), 1);
        }
        assert_eq!(samples.borrow().len(), 11);
        assert_eq!(pulse.intensity(), OrbState::Thinking.intensity_at(frames.now()));
    }

    #[test]
    fn test_idle_publishes_baseline_and_schedules_nothing() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Idle);
        for _ in 0..30 {
            frames.advance(FRAME_MS);
        }
        assert_eq!(*samples.borrow(), vec![BASELINE_INTENSITY]);
        assert_eq!(frames.scheduled(), 0);
    }

    #[test]
    fn test_listening_to_idle_stops_within_one_tick() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Listening);
        for _ in 0..5 {
            frames.advance(FRAME_MS);
        }
        pulse.set_state(OrbState::Idle);
        assert_eq!(frames.scheduled(), 0);
        assert_eq!(pulse.intensity(), BASELINE_INTENSITY);

        let count = samples.borrow().len();
        frames.advance(FRAME_MS);
        frames.advance(FRAME_MS);
        assert_eq!(samples.borrow().len(), count);
        assert_eq!(samples.borrow().last(), Some(&BASELINE_INTENSITY));
    }

    #[test]
    fn test_switching_active_states_keeps_a_single_chain() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, _samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Connecting);
        frames.advance(FRAME_MS);
        pulse.set_state(OrbState::Speaking);
        assert_eq!(frames.scheduled(), 1);
        frames.advance(FRAME_MS);
        assert_eq!(frames.scheduled(), 1);
        assert_eq!(pulse.intensity(), OrbState::Speaking.intensity_at(frames.now()));
    }

    #[test]
    fn test_drop_while_active_leaves_nothing_scheduled() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Speaking);
        frames.advance(FRAME_MS);
        drop(pulse);
        assert_eq!(frames.scheduled(), 0);

        let count = samples.borrow().len();
        frames.advance(FRAME_MS);
        assert_eq!(samples.borrow().len(), count);
    }

    #[test]
    fn test_stale_callback_cannot_overwrite_reset() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        frames.ignore_cancel();
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Listening);
        pulse.set_state(OrbState::Idle);
        // The listening callback is still queued but must do nothing.
        assert_eq!(frames.scheduled(), 1);
        frames.advance(FRAME_MS);

        assert_eq!(pulse.intensity(), BASELINE_INTENSITY);
        assert_eq!(samples.borrow().last(), Some(&BASELINE_INTENSITY));
        assert_eq!(frames.scheduled(), 0);
        assert!(!pulse.is_running());
    }

    #[test]
    fn test_stop_from_sample_callback_ends_chain() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let slot: Rc<RefCell<Option<PulseLoop<ManualFrames>>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0usize));
        let pulse = {
            let slot = slot.clone();
            let count = count.clone();
            PulseLoop::new(frames.clone(), move |_| {
                count.set(count.get() + 1);
                if count.get() == 3 {
                    if let Some(pulse) = slot.borrow().as_ref() {
                        pulse.stop();
                    }
                }
            })
        };
        *slot.borrow_mut() = Some(pulse);

        slot.borrow().as_ref().unwrap().set_state(OrbState::Listening);
        for _ in 0..5 {
            frames.advance(FRAME_MS);
        }

        assert_eq!(count.get(), 3);
        assert_eq!(frames.scheduled(), 0);
        assert!(!slot.borrow().as_ref().unwrap().is_running());
    }

    #[test]
    fn test_stale_callback_after_drop_is_inert() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        frames.ignore_cancel();
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Listening);
        drop(pulse);
        frames.advance(FRAME_MS);
        assert_eq!(samples.borrow().len(), 1);
        assert_eq!(frames.scheduled(), 0);
    }

    #[test]
    fn test_failed_request_leaves_loop_stopped() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        frames.fail_requests();
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Listening);
        assert!(!pulse.is_running());
        assert_eq!(samples.borrow().len(), 1);
    }

    #[test]
    fn test_ten_seconds_of_listening() {
        let frames = ManualFrames::starting_at(EPOCH_MS);
        let (pulse, samples) = recording_loop(&frames);

        pulse.set_state(OrbState::Listening);
        for _ in 0..600 {
            frames.advance(FRAME_MS);
        }
        let samples = samples.borrow();
        assert_eq!(samples.len(), 601);
        assert!(samples.iter().all(|v| (0.5..=1.5).contains(v)));
        let max_step = OrbState::Listening.waveform().unwrap().max_slope() * FRAME_MS + 1e-5;
        assert!(samples.windows(2).all(|w| (w[1] - w[0]).abs() <= max_step));
    }
}
