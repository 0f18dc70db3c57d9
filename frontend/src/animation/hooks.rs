use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Window};
use yew::prelude::*;

use crate::animation::frame_loop::{FrameCallback, FrameId, FrameScheduler, PulseLoop};
use crate::animation::orb_state::{OrbState, BASELINE_INTENSITY};
use crate::error::DomError;

/// `requestAnimationFrame` behind the `FrameScheduler` seam.
///
/// One JS closure lives as long as the scheduler and is handed to every
/// request; it runs whatever callback is queued, so nothing is ever freed
/// from inside its own invocation.
pub struct BrowserFrames {
    window: Window,
    queued: Rc<RefCell<Option<FrameCallback>>>,
    tick: Closure<dyn FnMut()>,
}

impl BrowserFrames {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let queued: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let tick = {
            let queued = queued.clone();
            Closure::wrap(Box::new(move || {
                let callback = queued.borrow_mut().take();
                if let Some(callback) = callback {
                    callback();
                }
            }) as Box<dyn FnMut()>)
        };
        Ok(BrowserFrames { window, queued, tick })
    }
}

impl FrameScheduler for BrowserFrames {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn request(&self, callback: FrameCallback) -> Result<FrameId, DomError> {
        *self.queued.borrow_mut() = Some(callback);
        self.window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
            .map(FrameId)
            .map_err(|e| {
                self.queued.borrow_mut().take();
                DomError::js("requestAnimationFrame", e)
            })
    }

    fn cancel(&self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id.0) {
            warn!("{}", DomError::js("cancelAnimationFrame", e));
        }
        self.queued.borrow_mut().take();
    }
}

/// Current pulse intensity for an orb in `state`, refreshed every frame
/// while the state is active and pinned to `1.0` while idle.
#[hook]
pub fn use_pulse_intensity(state: OrbState) -> f64 {
    let intensity = use_state_eq(|| BASELINE_INTENSITY);
    let pulse = use_mut_ref(|| None::<PulseLoop<BrowserFrames>>);

    // Own one loop for the lifetime of the component.
    {
        let pulse = pulse.clone();
        let setter = intensity.setter();
        use_effect_with_deps(
            move |_| {
                match BrowserFrames::new() {
                    Ok(frames) => {
                        *pulse.borrow_mut() = Some(PulseLoop::new(frames, move |v| setter.set(v)));
                    }
                    Err(e) => warn!("orb pulse disabled: {}", e),
                }
                move || {
                    // Dropping the loop cancels its pending frame.
                    pulse.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let pulse = pulse.clone();
        use_effect_with_deps(
            move |state| {
                if let Some(pulse) = pulse.borrow().as_ref() {
                    // A chain that failed to schedule is restarted too.
                    let stalled = state.is_active() && !pulse.is_running();
                    if pulse.state() != *state || stalled {
                        pulse.set_state(*state);
                    }
                }
                || ()
            },
            state,
        );
    }

    *intensity
}
