use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};
use yew::prelude::*;

use crate::error::DomError;
use crate::reveal::visibility::{intersects, Bounds, RevealOptions, VisibilityLatch};

type Latch = Rc<RefCell<VisibilityLatch>>;

/// A registered visibility watch. Dropping it deregisters.
enum Watch {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Scroll {
        window: Window,
        listener: Closure<dyn FnMut()>,
    },
}

impl Watch {
    fn start(element: Element, options: RevealOptions, on_change: UseStateSetter<bool>) -> Result<Self, DomError> {
        let latch: Latch = Rc::new(RefCell::new(VisibilityLatch::new(options.once)));
        match Self::observe(&element, &options, latch.clone(), on_change.clone()) {
            Ok(watch) => Ok(watch),
            Err(e) => {
                debug!("falling back to scroll listener for reveal: {}", e);
                Self::listen(element, options, latch, on_change)
            }
        }
    }

    fn observe(
        element: &Element,
        options: &RevealOptions,
        latch: Latch,
        on_change: UseStateSetter<bool>,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            // Only one element is observed; the newest entry is authoritative.
            let Some(entry) = entries
                .iter()
                .last()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
            else {
                return;
            };
            // The observer only notifies on threshold crossings, and reports a
            // section taller than the viewport as intersecting below its ratio.
            let mut latch = latch.borrow_mut();
            if latch.observe(entry.is_intersecting()) {
                on_change.set(latch.is_visible());
            }
            if latch.is_settled() {
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| DomError::js("IntersectionObserver", e))?;
        observer.observe(element);
        Ok(Watch::Observer { observer, _callback: callback })
    }

    fn listen(
        element: Element,
        options: RevealOptions,
        latch: Latch,
        on_change: UseStateSetter<bool>,
    ) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let listener = {
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let mut latch = latch.borrow_mut();
                if latch.is_settled() {
                    return;
                }
                let Some(viewport) = viewport_bounds(&window) else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                let bounds = Bounds::new(rect.top(), rect.left(), rect.width(), rect.height());
                if latch.observe(intersects(bounds, viewport, &options)) {
                    on_change.set(latch.is_visible());
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("addEventListener", e))?;

        // Initial check, for sections already on screen.
        listener
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL)
            .map_err(|e| DomError::js("scroll listener", e))?;

        Ok(Watch::Scroll { window, listener })
    }
}

impl Drop for Watch {
    fn drop(&mut self) {
        match self {
            Watch::Observer { observer, .. } => observer.disconnect(),
            Watch::Scroll { window, listener } => {
                if let Err(e) =
                    window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                {
                    warn!("{}", DomError::js("removeEventListener", e));
                }
            }
        }
    }
}

fn viewport_bounds(window: &Window) -> Option<Bounds> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Bounds::new(0.0, 0.0, width, height))
}

/// The element currently watched and the options it was watched with.
struct Active {
    element: Element,
    options: RevealOptions,
    _watch: Watch,
}

/// Watches the element behind the returned `NodeRef` and reports whether
/// it has come into view. The ref must be attached to a rendered element.
///
/// If a re-render swaps the element or changes `options`, the old watch is
/// dropped and a new one registered.
#[hook]
pub fn use_scroll_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let active = use_mut_ref(|| None::<Active>);

    {
        let node = node.clone();
        let active = active.clone();
        let setter = visible.setter();
        use_effect(move || {
            let element = node.cast::<Element>();
            let mut active = active.borrow_mut();
            let current = active.as_ref().map(|a| (&a.element, a.options));
            if current != element.as_ref().map(|e| (e, options)) {
                // Deregister before registering the replacement.
                active.take();
                *active = element.and_then(|element| {
                    Watch::start(element.clone(), options, setter)
                        .map(|watch| Active { element, options, _watch: watch })
                        .map_err(|e| warn!("reveal watch not started: {}", e))
                        .ok()
                });
            }
            || ()
        });
    }

    use_effect_with_deps(
        move |_| {
            move || {
                active.borrow_mut().take();
            }
        },
        (),
    );

    (node, *visible)
}
