use yew::prelude::*;

use crate::animation::hooks::use_pulse_intensity;
use crate::animation::orb_state::OrbState;

pub const DEFAULT_ORB_SIZE: f64 = 256.0;

const ACTIVE_SHADOW: &str = "0 0 60px rgba(59, 130, 246, 0.4), 0 0 100px rgba(59, 130, 246, 0.2)";
const IDLE_SHADOW: &str = "0 10px 40px rgba(0, 0, 0, 0.3)";

/// Pixel sizes and scale factors for every layer of an orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbLayout {
    pub size: f64,
    pub glow: f64,
    pub inner_glow: f64,
    pub ring_outer: f64,
    pub ring_inner: f64,
    pub icon: f64,
    pub glow_scale: f64,
    pub inner_glow_scale: f64,
    pub core_scale: f64,
}

impl OrbLayout {
    pub fn new(size: f64, state: OrbState, intensity: f64) -> Self {
        let glow = size * 1.5;
        let active = state.is_active();
        let scaled = |factor: f64| if active { intensity * factor } else { 1.0 };
        OrbLayout {
            size,
            glow,
            inner_glow: glow * 0.833,
            ring_outer: size * 0.875,
            ring_inner: size * 0.75,
            icon: size * 0.25,
            glow_scale: scaled(1.0),
            // The inner glow breathes less than the core.
            inner_glow_scale: scaled(0.9),
            core_scale: scaled(1.0),
        }
    }
}

fn square(px: f64) -> String {
    format!("width: {}px; height: {}px;", px, px)
}

#[derive(Properties, PartialEq)]
pub struct OrbProps {
    #[prop_or_default]
    pub state: OrbState,
    #[prop_or(DEFAULT_ORB_SIZE)]
    pub size: f64,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Pulsing voice-agent indicator.
#[function_component(Orb)]
pub fn orb(props: &OrbProps) -> Html {
    let state = props.state;
    let intensity = use_pulse_intensity(state);
    let layout = OrbLayout::new(props.size, state, intensity);
    let active = state.is_active();
    let gradient = state.gradient();

    let onclick = props.onclick.clone();
    let clickable = onclick.is_some().then_some("cursor-pointer");

    html! {
        <div
            class={classes!("relative", "flex", "items-center", "justify-center", clickable)}
            style={square(layout.size)}
            {onclick}
            data-state={state.label()}
        >
            // Outer glow rings
            <div
                class={classes!(
                    "absolute", "rounded-full", "bg-gradient-to-r", gradient, "blur-3xl",
                    "transition-opacity", "duration-700",
                    if active { "opacity-10" } else { "opacity-0" }
                )}
                style={format!(
                    "{} transform: scale({}); transition: transform 0.15s ease-out, opacity 0.7s ease-out;",
                    square(layout.glow), layout.glow_scale
                )}
            />
            <div
                class={classes!(
                    "absolute", "rounded-full", "bg-gradient-to-r", gradient, "blur-2xl",
                    "transition-opacity", "duration-500",
                    if active { "opacity-20" } else { "opacity-0" }
                )}
                style={format!(
                    "{} transform: scale({}); transition: transform 0.15s ease-out, opacity 0.5s ease-out;",
                    square(layout.inner_glow), layout.inner_glow_scale
                )}
            />

            // Main orb
            <div
                class={classes!(
                    "relative", "rounded-full", "bg-gradient-to-r", gradient,
                    "flex", "items-center", "justify-center", "transition-all", "duration-500"
                )}
                style={format!(
                    "{} transform: scale({}); box-shadow: {};",
                    square(layout.size), layout.core_scale,
                    if active { ACTIVE_SHADOW } else { IDLE_SHADOW }
                )}
            >
                <div
                    class={classes!(
                        "rounded-full", "backdrop-blur-sm", "flex", "items-center", "justify-center",
                        "transition-all", "duration-500",
                        if active { "bg-white/20" } else { "bg-white/5" }
                    )}
                    style={square(layout.ring_outer)}
                >
                    <div
                        class={classes!(
                            "rounded-full", "backdrop-blur-md", "flex", "items-center", "justify-center",
                            "transition-all", "duration-500",
                            if active { "bg-white/30" } else { "bg-white/10" }
                        )}
                        style={square(layout.ring_inner)}
                    >
                        { orb_core(state, layout.icon) }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn orb_core(state: OrbState, icon: f64) -> Html {
    match state {
        OrbState::Idle => html! { <PhoneIcon size={icon} /> },
        OrbState::Connecting => html! {
            <div
                class="border-4 border-white/50 border-t-white rounded-full animate-spin"
                style={square(icon * 0.75)}
            />
        },
        OrbState::Listening | OrbState::Thinking | OrbState::Speaking => html! {
            <div class="relative" style={square(icon * 1.25)}>
                { for (0..3u32).map(|ring| {
                    let step = f64::from(ring) * 0.3;
                    html! {
                        <div
                            key={ring}
                            class="absolute inset-0 rounded-full border-2 border-white/50"
                            style={format!(
                                "transform: scale({}); opacity: {}; animation: ping 2s cubic-bezier(0, 0, 0.2, 1) infinite {}s;",
                                1.0 + step, 1.0 - step, step
                            )}
                        />
                    }
                }) }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct PhoneIconProps {
    size: f64,
}

#[function_component(PhoneIcon)]
fn phone_icon(props: &PhoneIconProps) -> Html {
    html! {
        <svg
            class="text-white transition-opacity duration-300"
            style={square(props.size)}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_sizes_follow_size() {
        let layout = OrbLayout::new(128.0, OrbState::Idle, 1.0);
        assert_eq!(layout.glow, 192.0);
        assert!((layout.inner_glow - 159.936).abs() < 1e-9);
        assert_eq!(layout.ring_outer, 112.0);
        assert_eq!(layout.ring_inner, 96.0);
        assert_eq!(layout.icon, 32.0);
    }

    #[test]
    fn test_idle_orb_does_not_scale() {
        // Even if a stray intensity slips through, idle stays at scale 1.
        let layout = OrbLayout::new(256.0, OrbState::Idle, 1.4);
        assert_eq!(layout.glow_scale, 1.0);
        assert_eq!(layout.inner_glow_scale, 1.0);
        assert_eq!(layout.core_scale, 1.0);
    }

    #[test]
    fn test_inner_glow_scales_less_than_core() {
        let layout = OrbLayout::new(256.0, OrbState::Speaking, 1.4);
        assert_eq!(layout.core_scale, 1.4);
        assert_eq!(layout.glow_scale, 1.4);
        assert!((layout.inner_glow_scale - 1.26).abs() < 1e-12);
    }

    #[test]
    fn test_listening_orb_end_to_end() {
        use crate::animation::frame_loop::testing::ManualFrames;
        use crate::animation::frame_loop::PulseLoop;
        use std::cell::Cell;
        use std::rc::Rc;

        let frames = ManualFrames::starting_at(1_763_000_000_000.0);
        let latest = Rc::new(Cell::new(1.0));
        let sink = latest.clone();
        let pulse = PulseLoop::new(frames.clone(), move |v| sink.set(v));

        pulse.set_state(OrbState::Listening);
        for _ in 0..240 {
            frames.advance(16.0);
            let layout = OrbLayout::new(128.0, pulse.state(), latest.get());
            assert!((0.5..=1.5).contains(&layout.core_scale));
            assert_eq!(frames.scheduled(), 1);
        }

        pulse.set_state(OrbState::Idle);
        frames.advance(16.0);
        let layout = OrbLayout::new(128.0, pulse.state(), latest.get());
        assert_eq!(latest.get(), 1.0);
        assert_eq!(layout.core_scale, 1.0);
        assert_eq!(frames.scheduled(), 0);
    }
}
