use gloo_timers::callback::Timeout;
use log::warn;
use stylist::Style;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const CYCLE_INTERVAL_MS: u32 = 3000;
/// Pause with no animation applied between two cycle steps.
pub const CYCLE_GAP_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RobotAnimation {
    Loading,
    Blinking,
    Winking,
    Scanning,
    Dancing,
    Alert,
    /// Rotate through every other animation.
    #[default]
    Cycle,
}

impl RobotAnimation {
    pub const ROTATION: [RobotAnimation; 6] = [
        RobotAnimation::Loading,
        RobotAnimation::Blinking,
        RobotAnimation::Winking,
        RobotAnimation::Scanning,
        RobotAnimation::Dancing,
        RobotAnimation::Alert,
    ];

    pub fn class(self) -> Option<&'static str> {
        match self {
            RobotAnimation::Loading => Some("loading"),
            RobotAnimation::Blinking => Some("blinking"),
            RobotAnimation::Winking => Some("winking"),
            RobotAnimation::Scanning => Some("scanning"),
            RobotAnimation::Dancing => Some("dancing"),
            RobotAnimation::Alert => Some("alert"),
            RobotAnimation::Cycle => None,
        }
    }
}

/// Where the cycle is. The first step replays `Loading`, which is also what
/// a cycling robot shows before its first step.
#[derive(Debug, Default)]
pub struct Rotation {
    index: usize,
}

impl Rotation {
    pub fn advance(&mut self) -> RobotAnimation {
        let step = RobotAnimation::ROTATION[self.index];
        self.index = (self.index + 1) % RobotAnimation::ROTATION.len();
        step
    }
}

const ROBOT_CSS: &str = r#"
display: flex;
align-items: center;
justify-content: center;

.robot {
    position: relative;
    width: 160px;
    height: 190px;
}
.signal {
    position: absolute;
    top: 0;
    left: 50%;
    width: 80px;
    height: 40px;
    margin-left: -40px;
}
.wave {
    position: absolute;
    left: 50%;
    bottom: 0;
    border: 3px solid transparent;
    border-top-color: #3b82f6;
    border-radius: 50%;
    opacity: 0;
}
.wave1 {
    width: 24px;
    height: 24px;
    margin-left: -12px;
}
.wave2 {
    width: 48px;
    height: 48px;
    margin-left: -24px;
    bottom: -12px;
}
.wave3 {
    width: 72px;
    height: 72px;
    margin-left: -36px;
    bottom: -24px;
}
.antenna {
    position: absolute;
    top: 44px;
    left: 50%;
    width: 6px;
    height: 24px;
    margin-left: -3px;
    background: #94a3b8;
    border-radius: 3px;
}
.antenna-tip {
    position: absolute;
    top: -10px;
    left: -5px;
    width: 16px;
    height: 16px;
    border-radius: 50%;
    background: #3b82f6;
    box-shadow: 0 0 12px #3b82f6;
}
.head {
    position: absolute;
    top: 68px;
    left: 10px;
    width: 140px;
    height: 110px;
    background: linear-gradient(180deg, #e2e8f0, #94a3b8);
    border-radius: 32px;
}
.ear {
    position: absolute;
    top: 35px;
    width: 14px;
    height: 40px;
    background: #64748b;
    border-radius: 7px;
}
.ear.left {
    left: -12px;
}
.ear.right {
    right: -12px;
}
.face {
    position: absolute;
    top: 16px;
    left: 16px;
    right: 16px;
    bottom: 16px;
    background: #0f172a;
    border-radius: 22px;
    display: flex;
    align-items: center;
    justify-content: center;
}
.eyes {
    display: flex;
    gap: 28px;
}
.eye {
    position: relative;
    width: 22px;
    height: 28px;
    background: #60a5fa;
    border-radius: 50%;
    overflow: hidden;
    box-shadow: 0 0 10px #3b82f6;
}
.eyelid {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 0;
    background: #0f172a;
}
.robot.loading .wave1 {
    animation: robot-signal 1.2s ease-in-out infinite;
}
.robot.loading .wave2 {
    animation: robot-signal 1.2s ease-in-out 0.2s infinite;
}
.robot.loading .wave3 {
    animation: robot-signal 1.2s ease-in-out 0.4s infinite;
}
.robot.blinking .eyelid {
    animation: robot-blink 1.5s ease-in-out infinite;
}
.robot.winking .eye.right .eyelid {
    animation: robot-blink 1.5s ease-in-out infinite;
}
.robot.scanning .eye {
    animation: robot-scan 1s ease-in-out infinite;
}
.robot.dancing {
    animation: robot-dance 0.6s ease-in-out infinite;
    transform-origin: 50% 100%;
}
.robot.alert .antenna-tip {
    animation: robot-alert 0.4s linear infinite;
}
.robot.alert .head {
    animation: robot-shake 0.3s linear infinite;
}
"#;

// Keyframe names are global, so they ship as a plain stylesheet.
const ROBOT_KEYFRAMES: &str = r#"
@keyframes robot-signal {
    0% { opacity: 0; }
    50% { opacity: 1; }
    100% { opacity: 0; }
}
@keyframes robot-blink {
    0%, 90%, 100% { height: 0; }
    95% { height: 100%; }
}
@keyframes robot-scan {
    0%, 100% { transform: translateX(-6px); }
    50% { transform: translateX(6px); }
}
@keyframes robot-dance {
    0%, 100% { transform: rotate(-6deg); }
    50% { transform: rotate(6deg); }
}
@keyframes robot-alert {
    0%, 100% { background: #ef4444; box-shadow: 0 0 16px #ef4444; }
    50% { background: #7f1d1d; box-shadow: none; }
}
@keyframes robot-shake {
    0%, 100% { transform: translateX(0); }
    25% { transform: translateX(-3px); }
    75% { transform: translateX(3px); }
}
"#;

#[derive(Properties, PartialEq)]
pub struct RobotProps {
    #[prop_or_default]
    pub animation: RobotAnimation,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Robot)]
pub fn robot(props: &RobotProps) -> Html {
    let cycling = props.animation == RobotAnimation::Cycle;
    let shown = use_state(|| Some(RobotAnimation::Loading));
    let rotation = use_mut_ref(Rotation::default);
    let gap = use_mut_ref(|| None::<Timeout>);

    {
        let shown = shown.clone();
        let gap = gap.clone();
        use_interval(
            move || {
                shown.set(None);
                let next = rotation.borrow_mut().advance();
                let shown = shown.clone();
                *gap.borrow_mut() = Some(Timeout::new(CYCLE_GAP_MS, move || shown.set(Some(next))));
            },
            if cycling { CYCLE_INTERVAL_MS } else { 0 },
        );
    }

    // A gap timeout must not fire after the cycle stopped or the robot unmounted.
    {
        let gap = gap.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    gap.borrow_mut().take();
                }
            },
            cycling,
        );
    }

    let style = use_memo(
        |_| {
            Style::new(ROBOT_CSS)
                .map_err(|e| warn!("robot styles did not parse: {}", e))
                .ok()
        },
        (),
    );

    let current = if cycling { *shown } else { Some(props.animation) };

    html! {
        <div class={classes!("robot-container", (*style).clone(), props.class.clone())}>
            <style>{ ROBOT_KEYFRAMES }</style>
            <div class={classes!("robot", current.and_then(RobotAnimation::class))}>
                <div class="signal">
                    <div class="wave wave3"></div>
                    <div class="wave wave2"></div>
                    <div class="wave wave1"></div>
                </div>
                <div class="antenna">
                    <div class="antenna-tip"></div>
                </div>
                <div class="head">
                    <div class="ear left"></div>
                    <div class="ear right"></div>
                    <div class="face">
                        <div class="eyes">
                            <div class="eye left">
                                <div class="eyelid"></div>
                            </div>
                            <div class="eye right">
                                <div class="eyelid"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_replays_loading_then_walks_the_list() {
        let mut rotation = Rotation::default();
        let steps: Vec<_> = (0..8).map(|_| rotation.advance()).collect();
        assert_eq!(
            steps,
            vec![
                RobotAnimation::Loading,
                RobotAnimation::Blinking,
                RobotAnimation::Winking,
                RobotAnimation::Scanning,
                RobotAnimation::Dancing,
                RobotAnimation::Alert,
                RobotAnimation::Loading,
                RobotAnimation::Blinking,
            ]
        );
    }

    #[test]
    fn test_cycle_has_no_class_of_its_own() {
        assert_eq!(RobotAnimation::Cycle.class(), None);
        assert!(RobotAnimation::ROTATION.iter().all(|a| a.class().is_some()));
        assert_eq!(RobotAnimation::default(), RobotAnimation::Cycle);
    }

    #[test]
    fn test_scoped_styles_parse() {
        let sheet: Result<stylist::ast::Sheet, _> = ROBOT_CSS.parse();
        assert!(sheet.is_ok(), "{:?}", sheet.err());
    }
}
