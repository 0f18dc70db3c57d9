use std::fmt;
use std::str::FromStr;

use crate::error::UnknownOrbState;

/// Intensity of an orb that is not animating.
pub const BASELINE_INTENSITY: f64 = 1.0;

/// What the voice agent behind an orb is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrbState {
    #[default]
    Idle,
    Connecting,
    Listening,
    Thinking,
    Speaking,
}

impl OrbState {
    #[cfg(any(test, feature = "catalog"))]
    pub const ALL: [OrbState; 5] = [
        OrbState::Idle,
        OrbState::Connecting,
        OrbState::Listening,
        OrbState::Thinking,
        OrbState::Speaking,
    ];

    /// Parses a state label, treating anything unrecognized as `Idle`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            OrbState::Idle => "idle",
            OrbState::Connecting => "connecting",
            OrbState::Listening => "listening",
            OrbState::Thinking => "thinking",
            OrbState::Speaking => "speaking",
        }
    }

    pub fn is_active(self) -> bool {
        !matches!(self, OrbState::Idle)
    }

    /// The state a click on the hero orb moves to.
    pub fn next(self) -> Self {
        match self {
            OrbState::Idle => OrbState::Connecting,
            OrbState::Connecting => OrbState::Listening,
            OrbState::Listening => OrbState::Thinking,
            OrbState::Thinking => OrbState::Speaking,
            OrbState::Speaking => OrbState::Idle,
        }
    }

    pub fn waveform(self) -> Option<Waveform> {
        match self {
            OrbState::Idle => None,
            OrbState::Connecting => Some(Waveform::single(0.002, 0.1)),
            OrbState::Listening | OrbState::Speaking => Some(Waveform::composite(0.003, 0.3, 0.2)),
            OrbState::Thinking => Some(Waveform::single(0.005, 0.15)),
        }
    }

    /// Pulse intensity at wall-clock time `now_ms`.
    pub fn intensity_at(self, now_ms: f64) -> f64 {
        self.waveform()
            .map_or(BASELINE_INTENSITY, |waveform| waveform.sample(now_ms))
    }

    /// Tailwind gradient stops for the orb and its glow layers.
    pub fn gradient(self) -> &'static str {
        match self {
            OrbState::Connecting => "from-blue-500 via-blue-400 to-blue-500",
            OrbState::Listening => "from-blue-400 via-blue-300 to-blue-400",
            OrbState::Thinking => "from-blue-600 via-blue-500 to-blue-600",
            OrbState::Speaking => "from-blue-500 via-blue-400 to-cyan-400",
            OrbState::Idle => "from-slate-700 via-slate-600 to-slate-700",
        }
    }
}

impl FromStr for OrbState {
    type Err = UnknownOrbState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(OrbState::Idle),
            "connecting" => Ok(OrbState::Connecting),
            "listening" => Ok(OrbState::Listening),
            "thinking" => Ok(OrbState::Thinking),
            "speaking" => Ok(OrbState::Speaking),
            _ => Err(UnknownOrbState(s.to_string())),
        }
    }
}

impl fmt::Display for OrbState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A base sinusoid plus an optional overtone at 1.5x its rate.
///
/// Sampling is a pure function of absolute time, so a loop restarted at any
/// moment continues the same curve instead of jumping back to its phase 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waveform {
    /// Radians per millisecond.
    pub rate: f64,
    pub amplitude: f64,
    pub overtone: f64,
}

impl Waveform {
    const OVERTONE_RATIO: f64 = 1.5;

    pub const fn single(rate: f64, amplitude: f64) -> Self {
        Waveform { rate, amplitude, overtone: 0.0 }
    }

    pub const fn composite(rate: f64, amplitude: f64, overtone: f64) -> Self {
        Waveform { rate, amplitude, overtone }
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        let t = now_ms * self.rate;
        BASELINE_INTENSITY
            + t.sin() * self.amplitude
            + (t * Self::OVERTONE_RATIO).sin() * self.overtone
    }

    /// Closed range every sample falls in.
    #[cfg(test)]
    pub fn bounds(&self) -> (f64, f64) {
        let swing = self.amplitude + self.overtone;
        (BASELINE_INTENSITY - swing, BASELINE_INTENSITY + swing)
    }

    /// Upper bound of `|d sample / d ms|`.
    #[cfg(test)]
    pub fn max_slope(&self) -> f64 {
        self.rate * (self.amplitude + Self::OVERTONE_RATIO * self.overtone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Roughly what Date.now() returns in late 2025.
    const EPOCH_MS: f64 = 1_763_000_000_000.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn test_active_states_stay_bounded_and_continuous() {
        for state in OrbState::ALL.into_iter().filter(|s| s.is_active()) {
            let waveform = state.waveform().unwrap();
            let (low, high) = waveform.bounds();
            let mut previous = state.intensity_at(EPOCH_MS);
            let mut now = EPOCH_MS;
            // Ten seconds of frames.
            for _ in 0..600 {
                now += FRAME_MS;
                let value = state.intensity_at(now);
                assert!(value >= low - 1e-9 && value <= high + 1e-9, "{state}: {value}");
                let delta = (value - previous).abs();
                assert!(delta <= waveform.max_slope() * FRAME_MS + 1e-5, "{state} jumped by {delta}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_listening_range_matches_design() {
        let (low, high) = OrbState::Listening.waveform().unwrap().bounds();
        assert!((low - 0.5).abs() < 1e-12);
        assert!((high - 1.5).abs() < 1e-12);

        let (low, high) = OrbState::Connecting.waveform().unwrap().bounds();
        assert!(low > OrbState::Thinking.waveform().unwrap().bounds().0);
        assert!(high < 1.15);
    }

    #[test]
    fn test_idle_is_flat() {
        assert!(OrbState::Idle.waveform().is_none());
        for step in 0..100 {
            let now = EPOCH_MS + step as f64 * 37.0;
            assert_eq!(OrbState::Idle.intensity_at(now), BASELINE_INTENSITY);
        }
    }

    #[test]
    fn test_listening_and_speaking_share_a_curve() {
        for step in 0..50 {
            let now = EPOCH_MS + step as f64 * 11.0;
            assert_eq!(
                OrbState::Listening.intensity_at(now),
                OrbState::Speaking.intensity_at(now)
            );
        }
    }

    #[test]
    fn test_signal_actually_oscillates() {
        let samples: Vec<f64> = (0..600)
            .map(|i| OrbState::Listening.intensity_at(EPOCH_MS + i as f64 * FRAME_MS))
            .collect();
        let max = samples.iter().cloned().fold(f64::MIN, f64::max);
        let min = samples.iter().cloned().fold(f64::MAX, f64::min);
        assert!(max > 1.3);
        assert!(min < 0.7);
    }

    #[test]
    fn test_labels() {
        for state in OrbState::ALL {
            assert_eq!(state.label().parse::<OrbState>(), Ok(state));
        }
        assert_eq!(" Thinking ".parse::<OrbState>(), Ok(OrbState::Thinking));
        assert_eq!(
            "shouting".parse::<OrbState>(),
            Err(UnknownOrbState("shouting".to_string()))
        );
        assert_eq!(OrbState::from_label("shouting"), OrbState::Idle);
        assert_eq!(OrbState::from_label(""), OrbState::Idle);
    }

    #[test]
    fn test_next_visits_every_state() {
        let mut state = OrbState::Idle;
        let mut seen = Vec::new();
        for _ in 0..OrbState::ALL.len() {
            seen.push(state);
            state = state.next();
        }
        assert_eq!(state, OrbState::Idle);
        assert_eq!(seen, OrbState::ALL.to_vec());
    }
}
