use crate::warn;
use std::{env, fmt::Display, str::FromStr, time::Duration};

/// Tuning constants of a navigation session.
///
/// Rates are expressed per second of elapsed time. The defaults reproduce the
/// feel of the per-frame increments the viewer was tuned with at 60 Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// Distance in scene units the camera stops in front of its target.
    pub clearance: f64,
    /// Vertical raise of the curve's middle control point.
    pub arc_lift: f64,
    /// Raw flight progress gained per second.
    pub flight_rate: f64,
    /// Settle progress gained per second.
    pub settle_rate: f64,
    /// Eased flight progress after which the look target starts following the star.
    pub pre_aim_threshold: f64,
    /// Fraction of the remaining look-target offset closed per reference frame.
    pub target_follow: f64,
    /// Frame rate `target_follow` is defined against.
    pub reference_hz: f64,
    /// Resolution of the curve's arc-length table.
    pub arc_length_divisions: usize,
    /// Number of points sampled for the debug path preview.
    pub path_preview_points: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            clearance: 2.2,
            arc_lift: 2.0,
            flight_rate: 0.004 * 60.0,
            settle_rate: 0.02 * 60.0,
            pre_aim_threshold: 0.6,
            target_follow: 0.05,
            reference_hz: 60.0,
            arc_length_divisions: 200,
            path_preview_points: 150,
        }
    }
}

impl NavConfig {
    const CLEARANCE_VAR: &'static str = "STARNAV_CLEARANCE";
    const ARC_LIFT_VAR: &'static str = "STARNAV_ARC_LIFT";
    const FLIGHT_RATE_VAR: &'static str = "STARNAV_FLIGHT_RATE";
    const SETTLE_RATE_VAR: &'static str = "STARNAV_SETTLE_RATE";
    /// Upper bound for clearance and arc lift, in scene units.
    pub const MAX_DISTANCE: f64 = 1e4;
    /// Upper bound for progress rates, per second.
    pub const MAX_RATE: f64 = 1e3;

    /// Builds the default configuration and applies any environment overrides.
    /// Invalid overrides are reported and ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        let within = |max: f64| move |v: &f64| *v > 0.0 && *v <= max;
        override_from_env(Self::CLEARANCE_VAR, &mut cfg.clearance, within(Self::MAX_DISTANCE));
        override_from_env(Self::ARC_LIFT_VAR, &mut cfg.arc_lift, |v: &f64| {
            v.abs() <= Self::MAX_DISTANCE
        });
        override_from_env(Self::FLIGHT_RATE_VAR, &mut cfg.flight_rate, within(Self::MAX_RATE));
        override_from_env(Self::SETTLE_RATE_VAR, &mut cfg.settle_rate, within(Self::MAX_RATE));
        cfg
    }

    /// Seconds a full flight takes at the configured rate.
    pub fn flight_duration(&self) -> Duration { Duration::from_secs_f64(1.0 / self.flight_rate) }

    /// Seconds a full settle takes at the configured rate.
    pub fn settle_duration(&self) -> Duration { Duration::from_secs_f64(1.0 / self.settle_rate) }
}

/// Settings of the headless tour binary.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub catalog_path: String,
    pub tick_hz: f64,
    pub viewport: (u32, u32),
    pub tour_stops: usize,
    pub max_runtime: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_path: String::from("stars.json"),
            tick_hz: 60.0,
            viewport: (1280, 720),
            tour_stops: 3,
            max_runtime: Duration::from_secs(120),
        }
    }
}

impl SessionConfig {
    const CATALOG_VAR: &'static str = "STARNAV_CATALOG";
    const TICK_HZ_VAR: &'static str = "STARNAV_TICK_HZ";
    const VIEWPORT_VAR: &'static str = "STARNAV_VIEWPORT";
    const TOUR_STOPS_VAR: &'static str = "STARNAV_TOUR_STOPS";
    const MAX_RUNTIME_VAR: &'static str = "STARNAV_MAX_RUNTIME_SECS";
    pub const MIN_TICK_HZ: f64 = 1.0;
    pub const MAX_TICK_HZ: f64 = 1000.0;

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(path) = env::var(Self::CATALOG_VAR) {
            cfg.catalog_path = path;
        }
        override_from_env(Self::TICK_HZ_VAR, &mut cfg.tick_hz, |v: &f64| {
            (Self::MIN_TICK_HZ..=Self::MAX_TICK_HZ).contains(v)
        });
        override_from_env(Self::TOUR_STOPS_VAR, &mut cfg.tour_stops, |_: &usize| true);
        let mut runtime_secs = cfg.max_runtime.as_secs();
        override_from_env(Self::MAX_RUNTIME_VAR, &mut runtime_secs, |v: &u64| *v > 0);
        cfg.max_runtime = Duration::from_secs(runtime_secs);
        if let Ok(raw) = env::var(Self::VIEWPORT_VAR) {
            match parse_viewport(&raw) {
                Ok(size) => cfg.viewport = size,
                Err(e) => warn!("Ignoring {}: {e}", Self::VIEWPORT_VAR),
            }
        }
        cfg
    }

    /// Nominal interval between two ticks. Out-of-range rates are clamped to
    /// `[MIN_TICK_HZ, MAX_TICK_HZ]`, `NaN` falls back to the default.
    pub fn tick_interval(&self) -> Duration {
        let hz = if self.tick_hz.is_nan() {
            Self::default().tick_hz
        } else {
            self.tick_hz.clamp(Self::MIN_TICK_HZ, Self::MAX_TICK_HZ)
        };
        Duration::from_secs_f64(1.0 / hz)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidValue { var: String, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => write!(f, "invalid value {value:?} for {var}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parses a single environment value, rejecting anything `valid` refuses.
pub fn parse_var<T: FromStr>(
    var: &str,
    raw: &str,
    valid: impl Fn(&T) -> bool,
) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().ok().filter(|v| valid(v)).ok_or_else(|| {
        ConfigError::InvalidValue { var: var.to_string(), value: raw.to_string() }
    })
}

/// Parses a `<width>x<height>` viewport size.
pub fn parse_viewport(raw: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        var: String::from("viewport"),
        value: raw.to_string(),
    };
    let (w, h) = raw.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let w = w.trim().parse::<u32>().map_err(|_| invalid())?;
    let h = h.trim().parse::<u32>().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

fn override_from_env<T: FromStr>(var: &str, slot: &mut T, valid: impl Fn(&T) -> bool) {
    let Ok(raw) = env::var(var) else { return };
    match parse_var(var, &raw, valid) {
        Ok(v) => *slot = v,
        Err(ConfigError::InvalidValue { value, .. }) => {
            warn!("Ignoring invalid value {value:?} for {var}, keeping default");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_frame_tuned_constants() {
        let cfg = NavConfig::default();
        assert_relative_eq!(cfg.flight_rate, 0.24, epsilon = 1e-12);
        assert_relative_eq!(cfg.settle_rate, 1.2, epsilon = 1e-12);
        assert_relative_eq!(cfg.flight_duration().as_secs_f64(), 1.0 / 0.24, epsilon = 1e-6);
        assert_relative_eq!(cfg.settle_duration().as_secs_f64(), 1.0 / 1.2, epsilon = 1e-6);
    }

    #[test]
    fn test_parse_var_rejects_invalid() {
        assert_eq!(parse_var::<f64>("X", " 3.5 ", |v| *v > 0.0), Ok(3.5));
        assert!(parse_var::<f64>("X", "-1", |v| *v > 0.0).is_err());
        assert!(parse_var::<f64>("X", "fast", |_| true).is_err());
    }

    #[test]
    fn test_tick_interval_never_zero() {
        let at = |tick_hz: f64| SessionConfig { tick_hz, ..SessionConfig::default() }.tick_interval();
        assert_eq!(at(f64::INFINITY), Duration::from_millis(1));
        assert_eq!(at(1e12), Duration::from_millis(1));
        assert_eq!(at(0.0), Duration::from_secs(1));
        assert_eq!(at(f64::NAN), SessionConfig::default().tick_interval());
        assert!(at(60.0) > Duration::ZERO);
    }

    // only test touching the process environment, so no other test races it
    #[test]
    fn test_from_env_keeps_defaults_for_non_finite_values() {
        let vars = [
            NavConfig::CLEARANCE_VAR,
            NavConfig::ARC_LIFT_VAR,
            NavConfig::FLIGHT_RATE_VAR,
            NavConfig::SETTLE_RATE_VAR,
            SessionConfig::TICK_HZ_VAR,
        ];
        for raw in ["inf", "-inf", "NaN", "1e300"] {
            for var in vars {
                unsafe { env::set_var(var, raw) };
            }
            assert_eq!(NavConfig::from_env(), NavConfig::default(), "{raw}");
            assert_relative_eq!(SessionConfig::from_env().tick_hz, SessionConfig::default().tick_hz);
        }

        unsafe {
            env::set_var(NavConfig::CLEARANCE_VAR, "3.5");
            env::set_var(SessionConfig::TICK_HZ_VAR, "120");
        }
        assert_relative_eq!(NavConfig::from_env().clearance, 3.5);
        assert_relative_eq!(SessionConfig::from_env().tick_hz, 120.0);

        for var in vars {
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    fn test_config_error_names_var_and_value() {
        let err = parse_var::<f64>("STARNAV_TICK_HZ", "inf", |v| v.is_finite()).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"inf\" for STARNAV_TICK_HZ");
    }

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("1920x1080"), Ok((1920, 1080)));
        assert_eq!(parse_viewport(" 800 X 600 "), Ok((800, 600)));
        assert!(parse_viewport("0x600").is_err());
        assert!(parse_viewport("800").is_err());
    }
}
