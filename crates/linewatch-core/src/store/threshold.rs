// ── Threshold value mirrored to every gauge ──

/// Lowest accepted threshold.
pub const MIN_VALUE: u8 = 0;
/// Highest accepted threshold.
pub const MAX_VALUE: u8 = 100;
/// Values above this are drawn in the alert style.
pub const ALERT_ABOVE: u8 = 80;
/// Values that write a WARN line whenever a write lands on them exactly.
pub const WATCH_VALUES: [u8; 3] = [50, 80, 90];

/// Alert level and watch values applied after every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub alert_above: u8,
    pub watch_values: Vec<u8>,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            alert_above: ALERT_ABOVE,
            watch_values: WATCH_VALUES.to_vec(),
        }
    }
}

/// Single bounded integer. Out-of-range writes are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdState {
    value: u8,
    policy: ThresholdPolicy,
}

impl Default for ThresholdState {
    fn default() -> Self {
        Self::new(30, ThresholdPolicy::default())
    }
}

impl ThresholdState {
    pub fn new(initial: i64, policy: ThresholdPolicy) -> Self {
        Self {
            value: clamp(initial),
            policy,
        }
    }

    /// Clamp, store and return the accepted value.
    pub fn set_value(&mut self, value: i64) -> u8 {
        self.value = clamp(value);
        self.value
    }

    pub fn current_value(&self) -> u8 {
        self.value
    }

    /// True when the current value should be drawn bold in the alert colour.
    pub fn is_alert(&self) -> bool {
        self.value > self.policy.alert_above
    }

    pub fn is_watch_value(&self, value: u8) -> bool {
        self.policy.watch_values.contains(&value)
    }

    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }
}

fn clamp(value: i64) -> u8 {
    u8::try_from(value.clamp(i64::from(MIN_VALUE), i64::from(MAX_VALUE))).unwrap_or(MAX_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_clamps_every_integer() {
        let mut state = ThresholdState::default();
        for v in -300_i64..=300 {
            let expected = v.clamp(0, 100);
            assert_eq!(i64::from(state.set_value(v)), expected);
            assert_eq!(i64::from(state.current_value()), expected);
        }
    }

    #[test]
    fn extreme_inputs_clamp() {
        let mut state = ThresholdState::default();
        assert_eq!(state.set_value(i64::MAX), 100);
        assert_eq!(state.set_value(i64::MIN), 0);
        assert_eq!(state.set_value(150), 100);
    }

    #[test]
    fn set_value_is_idempotent() {
        let mut state = ThresholdState::default();
        let a = state.set_value(73);
        let b = state.set_value(73);
        assert_eq!(a, b);
        assert_eq!(state.current_value(), 73);
    }

    #[test]
    fn alert_only_above_level() {
        let mut state = ThresholdState::default();
        state.set_value(80);
        assert!(!state.is_alert());
        state.set_value(81);
        assert!(state.is_alert());
    }

    #[test]
    fn watch_values_are_exact() {
        let state = ThresholdState::default();
        for v in [50, 80, 90] {
            assert!(state.is_watch_value(v));
        }
        for v in [0, 49, 51, 79, 81, 95, 100] {
            assert!(!state.is_watch_value(v));
        }
    }

    #[test]
    fn initial_value_is_clamped() {
        let state = ThresholdState::new(-5, ThresholdPolicy::default());
        assert_eq!(state.current_value(), 0);
    }
}
