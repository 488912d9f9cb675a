//! Keyboard input handling

use drift_core::InputSnapshot;

/// Which driving keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub drift: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event, returns false for keys we don't bind
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle key up event, returns false for keys we don't bind
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, held: bool) -> bool {
        let slot = match key {
            "ArrowUp" | "w" | "W" => &mut self.forward,
            "ArrowDown" | "s" | "S" => &mut self.backward,
            "ArrowLeft" | "a" | "A" => &mut self.left,
            "ArrowRight" | "d" | "D" => &mut self.right,
            " " | "Spacebar" => &mut self.drift,
            _ => return false,
        };
        *slot = held;
        true
    }

    /// Drop every held key, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::from_controls(
            self.forward,
            self.backward,
            self.left,
            self.right,
            self.drift,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_snapshot() {
        assert_eq!(KeyState::new().snapshot(), InputSnapshot::default());
    }

    #[test]
    fn test_wasd_and_arrows_agree() {
        let mut wasd = KeyState::new();
        let mut arrows = KeyState::new();
        for (a, b) in [("w", "ArrowUp"), ("a", "ArrowLeft")] {
            assert!(wasd.handle_key_down(a));
            assert!(arrows.handle_key_down(b));
        }
        assert_eq!(wasd, arrows);
        assert_eq!(wasd.snapshot(), InputSnapshot::new(-1, 1.0, false));
    }

    #[test]
    fn test_brake_and_throttle_sum() {
        let mut keys = KeyState::new();
        keys.handle_key_down("W");
        keys.handle_key_down("S");
        let input = keys.snapshot();
        assert!((input.throttle - 0.2).abs() < 1e-6);

        keys.handle_key_up("W");
        assert_eq!(keys.snapshot().throttle, -0.8);
    }

    #[test]
    fn test_opposite_steer_cancels() {
        let mut keys = KeyState::new();
        keys.handle_key_down("a");
        keys.handle_key_down("d");
        assert_eq!(keys.snapshot().steer, 0);
        keys.handle_key_up("a");
        assert_eq!(keys.snapshot().steer, 1);
    }

    #[test]
    fn test_space_holds_drift() {
        let mut keys = KeyState::new();
        keys.handle_key_down(" ");
        assert!(keys.snapshot().drift_button);
        keys.handle_key_up(" ");
        assert!(!keys.snapshot().drift_button);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.handle_key_down("q"));
        assert!(!keys.handle_key_down("Enter"));
        assert_eq!(keys, KeyState::default());
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyState::new();
        keys.handle_key_down("w");
        keys.handle_key_down(" ");
        keys.release_all();
        assert_eq!(keys.snapshot(), InputSnapshot::default());
    }
}
