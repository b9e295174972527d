//! Player input
//!
//! The controller samples an [`InputSource`] once per tick. [`KeyStates`] is
//! the usual implementation: a host feeds it key presses and releases.

/// Boolean control state, sampled at tick start
pub trait InputSource {
    /// Thrust is held
    fn thrust(&self) -> bool;
    /// Fire is held
    fn fire(&self) -> bool;
    /// Turn left is held
    fn turn_left(&self) -> bool;
    /// Turn right is held
    fn turn_right(&self) -> bool;
}

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// W (thrust)
    W,
    /// A (turn left)
    A,
    /// S (fire)
    S,
    /// D (turn right)
    D,
    /// Up arrow (thrust)
    Up,
    /// Down arrow (fire)
    Down,
    /// Left arrow (turn left)
    Left,
    /// Right arrow (turn right)
    Right,
    /// Space bar (fire)
    Space,
}

impl Key {
    const COUNT: usize = 9;

    fn index(self) -> usize {
        self as usize
    }
}

/// Up/down state of every key of interest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStates {
    down: [bool; Key::COUNT],
}

impl KeyStates {
    /// All keys up
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: Key) {
        self.down[key.index()] = true;
    }

    /// Record a key release
    pub fn release(&mut self, key: Key) {
        self.down[key.index()] = false;
    }

    /// Release every key
    pub fn release_all(&mut self) {
        self.down = [false; Key::COUNT];
    }

    /// Whether `key` is down
    pub fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    fn any(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&key| self.is_down(key))
    }
}

impl InputSource for KeyStates {
    fn thrust(&self) -> bool {
        self.any(&[Key::W, Key::Up])
    }

    fn fire(&self) -> bool {
        self.any(&[Key::S, Key::Down, Key::Space])
    }

    fn turn_left(&self) -> bool {
        self.any(&[Key::A, Key::Left])
    }

    fn turn_right(&self) -> bool {
        self.any(&[Key::D, Key::Right])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let mut keys = KeyStates::new();
        keys.press(Key::Up);
        keys.press(Key::Space);
        keys.press(Key::A);
        assert!(keys.thrust());
        assert!(keys.fire());
        assert!(keys.turn_left());
        assert!(!keys.turn_right());

        keys.release(Key::Up);
        assert!(!keys.thrust());

        keys.release_all();
        assert!(!keys.fire() && !keys.turn_left());
    }
}
