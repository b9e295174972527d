//! Capability tags
//!
//! Collision reactions never ask "what kind of thing hit me?" first; they
//! ask "what can the thing that hit me destroy?". Each kind carries a fixed
//! capability set.

use bitflags::bitflags;

bitflags! {
    /// What a participant is able to destroy on contact
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Destroys the player's ship
        const SHIP_DESTROYER = 1 << 0;
        /// Destroys asteroids (and aliens)
        const ASTEROID_DESTROYER = 1 << 1;
    }
}

impl Capabilities {
    /// Destroys ships or asteroids
    pub fn is_destroyer(self) -> bool {
        self.intersects(Self::SHIP_DESTROYER | Self::ASTEROID_DESTROYER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroyer_sets() {
        assert!(!Capabilities::empty().is_destroyer());
        assert!(Capabilities::SHIP_DESTROYER.is_destroyer());
        assert!(Capabilities::all().contains(Capabilities::ASTEROID_DESTROYER));
    }
}
