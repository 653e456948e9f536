/// Outcome of a health mutation, reported to the caller instead of being
/// pushed into UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    /// Damage landed; the carrier survives with this much health left.
    Damaged {
        /// Health remaining after the hit.
        remaining: i32,
    },
    /// Health reached zero.
    Died,
}

/// Bounded health pool for a player or enemy.
///
/// Health never leaves `[0, max]`; damage past zero and healing past the
/// maximum both saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    max: i32,
    current: i32,
}

impl Health {
    /// Full health pool of `max` points (minimum 1).
    #[must_use]
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { max, current: max }
    }

    /// Current health.
    #[must_use]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum health.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Current health as a fraction of the maximum, for health bars.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    /// Whether health has reached zero.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Subtract `amount` (negative amounts are ignored). Returns
    /// [`HealthEvent::Died`] on the hit that empties the pool; further
    /// damage on a dead carrier keeps reporting `Died`.
    pub fn take_damage(&mut self, amount: i32) -> HealthEvent {
        self.current = (self.current - amount.max(0)).max(0);
        if self.current == 0 {
            HealthEvent::Died
        } else {
            HealthEvent::Damaged {
                remaining: self.current,
            }
        }
    }

    /// Add `amount` (negative amounts are ignored), saturating at the
    /// maximum. Healing does not revive a dead carrier's event history;
    /// it just restores points.
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount.max(0)).min(self.max);
    }
}
