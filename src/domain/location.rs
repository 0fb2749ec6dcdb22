//! Clinic unit selection
//!
//! The original workflow picked one of two clinic addresses with a coin flip
//! at creation time. Selection is now an injected strategy so behavior is
//! deterministic and testable; round-robin is the default and random remains
//! available as an opt-in.

use rand::Rng;

/// Default clinic units offered to in-person patients
pub const DEFAULT_UNITS: &[&str] = &[
    "Rua Domingo de Soto 100 (Jardim Vila Mariana), São Paulo, SP",
    "Rua Guaicurus 1274, São Paulo, SP, 05756-360",
];

/// Strategy for assigning a clinic unit to a new booking
pub trait LocationStrategy: Send + Sync {
    /// Pick the unit for the next booking
    fn next_location(&mut self) -> String;
}

/// Deterministic rotation over the configured units
pub struct RoundRobinStrategy {
    units: Vec<String>,
    next: usize,
}

impl RoundRobinStrategy {
    /// Create a round-robin strategy over the given units
    ///
    /// Falls back to the default units when the list is empty.
    pub fn new(units: Vec<String>) -> Self {
        let units = if units.is_empty() {
            DEFAULT_UNITS.iter().map(|u| u.to_string()).collect()
        } else {
            units
        };
        Self { units, next: 0 }
    }
}

impl LocationStrategy for RoundRobinStrategy {
    fn next_location(&mut self) -> String {
        let unit = self.units[self.next].clone();
        self.next = (self.next + 1) % self.units.len();
        unit
    }
}

/// Uniform random pick, mirroring the original behavior
pub struct RandomStrategy {
    units: Vec<String>,
}

impl RandomStrategy {
    pub fn new(units: Vec<String>) -> Self {
        let units = if units.is_empty() {
            DEFAULT_UNITS.iter().map(|u| u.to_string()).collect()
        } else {
            units
        };
        Self { units }
    }
}

impl LocationStrategy for RandomStrategy {
    fn next_location(&mut self) -> String {
        let idx = rand::thread_rng().gen_range(0..self.units.len());
        self.units[idx].clone()
    }
}
