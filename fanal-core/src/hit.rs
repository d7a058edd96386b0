//! Monte-Carlo hit and event types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Core data structure for a single Monte-Carlo energy deposit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct McHit {
    /// X position (mm).
    pub x: f64,
    /// Y position (mm).
    pub y: f64,
    /// Z position (mm).
    pub z: f64,
    /// Deposit time (ns).
    pub time: f64,
    /// Deposited energy (MeV).
    pub energy: f64,
}

impl McHit {
    /// Creates a new hit.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, time: f64, energy: f64) -> Self {
        Self {
            x,
            y,
            z,
            time,
            energy,
        }
    }
}

/// Trait for positioned, timed energy deposits.
///
/// Simulation loaders can expose their own hit layout through this trait and
/// feed it straight into the reconstruction functions.
pub trait Hit: Send + Sync {
    /// Returns the X position.
    fn x(&self) -> f64;

    /// Returns the Y position.
    fn y(&self) -> f64;

    /// Returns the Z position.
    fn z(&self) -> f64;

    /// Returns the deposit time.
    fn time(&self) -> f64;

    /// Returns the deposited energy.
    fn energy(&self) -> f64;

    /// Returns the position as an `(x, y, z)` tuple.
    #[inline]
    fn position(&self) -> (f64, f64, f64) {
        (self.x(), self.y(), self.z())
    }
}

impl Hit for McHit {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    fn energy(&self) -> f64 {
        self.energy
    }
}

/// All the hits recorded for one simulated event.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct McEvent {
    /// Event number as assigned by the simulation.
    pub event_id: u64,
    /// Hits in simulation order.
    pub hits: Vec<McHit>,
}

impl McEvent {
    /// Creates an event without hits.
    #[must_use]
    pub fn new(event_id: u64) -> Self {
        Self {
            event_id,
            hits: Vec::new(),
        }
    }

    /// Creates an event from its hits.
    #[must_use]
    pub fn with_hits(event_id: u64, hits: Vec<McHit>) -> Self {
        Self { event_id, hits }
    }

    /// Adds a hit to the event.
    pub fn push(&mut self, hit: McHit) {
        self.hits.push(hit);
    }

    /// Returns the number of hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if the event has no hits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Sum of the energy of all hits.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        self.hits.iter().map(|hit| hit.energy).sum()
    }
}
