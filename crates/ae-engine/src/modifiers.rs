//! Alarm level modifiers.
//!
//! The alarm level is how much attention the party draws while travelling.
//! It is the plain sum of its parts: no clamping, and it may go negative.
//! The sum is an `i64` so that no combination of `i32` inputs overflows.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A situational choice that lowers the alarm level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SituationalFlag {
    /// The party covers its tracks.
    HideTracks,
    /// The party travels slowly and carefully.
    SlowTravel,
}

impl SituationalFlag {
    /// Every flag, in display order.
    pub const ALL: [Self; 2] = [Self::HideTracks, Self::SlowTravel];

    /// The fixed alarm penalty of this flag.
    pub fn penalty(self) -> i32 {
        match self {
            Self::HideTracks => -1,
            Self::SlowTravel => -1,
        }
    }
}

impl fmt::Display for SituationalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HideTracks => write!(f, "hiding tracks"),
            Self::SlowTravel => write!(f, "slow travel"),
        }
    }
}

/// Inputs to one alarm level computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    /// Terrain modifier.
    pub terrain: i32,
    /// Party size modifier.
    pub party_size: i32,
    /// Active situational flags.
    pub flags: BTreeSet<SituationalFlag>,
    /// Manual override added on top. Absent counts as zero.
    pub manual: Option<i32>,
}

impl ModifierSet {
    /// Create a modifier set with terrain and party size.
    pub fn new(terrain: i32, party_size: i32) -> Self {
        Self {
            terrain,
            party_size,
            ..Self::default()
        }
    }

    /// Activate a situational flag.
    pub fn with_flag(mut self, flag: SituationalFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Set the manual override.
    pub fn with_manual(mut self, manual: i32) -> Self {
        self.manual = Some(manual);
        self
    }
}

/// Sum terrain, party size, manual override, and flag penalties.
pub fn compute_alarm_level(modifiers: &ModifierSet) -> i64 {
    let flags: i64 = modifiers.flags.iter().map(|f| i64::from(f.penalty())).sum();
    i64::from(modifiers.terrain)
        + i64::from(modifiers.party_size)
        + i64::from(modifiers.manual.unwrap_or(0))
        + flags
}
