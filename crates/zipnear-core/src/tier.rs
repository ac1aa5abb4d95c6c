// crates/zipnear-core/src/tier.rs

//! # Tier Order
//!
//! Providers carry a quality tier drawn from a small, closed set. Tier `A` is
//! the highest priority and sorts first.

use crate::error::{LocatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tier labels accepted by the record lookup, in priority order.
pub const TIER_VALUES: [&str; 3] = ["A", "B", "C"];

/// A provider quality tier. Ordering follows priority: `A < B < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];

    /// Lower value = higher priority (`A -> 0`, `B -> 1`, `C -> 2`).
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Tier::A => 0,
            Tier::B => 1,
            Tier::C => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        TIER_VALUES[self.rank() as usize]
    }

    /// Returns `true` if `label` names one of the known tiers.
    pub fn is_known(label: &str) -> bool {
        label.trim().parse::<Tier>().is_ok()
    }
}

impl FromStr for Tier {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" => Ok(Tier::A),
            "B" => Ok(Tier::B),
            "C" => Ok(Tier::C),
            other => Err(LocatorError::InvalidTier(other.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a raw tier label as stored on a provider record.
///
/// The record lookup already drops unknown tiers, so the error path only
/// fires when a collaborator breaks that contract.
pub fn tier_rank(label: &str) -> Result<u8> {
    label.parse::<Tier>().map(Tier::rank)
}
