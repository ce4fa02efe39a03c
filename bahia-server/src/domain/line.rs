//! Line identification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Substring of a route id that marks the C1a branch variant.
///
/// The upstream feed uses route ids like `20C1` for the main line and
/// ids containing `C1A` for the Universidad branch.
pub const BRANCH_MARKER: &str = "C1A";

/// The line a trip runs on.
///
/// The Bahía de Cádiz network has a single main line (C1,
/// Cádiz - Aeropuerto de Jerez) and one branch (C1a, to Campus de
/// Puerto Real).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Main line Cádiz - Jerez - Aeropuerto.
    C1,
    /// Universidad branch.
    #[serde(rename = "C1a")]
    C1a,
}

impl Line {
    /// Classify a route id from the trips feed.
    ///
    /// A route id containing [`BRANCH_MARKER`] is the branch; anything
    /// else, including a missing trip record upstream, is the main line.
    pub fn from_route_id(route_id: &str) -> Self {
        if route_id.contains(BRANCH_MARKER) {
            Line::C1a
        } else {
            Line::C1
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::C1 => f.write_str("C1"),
            Line::C1a => f.write_str("C1a"),
        }
    }
}
