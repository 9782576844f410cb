//! Press records: independently scored side bets layered on the main game.
//!
//! A press opens at some hole mid-round and, from that hole on, accumulates
//! the same per-hole point distribution as the primary game into its own
//! ledger. Presses finalize together with the parent game.

use serde::{Deserialize, Serialize};

use crate::domain::player::PressId;
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Press {
    pub id: PressId,
    /// First hole counted by this press's ledger.
    pub start_hole: u8,
}

impl Press {
    pub fn starting_at(start_hole: u8, holes_in_round: u8) -> Result<Self, DomainError> {
        if start_hole < 1 || start_hole > holes_in_round {
            return Err(DomainError::invariant(
                InvariantKind::HoleOutOfRange,
                format!("press start hole {start_hole} outside 1..={holes_in_round}"),
            ));
        }
        Ok(Self {
            id: PressId::new(),
            start_hole,
        })
    }

    pub fn covers(&self, hole: u8) -> bool {
        hole >= self.start_hole
    }
}
