//! Double / double-back declarations and the hole multiplier they produce.

use serde::{Deserialize, Serialize};

use crate::domain::game::Side;
use crate::errors::domain::{DomainError, ValidationKind};

/// Hole-scoped multiplier state.
///
/// x1 by default, x2 after the first double by either side, x4 only when
/// the opposing side answers with a double-back. At most one double-back;
/// a side can never double twice on the same hole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplierStack {
    double: Option<Side>,
    double_back: Option<Side>,
}

impl MultiplierStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay an ordered list of declarations, rejecting any illegal one.
    pub fn from_declarations(declarations: &[Side]) -> Result<Self, DomainError> {
        let mut stack = Self::new();
        for side in declarations {
            stack.declare_double(*side)?;
        }
        Ok(stack)
    }

    pub fn declare_double(&mut self, side: Side) -> Result<(), DomainError> {
        match (self.double, self.double_back) {
            (None, _) => {
                self.double = Some(side);
                Ok(())
            }
            (Some(first), None) if side == first.opposite() => {
                self.double_back = Some(side);
                Ok(())
            }
            (Some(_), None) => Err(DomainError::validation(
                ValidationKind::DoubleProtocol,
                "only the opposing side may double back",
            )),
            (Some(_), Some(_)) => Err(DomainError::validation(
                ValidationKind::DoubleProtocol,
                "the hole is already doubled back; no further declarations",
            )),
        }
    }

    /// Withdraw every declaration on the hole, restoring x1.
    pub fn clear(&mut self) {
        self.double = None;
        self.double_back = None;
    }

    pub fn declared_by(&self, side: Side) -> bool {
        self.double == Some(side) || self.double_back == Some(side)
    }

    /// Multiplier to apply to the hole's point delta: 1, 2, or 4.
    pub fn value(&self) -> i32 {
        match (self.double, self.double_back) {
            (None, _) => 1,
            (Some(_), None) => 2,
            (Some(_), Some(_)) => 4,
        }
    }
}
