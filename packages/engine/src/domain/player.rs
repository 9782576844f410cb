//! Player identity and handicap index.
//!
//! Every cross-reference in the engine (scores, declarations, rotation
//! segments) is keyed by [`PlayerId`], never by display name.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use lazy_regex::regex_captures;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::errors::domain::{DomainError, ValidationKind};

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Display::fmt(&self.0, f)
            }
        }
    };
}

uuid_id!(
    /// Stable player identifier.
    PlayerId
);
uuid_id!(
    /// Stable game identifier.
    GameId
);
uuid_id!(
    /// Stable press (side-bet) identifier.
    PressId
);

/// Handicap index in tenths of a stroke.
///
/// Negative values are "plus" players who give strokes back to the course
/// (text form `"+2.1"`); positive values receive strokes (`"8.4"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandicapIndex(i16);

/// WHS ceiling, in tenths.
const MAX_INDEX_TENTHS: i16 = 540;

impl HandicapIndex {
    /// Build from signed tenths (`-21` is a plus-2.1 player).
    pub fn from_tenths(tenths: i16) -> Result<Self, DomainError> {
        if tenths.abs() > MAX_INDEX_TENTHS {
            return Err(DomainError::validation(
                ValidationKind::MalformedHandicap,
                format!("handicap index out of range: {tenths} tenths"),
            ));
        }
        Ok(Self(tenths))
    }

    pub fn scratch() -> Self {
        Self(0)
    }

    pub fn tenths(self) -> i16 {
        self.0
    }

    /// Whole playing strokes for allocation, rounded half away from zero.
    ///
    /// `8.4` → 8, `8.5` → 9, `+2.1` → -2.
    pub fn playing_strokes(self) -> i16 {
        let sign = if self.0 < 0 { -1 } else { 1 };
        sign * ((self.0.abs() + 5) / 10)
    }
}

impl FromStr for HandicapIndex {
    type Err = DomainError;

    /// Accepts `"12"`, `"8.4"`, `"+2"`, `"+2.1"`. One optional leading `+`
    /// (plus player), one optional tenths digit. Anything else is rejected
    /// before allocation ever runs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((_, plus, whole, tenth)) = regex_captures!(r"^(\+)?([0-9]{1,2})(?:\.([0-9]))?$", s)
        else {
            return Err(DomainError::validation(
                ValidationKind::MalformedHandicap,
                format!("unparsable handicap index: {s:?}"),
            ));
        };
        let whole: i16 = whole.parse().map_err(|_| {
            DomainError::validation(
                ValidationKind::MalformedHandicap,
                format!("unparsable handicap index: {s:?}"),
            )
        })?;
        let tenth: i16 = if tenth.is_empty() { 0 } else { tenth.parse().unwrap_or(0) };
        let magnitude = whole * 10 + tenth;
        let tenths = if plus.is_empty() { magnitude } else { -magnitude };
        Self::from_tenths(tenths)
    }
}

impl Display for HandicapIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let sign = if self.0 < 0 { "+" } else { "" };
        let abs = self.0.abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}

// Wire form is the golfer-facing text ("8.4", "+2.1"), matching what the
// roster service stores.
impl Serialize for HandicapIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HandicapIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Roster entry as handed over by the roster service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub handicap: HandicapIndex,
    /// Tee assignment label ("white", "blue"); informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tee: Option<String>,
}
