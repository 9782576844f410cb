//! Content-derived idempotency keys.
//!
//! A hole's fingerprint is a blake3 hash over the canonical JSON of
//! (game id, hole input). Retried submissions of the same content produce
//! the same key, so the storage boundary can de-duplicate them without any
//! process-global "last save" state.

use serde::Serialize;

use crate::domain::player::GameId;
use crate::errors::domain::DomainError;

pub fn hole_fingerprint<T: Serialize>(game: GameId, input: &T) -> Result<String, DomainError> {
    let payload = serde_json::to_vec(&(game, input))
        .map_err(|e| DomainError::invariant_other(format!("unserializable hole input: {e}")))?;
    Ok(blake3::hash(&payload).to_hex().to_string())
}
