//! Score persistence.
//!
//! Storage is a plain string key-value backend ([`KeyValueStore`]). Every
//! backend gets the infallible [`ScoreStore`] interface for free: missing,
//! malformed or unreadable entries load as zero scores, and failed writes
//! are logged and dropped.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use tracing::{debug, instrument, warn};

use crate::Scores;

/// Key holding the serialized scores.
pub const SCORES_KEY: &str = "ttt_scores";

/// String key-value storage.
pub trait KeyValueStore {
    /// Reads a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes a value. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Persistence for [`Scores`]. None of these operations fail.
pub trait ScoreStore {
    /// Reads persisted scores, falling back to zero.
    fn load(&self) -> Scores;

    /// Persists scores; failures are ignored.
    fn save(&mut self, scores: &Scores);

    /// Removes persisted scores; failures are ignored.
    fn clear(&mut self);
}

impl<T: KeyValueStore> ScoreStore for T {
    #[instrument(skip(self))]
    fn load(&self) -> Scores {
        match self.get(SCORES_KEY) {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(scores) => {
                    debug!(%scores, "Loaded persisted scores");
                    scores
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed persisted scores");
                    Scores::default()
                }
            },
            Ok(None) => {
                debug!("No persisted scores");
                Scores::default()
            }
            Err(e) => {
                warn!(error = %e, "Could not read persisted scores");
                Scores::default()
            }
        }
    }

    #[instrument(skip(self))]
    fn save(&mut self, scores: &Scores) {
        let result = encode(scores).and_then(|raw| self.set(SCORES_KEY, &raw));
        if let Err(e) = result {
            warn!(error = %e, "Could not persist scores");
        }
    }

    #[instrument(skip(self))]
    fn clear(&mut self) {
        if let Err(e) = self.remove(SCORES_KEY) {
            warn!(error = %e, "Could not remove persisted scores");
        }
    }
}

/// Serializes scores to their stored JSON form.
#[instrument]
pub fn encode(scores: &Scores) -> Result<String, StoreError> {
    Ok(serde_json::to_string(scores)?)
}

/// Parses stored JSON. The value must be an object with non-negative
/// integer `X`, `O` and `Draws` fields; extra fields are ignored.
#[instrument]
pub fn decode(raw: &str) -> Result<Scores, StoreError> {
    match serde_json::from_str(raw)? {
        value @ serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(StoreError::new("Stored scores are not a JSON object")),
    }
}
