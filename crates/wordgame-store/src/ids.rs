//! Game id generation.
//!
//! The registry asks an [`IdGenerator`] for candidate ids and checks each
//! one against the live games itself, so a generator only has to be
//! random, not globally unique. Production uses [`RandomIds`]; tests plug
//! in closures to force collisions and failures.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::{GameId, StoreError};

/// Produces candidate game ids.
///
/// `Send + 'static` because the generator lives inside the store's mutex,
/// which is shared across every connection task.
pub trait IdGenerator: Send + 'static {
    /// Returns a new candidate id.
    ///
    /// # Errors
    /// [`StoreError::IdentifierGeneration`] if no id could be produced
    /// (e.g. the entropy source is unavailable).
    fn generate(&mut self) -> Result<GameId, StoreError>;
}

/// Any `FnMut() -> Result<GameId, StoreError>` closure is a generator.
impl<F> IdGenerator for F
where
    F: FnMut() -> Result<GameId, StoreError> + Send + 'static,
{
    fn generate(&mut self) -> Result<GameId, StoreError> {
        self()
    }
}

/// 128-bit ids from the operating system's RNG, rendered as 32 lowercase
/// hex characters.
///
/// Uses the fallible `OsRng` API rather than `rand::rng()` so an entropy
/// failure becomes an error for this one `create_game` call instead of a
/// panic in the request task.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&mut self) -> Result<GameId, StoreError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| StoreError::IdentifierGeneration(e.to_string()))?;
        Ok(GameId::new(
            bytes.iter().map(|b| format!("{b:02x}")).collect::<String>(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ids_are_32_hex_chars() {
        let id = RandomIds.generate().expect("os rng available");
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!id.as_str().chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_ids_differ() {
        let mut ids = RandomIds;
        let a = ids.generate().unwrap();
        let b = ids.generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_closure_is_a_generator() {
        let mut n = 0;
        let mut next_id = move || {
            n += 1;
            Ok::<_, StoreError>(GameId::new(format!("id-{n}")))
        };
        assert_eq!(next_id.generate().unwrap(), GameId::new("id-1"));
        assert_eq!(next_id.generate().unwrap(), GameId::new("id-2"));
    }
}
