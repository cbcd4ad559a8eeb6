//! Synthetic barcode generation for newly created items.

use std::collections::HashSet;

use rand::Rng;

use crate::error::DomainError;

const BARCODE_MIN: u64 = 100_000_000;
const BARCODE_MAX: u64 = 999_999_999;

/// Attempts before `generate_unique` gives up. With a 9-digit space this
/// only triggers when the ledger already holds most of the range.
const MAX_ATTEMPTS: usize = 64;

/// Generate a random 9-digit numeric barcode.
///
/// Performs no uniqueness check; prefer [`generate_unique`] when the set of
/// existing barcodes is at hand.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(BARCODE_MIN..=BARCODE_MAX).to_string()
}

/// Generate a 9-digit barcode distinct from every barcode in `existing`.
///
/// Retries up to a bounded attempt count, then reports a validation error
/// rather than looping forever on a saturated code space.
pub fn generate_unique<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &HashSet<String>,
) -> Result<String, DomainError> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = generate(rng);
        if !existing.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(DomainError::validation(
        "barcode space exhausted: no unique 9-digit code found",
    ))
}
