use crate::error::NamestoreError;

pub use bcrypt::DEFAULT_COST;

/// Hash `password` with bcrypt at the given work factor.
///
/// The result is the self-describing `$2b$<cost>$<salt><digest>` string as
/// bytes, which is what the `users.password_hash` column stores.
pub fn hash_password(password: &str, cost: u32) -> Result<Vec<u8>, NamestoreError> {
    let hashed = bcrypt::hash(password, cost)?;
    Ok(hashed.into_bytes())
}

/// Check `password` against a stored bcrypt hash. Anything that does not
/// decode as one never verifies.
pub fn verify_password(password: &str, stored: &[u8]) -> bool {
    let Ok(stored) = std::str::from_utf8(stored) else {
        return false;
    };
    bcrypt::verify(password, stored).unwrap_or(false)
}
