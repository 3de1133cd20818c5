use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use subtle::ConstantTimeEq;

const ARGON2_PREFIX: &str = "$argon2";

pub fn hash_password(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(plain.as_bytes(), &salt)?.to_string();
    Ok(password_hash)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hashed)?;
    let ok = Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(ok)
}

/// Checks a supplied password against the stored column value.
///
/// Rows created through registration hold argon2 PHC strings. Legacy rows
/// hold the plaintext password and must match byte for byte.
pub fn password_matches(supplied: &str, stored: &str) -> bool {
    if stored.starts_with(ARGON2_PREFIX) {
        match verify_password(supplied, stored) {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    } else {
        supplied.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}
