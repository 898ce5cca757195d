use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tokio::task::spawn_blocking;
use tracing::error;

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

/// Runs [`hash_password`] on the blocking pool; Argon2 is deliberately slow.
pub async fn hash_password_blocking(plain: String) -> anyhow::Result<String> {
    spawn_blocking(move || hash_password(&plain)).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    fn verifies(plain: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).expect("hash should be a PHC string");
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn hash_is_not_plaintext_and_verifies() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2"));
        assert!(verifies(password, &hash));
        assert!(!verifies("wrong-password", &hash));
    }

    #[test]
    fn same_plaintext_hashes_differently() {
        let a = hash_password("correct-horse-battery-staple").unwrap();
        let b = hash_password("correct-horse-battery-staple").unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn blocking_variant_hashes_empty_password() {
        let hash = hash_password_blocking(String::new())
            .await
            .expect("hashing should succeed");
        assert!(verifies("", &hash));
    }
}
