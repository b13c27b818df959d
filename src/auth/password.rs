use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub fn hash_password(password: &str) -> String {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

pub fn verify_password(password: &str, hashed: &str) -> Result<(), argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hashed)?;
    Argon2::default().verify_password(password.as_bytes(), &parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hashed = hash_password("teacher123");
        assert_ne!(hashed, "teacher123");
        assert!(verify_password("teacher123", &hashed).is_ok());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hashed = hash_password("teacher123");
        assert!(verify_password("teacher124", &hashed).is_err());
    }

    #[test]
    fn same_password_hashes_differently() {
        assert_ne!(hash_password("teacher123"), hash_password("teacher123"));
    }
}
