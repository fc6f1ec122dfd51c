//! Password hashing and verification for ScanExpress.
//!
//! New hashes use Argon2id. Verification also accepts the werkzeug
//! `method$salt$hex` strings written by the Flask registration backend
//! (`pbkdf2:<digest>:<iterations>` and `scrypt:<n>:<r>:<p>`).

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use hmac::Hmac;
use rand_core::OsRng;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Minimum password length accepted by [`hash_password`].
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted by [`hash_password`].
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// werkzeug's PBKDF2 iteration count when the method omits it.
pub const WERKZEUG_DEFAULT_PBKDF2_ITERATIONS: u32 = 1_000_000;

/// werkzeug's scrypt output length in bytes.
const WERKZEUG_SCRYPT_KEY_LEN: usize = 64;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password is too short.
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,

    /// Password is too long.
    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    TooLong,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    HashError(String),

    /// Stored hash could not be parsed.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Stored hash uses an algorithm this build cannot check.
    #[error("unsupported password hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Password verification failed (wrong password).
    #[error("password verification failed")]
    VerificationFailed,
}

/// Create the Argon2 hasher with recommended parameters.
///
/// Parameters:
/// - Memory cost: 64 MB (65536 KiB)
/// - Time cost: 3 iterations
/// - Parallelism: 4 threads
fn create_argon2() -> Result<Argon2<'static>, PasswordError> {
    let m_cost = 65536;
    let t_cost = 3;
    let p_cost = 4;

    let params = Params::new(m_cost, t_cost, p_cost, None)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;
    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Hash a password using Argon2id.
///
/// Returns a PHC-formatted hash string that includes the salt and parameters.
///
/// # Examples
///
/// ```
/// use scanexpress::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    validate_password(password)?;

    let salt = SaltString::generate(&mut OsRng);
    let hash = create_argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// Returns `Ok(())` if the password matches. A wrong password yields
/// [`PasswordError::VerificationFailed`]; a hash that cannot be checked
/// yields [`PasswordError::InvalidHash`] or
/// [`PasswordError::UnsupportedAlgorithm`].
///
/// # Examples
///
/// ```
/// use scanexpress::verify_password;
///
/// let hash = "pbkdf2:sha256:1000$abcdefgh12345678$\
///             892a2e0724498f8406ece0a107472486a0356947cc3195a3aa861cb72c4e097b";
/// assert!(verify_password("secret", hash).is_ok());
/// assert!(verify_password("wrong", hash).is_err());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    if hash.starts_with('$') {
        verify_phc(password, hash)
    } else {
        verify_werkzeug(password, hash)
    }
}

/// Validate password requirements for new hashes.
///
/// Login never applies these rules: stored passwords may predate them.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(PasswordError::TooLong);
    }
    Ok(())
}

fn verify_phc(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    match parsed_hash.algorithm.as_str() {
        // Parameters are taken from the parsed hash, not from create_argon2()
        "argon2id" | "argon2i" | "argon2d" => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|e| match e {
                password_hash::Error::Password => PasswordError::VerificationFailed,
                _ => PasswordError::InvalidHash,
            }),
        other => Err(PasswordError::UnsupportedAlgorithm(other.to_string())),
    }
}

/// HMAC digest of a werkzeug `pbkdf2:<digest>` method.
///
/// werkzeug takes any `hashlib` name here; the SHA-1 and SHA-2 family is
/// what it has ever written by default. Other names are unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pbkdf2Digest {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Pbkdf2Digest {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha1" => Some(Self::Sha1),
            "sha224" => Some(Self::Sha224),
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Output size in bytes, which is also werkzeug's derived key length.
    fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// Key derivation named by the method part of a werkzeug hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WerkzeugMethod {
    Pbkdf2 { digest: Pbkdf2Digest, iterations: u32 },
    Scrypt { log_n: u8, r: u32, p: u32 },
}

impl WerkzeugMethod {
    fn parse(method: &str) -> Result<Self, PasswordError> {
        let mut parts = method.split(':');
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match name {
            "pbkdf2" => {
                let (digest, iterations) = match args.as_slice() {
                    [] => ("sha256", WERKZEUG_DEFAULT_PBKDF2_ITERATIONS),
                    [digest] => (*digest, WERKZEUG_DEFAULT_PBKDF2_ITERATIONS),
                    [digest, iterations] => (
                        *digest,
                        iterations.parse().map_err(|_| PasswordError::InvalidHash)?,
                    ),
                    _ => return Err(PasswordError::InvalidHash),
                };
                if iterations == 0 {
                    return Err(PasswordError::InvalidHash);
                }
                let digest = Pbkdf2Digest::from_name(digest)
                    .ok_or_else(|| PasswordError::UnsupportedAlgorithm(format!("pbkdf2:{digest}")))?;
                Ok(Self::Pbkdf2 { digest, iterations })
            }
            "scrypt" => {
                let (n, r, p): (u64, u32, u32) = match args.as_slice() {
                    [] => (1 << 15, 8, 1),
                    [n, r, p] => (
                        n.parse().map_err(|_| PasswordError::InvalidHash)?,
                        r.parse().map_err(|_| PasswordError::InvalidHash)?,
                        p.parse().map_err(|_| PasswordError::InvalidHash)?,
                    ),
                    _ => return Err(PasswordError::InvalidHash),
                };
                if n < 2 || !n.is_power_of_two() {
                    return Err(PasswordError::InvalidHash);
                }
                Ok(Self::Scrypt {
                    log_n: n.trailing_zeros() as u8,
                    r,
                    p,
                })
            }
            other => Err(PasswordError::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// Derive the raw key werkzeug hex-encodes for this method.
    fn derive(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>, PasswordError> {
        match *self {
            Self::Pbkdf2 { digest, iterations } => {
                let mut key = vec![0u8; digest.output_len()];
                match digest {
                    Pbkdf2Digest::Sha1 => {
                        pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations, &mut key)
                    }
                    Pbkdf2Digest::Sha224 => {
                        pbkdf2::pbkdf2::<Hmac<Sha224>>(password, salt, iterations, &mut key)
                    }
                    Pbkdf2Digest::Sha256 => {
                        pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key)
                    }
                    Pbkdf2Digest::Sha384 => {
                        pbkdf2::pbkdf2::<Hmac<Sha384>>(password, salt, iterations, &mut key)
                    }
                    Pbkdf2Digest::Sha512 => {
                        pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut key)
                    }
                }
                Ok(key)
            }
            Self::Scrypt { log_n, r, p } => {
                let params = scrypt::Params::new(log_n, r, p, WERKZEUG_SCRYPT_KEY_LEN)
                    .map_err(|_| PasswordError::InvalidHash)?;
                let mut key = vec![0u8; WERKZEUG_SCRYPT_KEY_LEN];
                scrypt::scrypt(password, salt, &params, &mut key)
                    .map_err(|e| PasswordError::HashError(e.to_string()))?;
                Ok(key)
            }
        }
    }
}

fn verify_werkzeug(password: &str, hash: &str) -> Result<(), PasswordError> {
    let mut parts = hash.splitn(3, '$');
    let (Some(method), Some(salt), Some(expected)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(PasswordError::InvalidHash);
    };

    let method = WerkzeugMethod::parse(method)?;
    let expected = hex::decode(expected).map_err(|_| PasswordError::InvalidHash)?;
    let computed = method.derive(password.as_bytes(), salt.as_bytes())?;

    // Slices of different length compare unequal.
    if bool::from(computed.ct_eq(&expected)) {
        Ok(())
    } else {
        Err(PasswordError::VerificationFailed)
    }
}
