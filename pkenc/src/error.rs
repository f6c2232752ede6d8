use thiserror::Error;

/// Coarse classification of an [`Error`].
///
/// Callers use this to tell "fix your input and retry" apart from
/// "internal failure, abort or escalate".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The supplied encoding could not be parsed. Recoverable by the
    /// caller; the handle it was aimed at is unchanged.
    Value,
    /// A precondition violation or a failure inside the cryptographic
    /// primitive. Not recoverable at this layer.
    Internal,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed RSA public key encoding: {0}")]
    MalformedPublicKey(#[source] rsa::pkcs1::Error),

    #[error("malformed RSA private key encoding: {0}")]
    MalformedPrivateKey(#[source] rsa::pkcs1::Error),

    #[error("could not render key as PEM: {0}")]
    Serialize(#[source] rsa::pkcs1::Error),

    #[error("plaintext must not be empty")]
    EmptyPlaintext,

    #[error("plaintext is {len} bytes, at most {max} fit under this modulus")]
    PlaintextTooLong { len: usize, max: usize },

    #[error("ciphertext is {len} bytes, this key produces {expected}-byte blocks")]
    CiphertextLength { len: usize, expected: usize },

    #[error("RSA-OAEP encryption failed: {0}")]
    Encrypt(#[source] rsa::Error),

    #[error("RSA-OAEP decryption failed: {0}")]
    Decrypt(#[source] rsa::Error),

    #[error("RSA key generation failed: {0}")]
    KeyGeneration(#[source] rsa::Error),
}

impl Error {
    /// Whether this failure was caused by caller input or by an internal
    /// condition.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedPublicKey(_) | Error::MalformedPrivateKey(_) => ErrorKind::Value,
            _ => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
