//! # Session-Key Ciphers
//!
//! The block-cipher transforms a completed DH session can run. The peer
//! names a cipher/mode/padding combination and a key algorithm during
//! authentication; both map onto closed enums here instead of being looked
//! up from free-form strings.

use crate::errors::KeyExchangeError;
use aes::Aes128;
use blowfish::Blowfish;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

/// Cipher, mode and padding for the session-key transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSpec {
    /// AES-128 in CBC mode with PKCS#7 padding (16-byte blocks).
    Aes128Cbc,
    /// Blowfish in CBC mode with PKCS#7 padding (8-byte blocks).
    BlowfishCbc,
}

/// Algorithm the session key is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySpec {
    /// An AES key.
    Aes,
    /// A Blowfish key.
    Blowfish,
}

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Encrypt,
    Decrypt,
}

/// Run the named transform over `buffer` with the given key and IV.
///
/// Key and IV length requirements are enforced by the cipher itself; a
/// violation surfaces as [`KeyExchangeError::Crypto`].
pub(crate) fn transform(
    spec: CipherSpec,
    key_spec: KeySpec,
    key: &[u8],
    iv: &[u8],
    buffer: &[u8],
    direction: Direction,
) -> Result<Vec<u8>, KeyExchangeError> {
    match (spec, key_spec) {
        (CipherSpec::Aes128Cbc, KeySpec::Aes) => run::<Aes128>(key, iv, buffer, direction),
        (CipherSpec::BlowfishCbc, KeySpec::Blowfish) => run::<Blowfish>(key, iv, buffer, direction),
        (spec, key_spec) => Err(KeyExchangeError::Crypto(format!(
            "key spec {key_spec:?} does not match cipher spec {spec:?}"
        ))),
    }
}

fn run<C>(
    key: &[u8],
    iv: &[u8],
    buffer: &[u8],
    direction: Direction,
) -> Result<Vec<u8>, KeyExchangeError>
where
    C: cipher::BlockCipher + cipher::BlockEncryptMut + cipher::BlockDecryptMut + cipher::KeyInit,
{
    match direction {
        Direction::Encrypt => {
            let enc = cbc::Encryptor::<C>::new_from_slices(key, iv)
                .map_err(|e| KeyExchangeError::Crypto(format!("cipher init failed: {e}")))?;
            Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(buffer))
        }
        Direction::Decrypt => {
            let dec = cbc::Decryptor::<C>::new_from_slices(key, iv)
                .map_err(|e| KeyExchangeError::Crypto(format!("cipher init failed: {e}")))?;
            dec.decrypt_padded_vec_mut::<Pkcs7>(buffer)
                .map_err(|_| KeyExchangeError::Crypto("block unpadding failed".to_string()))
        }
    }
}
