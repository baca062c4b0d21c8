//! # DH Session
//!
//! One [`DhSession`] per authenticating connection. The responder side is
//! born with the built-in parameter set and a local key pair; the initiator
//! side starts empty and adopts whatever parameters the responder sends.
//! Completion of the key agreement is one-shot; afterwards the session can
//! encrypt and decrypt the small authentication buffers exchanged with the
//! peer.

use crate::cipher::{self, CipherSpec, Direction, KeySpec};
use crate::errors::KeyExchangeError;
use crate::keypair::DhKeyPair;
use crate::material;
use crate::params::{DhParameters, BUILTIN_PARAMETERS};
use num_bigint::BigUint;
use tracing::{info, trace};
use zeroize::Zeroizing;

enum AgreementState {
    /// No parameters adopted yet (initiator before the first peer message).
    Uninitialized,
    /// Parameters adopted and key pair generated; peer value not yet seen.
    Pending {
        parameters: DhParameters,
        key_pair: DhKeyPair,
    },
    /// Key agreement completed; the shared secret can be derived on demand.
    Completed {
        parameters: DhParameters,
        key_pair: DhKeyPair,
        remote_public: BigUint,
    },
}

/// A Diffie-Hellman key-exchange session.
///
/// Strictly connection-scoped: never shared across connections, and its
/// state transitions happen single-threaded within the handshake phase.
pub struct DhSession {
    state: AgreementState,
}

impl DhSession {
    /// Construct a new session.
    ///
    /// The responder (`is_server`) adopts the built-in parameter set and
    /// generates its key pair immediately; an initiator defers both until
    /// the responder's material arrives.
    pub fn new(is_server: bool) -> Self {
        let state = if is_server {
            let parameters = BUILTIN_PARAMETERS.clone();
            let key_pair = DhKeyPair::generate(&parameters);
            AgreementState::Pending {
                parameters,
                key_pair,
            }
        } else {
            AgreementState::Uninitialized
        };
        Self { state }
    }

    /// Whether the key agreement has been completed.
    pub fn is_completed(&self) -> bool {
        matches!(self.state, AgreementState::Completed { .. })
    }

    /// Serialize this side's handshake material: the current parameter set
    /// followed by the local public value.
    ///
    /// # Errors
    ///
    /// [`KeyExchangeError::NotReady`] if no key pair exists yet (an initiator
    /// must consume the peer's material first); [`KeyExchangeError::Encoding`]
    /// if the parameter block cannot be serialized.
    pub fn encoded_material(&self) -> Result<String, KeyExchangeError> {
        match &self.state {
            AgreementState::Uninitialized => Err(KeyExchangeError::NotReady),
            AgreementState::Pending {
                parameters,
                key_pair,
            }
            | AgreementState::Completed {
                parameters,
                key_pair,
                ..
            } => material::encode_material(parameters, key_pair.public()),
        }
    }

    /// Consume the peer's handshake material and complete the key agreement.
    ///
    /// An uninitialized session adopts the remote parameters (resolving a
    /// zero declared bit length) and generates its key pair; an initialized
    /// session instead requires the remote group to equal its own.
    ///
    /// # Errors
    ///
    /// - [`KeyExchangeError::MalformedMaterial`]: markers or blocks are
    ///   undecodable; raised before any state changes.
    /// - [`KeyExchangeError::ParameterMismatch`]: remote prime or generator
    ///   differs from the adopted set; state is unchanged.
    /// - [`KeyExchangeError::AlreadyCompleted`]: the agreement was completed
    ///   earlier; the secret is never silently re-derived.
    pub fn complete_agreement(&mut self, remote_material: &str) -> Result<(), KeyExchangeError> {
        let (remote_params, remote_public) = material::decode_material(remote_material)?;
        trace!(
            prime = %remote_params.prime(),
            generator = %remote_params.generator(),
            bit_length = remote_params.bit_length(),
            "remote endpoint sent DH parameters"
        );

        let previous = std::mem::replace(&mut self.state, AgreementState::Uninitialized);
        match previous {
            AgreementState::Uninitialized => {
                let key_pair = DhKeyPair::generate(&remote_params);
                self.state = AgreementState::Completed {
                    parameters: remote_params,
                    key_pair,
                    remote_public,
                };
                Ok(())
            }
            AgreementState::Pending {
                parameters,
                key_pair,
            } => {
                if !parameters.matches_group(&remote_params) {
                    self.state = AgreementState::Pending {
                        parameters,
                        key_pair,
                    };
                    return Err(KeyExchangeError::ParameterMismatch);
                }
                self.state = AgreementState::Completed {
                    parameters,
                    key_pair,
                    remote_public,
                };
                Ok(())
            }
            AgreementState::Completed {
                parameters,
                key_pair,
                remote_public,
            } => {
                self.state = AgreementState::Completed {
                    parameters,
                    key_pair,
                    remote_public,
                };
                Err(KeyExchangeError::AlreadyCompleted)
            }
        }
    }

    /// Encrypt a small buffer under the session key.
    ///
    /// Requires a completed agreement. See [`Self::decrypt`] for the inverse.
    pub fn encrypt(
        &self,
        spec: CipherSpec,
        key_spec: KeySpec,
        block_size: usize,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, KeyExchangeError> {
        self.translate(spec, key_spec, block_size, plaintext, Direction::Encrypt)
    }

    /// Decrypt a small buffer under the session key.
    ///
    /// Requires a completed agreement.
    pub fn decrypt(
        &self,
        spec: CipherSpec,
        key_spec: KeySpec,
        block_size: usize,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, KeyExchangeError> {
        self.translate(spec, key_spec, block_size, ciphertext, Direction::Decrypt)
    }

    // The shared secret is the minimal big-endian encoding of the raw DH
    // value: the pre-standard derivation the existing client population
    // expects, not a hash-based KDF. Leading zero octets are absent, so the
    // result may be shorter than the block size. Re-derived on every call.
    fn derive_shared_secret(&self) -> Result<Zeroizing<Vec<u8>>, KeyExchangeError> {
        match &self.state {
            AgreementState::Completed {
                parameters,
                key_pair,
                remote_public,
            } => {
                let shared = remote_public.modpow(key_pair.private(), parameters.prime());
                Ok(Zeroizing::new(shared.to_bytes_be()))
            }
            _ => Err(KeyExchangeError::NotReady),
        }
    }

    fn translate(
        &self,
        spec: CipherSpec,
        key_spec: KeySpec,
        block_size: usize,
        buffer: &[u8],
        direction: Direction,
    ) -> Result<Vec<u8>, KeyExchangeError> {
        if block_size == 0 {
            return Err(KeyExchangeError::Crypto(
                "block size must be positive".to_string(),
            ));
        }

        let mut secret = self.derive_shared_secret()?;
        if secret.len() < block_size && direction == Direction::Encrypt {
            secret = pad_truncated_secret(&secret, block_size);
        }
        if secret.len() < block_size {
            return Err(KeyExchangeError::Crypto(format!(
                "derived secret is {} bytes, block size is {block_size}",
                secret.len()
            )));
        }

        let key = Zeroizing::new(secret[..block_size].to_vec());
        // Fixed all-zero IV, retained for compatibility with the existing
        // client population. Do not strengthen silently.
        let iv = vec![0u8; block_size];
        cipher::transform(spec, key_spec, &key, &iv, buffer, direction)
    }
}

/// Restore a derived secret whose trailing zero octets were lost to the
/// minimal encoding by appending zero bytes up to `block_size`.
///
/// Prepending instead would be rejected by peers that compute the unpadded
/// native DH secret, so the tail is the only valid place to pad. Only the
/// encrypt path ever calls this.
fn pad_truncated_secret(defective: &[u8], block_size: usize) -> Zeroizing<Vec<u8>> {
    let mut encoded = Zeroizing::new(vec![0u8; block_size]);
    encoded[..defective.len()].copy_from_slice(defective);
    info!(
        old = %hex::encode(defective),
        new = %hex::encode(encoded.as_slice()),
        "adjusted truncated secret encoding by appending zero bytes"
    );
    encoded
}
