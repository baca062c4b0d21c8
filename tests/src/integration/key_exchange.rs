//! # Key Exchange Flows
//!
//! A responder and an initiator session carried through the full handshake,
//! then exercised as the authentication phase would: small buffers encrypted
//! on one side and decrypted on the other.

#[cfg(test)]
mod tests {
    use dg_01_key_exchange::{CipherSpec, DhSession, KeySpec, KeyExchangeError};

    fn handshake() -> (DhSession, DhSession) {
        let mut responder = DhSession::new(true);
        let mut initiator = DhSession::new(false);

        initiator
            .complete_agreement(&responder.encoded_material().unwrap())
            .unwrap();
        responder
            .complete_agreement(&initiator.encoded_material().unwrap())
            .unwrap();

        (responder, initiator)
    }

    #[test]
    fn test_handshake_and_session_encryption_both_directions() {
        let (responder, initiator) = handshake();

        let credential = b"x509 proxy delegation request".to_vec();
        let to_initiator = responder
            .encrypt(CipherSpec::Aes128Cbc, KeySpec::Aes, 16, &credential)
            .unwrap();
        assert_ne!(to_initiator, credential);
        assert_eq!(
            initiator
                .decrypt(CipherSpec::Aes128Cbc, KeySpec::Aes, 16, &to_initiator)
                .unwrap(),
            credential
        );

        let reply = b"signed voms attributes".to_vec();
        let to_responder = initiator
            .encrypt(CipherSpec::BlowfishCbc, KeySpec::Blowfish, 8, &reply)
            .unwrap();
        assert_eq!(
            responder
                .decrypt(CipherSpec::BlowfishCbc, KeySpec::Blowfish, 8, &to_responder)
                .unwrap(),
            reply
        );
    }

    #[test]
    fn test_initiator_adopts_the_responder_group() {
        let responder = DhSession::new(true);
        let mut initiator = DhSession::new(false);

        // Before adopting, the initiator has nothing to send.
        assert!(matches!(
            initiator.encoded_material(),
            Err(KeyExchangeError::NotReady)
        ));

        initiator
            .complete_agreement(&responder.encoded_material().unwrap())
            .unwrap();
        assert!(initiator.is_completed());
        assert!(initiator.encoded_material().is_ok());
    }

    #[test]
    fn test_completed_session_refuses_a_second_agreement() {
        let (mut responder, initiator) = handshake();
        let replayed = initiator.encoded_material().unwrap();
        assert!(matches!(
            responder.complete_agreement(&replayed),
            Err(KeyExchangeError::AlreadyCompleted)
        ));
        // The established key still works.
        let ct = responder
            .encrypt(CipherSpec::Aes128Cbc, KeySpec::Aes, 16, b"still alive")
            .unwrap();
        assert_eq!(
            initiator
                .decrypt(CipherSpec::Aes128Cbc, KeySpec::Aes, 16, &ct)
                .unwrap(),
            b"still alive".to_vec()
        );
    }

    #[test]
    fn test_sessions_from_different_handshakes_do_not_interoperate() {
        let (responder_a, _initiator_a) = handshake();
        let (_responder_b, initiator_b) = handshake();

        let plaintext = b"credential blob";
        let ct = responder_a
            .encrypt(CipherSpec::Aes128Cbc, KeySpec::Aes, 16, plaintext)
            .unwrap();

        // A foreign session either fails unpadding or garbles the plaintext.
        match initiator_b.decrypt(CipherSpec::Aes128Cbc, KeySpec::Aes, 16, &ct) {
            Ok(pt) => assert_ne!(pt.as_slice(), plaintext.as_slice()),
            Err(KeyExchangeError::Crypto(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
