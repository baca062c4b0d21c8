//! # Handshake Material Codec
//!
//! The wire form of one handshake message: a PEM `DH PARAMETERS` block
//! holding the DER-encoded `(prime, generator, keylength)` sequence, a
//! newline, then the sender's public value as hex text wrapped in literal
//! `---BPUB---` / `---EPUB---` markers.
//!
//! ```text
//! -----BEGIN DH PARAMETERS-----
//! MEYCQQCoN51v/+hjoLFHDCbdGkUL...
//! -----END DH PARAMETERS-----
//! ---BPUB---59ab3fe1c0...---EPUB---
//! ```

use crate::errors::KeyExchangeError;
use crate::params::DhParameters;
use num_bigint::{BigInt, BigUint};
use pem::{EncodeConfig, LineEnding, Pem};
use simple_asn1::ASN1Block;

/// Marker opening the public-value block.
pub const PUBLIC_VALUE_HEADER: &str = "---BPUB---";

/// Marker closing the public-value block.
pub const PUBLIC_VALUE_FOOTER: &str = "---EPUB---";

const PEM_TAG: &str = "DH PARAMETERS";

/// Serialize a parameter set and local public value into handshake material.
///
/// # Errors
///
/// Returns [`KeyExchangeError::Encoding`] if the DER serialization of the
/// parameter block fails.
pub fn encode_material(
    params: &DhParameters,
    public: &BigUint,
) -> Result<String, KeyExchangeError> {
    let der = params_to_der(params)?;
    let block = pem::encode_config(
        &Pem::new(PEM_TAG, der),
        EncodeConfig::new().set_line_ending(LineEnding::LF),
    );
    Ok(format!(
        "{}\n{PUBLIC_VALUE_HEADER}{public:x}{PUBLIC_VALUE_FOOTER}",
        block.trim_end()
    ))
}

/// Parse handshake material into the peer's parameter set and public value.
///
/// The returned parameters already have a zero declared bit length resolved
/// to the prime's true bit length.
///
/// # Errors
///
/// Returns [`KeyExchangeError::MalformedMaterial`] if the public-value marker
/// is absent or either block fails to decode.
pub fn decode_material(material: &str) -> Result<(DhParameters, BigUint), KeyExchangeError> {
    let marker = material.find(PUBLIC_VALUE_HEADER).ok_or_else(|| {
        KeyExchangeError::MalformedMaterial("public value block missing".to_string())
    })?;

    let params = params_from_pem(&material[..marker])?;
    let public = public_value_from_block(&material[marker..])?;
    Ok((params, public))
}

fn params_from_pem(text: &str) -> Result<DhParameters, KeyExchangeError> {
    let block = pem::parse(text.trim()).map_err(|e| {
        KeyExchangeError::MalformedMaterial(format!("undecodable parameter block: {e}"))
    })?;
    if block.tag() != PEM_TAG {
        return Err(KeyExchangeError::MalformedMaterial(format!(
            "unexpected PEM tag '{}'",
            block.tag()
        )));
    }
    params_from_der(block.contents())
}

fn public_value_from_block(block: &str) -> Result<BigUint, KeyExchangeError> {
    // Peers may wrap long hex values; embedded newlines are not significant.
    let compact: String = block.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let body = compact
        .strip_prefix(PUBLIC_VALUE_HEADER)
        .and_then(|s| s.strip_suffix(PUBLIC_VALUE_FOOTER))
        .ok_or_else(|| {
            KeyExchangeError::MalformedMaterial(
                "public value block is missing its delimiters".to_string(),
            )
        })?;
    BigUint::parse_bytes(body.as_bytes(), 16).ok_or_else(|| {
        KeyExchangeError::MalformedMaterial(format!("public value is not hex text: '{body}'"))
    })
}

// DER layout: SEQUENCE { prime INTEGER, generator INTEGER, keylength INTEGER }.
// The keylength written is always the true bit length of the prime.
fn params_to_der(params: &DhParameters) -> Result<Vec<u8>, KeyExchangeError> {
    let sequence = ASN1Block::Sequence(
        0,
        vec![
            ASN1Block::Integer(0, BigInt::from(params.prime().clone())),
            ASN1Block::Integer(0, BigInt::from(params.generator().clone())),
            ASN1Block::Integer(0, BigInt::from(params.prime().bits())),
        ],
    );
    simple_asn1::to_der(&sequence).map_err(|e| KeyExchangeError::Encoding(e.to_string()))
}

fn params_from_der(der: &[u8]) -> Result<DhParameters, KeyExchangeError> {
    let blocks = simple_asn1::from_der(der).map_err(|e| {
        KeyExchangeError::MalformedMaterial(format!("undecodable DER parameter sequence: {e}"))
    })?;
    let fields = match blocks.first() {
        Some(ASN1Block::Sequence(_, fields)) => fields,
        _ => {
            return Err(KeyExchangeError::MalformedMaterial(
                "parameter block is not a DER sequence".to_string(),
            ))
        }
    };

    let prime = integer_field(fields, 0, "prime")?;
    let generator = integer_field(fields, 1, "generator")?;
    // The keylength field is optional on the wire; absent or unrepresentable
    // values resolve to zero and get substituted by DhParameters::new.
    let bit_length = match fields.get(2) {
        Some(ASN1Block::Integer(_, value)) => value
            .to_biguint()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(0),
        _ => 0,
    };

    Ok(DhParameters::new(prime, generator, bit_length))
}

fn integer_field(
    fields: &[ASN1Block],
    index: usize,
    name: &str,
) -> Result<BigUint, KeyExchangeError> {
    match fields.get(index) {
        Some(ASN1Block::Integer(_, value)) => value.to_biguint().ok_or_else(|| {
            KeyExchangeError::MalformedMaterial(format!("negative {name} in parameter sequence"))
        }),
        _ => Err(KeyExchangeError::MalformedMaterial(format!(
            "{name} missing from parameter sequence"
        ))),
    }
}
