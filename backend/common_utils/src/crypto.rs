//! Digest and signature primitives used to sign outbound payloads and verify inbound ones.

use base64::Engine;
use error_stack::ResultExt;
use subtle::ConstantTimeEq;

use crate::{consts, errors::CryptoError, CustomResult};

/// Generates a digest for a message
pub trait GenerateDigest {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, CryptoError>;
}

/// Verifies a signature produced over a message
pub trait VerifySignature {
    fn verify_signature(
        &self,
        secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, CryptoError>;
}

/// Accepts every signature. Used where a flow carries no signature at all.
#[derive(Debug)]
pub struct NoAlgorithm;

impl VerifySignature for NoAlgorithm {
    fn verify_signature(
        &self,
        _secret: &[u8],
        _signature: &[u8],
        _msg: &[u8],
    ) -> CustomResult<bool, CryptoError> {
        Ok(true)
    }
}

/// MD5 digest, compared in constant time against the raw 16 byte signature.
#[derive(Debug)]
pub struct Md5;

impl GenerateDigest for Md5 {
    fn generate_digest(&self, message: &[u8]) -> CustomResult<Vec<u8>, CryptoError> {
        Ok(md5::compute(message).0.to_vec())
    }
}

impl VerifySignature for Md5 {
    fn verify_signature(
        &self,
        _secret: &[u8],
        signature: &[u8],
        msg: &[u8],
    ) -> CustomResult<bool, CryptoError> {
        let hashed_digest = Self
            .generate_digest(msg)
            .change_context(CryptoError::SignatureVerificationFailed)?;
        Ok(hashed_digest.as_slice().ct_eq(signature).into())
    }
}

/// Lowercase hex MD5 of `message`.
pub fn md5_hex(message: &[u8]) -> String {
    hex::encode(md5::compute(message).0)
}

/// Base64 with the `-`/`_` alphabet, padding kept on encode.
pub fn encode_safe_url_base64(input: &[u8]) -> String {
    consts::BASE64_ENGINE_URL_SAFE.encode(input)
}

pub fn decode_safe_url_base64(input: &str) -> CustomResult<Vec<u8>, CryptoError> {
    consts::BASE64_ENGINE_URL_SAFE
        .decode(input.trim())
        .change_context(CryptoError::DecodingFailed)
}
