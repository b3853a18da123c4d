use common_utils::{crypto, CustomResult};
use domain_types::errors::SignatureError;
use error_stack::ResultExt;
use hyperswitch_masking::Secret;

#[derive(Clone, Debug)]
pub struct SourceVerificationSecrets {
    pub project_id: String,
    pub project_password: Secret<String>,
}

/// Core trait for source verification
pub trait SourceVerification {
    type Payload: ?Sized;

    fn get_secrets(
        &self,
        _secrets: &SourceVerificationSecrets,
    ) -> CustomResult<Vec<u8>, SignatureError> {
        Ok(Vec::new())
    }

    /// Get the verification algorithm being used
    fn get_algorithm(
        &self,
    ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, SignatureError> {
        Ok(Box::new(crypto::NoAlgorithm))
    }

    /// Get the signature/hash value from the payload for verification
    fn get_signature(
        &self,
        payload: &Self::Payload,
        secrets: &[u8],
    ) -> CustomResult<Vec<u8>, SignatureError>;

    /// Get the message/payload that should be verified
    fn get_message(
        &self,
        payload: &Self::Payload,
        secrets: &[u8],
    ) -> CustomResult<Vec<u8>, SignatureError>;

    /// Perform the verification
    fn verify(
        &self,
        secrets: &SourceVerificationSecrets,
        payload: &Self::Payload,
    ) -> CustomResult<bool, SignatureError> {
        let algorithm = self.get_algorithm()?;
        let extracted_secrets = self.get_secrets(secrets)?;
        let signature = self.get_signature(payload, &extracted_secrets)?;
        let message = self.get_message(payload, &extracted_secrets)?;

        algorithm
            .verify_signature(&extracted_secrets, &signature, &message)
            .change_context(SignatureError::InvalidSignature)
    }
}
