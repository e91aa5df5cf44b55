//! Direct access to the field codec

use tessera_core::FieldCipher;
use tessera_domain::TesseraError;
use tessera_infra::InfraError;

use crate::context::AppContext;
use crate::utils::execute_command;

/// Encrypt a single value into an `enc:v1:` envelope.
pub async fn encrypt_string(ctx: &AppContext, value: &str) -> Result<String, String> {
    execute_command("crypto::encrypt_string", || async {
        ctx.codec.encrypt_string(value).map_err(|e| TesseraError::from(InfraError::from(e)))
    })
    .await
}

/// Decrypt an envelope produced by [`encrypt_string`] under the same key.
///
/// Malformed, tampered or foreign envelopes are reported as errors; no
/// partial plaintext is ever returned.
pub async fn decrypt_string(ctx: &AppContext, value: &str) -> Result<String, String> {
    execute_command("crypto::decrypt_string", || async {
        ctx.codec.decrypt_string(value).map_err(|e| TesseraError::from(InfraError::from(e)))
    })
    .await
}
