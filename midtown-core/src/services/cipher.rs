//! Cipher service - validated Caesar cipher requests

use serde::{Deserialize, Serialize};

use crate::domain::cipher::{is_identity_shift, prepare_classic, transform, CipherKey, CipherMode};
use crate::domain::result::{Error, Result};

/// A cipher request as entered by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherRequest {
    pub key: String,
    pub text: String,
    pub mode: CipherMode,
    /// Uppercase, `.` to `X`, drop other non-letters before transforming
    #[serde(default)]
    pub classic: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CipherOutcome {
    pub mode: CipherMode,
    pub shift: i64,
    pub output: String,
    /// Set when the key is a multiple of 26 and letters come out unchanged
    pub unchanged: bool,
}

/// Cipher service for the Caesar cipher applet
#[derive(Debug, Default)]
pub struct CipherService;

impl CipherService {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, request: &CipherRequest) -> Result<CipherOutcome> {
        let text = if request.classic {
            prepare_classic(request.text.trim())
        } else {
            request.text.clone()
        };

        let mut invalid_fields = Vec::new();
        if request.key.is_empty() {
            invalid_fields.push("Cipher key empty");
        }
        if text.trim().is_empty() {
            invalid_fields.push(match request.mode {
                CipherMode::Encrypt => "Plaintext empty",
                CipherMode::Decrypt => "Ciphertext empty",
            });
        }
        if !invalid_fields.is_empty() {
            return Err(Error::validation(invalid_fields));
        }

        let shift = CipherKey::parse(&request.key)?.shift();
        Ok(CipherOutcome {
            mode: request.mode,
            shift,
            output: transform(&text, shift, request.mode),
            unchanged: is_identity_shift(shift),
        })
    }
}
