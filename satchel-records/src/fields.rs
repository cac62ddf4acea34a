//! Declared column limits for every encrypted column.
//!
//! The limits describe the *ciphertext* columns as the schema declares
//! them. They are enforced by the field codec after encryption, and the
//! same constant serves create and update paths — there is exactly one
//! source of truth per column.

/// One encrypted column: its user-facing field name (used in validation
/// messages) and the declared maximum ciphertext length.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub max_ciphertext_len: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, max_ciphertext_len: usize) -> Self {
        Self {
            name,
            max_ciphertext_len,
        }
    }
}

/// Note title, VARCHAR(255).
pub const NOTE_TITLE: FieldSpec = FieldSpec::new("title", 255);
/// Note body, VARCHAR(4096).
pub const NOTE_DESCRIPTION: FieldSpec = FieldSpec::new("description", 4096);
/// Mark title, VARCHAR(255).
pub const MARK_TITLE: FieldSpec = FieldSpec::new("title", 255);
/// Mark subject, VARCHAR(255).
pub const MARK_SUBJECT: FieldSpec = FieldSpec::new("subject", 255);
/// Study-hour activity name, VARCHAR(255).
pub const HOUR_NAME: FieldSpec = FieldSpec::new("name", 255);
/// Student display name, VARCHAR(255).
pub const USER_NAME: FieldSpec = FieldSpec::new("name", 255);
/// Student email, VARCHAR(255).
pub const USER_EMAIL: FieldSpec = FieldSpec::new("email", 255);
/// Wrapped per-user key, VARCHAR(128). The wrapped form is fixed-length,
/// so the column leaves headroom rather than matching it exactly.
pub const USER_WRAPPED_KEY: FieldSpec = FieldSpec::new("wrapped key", 128);

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_crypto::WRAPPED_KEY_LEN;

    #[test]
    fn wrapped_key_column_fits_the_fixed_wrapped_form() {
        assert!(WRAPPED_KEY_LEN <= USER_WRAPPED_KEY.max_ciphertext_len);
    }
}
