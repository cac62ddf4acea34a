//! Account flows: registration, login, logout, deletion.
//!
//! Registration and login are the only places key material changes
//! hands: provisioning produces the wrapped key persisted on the user
//! row, and a successful login is the only path that puts a raw key
//! into the session cache.

use crate::error::{ServiceError, ServiceResult};
use crate::store::{UserRow, UserStore};
use satchel_crypto::password;
use satchel_keyring::{
    KeyringError, MasterKeyProvider, SessionKeyCache, provision_for_new_user, unwrap_for_login,
};
use satchel_records::{
    EncryptedProfile, Profile, decrypt_profile, email_digest, encrypt_profile, fields,
};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// Input for creating an account. The handler has already validated
/// plaintext business rules (email format, password strength, theme
/// range) before this is constructed. No `Debug` impl: the struct
/// carries a raw password.
#[derive(Clone)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub password: String,
    pub theme: u8,
}

/// Result of a successful login or registration.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub profile: Profile,
}

/// Orchestrates account lifecycle against a user store.
pub struct AccountService<S> {
    master: Arc<MasterKeyProvider>,
    sessions: SessionKeyCache,
    store: Arc<S>,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(master: Arc<MasterKeyProvider>, sessions: SessionKeyCache, store: Arc<S>) -> Self {
        Self {
            master,
            sessions,
            store,
        }
    }

    pub fn sessions(&self) -> &SessionKeyCache {
        &self.sessions
    }

    /// Creates an account and binds the new key to the session.
    ///
    /// The wrapped key travels inside the user row, so the store's
    /// single `create_user` call keeps "user exists" and "user has a
    /// key" atomic. Any provisioning failure aborts before the store is
    /// touched.
    pub async fn register(
        &self,
        session_id: &str,
        input: Registration,
    ) -> ServiceResult<AuthenticatedUser> {
        let digest = email_digest(&input.email);
        if self.store.user_by_email_digest(&digest)?.is_some() {
            return Err(ServiceError::EmailTaken);
        }

        let password_hash = password::hash_password(&input.password).map_err(|e| {
            error!("password hash failed: {e}");
            ServiceError::Internal
        })?;

        let provisioned = provision_for_new_user(
            &self.master,
            fields::USER_WRAPPED_KEY.max_ciphertext_len,
        )?;

        let email = input.email.trim().to_lowercase();
        let name = input.name.trim().to_string();
        let encrypted = encrypt_profile(&provisioned.raw, &name, &email)?;

        let user_id = Uuid::new_v4();
        self.store
            .create_user(UserRow {
                id: user_id,
                email_digest: digest,
                password_hash,
                name: encrypted.name,
                email: encrypted.email,
                theme: input.theme,
                wrapped_key: provisioned.wrapped,
            })
            .map_err(|e| match e {
                // Lost a registration race on the digest column
                crate::store::StoreError::Conflict(_) => ServiceError::EmailTaken,
                other => other.into(),
            })?;

        let profile = Profile {
            name,
            email,
            theme: input.theme,
        };
        self.sessions.bind(session_id, provisioned.raw).await;
        debug!(%user_id, "registered new user");

        Ok(AuthenticatedUser { user_id, profile })
    }

    /// Verifies credentials, unwraps the stored key and binds it to the
    /// session.
    ///
    /// Unknown email and wrong password both return
    /// [`ServiceError::InvalidCredentials`]. A wrapped key that fails to
    /// unwrap after the password verified is an integrity fault — the
    /// user did nothing wrong, so it surfaces as an internal error, not
    /// as bad credentials.
    pub async fn login(
        &self,
        session_id: &str,
        email: &str,
        password_input: &str,
    ) -> ServiceResult<AuthenticatedUser> {
        let digest = email_digest(email);
        let Some(row) = self.store.user_by_email_digest(&digest)? else {
            return Err(ServiceError::InvalidCredentials);
        };

        let verified = password::verify_password(password_input, &row.password_hash)
            .map_err(|e| {
                error!("stored password hash unreadable: {e}");
                ServiceError::Internal
            })?;
        if !verified {
            return Err(ServiceError::InvalidCredentials);
        }

        let key = match unwrap_for_login(&self.master, &row.wrapped_key) {
            Ok(key) => key,
            Err(KeyringError::WrappedKeyCorrupt) => {
                error!(user_id = %row.id, "wrapped key corrupt at login");
                return Err(ServiceError::Internal);
            }
            Err(other) => return Err(other.into()),
        };

        let profile = decrypt_profile(
            &key,
            &EncryptedProfile {
                name: row.name.clone(),
                email: row.email.clone(),
            },
            row.theme,
        )?;

        self.sessions.bind(session_id, key).await;
        debug!(user_id = %row.id, "login complete");

        Ok(AuthenticatedUser {
            user_id: row.id,
            profile,
        })
    }

    /// Drops the session's decrypt capability. Runs first in the logout
    /// path so a failure tearing down the session store entry cannot
    /// leave a live key behind. Returns whether a key was bound.
    pub async fn logout(&self, session_id: &str) -> bool {
        let had_key = self.sessions.clear(session_id).await;
        debug!(had_key, "session logged out");
        had_key
    }

    /// Decrypts the caller's own profile.
    pub async fn profile(&self, session_id: &str, user_id: Uuid) -> ServiceResult<Profile> {
        let key = self.sessions.get(session_id).await?;
        let row = self
            .store
            .user_by_id(user_id)?
            .ok_or(ServiceError::NotFound("user"))?;
        Ok(decrypt_profile(
            &key,
            &EncryptedProfile {
                name: row.name,
                email: row.email,
            },
            row.theme,
        )?)
    }

    /// Deletes the account row (and everything it owns) and clears the
    /// session binding — the clear happens even when the store call
    /// fails, so a half-deleted account never keeps decrypt capability.
    pub async fn delete_account(&self, session_id: &str, user_id: Uuid) -> ServiceResult<()> {
        self.sessions.get(session_id).await?;

        let result = self.store.delete_user(user_id);
        self.sessions.clear(session_id).await;

        match result {
            Ok(()) => Ok(()),
            Err(crate::store::StoreError::NotFound) => Err(ServiceError::NotFound("user")),
            Err(e) => Err(e.into()),
        }
    }
}
