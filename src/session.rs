use std::sync::Arc;

use crate::{
    models::UserIdentity,
    storage::{Storage, read_json, write_json},
};

/// Durable storage key holding the logged-in identity.
pub const USER_KEY: &str = "user";

/// Fields a logged-in user may change about themselves.
#[derive(Debug, Clone)]
pub struct ProfilePatch {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Holds at most one identity. A persisted identity stays valid until logout.
pub struct SessionStore {
    user: Option<UserIdentity>,
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let user = read_json::<UserIdentity>(storage.as_ref(), USER_KEY).filter(|user| {
            let consistent = user.is_consistent();
            if !consistent {
                tracing::warn!(user_id = %user.id, "stored canteen owner has no canteen, ignoring");
            }
            consistent
        });
        Self { user, storage }
    }

    pub fn current(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Replaces whatever identity was present.
    pub fn login(&mut self, identity: UserIdentity) {
        self.user = Some(identity);
        self.persist();
    }

    /// Returns `None` when nobody is logged in.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Option<UserIdentity> {
        let user = self.user.as_mut()?;
        user.name = patch.name;
        user.email = patch.email;
        user.phone = patch.phone;
        let updated = user.clone();
        self.persist();
        Some(updated)
    }

    pub fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.storage.remove(USER_KEY) {
            tracing::warn!(error = %err, "session erase failed");
        }
    }

    fn persist(&self) {
        let Some(user) = &self.user else { return };
        if let Err(err) = write_json(self.storage.as_ref(), USER_KEY, user) {
            tracing::warn!(error = %err, "session persist failed");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("user", &self.user).finish()
    }
}
