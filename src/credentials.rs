use thiserror::Error;

use crate::models::{Role, UserIdentity};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub canteen_id: Option<String>,
}

impl CredentialRecord {
    fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            role: self.role,
            canteen_id: self.canteen_id.clone(),
        }
    }
}

/// Static login table. Passwords are compared verbatim; there is no hashing.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    records: Vec<CredentialRecord>,
}

impl CredentialTable {
    pub fn new(records: Vec<CredentialRecord>) -> Self {
        Self { records }
    }

    pub fn builtin() -> Self {
        let record = |id: &str,
                      email: &str,
                      password: &str,
                      role: Role,
                      name: &str,
                      phone: &str,
                      canteen_id: Option<&str>| CredentialRecord {
            id: id.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            name: name.to_string(),
            phone: phone.to_string(),
            canteen_id: canteen_id.map(str::to_string),
        };

        #[rustfmt::skip]
        let records = vec![
            record("1", "karthikeya@klu.ac.in", "user123", Role::Customer, "Karthikeya Reddy", "9876543210", None),
            record("2", "admin@klu.ac.in", "admin123", Role::Admin, "Sripath Roy", "9876543211", None),
            record("3", "canteen1@klu.ac.in", "canteen123", Role::CanteenOwner, "Nithya Sri", "9876543212", Some("1")),
            record("4", "canteen2@klu.ac.in", "canteen123", Role::CanteenOwner, "Venkat Narayana", "9876543213", Some("2")),
            record("5", "canteen3@klu.ac.in", "canteen123", Role::CanteenOwner, "Lakshmi Prasanna", "9876543214", Some("3")),
        ];
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive match on both fields. Unknown email and wrong
    /// password are reported identically.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        self.records
            .iter()
            .find(|record| record.email == email && record.password == password)
            .map(CredentialRecord::identity)
            .ok_or(AuthError::InvalidCredentials)
    }
}
