use std::sync::Arc;

use campus_canteen::{
    credentials::{AuthError, CredentialRecord, CredentialTable},
    models::{Role, UserIdentity},
    session::{ProfilePatch, SessionStore, USER_KEY},
    storage::{MemoryStorage, Storage},
};

fn customer() -> UserIdentity {
    UserIdentity {
        id: "9".into(),
        name: "Asha".into(),
        email: "asha@klu.ac.in".into(),
        phone: "9000000000".into(),
        role: Role::Customer,
        canteen_id: None,
    }
}

fn memory() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::new())
}

#[test]
fn login_then_logout_toggles_logged_in() {
    let mut session = SessionStore::load(memory());
    assert!(!session.is_logged_in());

    session.login(customer());
    assert!(session.is_logged_in());

    session.logout();
    assert!(!session.is_logged_in());
    assert!(session.current().is_none());

    // Logging out twice, or logging in over an existing identity, is fine.
    session.logout();
    assert!(!session.is_logged_in());
    session.login(customer());
    let mut other = customer();
    other.id = "10".into();
    session.login(other);
    assert_eq!(session.current().map(|u| u.id.as_str()), Some("10"));
}

#[test]
fn identity_is_rehydrated_until_logout() {
    let storage = memory();
    let mut session = SessionStore::load(storage.clone());
    session.login(customer());
    drop(session);

    let mut session = SessionStore::load(storage.clone());
    assert_eq!(session.current(), Some(&customer()));

    session.logout();
    assert!(storage.get(USER_KEY).is_none());
    assert!(!SessionStore::load(storage).is_logged_in());
}

#[test]
fn malformed_identity_starts_logged_out() {
    let storage = memory();
    storage.set(USER_KEY, "[1,2").expect("memory set");
    assert!(!SessionStore::load(storage).is_logged_in());
}

#[test]
fn owner_without_canteen_is_not_rehydrated() {
    let storage = memory();
    let raw = serde_json::json!({
        "id": "3", "name": "Nithya Sri", "email": "canteen1@klu.ac.in",
        "phone": "9876543212", "role": "canteen_owner"
    });
    storage.set(USER_KEY, &raw.to_string()).expect("memory set");
    assert!(!SessionStore::load(storage).is_logged_in());
}

#[test]
fn update_profile_keeps_role_and_persists() {
    let storage = memory();
    let mut session = SessionStore::load(storage.clone());
    assert!(
        session
            .update_profile(ProfilePatch {
                name: "x".into(),
                email: "x".into(),
                phone: "x".into(),
            })
            .is_none()
    );

    session.login(customer());
    let updated = session
        .update_profile(ProfilePatch {
            name: "Asha K".into(),
            email: "asha.k@klu.ac.in".into(),
            phone: "9111111111".into(),
        })
        .expect("logged in");
    assert_eq!(updated.role, Role::Customer);
    assert_eq!(updated.id, "9");

    let reloaded = SessionStore::load(storage);
    assert_eq!(reloaded.current().map(|u| u.name.as_str()), Some("Asha K"));
}

#[test]
fn credential_table_matches_exactly() {
    let table = CredentialTable::new(vec![CredentialRecord {
        id: "1".into(),
        email: "a@x.com".into(),
        password: "p1".into(),
        role: Role::Customer,
        name: "A".into(),
        phone: "1".into(),
        canteen_id: None,
    }]);

    let user = table.authenticate("a@x.com", "p1").expect("valid login");
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.email, "a@x.com");

    assert_eq!(table.authenticate("a@x.com", "wrong"), Err(AuthError::InvalidCredentials));
    assert_eq!(table.authenticate("A@X.COM", "p1"), Err(AuthError::InvalidCredentials));
    assert_eq!(table.authenticate("b@x.com", "p1"), Err(AuthError::InvalidCredentials));
}

#[test]
fn builtin_owners_carry_their_canteen() {
    let table = CredentialTable::builtin();
    assert_eq!(table.len(), 5);

    let owner = table
        .authenticate("canteen2@klu.ac.in", "canteen123")
        .expect("owner login");
    assert_eq!(owner.role, Role::CanteenOwner);
    assert_eq!(owner.canteen_id.as_deref(), Some("2"));
    assert!(owner.is_consistent());
    assert_eq!(owner.landing_path(), "/canteen-owner/dashboard?canteenId=2");

    let admin = table.authenticate("admin@klu.ac.in", "admin123").expect("admin login");
    assert_eq!(admin.landing_path(), "/admin/dashboard");
    assert_eq!(customer().landing_path(), "/");
}
