use super::*;

// =============================================================
// Token key
// =============================================================

#[test]
fn token_absent_by_default() {
    let creds = CredentialStore::in_memory();
    assert!(creds.token().is_none());
}

#[test]
fn set_token_then_read_back() {
    let creds = CredentialStore::in_memory();
    creds.set_token("abc");
    assert_eq!(creds.token().as_deref(), Some("abc"));
}

#[test]
fn empty_token_reads_as_absent() {
    let creds = CredentialStore::in_memory();
    creds.set_token("");
    assert!(creds.token().is_none());
}

#[test]
fn clones_share_one_backend() {
    let creds = CredentialStore::in_memory();
    let other = creds.clone();
    creds.set_token("abc");
    assert_eq!(other.token().as_deref(), Some("abc"));
}

// =============================================================
// remove_token clears the full credential set
// =============================================================

#[test]
fn remove_token_clears_token_and_guest_flag() {
    let creds = CredentialStore::in_memory();
    creds.set_token("abc");
    creds.set_guest_mode(true);

    creds.remove_token();

    assert!(creds.token().is_none());
    assert!(!creds.guest_mode());
}

#[test]
fn remove_token_on_empty_store_is_a_no_op() {
    let creds = CredentialStore::in_memory();
    creds.remove_token();
    creds.remove_token();
    assert!(creds.token().is_none());
    assert!(!creds.guest_mode());
}

// =============================================================
// Guest flag
// =============================================================

#[test]
fn guest_mode_off_by_default() {
    let creds = CredentialStore::in_memory();
    assert!(!creds.guest_mode());
}

#[test]
fn set_guest_mode_roundtrip() {
    let creds = CredentialStore::in_memory();
    creds.set_guest_mode(true);
    assert!(creds.guest_mode());
}

#[test]
fn disabling_guest_mode_deletes_the_key() {
    let backend = Arc::new(MemoryStorage::new());
    let creds = CredentialStore::new(backend.clone());
    creds.set_guest_mode(true);
    creds.set_guest_mode(false);
    // The backing key is gone, not stored as "false".
    assert!(backend.get("tracker_guest").is_none());
}

#[test]
fn guest_flag_and_token_may_coexist_in_storage() {
    // Storage does not enforce exclusivity; AuthMode resolution does.
    let creds = CredentialStore::in_memory();
    creds.set_token("abc");
    creds.set_guest_mode(true);
    assert_eq!(creds.token().as_deref(), Some("abc"));
    assert!(creds.guest_mode());
}
