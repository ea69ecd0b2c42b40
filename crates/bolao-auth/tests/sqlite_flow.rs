//! End-to-end auth flow against a file-backed SQLite store.
//!
//! Each test opens its own database in a temp directory, so state written
//! by one submit is re-read from disk by the next.

use bolao_auth::policy::ADMIN_ID;
use bolao_auth::{AuthError, AuthScreen, Authenticator, PasswordScheme};
use bolao_db::{Database, UserStore};
use bolao_types::api::{AuthForm, AuthMode};
use bolao_types::models::UserRole;

fn open(dir: &tempfile::TempDir) -> Database {
    Database::open(&dir.path().join("bolao.db")).unwrap()
}

#[test]
fn register_then_login_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let registered = {
        let auth = Authenticator::new(open(&dir));
        auth.register(&AuthForm::register("Ana", "ana@x.com", "11999999999", "p1"))
            .unwrap()
    };
    assert_eq!(registered.role, UserRole::User);
    assert_eq!(registered.balance, 0.0);

    let auth = Authenticator::new(open(&dir));
    assert_eq!(auth.store().current_user().unwrap(), Some(registered.clone()));

    let logged_in = auth.login(&AuthForm::login("ana@x.com", "p1")).unwrap();
    assert_eq!(logged_in, registered);
}

#[test]
fn admin_bootstrap_on_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let auth = Authenticator::new(open(&dir));

    let mut seen = Vec::new();
    auth.submit(
        AuthMode::Login,
        &AuthForm::login("admin@bolao.com", "anything"),
        |u| seen.push(u),
    )
    .unwrap();
    auth.submit(
        AuthMode::Login,
        &AuthForm::login("admin@bolao.com", "something else"),
        |u| seen.push(u),
    )
    .unwrap();

    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|u| u.id == ADMIN_ID && u.role == UserRole::Admin));
    assert_eq!(auth.store().list_users().unwrap().len(), 1);
    assert_eq!(auth.store().current_user().unwrap().unwrap().id, ADMIN_ID);
}

#[test]
fn failed_submits_leave_the_database_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let auth = Authenticator::new(open(&dir));
    let ana = auth
        .register(&AuthForm::register("Ana", "ana@x.com", "11999999999", "p1"))
        .unwrap();
    let before = auth.store().list_users().unwrap();

    let mut screen = AuthScreen::new(auth);
    screen.set_email("ana@x.com");
    screen.set_password("wrong");
    assert!(matches!(screen.submit(|_| {}), Err(AuthError::InvalidCredentials)));

    screen.toggle_mode();
    screen.set_whatsapp("1234");
    assert!(matches!(screen.submit(|_| {}), Err(AuthError::InvalidWhatsapp)));

    screen.set_whatsapp("11988887777");
    assert!(matches!(screen.submit(|_| {}), Err(AuthError::EmailTaken)));

    let store = screen.authenticator().store();
    assert_eq!(store.list_users().unwrap(), before);
    assert_eq!(store.current_user().unwrap().unwrap().id, ana.id);
}

#[test]
fn argon2_passwords_are_not_stored_in_clear() {
    let dir = tempfile::tempdir().unwrap();
    let auth = Authenticator::new(open(&dir)).with_scheme(PasswordScheme::Argon2);

    auth.register(&AuthForm::register("Root", "root@admin.com", "11999999999", "s3cret"))
        .unwrap();

    let stored = auth.store().list_users().unwrap();
    assert_eq!(stored[0].role, UserRole::Admin);
    assert_ne!(stored[0].password, "s3cret");

    let user = auth.login(&AuthForm::login("root@admin.com", "s3cret")).unwrap();
    assert_eq!(user.id, stored[0].id);
}
