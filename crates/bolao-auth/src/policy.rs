use bolao_types::models::{User, UserRole};

/// Logging in with this email always succeeds, whatever the password.
pub const ADMIN_EMAIL: &str = "admin@bolao.com";

pub const ADMIN_ID: &str = "admin-master";
pub const ADMIN_NAME: &str = "Administrador Master";
pub const ADMIN_WHATSAPP: &str = "(00) 00000-0000";
pub const ADMIN_PASSWORD: &str = "admin";

pub const MIN_WHATSAPP_LEN: usize = 8;

/// Role granted at registration: any email containing `admin`
/// (case-sensitive) becomes an administrator.
pub fn role_for_email(email: &str) -> UserRole {
    if email.contains("admin") {
        UserRole::Admin
    } else {
        UserRole::User
    }
}

/// Length is counted in UTF-16 code units, the way the web client measures it.
pub fn is_valid_whatsapp(whatsapp: &str) -> bool {
    whatsapp.encode_utf16().count() >= MIN_WHATSAPP_LEN
}

pub fn is_bootstrap_admin(email: &str) -> bool {
    email == ADMIN_EMAIL
}

/// The administrator record created the first time [`ADMIN_EMAIL`] logs in.
/// `password` is the already-sealed form of [`ADMIN_PASSWORD`].
pub fn bootstrap_admin(password: String, created_at: i64) -> User {
    User {
        id: ADMIN_ID.to_string(),
        name: ADMIN_NAME.to_string(),
        email: ADMIN_EMAIL.to_string(),
        whatsapp: ADMIN_WHATSAPP.to_string(),
        password,
        role: UserRole::Admin,
        balance: 0.0,
        withdrawable_balance: 0.0,
        created_at,
    }
}
