use anyhow::Result;
use bolao_types::models::User;

use crate::Database;

/// Persistence the authenticator depends on: a flat collection of users
/// plus a single current-session pointer.
pub trait UserStore {
    /// Every known user. Order is not significant.
    fn list_users(&self) -> Result<Vec<User>>;

    /// Upsert keyed by `user.id`.
    fn save_user(&self, user: &User) -> Result<()>;

    /// Overwrite the current-session pointer.
    fn set_current_user(&self, user: &User) -> Result<()>;

    fn current_user(&self) -> Result<Option<User>>;
}

impl UserStore for Database {
    fn list_users(&self) -> Result<Vec<User>> {
        self.all_users()
    }

    fn save_user(&self, user: &User) -> Result<()> {
        self.upsert_user(user)
    }

    fn set_current_user(&self, user: &User) -> Result<()> {
        self.set_session_user(&user.id)
    }

    fn current_user(&self) -> Result<Option<User>> {
        self.session_user()
    }
}
