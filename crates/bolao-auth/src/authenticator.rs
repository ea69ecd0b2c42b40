use tracing::{debug, info, warn};
use uuid::Uuid;

use bolao_db::UserStore;
use bolao_types::api::{AuthForm, AuthMode};
use bolao_types::models::User;

use crate::credentials::PasswordScheme;
use crate::error::AuthError;
use crate::policy;

pub struct Authenticator<S> {
    store: S,
    scheme: PasswordScheme,
}

impl<S: UserStore> Authenticator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            scheme: PasswordScheme::default(),
        }
    }

    pub fn with_scheme(mut self, scheme: PasswordScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one submit. On success the user has been made current in the
    /// store and `on_authenticated` has been called with it exactly once.
    /// On failure the callback is dropped uncalled.
    pub fn submit<F>(&self, mode: AuthMode, form: &AuthForm, on_authenticated: F) -> Result<(), AuthError>
    where
        F: FnOnce(User),
    {
        let user = match mode {
            AuthMode::Register => self.register(form)?,
            AuthMode::Login => self.login(form)?,
        };
        on_authenticated(user);
        Ok(())
    }

    pub fn register(&self, form: &AuthForm) -> Result<User, AuthError> {
        if !policy::is_valid_whatsapp(&form.whatsapp) {
            return Err(AuthError::InvalidWhatsapp);
        }

        let users = self.store.list_users()?;
        if users.iter().any(|u| u.email == form.email) {
            debug!("Registration refused, email already in use");
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            whatsapp: form.whatsapp.clone(),
            password: self.scheme.seal(&form.password)?,
            role: policy::role_for_email(&form.email),
            balance: 0.0,
            withdrawable_balance: 0.0,
            created_at: now_millis(),
        };

        self.store.save_user(&user)?;
        self.store.set_current_user(&user)?;

        info!("Registered user {} with role {}", user.id, user.role);
        Ok(user)
    }

    pub fn login(&self, form: &AuthForm) -> Result<User, AuthError> {
        let users = self.store.list_users()?;

        if policy::is_bootstrap_admin(&form.email) {
            return self.login_bootstrap_admin(users);
        }

        let user = users
            .into_iter()
            .find(|u| u.email == form.email && self.scheme.verify(&u.password, &form.password))
            .ok_or_else(|| {
                debug!("Login rejected for {}", form.email);
                AuthError::InvalidCredentials
            })?;

        self.store.set_current_user(&user)?;

        info!("User {} logged in", user.id);
        Ok(user)
    }

    // The password is never checked on this path.
    fn login_bootstrap_admin(&self, users: Vec<User>) -> Result<User, AuthError> {
        let admin = match users.into_iter().find(|u| u.email == policy::ADMIN_EMAIL) {
            Some(admin) => admin,
            None => {
                let admin = policy::bootstrap_admin(
                    self.scheme.seal(policy::ADMIN_PASSWORD)?,
                    now_millis(),
                );
                self.store.save_user(&admin)?;
                info!("Created bootstrap administrator {}", admin.id);
                admin
            }
        };

        self.store.set_current_user(&admin)?;

        warn!("Administrator {} logged in without a password check", admin.id);
        Ok(admin)
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
