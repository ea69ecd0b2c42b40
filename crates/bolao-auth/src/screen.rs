use bolao_db::UserStore;
use bolao_types::api::{AuthForm, AuthMode};
use bolao_types::models::User;

use crate::authenticator::Authenticator;
use crate::error::AuthError;

/// Form state behind the login/register screen: the mode toggle, the four
/// inputs and one error slot. Lives for one interactive session.
pub struct AuthScreen<S> {
    auth: Authenticator<S>,
    mode: AuthMode,
    form: AuthForm,
    error: Option<String>,
}

impl<S: UserStore> AuthScreen<S> {
    pub fn new(auth: Authenticator<S>) -> Self {
        Self {
            auth,
            mode: AuthMode::default(),
            form: AuthForm::default(),
            error: None,
        }
    }

    pub fn authenticator(&self) -> &Authenticator<S> {
        &self.auth
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch between login and register. Inputs and any error are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_whatsapp(&mut self, whatsapp: impl Into<String>) {
        self.form.whatsapp = whatsapp.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    /// Submit the current inputs. A failure's message is kept in the error
    /// slot until the next submit.
    pub fn submit<F>(&mut self, on_authenticated: F) -> Result<(), AuthError>
    where
        F: FnOnce(User),
    {
        self.error = None;

        let result = self.auth.submit(self.mode, &self.form, on_authenticated);
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use bolao_db::MemoryStore;
    use bolao_types::models::UserRole;

    use super::*;

    fn screen() -> AuthScreen<MemoryStore> {
        AuthScreen::new(Authenticator::new(MemoryStore::new()))
    }

    #[test]
    fn starts_in_login_mode_with_empty_inputs() {
        let screen = screen();
        assert_eq!(screen.mode(), AuthMode::Login);
        assert_eq!(screen.form(), &AuthForm::default());
        assert!(screen.error().is_none());
    }

    #[test]
    fn toggle_keeps_inputs_and_error() {
        let mut screen = screen();
        screen.set_email("ana@x.com");
        screen.set_password("p1");
        assert!(screen.submit(|_| {}).is_err());

        screen.toggle_mode();
        assert_eq!(screen.mode(), AuthMode::Register);
        assert_eq!(screen.form().email, "ana@x.com");
        assert_eq!(screen.error(), Some("E-mail ou senha incorretos."));
    }

    #[test]
    fn register_then_login_through_the_screen() {
        let mut screen = screen();
        screen.toggle_mode();
        screen.set_name("Ana");
        screen.set_email("ana@x.com");
        screen.set_whatsapp("11999999999");
        screen.set_password("p1");

        let mut registered = None;
        screen.submit(|u| registered = Some(u)).unwrap();
        let registered = registered.unwrap();
        assert_eq!(registered.role, UserRole::User);

        screen.toggle_mode();
        let mut logged_in = None;
        screen.submit(|u| logged_in = Some(u)).unwrap();
        assert_eq!(logged_in.unwrap().id, registered.id);
    }

    #[test]
    fn error_is_shown_then_cleared_by_next_submit() {
        let mut screen = screen();
        screen.toggle_mode();
        screen.set_email("ana@x.com");
        screen.set_whatsapp("123");

        let mut called = false;
        assert!(matches!(screen.submit(|_| called = true), Err(AuthError::InvalidWhatsapp)));
        assert!(!called);
        assert_eq!(screen.error(), Some("Por favor, insira um número de WhatsApp válido."));

        screen.set_whatsapp("11999999999");
        screen.submit(|_| called = true).unwrap();
        assert!(called);
        assert!(screen.error().is_none());
    }

    #[test]
    fn duplicate_registration_shows_conflict_message() {
        let mut screen = screen();
        screen.toggle_mode();
        screen.set_email("ana@x.com");
        screen.set_whatsapp("11999999999");
        screen.submit(|_| {}).unwrap();

        assert!(screen.submit(|_| {}).is_err());
        assert_eq!(screen.error(), Some("E-mail já cadastrado."));
    }
}
