use serde::Deserialize;

/// Which branch a submit takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

// -- Auth --

/// The four input fields collected by the auth screen.
///
/// `name` and `whatsapp` are only read on registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthForm {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    pub password: String,
}

impl AuthForm {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn register(
        name: impl Into<String>,
        email: impl Into<String>,
        whatsapp: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            whatsapp: whatsapp.into(),
            password: password.into(),
        }
    }
}
