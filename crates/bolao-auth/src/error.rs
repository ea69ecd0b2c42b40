use thiserror::Error;

/// Reasons a submit can fail. The display text is what the screen shows.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Por favor, insira um número de WhatsApp válido.")]
    InvalidWhatsapp,

    #[error("E-mail já cadastrado.")]
    EmailTaken,

    #[error("E-mail ou senha incorretos.")]
    InvalidCredentials,

    #[error("Não foi possível processar a senha: {0}")]
    Credential(String),

    #[error("Erro ao acessar os dados: {0}")]
    Store(#[from] anyhow::Error),
}
