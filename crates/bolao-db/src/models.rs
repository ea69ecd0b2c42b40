use anyhow::{Result, anyhow};
use bolao_types::models::User;

/// Database row types, mapped directly from SQLite rows.
/// Kept apart from `bolao-types` so the DB layer owns its column encoding.
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub password: String,
    pub role: String,
    pub balance: f64,
    pub withdrawable_balance: f64,
    pub created_at: i64,
}

impl UserRow {
    pub const COLUMNS: &'static str =
        "id, name, email, whatsapp, password, role, balance, withdrawable_balance, created_at";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            whatsapp: row.get(3)?,
            password: row.get(4)?,
            role: row.get(5)?,
            balance: row.get(6)?,
            withdrawable_balance: row.get(7)?,
            created_at: row.get(8)?,
        })
    }

    pub fn into_user(self) -> Result<User> {
        let role = self
            .role
            .parse()
            .map_err(|e| anyhow!("Corrupt user row '{}': {}", self.id, e))?;

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            whatsapp: self.whatsapp,
            password: self.password,
            role,
            balance: self.balance,
            withdrawable_balance: self.withdrawable_balance,
            created_at: self.created_at,
        })
    }
}
