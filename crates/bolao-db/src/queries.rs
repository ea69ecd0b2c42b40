use crate::Database;
use crate::models::UserRow;
use anyhow::Result;
use bolao_types::models::User;
use rusqlite::Connection;
use tracing::debug;

impl Database {
    // -- Users --

    pub fn all_users(&self) -> Result<Vec<User>> {
        self.with_conn(query_all_users)
    }

    /// Insert the user, or overwrite every column of the row with the same id.
    pub fn upsert_user(&self, user: &User) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (id, name, email, whatsapp, password, role, balance, withdrawable_balance, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    email = excluded.email,
                    whatsapp = excluded.whatsapp,
                    password = excluded.password,
                    role = excluded.role,
                    balance = excluded.balance,
                    withdrawable_balance = excluded.withdrawable_balance,
                    created_at = excluded.created_at",
                rusqlite::params![
                    user.id,
                    user.name,
                    user.email,
                    user.whatsapp,
                    user.password,
                    user.role.as_str(),
                    user.balance,
                    user.withdrawable_balance,
                    user.created_at,
                ],
            )?;
            debug!("Saved user {}", user.id);
            Ok(())
        })
    }

    // -- Session --

    pub fn set_session_user(&self, user_id: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO session (slot, user_id) VALUES (0, ?1)",
                [user_id],
            )?;
            Ok(())
        })
    }

    pub fn session_user(&self) -> Result<Option<User>> {
        self.with_conn(query_session_user)
    }
}

fn query_all_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM users ORDER BY created_at",
        UserRow::COLUMNS
    ))?;

    let rows = stmt
        .query_map([], UserRow::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter().map(UserRow::into_user).collect()
}

fn query_session_user(conn: &Connection) -> Result<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT u.id, u.name, u.email, u.whatsapp, u.password, u.role, u.balance, u.withdrawable_balance, u.created_at
         FROM session s
         JOIN users u ON u.id = s.user_id
         WHERE s.slot = 0",
    )?;

    let row = stmt.query_row([], UserRow::from_row).optional()?;

    row.map(UserRow::into_user).transpose()
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
