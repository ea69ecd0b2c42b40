use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id                    TEXT PRIMARY KEY,
            name                  TEXT NOT NULL,
            email                 TEXT NOT NULL,
            whatsapp              TEXT NOT NULL,
            password              TEXT NOT NULL,
            role                  TEXT NOT NULL CHECK (role IN ('ADMIN', 'USER')),
            balance               REAL NOT NULL DEFAULT 0,
            withdrawable_balance  REAL NOT NULL DEFAULT 0,
            created_at            INTEGER NOT NULL
        );

        -- Email uniqueness is checked at registration, not enforced here
        CREATE INDEX IF NOT EXISTS idx_users_email
            ON users(email);

        -- Single-row pointer to the logged-in user
        CREATE TABLE IF NOT EXISTS session (
            slot        INTEGER PRIMARY KEY CHECK (slot = 0),
            user_id     TEXT NOT NULL REFERENCES users(id)
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
