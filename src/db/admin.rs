use rusqlite::{params, OptionalExtension};

use crate::auth::password;
use crate::db::models::AdminCredential;
use crate::error::{AppError, AppResult};
use crate::state::DbPool;

pub fn get_credential(pool: &DbPool) -> AppResult<AdminCredential> {
    let conn = pool.get()?;
    conn.query_row(
        "SELECT email, password_hash FROM admin_credential WHERE id = 1",
        [],
        |row| {
            Ok(AdminCredential {
                email: row.get(0)?,
                password_hash: row.get(1)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| AppError::Internal("Admin credential has not been seeded".into()))
}

/// Create the credential row if none exists. Returns true when created.
pub fn ensure_credential(pool: &DbPool, email: &str, password: &str, cost: u32) -> AppResult<bool> {
    let conn = pool.get()?;
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM admin_credential",
        [],
        |row| row.get(0),
    )?;
    if exists {
        return Ok(false);
    }

    let hash = password::hash(password, cost)?;
    conn.execute(
        "INSERT INTO admin_credential (id, email, password_hash) VALUES (1, ?1, ?2)",
        params![email.trim(), hash],
    )?;
    Ok(true)
}

/// Replace email and/or password hash. `None` keeps the stored value.
pub fn update_credential(
    pool: &DbPool,
    email: Option<&str>,
    password_hash: Option<&str>,
) -> AppResult<AdminCredential> {
    let current = get_credential(pool)?;
    let updated = AdminCredential {
        email: email.map(str::to_string).unwrap_or(current.email),
        password_hash: password_hash
            .map(str::to_string)
            .unwrap_or(current.password_hash),
    };

    let conn = pool.get()?;
    conn.execute(
        "UPDATE admin_credential
         SET email = ?1, password_hash = ?2, updated_at = datetime('now')
         WHERE id = 1",
        params![updated.email, updated.password_hash],
    )?;

    Ok(updated)
}
