use rand::Rng;
use rusqlite::params;

use crate::error::AppResult;
use crate::state::DbPool;

/// Issue a new admin session. Returns the bearer token.
pub fn create_session(pool: &DbPool, hours: u64) -> AppResult<String> {
    let conn = pool.get()?;

    let token = generate_token();
    let id = uuid::Uuid::now_v7().to_string();

    conn.execute(
        "INSERT INTO admin_sessions (id, token, expires_at) VALUES (?1, ?2, datetime('now', ?3))",
        params![id, token, format!("+{} hours", hours)],
    )?;

    Ok(token)
}

/// True when the token exists and has not expired.
pub fn is_valid(pool: &DbPool, token: &str) -> AppResult<bool> {
    let conn = pool.get()?;
    let valid: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM admin_sessions WHERE token = ?1 AND expires_at > datetime('now')",
        params![token],
        |row| row.get(0),
    )?;
    Ok(valid)
}

/// Delete a session by token.
pub fn delete_session(pool: &DbPool, token: &str) -> AppResult<()> {
    let conn = pool.get()?;
    conn.execute("DELETE FROM admin_sessions WHERE token = ?1", params![token])?;
    Ok(())
}

/// Revoke every session except `keep`. Used after a password change.
pub fn delete_other_sessions(pool: &DbPool, keep: &str) -> AppResult<usize> {
    let conn = pool.get()?;
    let rows = conn.execute("DELETE FROM admin_sessions WHERE token != ?1", params![keep])?;
    Ok(rows)
}

/// Drop expired sessions. Returns the number removed.
pub fn purge_expired(pool: &DbPool) -> AppResult<usize> {
    let conn = pool.get()?;
    let rows = conn.execute(
        "DELETE FROM admin_sessions WHERE expires_at <= datetime('now')",
        [],
    )?;
    Ok(rows)
}

/// Generate a cryptographically random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
