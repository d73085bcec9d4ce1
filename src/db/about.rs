use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::models::AboutContent;
use crate::error::AppResult;
use crate::state::DbPool;

pub const DEFAULT_ABOUT: &str = "Monday Knights is a grassroots organization focused on developing intersectional power. Combining historic strategies with advancements in technology, we seek to reinvigorate and revolutionize community participation, harm reduction and mutual aid systems.\n\nThrough building communal spaces and fostering strong alliances across affinity groups, we aim to create sustainable social and political momentum.";

/// Current About text, falling back to the default when the row is missing.
pub fn get(pool: &DbPool) -> AppResult<AboutContent> {
    let conn = pool.get()?;
    let row = conn
        .query_row(
            "SELECT content, updated_at, updated_by FROM about_content WHERE id = 1",
            [],
            |row| {
                Ok(AboutContent {
                    content: row.get(0)?,
                    updated_at: row.get(1)?,
                    updated_by: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(row.unwrap_or_else(|| AboutContent {
        content: DEFAULT_ABOUT.to_string(),
        updated_at: Utc::now(),
        updated_by: "system".to_string(),
    }))
}

/// Overwrite the About text.
pub fn update(
    pool: &DbPool,
    content: &str,
    updated_by: &str,
) -> AppResult<AboutContent> {
    let conn = pool.get()?;
    let about = AboutContent {
        content: content.to_string(),
        updated_at: Utc::now(),
        updated_by: updated_by.to_string(),
    };

    conn.execute(
        "INSERT INTO about_content (id, content, updated_at, updated_by)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
           content = excluded.content,
           updated_at = excluded.updated_at,
           updated_by = excluded.updated_by",
        params![about.content, about.updated_at, about.updated_by],
    )?;

    Ok(about)
}

/// Insert the default text if no About row exists. Returns true when seeded.
pub fn ensure_default(pool: &DbPool) -> AppResult<bool> {
    let conn = pool.get()?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO about_content (id, content, updated_at, updated_by)
         VALUES (1, ?1, ?2, 'system')",
        params![DEFAULT_ABOUT, Utc::now()],
    )?;
    Ok(inserted > 0)
}
