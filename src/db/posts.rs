use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::models::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::{AppError, AppResult};
use crate::state::DbPool;

const POST_COLUMNS: &str = "id, title, content, image_url, author, created_at, updated_at";

fn from_row(row: &Row<'_>) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        image_url: row.get(3)?,
        author: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// All posts, newest first.
pub fn list(pool: &DbPool) -> AppResult<Vec<BlogPost>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM blog_posts ORDER BY created_at DESC, id DESC",
        POST_COLUMNS
    ))?;
    let posts = stmt
        .query_map([], from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(posts)
}

pub fn find(pool: &DbPool, id: &str) -> AppResult<Option<BlogPost>> {
    let conn = pool.get()?;
    let post = conn
        .query_row(
            &format!("SELECT {} FROM blog_posts WHERE id = ?1", POST_COLUMNS),
            params![id],
            from_row,
        )
        .optional()?;
    Ok(post)
}

pub fn create(pool: &DbPool, input: &NewBlogPost, author: &str) -> AppResult<BlogPost> {
    let conn = pool.get()?;
    let now = Utc::now();
    let post = BlogPost {
        id: uuid::Uuid::now_v7().to_string(),
        title: input.title.clone(),
        content: input.content.clone(),
        image_url: input.image_url.clone(),
        author: author.to_string(),
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO blog_posts (id, title, content, image_url, author, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            post.id,
            post.title,
            post.content,
            post.image_url,
            post.author,
            post.created_at,
            post.updated_at
        ],
    )?;

    Ok(post)
}

/// Apply the fields present in `changes`. An empty `image_url` clears the image.
pub fn update(pool: &DbPool, id: &str, changes: &BlogPostChanges) -> AppResult<BlogPost> {
    let mut post = find(pool, id)?.ok_or(AppError::NotFound)?;

    if let Some(ref title) = changes.title {
        post.title = title.clone();
    }
    if let Some(ref content) = changes.content {
        post.content = content.clone();
    }
    if let Some(ref image_url) = changes.image_url {
        post.image_url = Some(image_url.clone()).filter(|url| !url.is_empty());
    }
    post.updated_at = Utc::now();

    let conn = pool.get()?;
    conn.execute(
        "UPDATE blog_posts
         SET title = ?1, content = ?2, image_url = ?3, updated_at = ?4
         WHERE id = ?5",
        params![post.title, post.content, post.image_url, post.updated_at, id],
    )?;

    Ok(post)
}

/// Returns false when no post had that id.
pub fn delete(pool: &DbPool, id: &str) -> AppResult<bool> {
    let conn = pool.get()?;
    let rows = conn.execute("DELETE FROM blog_posts WHERE id = ?1", params![id])?;
    Ok(rows > 0)
}
