use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub content: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualContact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub privacy_agreed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContact {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub privacy_agreed: bool,
    pub created_at: DateTime<Utc>,
}

/// The single admin account. `password_hash` is a bcrypt hash and is
/// never serialized.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub email: String,
    pub password_hash: String,
}

// -- Inputs --

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Partial update: `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewIndividualContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(deserialize_with = "null_as_false")]
    pub privacy_agreed: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewBusinessContact {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(deserialize_with = "null_as_false")]
    pub privacy_agreed: bool,
}

/// An explicit `null` agreement is the same as not agreeing.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
