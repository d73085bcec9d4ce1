//! Input checks for the public forms and admin edits. Each `normalize`
//! trims text fields and rejects the input with a client-visible message.

use crate::db::models::{BlogPostChanges, NewBlogPost, NewBusinessContact, NewIndividualContact};
use crate::error::{AppError, AppResult};

pub const PRIVACY_REQUIRED: &str = "Please agree to the privacy policy.";

/// Trimmed value, or a "<label> is required" error when blank.
pub fn required(value: &str, label: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub fn email(value: &str) -> AppResult<String> {
    let email = required(value, "Email")?;
    if !is_valid_email(&email) {
        return Err(AppError::BadRequest("Email address is not valid".into()));
    }
    Ok(email)
}

/// bcrypt only reads the first 72 bytes of a password.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// A replacement password. Blank input means "no change" and yields `None`.
pub fn new_password(value: Option<&str>) -> AppResult<Option<&str>> {
    let Some(password) = value.filter(|p| !p.trim().is_empty()) else {
        return Ok(None);
    };
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::BadRequest(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    Ok(Some(password))
}

impl NewIndividualContact {
    pub fn normalize(self) -> AppResult<Self> {
        if !self.privacy_agreed {
            return Err(AppError::BadRequest(PRIVACY_REQUIRED.into()));
        }
        Ok(Self {
            name: required(&self.name, "Name")?,
            email: email(&self.email)?,
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            privacy_agreed: true,
        })
    }
}

impl NewBusinessContact {
    pub fn normalize(self) -> AppResult<Self> {
        if !self.privacy_agreed {
            return Err(AppError::BadRequest(PRIVACY_REQUIRED.into()));
        }
        Ok(Self {
            company_name: required(&self.company_name, "Company name")?,
            contact_person: required(&self.contact_person, "Contact person")?,
            email: email(&self.email)?,
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            privacy_agreed: true,
        })
    }
}

impl NewBlogPost {
    pub fn normalize(self) -> AppResult<Self> {
        Ok(Self {
            title: required(&self.title, "Title")?,
            content: required(&self.content, "Content")?,
            image_url: self
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }
}

impl BlogPostChanges {
    /// Fields that are present must not be blank, except `image_url`
    /// where blank means "remove the image".
    pub fn normalize(self) -> AppResult<Self> {
        Ok(Self {
            title: self.title.map(|t| required(&t, "Title")).transpose()?,
            content: self.content.map(|c| required(&c, "Content")).transpose()?,
            image_url: self.image_url.map(|url| url.trim().to_string()),
        })
    }
}
