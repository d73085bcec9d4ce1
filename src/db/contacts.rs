use chrono::Utc;
use rusqlite::params;

use crate::db::models::{
    BusinessContact, IndividualContact, NewBusinessContact, NewIndividualContact,
};
use crate::error::AppResult;
use crate::state::DbPool;

pub fn create_individual(pool: &DbPool, input: &NewIndividualContact) -> AppResult<IndividualContact> {
    let conn = pool.get()?;
    let contact = IndividualContact {
        id: uuid::Uuid::now_v7().to_string(),
        name: input.name.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        message: input.message.clone(),
        privacy_agreed: input.privacy_agreed,
        created_at: Utc::now(),
    };

    conn.execute(
        "INSERT INTO individual_contacts (id, name, email, phone, message, privacy_agreed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            contact.id,
            contact.name,
            contact.email,
            contact.phone,
            contact.message,
            contact.privacy_agreed,
            contact.created_at
        ],
    )?;

    Ok(contact)
}

/// Individual submissions, newest first.
pub fn list_individual(pool: &DbPool) -> AppResult<Vec<IndividualContact>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, message, privacy_agreed, created_at
         FROM individual_contacts ORDER BY created_at DESC, id DESC",
    )?;
    let contacts = stmt
        .query_map([], |row| {
            Ok(IndividualContact {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                message: row.get(4)?,
                privacy_agreed: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}

pub fn create_business(pool: &DbPool, input: &NewBusinessContact) -> AppResult<BusinessContact> {
    let conn = pool.get()?;
    let contact = BusinessContact {
        id: uuid::Uuid::now_v7().to_string(),
        company_name: input.company_name.clone(),
        contact_person: input.contact_person.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        message: input.message.clone(),
        privacy_agreed: input.privacy_agreed,
        created_at: Utc::now(),
    };

    conn.execute(
        "INSERT INTO business_contacts
           (id, company_name, contact_person, email, phone, message, privacy_agreed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            contact.id,
            contact.company_name,
            contact.contact_person,
            contact.email,
            contact.phone,
            contact.message,
            contact.privacy_agreed,
            contact.created_at
        ],
    )?;

    Ok(contact)
}

/// Business submissions, newest first.
pub fn list_business(pool: &DbPool) -> AppResult<Vec<BusinessContact>> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, company_name, contact_person, email, phone, message, privacy_agreed, created_at
         FROM business_contacts ORDER BY created_at DESC, id DESC",
    )?;
    let contacts = stmt
        .query_map([], |row| {
            Ok(BusinessContact {
                id: row.get(0)?,
                company_name: row.get(1)?,
                contact_person: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                message: row.get(5)?,
                privacy_agreed: row.get(6)?,
                created_at: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(contacts)
}
