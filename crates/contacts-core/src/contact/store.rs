//! Contact persistence using SQLite
//!
//! `ContactStore` is the sole gateway to persisted contact state. Field
//! validation runs before every insert and update, and email uniqueness
//! is enforced by the UNIQUE index so concurrent writers race on the
//! database, not on application state.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::contact::{validate, Contact, ContactDraft, ContactPatch};
use crate::{ContactError, Result};

/// SQLite-based store for contact records
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Create a new ContactStore with the given database path
    pub fn new(db_path: &str) -> Result<Self> {
        debug!("Opening contacts database at: {}", db_path);
        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_tables()?;
        info!("ContactStore initialized successfully");
        Ok(store)
    }

    /// Create an in-memory ContactStore (useful for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_tables()?;
        Ok(store)
    }

    /// Initialize database tables
    fn init_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS contacts (
                id TEXT PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                phone_number TEXT NOT NULL,
                company TEXT,
                job_title TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )?;

        // Index for the created_at-descending list ordering
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_contacts_created_at ON contacts(created_at)",
            [],
        )?;

        Ok(())
    }

    /// Validate and persist a new contact, assigning id and timestamps
    pub fn create(&self, draft: ContactDraft) -> Result<Contact> {
        validate(&draft).into_result()?;

        let contact = Contact::new(draft);
        let result = self.conn.execute(
            "INSERT INTO contacts (id, first_name, last_name, email, phone_number,
                                   company, job_title, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                contact.id,
                contact.first_name,
                contact.last_name,
                contact.email,
                contact.phone_number,
                contact.company,
                contact.job_title,
                contact.created_at.to_rfc3339(),
                contact.updated_at.to_rfc3339(),
            ],
        );

        match result {
            Ok(_) => {
                debug!("Created contact with id: {}", contact.id);
                Ok(contact)
            }
            Err(e) if is_unique_violation(&e) => Err(ContactError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    /// List all contacts, most recently created first
    pub fn list(&self) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, email, phone_number,
                    company, job_title, created_at, updated_at
             FROM contacts
             ORDER BY created_at DESC",
        )?;

        let contacts = stmt
            .query_map([], row_to_contact)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Listed {} contacts", contacts.len());
        Ok(contacts)
    }

    /// Load a contact by id
    pub fn get(&self, id: &str) -> Result<Option<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, first_name, last_name, email, phone_number,
                    company, job_title, created_at, updated_at
             FROM contacts WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], row_to_contact) {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply a partial update to an existing contact.
    ///
    /// Only supplied fields change; the merged record is re-validated with
    /// the same rules as create and `updated_at` is refreshed.
    pub fn update(&self, id: &str, patch: ContactPatch) -> Result<Contact> {
        let existing = self
            .get(id)?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;

        let merged = patch.apply(&existing);
        validate(&merged).into_result()?;

        let updated_at = Utc::now();
        let result = self.conn.execute(
            "UPDATE contacts
             SET first_name = ?1, last_name = ?2, email = ?3, phone_number = ?4,
                 company = ?5, job_title = ?6, updated_at = ?7
             WHERE id = ?8",
            params![
                merged.first_name,
                merged.last_name,
                merged.email,
                merged.phone_number,
                merged.company,
                merged.job_title,
                updated_at.to_rfc3339(),
                id,
            ],
        );

        match result {
            Ok(_) => {
                debug!("Updated contact with id: {}", id);
                Ok(Contact {
                    id: existing.id,
                    first_name: merged.first_name,
                    last_name: merged.last_name,
                    email: merged.email,
                    phone_number: merged.phone_number,
                    company: merged.company,
                    job_title: merged.job_title,
                    created_at: existing.created_at,
                    updated_at,
                })
            }
            Err(e) if is_unique_violation(&e) => Err(ContactError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete a contact by id; deleting an unknown id is NotFound
    pub fn delete(&self, id: &str) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(ContactError::NotFound(id.to_string()));
        }

        debug!("Deleted contact with id: {}", id);
        Ok(())
    }

    /// Count total contacts
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// The only UNIQUE column writable through the store is email, so any
/// constraint violation from insert/update means a duplicate email.
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn row_to_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    let created_at_str: String = row.get(7)?;
    let updated_at_str: String = row.get(8)?;

    let created_at = parse_timestamp(&created_at_str)?;
    let updated_at = parse_timestamp(&updated_at_str)?;

    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone_number: row.get(4)?,
        company: row.get(5)?,
        job_title: row.get(6)?,
        created_at,
        updated_at,
    })
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| rusqlite::Error::InvalidQuery)
}
