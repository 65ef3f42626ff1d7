use crate::models::{AccountRow, MessageRow};
use crate::{Database, Result, StoreError};
use rusqlite::{Connection, Row};

const ACCOUNT_COLUMNS: &str = "id, username, password";
const MESSAGE_COLUMNS: &str = "id, posted_by, text, posted_at_epoch";

impl Database {
    // -- Accounts --

    /// Insert an account and return it with its generated id. A taken
    /// username comes back as [`StoreError::Conflict`].
    pub fn insert_account(&self, username: &str, password: &str) -> Result<AccountRow> {
        self.with_conn_mut(|conn| {
            let row = conn.query_row(
                &format!(
                    "INSERT INTO account (username, password) VALUES (?1, ?2) \
                     RETURNING {ACCOUNT_COLUMNS}"
                ),
                (username, password),
                account_row,
            )?;
            Ok(row)
        })
    }

    pub fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = ?1"),
                [id],
                account_row,
            )
            .optional()
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE username = ?1"),
                [username],
                account_row,
            )
            .optional()
        })
    }

    // -- Messages --

    pub fn insert_message(
        &self,
        posted_by: i64,
        text: &str,
        posted_at_epoch: i64,
    ) -> Result<MessageRow> {
        self.with_conn_mut(|conn| {
            let row = conn.query_row(
                &format!(
                    "INSERT INTO message (posted_by, text, posted_at_epoch) VALUES (?1, ?2, ?3) \
                     RETURNING {MESSAGE_COLUMNS}"
                ),
                rusqlite::params![posted_by, text, posted_at_epoch],
                message_row,
            )?;
            Ok(row)
        })
    }

    pub fn get_message_by_id(&self, id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| query_message(conn, id))
    }

    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {MESSAGE_COLUMNS} FROM message ORDER BY id"))?;
            let rows = stmt
                .query_map([], message_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn list_messages_by_account(&self, account_id: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM message WHERE posted_by = ?1 ORDER BY id"
            ))?;
            let rows = stmt
                .query_map([account_id], message_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Read the row, then delete it, in one transaction.
    /// Returns the row as it was before deletion.
    pub fn delete_message(&self, id: i64) -> Result<Option<MessageRow>> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let existing = query_message(&tx, id)?;
            if existing.is_some() {
                tx.execute("DELETE FROM message WHERE id = ?1", [id])?;
            }
            tx.commit()?;
            Ok(existing)
        })
    }

    /// Overwrite a message's text. Returns the number of rows touched, which
    /// is 0 when no message has this id.
    pub fn update_message_text(&self, id: i64, text: &str) -> Result<usize> {
        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                "UPDATE message SET text = ?1 WHERE id = ?2",
                rusqlite::params![text, id],
            )?;
            Ok(changed)
        })
    }
}

fn query_message(conn: &Connection, id: i64) -> Result<Option<MessageRow>> {
    conn.query_row(
        &format!("SELECT {MESSAGE_COLUMNS} FROM message WHERE id = ?1"),
        [id],
        message_row,
    )
    .optional()
}

fn account_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        posted_by: row.get(1)?,
        text: row.get(2)?,
        posted_at_epoch: row.get(3)?,
    })
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
            Err(e) => Err(StoreError::from(e)),
        }
    }
}
