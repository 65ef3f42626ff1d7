use std::sync::Arc;

use murmur_db::{Database, StoreError};
use murmur_types::models::{Account, Message};
use tracing::debug;

use crate::error::ServiceError;
use crate::validation;

/// Business rules in front of the store.
///
/// Every operation runs its checks in a fixed order and stops at the first
/// failure; only then does it touch the store. Store calls are blocking and
/// run on Tokio's blocking pool.
#[derive(Clone)]
pub struct SocialService {
    db: Arc<Database>,
}

impl SocialService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // -- Accounts --

    pub async fn register(
        &self,
        username: String,
        password: String,
    ) -> Result<Account, ServiceError> {
        validation::password(&password)?;
        validation::username(&username)?;

        let lookup = username.clone();
        if self
            .blocking(move |db| db.get_account_by_username(&lookup))
            .await?
            .is_some()
        {
            debug!("Registration rejected: username '{}' is taken", username);
            return Err(ServiceError::UsernameTaken);
        }

        self.insert_account(username, password).await
    }

    pub async fn login(&self, username: String, password: String) -> Result<Account, ServiceError> {
        let account = self
            .blocking(move |db| db.get_account_by_username(&username))
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if account.password != password {
            debug!("Login rejected for account {}", account.id);
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(account.into())
    }

    // -- Messages --

    pub async fn post_message(
        &self,
        posted_by: i64,
        text: String,
        posted_at_epoch: i64,
    ) -> Result<Message, ServiceError> {
        if self
            .blocking(move |db| db.get_account_by_id(posted_by))
            .await?
            .is_none()
        {
            return Err(ServiceError::UnknownAccount(posted_by));
        }
        validation::message_text(&text)?;

        self.insert_message(posted_by, text, posted_at_epoch).await
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, ServiceError> {
        let rows = self.blocking(|db| db.list_messages()).await?;
        Ok(rows.into_iter().map(Message::from).collect())
    }

    pub async fn get_message(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        let row = self.blocking(move |db| db.get_message_by_id(id)).await?;
        Ok(row.map(Message::from))
    }

    pub async fn delete_message(&self, id: i64) -> Result<Option<Message>, ServiceError> {
        let row = self.blocking(move |db| db.delete_message(id)).await?;
        Ok(row.map(Message::from))
    }

    /// Replace a message's text and return the stored result. The update and
    /// the read-back are separate round trips.
    pub async fn update_message(&self, id: i64, text: String) -> Result<Message, ServiceError> {
        if self
            .blocking(move |db| db.get_message_by_id(id))
            .await?
            .is_none()
        {
            return Err(ServiceError::MessageNotFound(id));
        }
        validation::message_text(&text)?;

        self.blocking(move |db| db.update_message_text(id, &text)).await?;

        self.blocking(move |db| db.get_message_by_id(id))
            .await?
            .map(Message::from)
            .ok_or(ServiceError::MessageNotFound(id))
    }

    pub async fn list_messages_by_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Message>, ServiceError> {
        let rows = self
            .blocking(move |db| db.list_messages_by_account(account_id))
            .await?;
        Ok(rows.into_iter().map(Message::from).collect())
    }

    /// The UNIQUE constraint settles races the username pre-check can't see.
    async fn insert_account(
        &self,
        username: String,
        password: String,
    ) -> Result<Account, ServiceError> {
        match self
            .blocking(move |db| db.insert_account(&username, &password))
            .await
        {
            Ok(row) => Ok(row.into()),
            Err(ServiceError::Store(StoreError::Conflict(_))) => {
                Err(ServiceError::UsernameTaken)
            }
            Err(e) => Err(e),
        }
    }

    /// The poster may vanish between the pre-check and the insert; the
    /// foreign key catches that.
    async fn insert_message(
        &self,
        posted_by: i64,
        text: String,
        posted_at_epoch: i64,
    ) -> Result<Message, ServiceError> {
        match self
            .blocking(move |db| db.insert_message(posted_by, &text, posted_at_epoch))
            .await
        {
            Ok(row) => Ok(row.into()),
            Err(ServiceError::Store(StoreError::Conflict(_))) => {
                Err(ServiceError::UnknownAccount(posted_by))
            }
            Err(e) => Err(e),
        }
    }

    async fn blocking<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Database) -> murmur_db::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        let out = tokio::task::spawn_blocking(move || f(&db)).await?;
        Ok(out?)
    }
}
