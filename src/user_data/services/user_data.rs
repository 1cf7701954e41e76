//! Service layer for user records and token blobs.
//!
//! Provides [`UserDataService`], built once at process start from the
//! bootstrapped registry and shared with request handlers by cloning.

use crate::routing::{
    domain::{BackendRegistry, FailoverPolicy, KeyHasher, Md5KeyHasher, RoutingKey},
    services::{FailoverExecutor, Router},
};
use crate::store::domain::{BackendName, Document, WriteMode};
use crate::user_data::{
    domain::{TOKENS_COLLECTION, USERS_COLLECTION, UserDataResult},
    services::{DeleteDocument, GetDocument, SetDocument, UpdateDocument},
};
use std::sync::Arc;

/// User data CRUD on top of the failover executor.
#[derive(Debug, Clone)]
pub struct UserDataService<H = Md5KeyHasher> {
    executor: Arc<FailoverExecutor<H>>,
}

impl UserDataService {
    /// Creates the service over a bootstrapped registry with the default
    /// router and failover policy.
    #[must_use]
    pub fn new(registry: BackendRegistry) -> Self {
        Self::with_executor(FailoverExecutor::new(Arc::new(registry)))
    }

    /// Creates the service with a non-default failover policy.
    #[must_use]
    pub fn with_policy(registry: BackendRegistry, policy: FailoverPolicy) -> Self {
        Self::with_executor(FailoverExecutor::new(Arc::new(registry)).with_policy(policy))
    }
}

impl<H: KeyHasher> UserDataService<H> {
    /// Creates the service with an explicit router and policy.
    #[must_use]
    pub fn with_router(registry: BackendRegistry, router: Router<H>, policy: FailoverPolicy) -> Self {
        Self::with_executor(FailoverExecutor::with_router(
            Arc::new(registry),
            router,
            policy,
        ))
    }

    /// Creates the service around an existing executor.
    #[must_use]
    pub fn with_executor(executor: FailoverExecutor<H>) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// Returns the number of registered backends.
    #[must_use]
    pub fn backend_count(&self) -> usize {
        self.executor.registry().len()
    }

    /// Returns the primary backend for `user_email`, or `None` when no
    /// backend is registered.
    #[must_use]
    pub fn primary_backend(&self, user_email: &str) -> Option<BackendName> {
        self.executor
            .router()
            .primary(self.executor.registry(), &RoutingKey::new(user_email))
    }

    /// Merges `data` into the user's record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user_data::domain::UserDataError`] when no backend
    /// accepts the write.
    pub async fn save_user_data(&self, user_email: &str, data: Document) -> UserDataResult<()> {
        let operation = SetDocument::new(
            "save_user_data",
            USERS_COLLECTION,
            user_email,
            data,
            WriteMode::Merge,
        );
        self.executor
            .execute(&RoutingKey::new(user_email), &operation)
            .await?;
        Ok(())
    }

    /// Reads the user's record.
    ///
    /// Returns `Ok(None)` when the first backend to answer holds no record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user_data::domain::UserDataError`] when no backend
    /// answers.
    pub async fn get_user_data(&self, user_email: &str) -> UserDataResult<Option<Document>> {
        let operation = GetDocument::new("get_user_data", USERS_COLLECTION, user_email);
        Ok(self
            .executor
            .execute(&RoutingKey::new(user_email), &operation)
            .await?)
    }

    /// Merges `updates` into an existing user record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user_data::domain::UserDataError`] when no backend
    /// accepts the update, including when the record does not exist.
    pub async fn update_user_data(&self, user_email: &str, updates: Document) -> UserDataResult<()> {
        let operation = UpdateDocument::new("update_user_data", USERS_COLLECTION, user_email, updates);
        self.executor
            .execute(&RoutingKey::new(user_email), &operation)
            .await?;
        Ok(())
    }

    /// Deletes the user's record from its primary backend.
    ///
    /// Deletes never fail over: a record written to a fallback backend stays
    /// there rather than removing data from a backend the record was never
    /// meant to live on.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user_data::domain::UserDataError::Unavailable`] when
    /// no backend is registered and
    /// [`crate::user_data::domain::UserDataError::PrimaryFailed`] when the
    /// primary rejects the delete.
    pub async fn delete_user_data(&self, user_email: &str) -> UserDataResult<()> {
        let operation = DeleteDocument::new("delete_user_data", USERS_COLLECTION, user_email);
        self.executor
            .execute_on_primary(&RoutingKey::new(user_email), &operation)
            .await?;
        Ok(())
    }

    /// Replaces the user's token blob.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user_data::domain::UserDataError`] when no backend
    /// accepts the write.
    pub async fn save_user_tokens(&self, user_email: &str, tokens: Document) -> UserDataResult<()> {
        let operation = SetDocument::new(
            "save_user_tokens",
            TOKENS_COLLECTION,
            user_email,
            tokens,
            WriteMode::Overwrite,
        );
        self.executor
            .execute(&RoutingKey::new(user_email), &operation)
            .await?;
        Ok(())
    }

    /// Reads the user's token blob.
    ///
    /// Returns `Ok(None)` when the first backend to answer holds no blob.
    ///
    /// # Errors
    ///
    /// Returns [`crate::user_data::domain::UserDataError`] when no backend
    /// answers.
    pub async fn get_user_tokens(&self, user_email: &str) -> UserDataResult<Option<Document>> {
        let operation = GetDocument::new("get_user_tokens", TOKENS_COLLECTION, user_email);
        Ok(self
            .executor
            .execute(&RoutingKey::new(user_email), &operation)
            .await?)
    }
}
