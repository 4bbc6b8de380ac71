//! Waitlist service: signup acceptance and counting.

use std::sync::Arc;

use crate::domain::{EntrantEmail, EntrantName, NewWaitlistEntry, SignupMetadata, WaitlistEntry};
use crate::error::WaitlistError;
use crate::persistence::WaitlistStore;

/// Outcome of an accepted signup.
#[derive(Debug, Clone)]
pub struct SignupReceipt {
    /// The stored entry.
    pub entry: WaitlistEntry,
    /// Total number of entries read right after the insert, in the same
    /// store transaction.
    ///
    /// This is a snapshot count, not a rank bound to the row: a concurrent
    /// insert that commits first shifts it.
    pub position: i64,
}

/// Orchestration layer for waitlist operations.
///
/// Holds no state of its own beyond the injected store. `submit` follows
/// the pattern: validate → duplicate fast path → insert and count.
#[derive(Debug, Clone)]
pub struct WaitlistService {
    store: Arc<dyn WaitlistStore>,
}

impl WaitlistService {
    /// Creates a new `WaitlistService` over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        Self { store }
    }

    /// Accepts a signup.
    ///
    /// `name` and `email` are the raw request values; `None` means the
    /// field was absent. Validation runs before the store is touched.
    ///
    /// The duplicate lookup and the insert are separate store operations.
    /// Two identical submissions racing each other are resolved by the
    /// store's uniqueness constraint, which surfaces as
    /// [`WaitlistError::DuplicateEmail`] from the insert.
    ///
    /// # Errors
    ///
    /// - [`WaitlistError::MissingFields`] if either field is absent or blank.
    /// - [`WaitlistError::InvalidName`] / [`WaitlistError::InvalidEmail`] on
    ///   malformed input.
    /// - [`WaitlistError::DuplicateEmail`] if the normalized email exists.
    /// - [`WaitlistError::PersistenceError`] on store failure.
    pub async fn submit(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        metadata: SignupMetadata,
    ) -> Result<SignupReceipt, WaitlistError> {
        let (Some(raw_name), Some(raw_email)) = (name, email) else {
            return Err(WaitlistError::MissingFields);
        };

        let name = EntrantName::parse(raw_name)?;
        let email = EntrantEmail::parse(raw_email)?;

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::debug!("signup rejected: email already registered");
            return Err(WaitlistError::DuplicateEmail);
        }

        let (entry, position) = self
            .store
            .insert(&NewWaitlistEntry::new(name, email, metadata))
            .await?;

        tracing::info!(entry_id = entry.id, position, "waitlist signup accepted");
        Ok(SignupReceipt { entry, position })
    }

    /// Returns the total number of waitlist entries.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::PersistenceError`] on store failure.
    pub async fn count(&self) -> Result<i64, WaitlistError> {
        self.store.count().await
    }

    /// Reports whether the store is reachable.
    pub async fn store_is_up(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "store health check failed");
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::InMemoryStore;
    use async_trait::async_trait;
    use tokio_test::{assert_err, assert_ok};

    fn make_service() -> WaitlistService {
        WaitlistService::new(Arc::new(InMemoryStore::new()))
    }

    async fn submit(
        service: &WaitlistService,
        name: &str,
        email: &str,
    ) -> Result<SignupReceipt, WaitlistError> {
        service
            .submit(Some(name), Some(email), SignupMetadata::default())
            .await
    }

    #[tokio::test]
    async fn submit_returns_position_after_insert() {
        let service = make_service();
        let first = assert_ok!(submit(&service, "Ada", "ada@example.com").await);
        let second = assert_ok!(submit(&service, "Grace", "grace@example.com").await);
        assert_eq!(first.position, 1);
        assert_eq!(second.position, 2);
        assert_eq!(assert_ok!(service.count().await), 2);
    }

    #[tokio::test]
    async fn submit_normalizes_before_storing() {
        let service = make_service();
        let receipt = assert_ok!(submit(&service, "  Jane  ", "  Jane@Example.COM ").await);
        assert_eq!(receipt.entry.name, "Jane");
        assert_eq!(receipt.entry.email, "jane@example.com");
    }

    #[tokio::test]
    async fn duplicate_normalized_email_conflicts() {
        let service = make_service();
        assert_ok!(submit(&service, "Jane", "Jane@Example.com").await);
        let err = assert_err!(submit(&service, "Jane", "jane@example.com").await);
        assert!(matches!(err, WaitlistError::DuplicateEmail));
        assert_eq!(assert_ok!(service.count().await), 1);
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let service = make_service();
        let no_name = service
            .submit(None, Some("a@example.com"), SignupMetadata::default())
            .await;
        let no_email = service
            .submit(Some("A"), None, SignupMetadata::default())
            .await;
        assert!(matches!(no_name, Err(WaitlistError::MissingFields)));
        assert!(matches!(no_email, Err(WaitlistError::MissingFields)));
        assert_eq!(assert_ok!(service.count().await), 0);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_insert() {
        let service = make_service();
        let err = assert_err!(submit(&service, "Foo", "foo@bar").await);
        assert!(matches!(err, WaitlistError::InvalidEmail));
        assert_eq!(assert_ok!(service.count().await), 0);
    }

    #[tokio::test]
    async fn count_is_stable_without_writes() {
        let service = make_service();
        assert_ok!(submit(&service, "Ada", "ada@example.com").await);
        let a = assert_ok!(service.count().await);
        let b = assert_ok!(service.count().await);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn metadata_is_stored() {
        let service = make_service();
        let metadata = SignupMetadata {
            ip_address: Some("10.1.2.3".to_string()),
            referral_source: Some("https://example.com/launch".to_string()),
        };
        let receipt = assert_ok!(
            service
                .submit(Some("Ada"), Some("ada@example.com"), metadata)
                .await
        );
        assert_eq!(receipt.entry.ip_address.as_deref(), Some("10.1.2.3"));
        assert_eq!(
            receipt.entry.referral_source.as_deref(),
            Some("https://example.com/launch")
        );
    }

    /// Store whose lookup never sees existing rows, as if a concurrent
    /// request inserted the same email between check and insert.
    #[derive(Debug, Default)]
    struct RacingStore {
        inner: InMemoryStore,
    }

    #[async_trait]
    impl WaitlistStore for RacingStore {
        async fn find_by_email(
            &self,
            _email: &EntrantEmail,
        ) -> Result<Option<WaitlistEntry>, WaitlistError> {
            Ok(None)
        }

        async fn insert(
            &self,
            entry: &NewWaitlistEntry,
        ) -> Result<(WaitlistEntry, i64), WaitlistError> {
            self.inner.insert(entry).await
        }

        async fn count(&self) -> Result<i64, WaitlistError> {
            self.inner.count().await
        }

        async fn ping(&self) -> Result<(), WaitlistError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn insert_level_uniqueness_is_authoritative() {
        let service = WaitlistService::new(Arc::new(RacingStore::default()));
        assert_ok!(submit(&service, "Jane", "jane@example.com").await);
        let err = assert_err!(submit(&service, "Jane", "jane@example.com").await);
        assert!(matches!(err, WaitlistError::DuplicateEmail));
    }

    /// Store whose standalone `count()` always fails.
    #[derive(Debug, Default)]
    struct BrokenCountStore {
        inner: InMemoryStore,
    }

    #[async_trait]
    impl WaitlistStore for BrokenCountStore {
        async fn find_by_email(
            &self,
            email: &EntrantEmail,
        ) -> Result<Option<WaitlistEntry>, WaitlistError> {
            self.inner.find_by_email(email).await
        }

        async fn insert(
            &self,
            entry: &NewWaitlistEntry,
        ) -> Result<(WaitlistEntry, i64), WaitlistError> {
            self.inner.insert(entry).await
        }

        async fn count(&self) -> Result<i64, WaitlistError> {
            Err(WaitlistError::PersistenceError("conn lost".to_string()))
        }

        async fn ping(&self) -> Result<(), WaitlistError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn position_comes_from_the_insert_unit() {
        let service = WaitlistService::new(Arc::new(BrokenCountStore::default()));

        // A failing standalone count cannot leave a committed row behind a 500.
        let receipt = assert_ok!(submit(&service, "Jane", "jane@example.com").await);
        assert_eq!(receipt.position, 1);

        let second = assert_ok!(submit(&service, "Ada", "ada@example.com").await);
        assert_eq!(second.position, 2);

        let err = assert_err!(service.count().await);
        assert!(matches!(err, WaitlistError::PersistenceError(_)));
    }

    #[tokio::test]
    async fn in_memory_store_is_up() {
        assert!(make_service().store_is_up().await);
    }
}
