//! Record service — create, list and update use-cases for both collections.

use tokio::sync::Mutex;

use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::id::RecordId;
use roster_domain::record::{Entry, NewRecord, Provenance, Record, RecordKind, RecordPatch};
use roster_domain::time;

use crate::ports::CollectionStore;

/// Application service for student and tutor records.
///
/// Create and update hold a per-collection lock across load, mutate and save,
/// so two writers in this process never overwrite each other. Students and
/// tutors are locked independently.
pub struct RecordService<S> {
    store: S,
    students: Mutex<()>,
    tutors: Mutex<()>,
}

impl<S: CollectionStore> RecordService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            students: Mutex::new(()),
            tutors: Mutex::new(()),
        }
    }

    fn writer_lock(&self, kind: RecordKind) -> &Mutex<()> {
        match kind {
            RecordKind::Student => &self.students,
            RecordKind::Tutor => &self.tutors,
        }
    }

    /// Validate `input`, build a record and append it to the `kind` collection.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if the input is rejected, or a
    /// storage error propagated from the store. Nothing is written on error.
    pub async fn create_record(
        &self,
        kind: RecordKind,
        input: NewRecord,
        provenance: Provenance,
    ) -> Result<Record, RosterError> {
        input.validate()?;

        let _guard = self.writer_lock(kind).lock().await;
        let mut entries = self.store.load(kind).await?;
        let record = Record::create(kind, input, provenance);
        entries.push(Entry::from(record.clone()));
        self.store.save(kind, &entries).await?;

        tracing::info!(%kind, id = %record.id, total = entries.len(), "record created");
        Ok(record)
    }

    /// List every entry of `kind` in stored order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_records(&self, kind: RecordKind) -> Result<Vec<Entry>, RosterError> {
        let entries = self.store.load(kind).await?;
        tracing::debug!(%kind, count = entries.len(), "records listed");
        Ok(entries)
    }

    /// Apply `patch` to the first entry of `kind` whose id is `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if the patch is rejected,
    /// [`RosterError::NotFound`] when no record has `id` (the collection is
    /// left untouched), or a storage error from the store.
    pub async fn update_record(
        &self,
        kind: RecordKind,
        id: &RecordId,
        patch: RecordPatch,
    ) -> Result<Entry, RosterError> {
        patch.validate()?;
        if patch.is_empty() {
            tracing::debug!(%kind, %id, "patch carries no known field, only touching updated_at");
        }

        let _guard = self.writer_lock(kind).lock().await;
        let mut entries = self.store.load(kind).await?;
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.id() == Some(id.as_str()))
        else {
            return Err(NotFoundError {
                entity: kind.label(),
                id: id.to_string(),
            }
            .into());
        };
        entry.apply(patch, time::now())?;
        let updated = entry.clone();
        self.store.save(kind, &entries).await?;

        tracing::info!(%kind, %id, "record updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Arc;

    #[derive(Default)]
    struct InMemoryStore {
        collections: std::sync::Mutex<HashMap<RecordKind, Vec<Entry>>>,
        saves: std::sync::atomic::AtomicUsize,
    }

    impl InMemoryStore {
        fn saves(&self) -> usize {
            self.saves.load(std::sync::atomic::Ordering::SeqCst)
        }

        fn seed(&self, kind: RecordKind, entries: Vec<Entry>) {
            self.collections.lock().unwrap().insert(kind, entries);
        }
    }

    impl CollectionStore for InMemoryStore {
        fn load(
            &self,
            kind: RecordKind,
        ) -> impl Future<Output = Result<Vec<Entry>, RosterError>> + Send {
            let records = self
                .collections
                .lock()
                .unwrap()
                .get(&kind)
                .cloned()
                .unwrap_or_default();
            async move {
                // Give other writers a chance to interleave between load and save.
                tokio::task::yield_now().await;
                Ok(records)
            }
        }

        fn save(
            &self,
            kind: RecordKind,
            entries: &[Entry],
        ) -> impl Future<Output = Result<(), RosterError>> + Send {
            let entries = entries.to_vec();
            async move {
                tokio::task::yield_now().await;
                self.collections.lock().unwrap().insert(kind, entries);
                self.saves.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                Ok(())
            }
        }
    }

    struct BrokenStore;

    impl CollectionStore for BrokenStore {
        async fn load(&self, _kind: RecordKind) -> Result<Vec<Entry>, RosterError> {
            Ok(vec![])
        }

        async fn save(&self, _kind: RecordKind, _entries: &[Entry]) -> Result<(), RosterError> {
            Err(RosterError::Storage(Box::new(std::io::Error::other(
                "disk full",
            ))))
        }
    }

    fn make_service() -> RecordService<InMemoryStore> {
        RecordService::new(InMemoryStore::default())
    }

    fn input(email: &str) -> NewRecord {
        NewRecord::builder()
            .name("Asha Rao")
            .mobile_no("9876543210")
            .email(email)
            .course("B.Sc")
            .subject("Physics")
            .city(Some("Pune".to_string()))
            .build()
            .unwrap()
    }

    fn provenance() -> Provenance {
        Provenance::website("127.0.0.1", "test-agent")
    }

    #[tokio::test]
    async fn should_list_created_record_with_server_fields() {
        let svc = make_service();

        let created = svc
            .create_record(RecordKind::Student, input("asha@example.com"), provenance())
            .await
            .unwrap();

        let all = svc.list_records(RecordKind::Student).await.unwrap();
        assert_eq!(all, vec![Entry::from(created.clone())]);
        assert_eq!(created.kind, RecordKind::Student);
        assert_eq!(created.status, "active");
        assert!(created.updated_at.is_none());
        assert_eq!(created.source, "website");
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_to_every_record() {
        let svc = make_service();
        for _ in 0..10 {
            svc.create_record(RecordKind::Tutor, input("t@example.com"), provenance())
                .await
                .unwrap();
        }

        let all = svc.list_records(RecordKind::Tutor).await.unwrap();
        let ids: std::collections::HashSet<_> = all.iter().filter_map(Entry::id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[tokio::test]
    async fn should_reject_invalid_input_without_writing() {
        let svc = make_service();
        let mut bad = input("asha@example.com");
        bad.email = "not-an-email".to_string();

        let result = svc
            .create_record(RecordKind::Student, bad, provenance())
            .await;

        assert!(matches!(
            result,
            Err(RosterError::Validation(ValidationError::InvalidEmail(_)))
        ));
        assert_eq!(svc.store.saves(), 0);
    }

    #[tokio::test]
    async fn should_preserve_untouched_fields_on_partial_update() {
        let svc = make_service();
        let created_at = time::parse_lenient("2024-01-01T08:00:00Z").unwrap();
        let existing = Record::create_at(
            RecordKind::Student,
            input("asha@example.com"),
            provenance(),
            created_at,
        );
        svc.store
            .seed(RecordKind::Student, vec![Entry::from(existing.clone())]);
        let patch: RecordPatch = serde_json::from_str(r#"{"status":"inactive"}"#).unwrap();

        let updated = svc
            .update_record(RecordKind::Student, &existing.id, patch)
            .await
            .unwrap();

        let record = updated.as_record().unwrap();
        assert_eq!(record.status, "inactive");
        assert_eq!(record.city.as_deref(), Some("Pune"));
        assert_eq!(record.created_at, created_at);
        assert!(record.updated_at.unwrap() > record.created_at);

        let stored = svc.list_records(RecordKind::Student).await.unwrap();
        assert_eq!(stored, vec![updated]);
    }

    fn drifted_entry() -> Entry {
        Entry::Raw(serde_json::json!({
            "id": "legacy-1",
            "type": "student",
            "name": null,
            "mobile_no": "555",
            "email": "old@example.com",
            "course": "BA",
            "subject": "History",
            "status": "active",
            "joined_date": "2023-01-01T00:00:00",
            "created_at": "2023-01-01T00:00:00"
        }))
    }

    #[tokio::test]
    async fn should_keep_out_of_shape_entries_when_creating() {
        let svc = make_service();
        svc.store
            .seed(RecordKind::Student, vec![drifted_entry()]);

        svc.create_record(RecordKind::Student, input("new@example.com"), provenance())
            .await
            .unwrap();

        let all = svc.list_records(RecordKind::Student).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], drifted_entry());
        assert!(all[1].as_record().is_some());
    }

    #[tokio::test]
    async fn should_update_out_of_shape_entry_by_id() {
        let svc = make_service();
        svc.store
            .seed(RecordKind::Student, vec![drifted_entry()]);
        let patch: RecordPatch = serde_json::from_str(r#"{"city":"Nagpur"}"#).unwrap();

        let updated = svc
            .update_record(RecordKind::Student, &RecordId::from("legacy-1".to_string()), patch)
            .await
            .unwrap();

        let Entry::Raw(value) = updated else {
            panic!("entry should stay raw");
        };
        assert_eq!(value["city"], "Nagpur");
        assert!(value["name"].is_null());
        assert!(value["updated_at"].is_string());
    }

    #[tokio::test]
    async fn should_return_not_found_and_leave_collection_unchanged() {
        let svc = make_service();
        svc.create_record(RecordKind::Student, input("asha@example.com"), provenance())
            .await
            .unwrap();
        let before = svc.list_records(RecordKind::Student).await.unwrap();
        let saves = svc.store.saves();

        let result = svc
            .update_record(
                RecordKind::Student,
                &RecordId::new(),
                RecordPatch::default(),
            )
            .await;

        assert!(matches!(result, Err(RosterError::NotFound(_))));
        assert_eq!(svc.list_records(RecordKind::Student).await.unwrap(), before);
        assert_eq!(svc.store.saves(), saves);
    }

    #[tokio::test]
    async fn should_not_find_student_id_in_tutor_collection() {
        let svc = make_service();
        let student = svc
            .create_record(RecordKind::Student, input("asha@example.com"), provenance())
            .await
            .unwrap();

        let result = svc
            .update_record(RecordKind::Tutor, &student.id, RecordPatch::default())
            .await;

        match result {
            Err(RosterError::NotFound(err)) => assert_eq!(err.entity, "Tutor"),
            other => panic!("expected not found, got {other:?}"),
        }
        assert!(svc.list_records(RecordKind::Tutor).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_collections_independent() {
        let svc = make_service();
        svc.create_record(RecordKind::Student, input("same@example.com"), provenance())
            .await
            .unwrap();

        assert_eq!(svc.list_records(RecordKind::Student).await.unwrap().len(), 1);
        assert!(svc.list_records(RecordKind::Tutor).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = RecordService::new(BrokenStore);

        let result = svc
            .create_record(RecordKind::Tutor, input("t@example.com"), provenance())
            .await;

        match result {
            Err(RosterError::Storage(err)) => assert_eq!(err.to_string(), "disk full"),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_every_concurrent_create() {
        let svc = Arc::new(make_service());

        let handles: Vec<_> = (0..25)
            .map(|i| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move {
                    svc.create_record(
                        RecordKind::Student,
                        input(&format!("s{i}@example.com")),
                        provenance(),
                    )
                    .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(svc.list_records(RecordKind::Student).await.unwrap().len(), 25);
    }
}
