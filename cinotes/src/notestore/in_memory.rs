//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::notestore::export::notes_to_csv;
use crate::notestore::search::SearchRequest;
use crate::{Note, NoteStore};
use futures::future::BoxFuture;
use tokio::sync::RwLock;

/// The ordered sequence of notes.
///
/// There is no persistence layer: the contents live as long as the process.
/// Mutation goes through `&mut self` and nothing here locks,
/// so sharing one between threads is the owner's job (see [`InMemoryStore`]).
#[derive(Debug, Default)]
pub struct NotesInner {
    notes: Vec<Note>,
}

impl NotesInner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn append_note(&mut self, text: &str) -> Result<(), NoteStoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NoteStoreError::EmptyNote);
        }
        self.notes.push(Note::now(text.to_owned()));
        Ok(())
    }

    pub fn search(&self, query: &SearchRequest) -> Vec<Note> {
        match query.needle() {
            None => self.notes.clone(),
            Some(needle) => self
                .notes
                .iter()
                .filter(|note| note.contains_lowercase(&needle))
                .cloned()
                .collect(),
        }
    }

    pub fn delete_note(&mut self, index: usize) -> Result<(), NoteStoreError> {
        if index >= self.notes.len() {
            return Err(NoteStoreError::NoteNotExist(index, self.notes.len()));
        }
        self.notes.remove(index);
        Ok(())
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn export_csv(&self) -> Result<String, NoteStoreError> {
        notes_to_csv(&self.notes)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// In-memory storage shared between request handlers.
///
/// Appends and deletes take the write lock, everything else the read lock,
/// so each operation applies atomically to the sequence.
///
/// A read-only store rejects appends and deletes before taking the lock
/// or looking at the arguments.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ims: RwLock<NotesInner>,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// A store that rejects every append and delete.
    pub fn read_only() -> Self {
        InMemoryStore {
            read_only: true,
            ..Default::default()
        }
    }

    fn check_writable(&self) -> Result<(), NoteStoreError> {
        if self.read_only {
            Err(NoteStoreError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

impl From<NotesInner> for InMemoryStore {
    fn from(inner: NotesInner) -> Self {
        InMemoryStore {
            ims: RwLock::new(inner),
            read_only: false,
        }
    }
}

impl NoteStore for InMemoryStore {
    fn append_note<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), NoteStoreError>> {
        Box::pin(async move {
            self.check_writable()?;
            self.ims.write().await.append_note(text)
        })
    }

    fn search<'a>(
        &'a self,
        query: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move { Ok(self.ims.read().await.search(query)) })
    }

    fn delete_note(&self, index: usize) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move {
            self.check_writable()?;
            self.ims.write().await.delete_note(index)
        })
    }

    fn export_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move { Ok(self.ims.read().await.notes().to_vec()) })
    }

    fn export_csv(&self) -> BoxFuture<Result<String, NoteStoreError>> {
        Box::pin(async move { self.ims.read().await.export_csv() })
    }

    fn len(&self) -> BoxFuture<usize> {
        Box::pin(async move { self.ims.read().await.len() })
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notestore::tests as common_tests;

    #[tokio::test]
    async fn append_trims() {
        let store = InMemoryStore::new();
        common_tests::append_trims(store).await;
    }

    #[tokio::test]
    async fn append_empty() {
        let store = InMemoryStore::new();
        common_tests::append_empty(store).await;
    }

    #[tokio::test]
    async fn search_case_insensitive() {
        let store = InMemoryStore::new();
        common_tests::search_case_insensitive(store).await;
    }

    #[tokio::test]
    async fn delete_shifts_positions() {
        let store = InMemoryStore::new();
        common_tests::delete_shifts_positions(store).await;
    }

    #[tokio::test]
    async fn export_matches_store() {
        let store = InMemoryStore::new();
        common_tests::export_matches_store(store).await;
    }

    #[tokio::test]
    async fn buy_milk_scenario() {
        let store = InMemoryStore::new();
        common_tests::buy_milk_scenario(store).await;
    }

    #[tokio::test]
    async fn read_only() {
        let store = InMemoryStore::read_only();
        common_tests::read_only(store).await;
    }

    #[tokio::test]
    async fn read_only_checked_first() {
        let store = InMemoryStore::read_only();
        assert!(matches!(
            store.append_note("   ").await,
            Err(NoteStoreError::ReadOnly)
        ));
        assert!(matches!(
            store.delete_note(7).await,
            Err(NoteStoreError::ReadOnly)
        ));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn from_inner_is_writable() {
        let mut inner = NotesInner::new();
        inner.append_note("kept").unwrap();
        let store = InMemoryStore::from(inner);
        assert!(!store.is_read_only());
        store.append_note("added").await.unwrap();
        assert_eq!(store.len().await, 2);
    }

    #[test]
    fn delete_out_of_range() {
        let mut inner = NotesInner::new();
        inner.append_note("only").unwrap();
        assert!(matches!(
            inner.delete_note(1),
            Err(NoteStoreError::NoteNotExist(1, 1))
        ));
        assert_eq!(inner.len(), 1);
        inner.delete_note(0).unwrap();
        assert!(matches!(
            inner.delete_note(0),
            Err(NoteStoreError::NoteNotExist(0, 0))
        ));
    }

    #[tokio::test]
    async fn concurrent_appends() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let mut handles = vec![];
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append_note(&format!("note {}", i)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.len().await, 16);
    }

    #[tokio::test]
    async fn csv_export() {
        let store = InMemoryStore::new();
        store.append_note("milk, eggs").await.unwrap();
        let csv = store.export_csv().await.unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("text,timestamp_iso"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("\"milk, eggs\","));
        assert!(row.ends_with('Z'));
        assert_eq!(lines.next(), None);
    }
}
