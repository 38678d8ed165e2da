//! Storage of notes.
use crate::errors::NoteStoreError;
use crate::note::Note;
use futures::future::BoxFuture;

pub mod export;
mod in_memory;
pub mod search;

pub use in_memory::{InMemoryStore, NotesInner};
pub use search::SearchRequest;

pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// An abstraction over a shared, ordered collection of notes.
///
/// Notes are addressed by their position in insertion order.
/// Positions shift down by one after a delete, so a position observed by one
/// caller may point at a different note once another caller has mutated the store.
pub trait NoteStore {
    /// Append a note to the end of the store.
    ///
    /// Leading and trailing whitespace is trimmed.
    /// Text that trims to nothing is rejected with [`NoteStoreError::EmptyNote`].
    /// A read-only store rejects every call with [`NoteStoreError::ReadOnly`].
    fn append_note<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), NoteStoreError>>;
    /// Find notes whose text contains the query, ignoring case.
    ///
    /// An empty query returns every note.
    /// Matches are returned in store order.
    fn search<'a>(
        &'a self,
        query: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<Vec<Note>, NoteStoreError>>;
    /// Delete the note at a position.
    ///
    /// A read-only store rejects every call with [`NoteStoreError::ReadOnly`].
    fn delete_note(&self, index: usize) -> BoxFuture<Result<(), NoteStoreError>>;
    /// All notes in store order, for structured serialization.
    fn export_notes(&self) -> BoxFuture<Result<Vec<Note>, NoteStoreError>>;
    /// All notes in store order, rendered as CSV.
    ///
    /// See [`export::notes_to_csv`] for the layout.
    fn export_csv(&self) -> BoxFuture<Result<String, NoteStoreError>>;
    /// Number of notes currently stored.
    fn len(&self) -> BoxFuture<usize>;
    /// Whether mutations are disabled.
    fn is_read_only(&self) -> bool;
}
