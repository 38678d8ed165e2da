//! cinotes: the notes store behind the CI/CD demo service.
pub mod errors;
pub mod note;
pub mod notestore;

pub use note::Note;
pub use notestore::{InMemoryStore, NoteStore, NotesInner};
