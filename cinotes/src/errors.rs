use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note text cannot be empty")]
    EmptyNote,
    #[error("note `{0}` doesn't exist, the store holds {1} notes")]
    NoteNotExist(usize, usize),
    #[error("notes are read-only, adding and deleting notes is disabled")]
    ReadOnly,
    #[error("io error")]
    IOError(#[from] std::io::Error),
    #[error("CSV error")]
    CSVError(#[from] csv::Error),
    #[error("CSV output is not valid UTF-8")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
