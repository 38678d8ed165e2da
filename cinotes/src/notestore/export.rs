//! CSV rendering of notes.
use crate::errors::NoteStoreError;
use crate::Note;

pub static CSV_HEADER: [&str; 2] = ["text", "timestamp_iso"];

/// Render notes as CSV, one row per note after a header row.
///
/// Quoting follows RFC 4180, which is what the `csv` writer does by default.
pub fn notes_to_csv<'a, I>(notes: I) -> Result<String, NoteStoreError>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(CSV_HEADER)?;
    for note in notes {
        let timestamp = note.created_at_iso();
        writer.write_record([note.get_text(), timestamp.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| NoteStoreError::IOError(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
