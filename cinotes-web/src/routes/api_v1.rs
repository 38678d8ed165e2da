use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use cinotes::errors::NoteStoreError;
use cinotes::notestore::{BoxedNoteStore, SearchRequest};
use serde::Deserialize;
use serde_json::json;

pub const CSV_FILENAME: &str = "notes.csv";

fn notestore_error_handler(e: &NoteStoreError) -> HttpResponse {
    let body = json!({
        "status": "error",
        "message": e.to_string(),
    });
    match e {
        NoteStoreError::EmptyNote => {
            warn!("Rejected a note with no text");
            HttpResponse::BadRequest().json(body)
        }
        NoteStoreError::NoteNotExist(_, _) => HttpResponse::NotFound().json(body),
        NoteStoreError::ReadOnly => HttpResponse::Forbidden().json(body),
        NoteStoreError::IOError(_)
        | NoteStoreError::CSVError(_)
        | NoteStoreError::Utf8Error(_) => {
            error!("Note store internal error {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn acknowledge(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "message": message,
    }))
}

#[derive(Deserialize, Debug)]
struct SearchQuery {
    query: Option<String>,
}

#[get("/note")]
#[instrument(skip(store, search))]
async fn search(
    store: web::Data<BoxedNoteStore>,
    search: web::Query<SearchQuery>,
) -> impl Responder {
    let request = SearchRequest::from(search.into_inner().query);
    match store.search(&request).await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => notestore_error_handler(&e),
    }
}

#[derive(Deserialize)]
struct NotePostData {
    text: String,
}

/// Rejects mutations on a read-only store before the request is decoded.
fn read_only_guard(store: &BoxedNoteStore) -> Option<HttpResponse> {
    if store.is_read_only() {
        Some(notestore_error_handler(&NoteStoreError::ReadOnly))
    } else {
        None
    }
}

#[post("/note")]
#[instrument(skip(store, body))]
async fn new_note(store: web::Data<BoxedNoteStore>, body: web::Bytes) -> impl Responder {
    if let Some(response) = read_only_guard(&store) {
        return response;
    }
    let note: NotePostData = match serde_json::from_slice(&body) {
        Ok(note) => note,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({
                "status": "error",
                "message": e.to_string(),
            }))
        }
    };
    match store.append_note(&note.text).await {
        Ok(()) => {
            let count = store.len().await;
            info!(count, "Note added");
            acknowledge("Note added")
        }
        Err(e) => notestore_error_handler(&e),
    }
}

#[delete("/note/{index}")]
#[instrument(
    skip(store, params),
    fields(
        index = %params.0
    )
)]
async fn delete_note(
    store: web::Data<BoxedNoteStore>,
    params: web::Path<(String,)>,
) -> impl Responder {
    if let Some(response) = read_only_guard(&store) {
        return response;
    }
    let (index,) = params.into_inner();
    // Anything that isn't a position can't name a stored note
    let index: usize = match index.parse() {
        Ok(index) => index,
        Err(_) => {
            return HttpResponse::NotFound().json(json!({
                "status": "error",
                "message": format!("note `{}` doesn't exist", index),
            }))
        }
    };
    match store.delete_note(index).await {
        Ok(()) => {
            let count = store.len().await;
            info!(count, "Note deleted");
            acknowledge("Note deleted")
        }
        Err(e) => notestore_error_handler(&e),
    }
}

#[get("/export/json")]
#[instrument(skip(store))]
async fn export_json(store: web::Data<BoxedNoteStore>) -> impl Responder {
    match store.export_notes().await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => notestore_error_handler(&e),
    }
}

#[get("/export/csv")]
#[instrument(skip(store))]
async fn export_csv(store: web::Data<BoxedNoteStore>) -> impl Responder {
    match store.export_csv().await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(CSV_FILENAME.to_owned())],
            })
            .body(csv),
        Err(e) => notestore_error_handler(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search)
        .service(new_note)
        .service(delete_note)
        .service(export_json)
        .service(export_csv);
}
