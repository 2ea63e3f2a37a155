use rocket::{State, get, post, http::{ContentType, Status}, form::Form, serde::json::{Json, Value, json}};
use rocket::response::content::RawHtml;
use tracing::{debug, error, instrument, Span};
use record_shared::{models::*, validation::validate_record};
use crate::{
    error::ApiError,
    pages,
    store::RecordStore,
    utils::parse_record_id,
};

async fn store_record(store: &RecordStore, payload: &RecordPayload) -> Result<Record, ApiError> {
    let record = validate_record(payload)?;
    let stored = store.create(&record).await?;
    Span::current().record("record_id", stored.id);
    debug!("Created record for {}", stored.username);
    Ok(stored)
}

/// A body without a Content-Type is read as JSON; any other media type is
/// rejected before anything is stored.
#[instrument(skip(store, payload), fields(record_id))]
#[post("/records", data = "<payload>")]
pub async fn create_record(
    store: &State<RecordStore>,
    content_type: Option<&ContentType>,
    payload: Json<RecordPayload>,
) -> Result<Json<Record>, ApiError> {
    if let Some(ct) = content_type.filter(|ct| !ct.is_json()) {
        return Err(ApiError::UnsupportedContentType(ct.to_string()));
    }
    store_record(store, &payload).await.map(Json)
}

#[instrument(skip(store))]
#[get("/records/<id>")]
pub async fn get_record(store: &State<RecordStore>, id: &str) -> Result<Json<Record>, ApiError> {
    let id = parse_record_id(id)?;
    Ok(Json(store.get(id).await?))
}

#[get("/")]
pub async fn index() -> RawHtml<String> {
    pages::form_page()
}

#[get("/form")]
pub async fn show_form() -> RawHtml<String> {
    pages::form_page()
}

#[instrument(skip(store, submission), fields(record_id))]
#[post("/submit", data = "<submission>")]
pub async fn submit_form(
    store: &State<RecordStore>,
    submission: Form<RecordForm>,
) -> Result<RawHtml<String>, (Status, RawHtml<String>)> {
    let payload = RecordPayload::from(submission.into_inner());
    match store_record(store, &payload).await {
        Ok(record) => Ok(pages::result_page(&record)),
        Err(e) => Err((e.status(), pages::error_page(&e))),
    }
}

#[get("/health")]
pub async fn health(store: &State<RecordStore>) -> (Status, Json<Value>) {
    match store.ping().await {
        Ok(()) => (Status::Ok, Json(json!({ "status": "ok" }))),
        Err(e) => {
            error!("Health check failed: {}", e);
            (Status::ServiceUnavailable, Json(json!({ "status": "unavailable" })))
        }
    }
}
