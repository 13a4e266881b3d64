use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::Html,
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use tracing::{info, instrument};

use crate::{error::AppError, state::AppState, uploads};

use super::render;
use super::repo::User;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
}

#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = User::list_all(&state.db).await?;
    Ok(Html(render::render_page(&users)))
}

/// POST /submit (multipart): fields `name`, `email` and one file field
/// `photo`. Writes the file first, inserts the row second, then redirects
/// the browser back to the listing.
#[instrument(skip(state, mp))]
pub async fn submit(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<(StatusCode, HeaderMap), AppError> {
    let mut name: Option<String> = None;
    let mut email: Option<String> = None;
    let mut photo: Option<(String, Bytes)> = None;

    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref() {
            Some("name") => name = Some(field.text().await.map_err(bad_field)?),
            Some("email") => email = Some(field.text().await.map_err(bad_field)?),
            Some("photo") => {
                let original = field.file_name().unwrap_or("upload").to_string();
                let data = field.bytes().await.map_err(bad_field)?;
                photo = Some((original, data));
            }
            _ => {}
        }
    }

    let name = name
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("name is required".into()))?;
    let email = email
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation("email is required".into()))?;
    let (original, data) = photo
        .filter(|(_, data)| !data.is_empty())
        .ok_or_else(|| AppError::Validation("photo is required".into()))?;

    let filename = uploads::store_photo(&state.config.upload_dir, &original, data).await?;
    let user = User::insert(&state.db, &name, &email, &filename).await?;
    info!(user_id = user.id, photo = %filename, "user registered");

    let mut headers = HeaderMap::new();
    headers.insert(LOCATION, HeaderValue::from_static("/"));
    Ok((StatusCode::FOUND, headers))
}

fn bad_field(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("unreadable multipart field: {e}"))
}
