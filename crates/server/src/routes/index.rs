use actix_files::NamedFile;
use actix_web::{get, web};
use std::sync::Arc;

use crate::state::AppState;

/// GET / - Serve the front-end page
#[get("/")]
pub async fn index(state: web::Data<Arc<AppState>>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(state.config.index_path()).await?)
}
