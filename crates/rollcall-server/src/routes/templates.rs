//! Template management routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rollcall_store::{NameListTemplate, TemplateFilter, TemplateId, TemplateInput, TemplateUpdate};
use tracing::{debug, info};

use crate::{AppState, error::Result, models::OperationResponse};

/// Create template routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route(
            "/{id}",
            get(get_template).put(update_template).delete(delete_template),
        )
}

/// List templates with optional category and name-search filters
async fn list_templates(
    State(state): State<AppState>,
    Query(filter): Query<TemplateFilter>,
) -> Json<Vec<NameListTemplate>> {
    debug!(?filter, "listing templates");
    Json(state.store.list(&filter).await)
}

/// Get a single template by id
async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NameListTemplate>> {
    debug!(%id, "getting template");
    let template = state.store.get(&TemplateId::from(id)).await?;
    Ok(Json(template))
}

/// Create a new template
async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<TemplateInput>,
) -> Result<impl IntoResponse> {
    info!(name = %input.name, "creating template");
    let template = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Replace a template's fields
async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<TemplateUpdate>,
) -> Result<Json<OperationResponse>> {
    info!(%id, "updating template");
    state.store.update(&TemplateId::from(id), &update).await?;
    Ok(Json(OperationResponse::new("template updated")))
}

/// Delete a template
async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OperationResponse>> {
    info!(%id, "deleting template");
    state.store.delete(&TemplateId::from(id)).await?;
    Ok(Json(OperationResponse::new("template deleted")))
}
