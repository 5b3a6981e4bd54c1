use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    response::Json,
    Extension,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{
    CreatePerkReq, DeleteAck, PerkDto, PerkEnvelope, TitleQuery, UpdatePerkTitleReq,
};
use crate::api::rest::error::{map_domain_error, ApiError, ErrorBody};
use crate::domain::service::Service;

fn to_dtos(perks: Vec<crate::contract::model::Perk>) -> Json<Vec<PerkDto>> {
    Json(perks.into_iter().map(PerkDto::from).collect())
}

/// List all perks, newest first. With a `title` key in the query string this
/// behaves exactly like `GET /perks/filter`.
#[utoipa::path(
    get,
    path = "/perks",
    tag = "perks",
    operation_id = "perks.list_perks",
    params(TitleQuery),
    responses(
        (status = 200, description = "Perks ordered by createdAt descending", body = [PerkDto]),
        (status = 400, description = "Empty title filter", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn list_perks(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<TitleQuery>, QueryRejection>,
) -> Result<Json<Vec<PerkDto>>, ApiError> {
    let Query(query) = query?;

    let result = match query.title.as_deref() {
        Some(title) => {
            info!("Listing perks filtered by title: {:?}", title);
            svc.filter_perks(Some(title)).await
        }
        None => {
            info!("Listing all perks");
            svc.list_perks().await
        }
    };

    match result {
        Ok(perks) => Ok(to_dtos(perks)),
        Err(e) => {
            error!("Failed to list perks: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Perks whose title exactly equals `title`
#[utoipa::path(
    get,
    path = "/perks/filter",
    tag = "perks",
    operation_id = "perks.filter_perks",
    params(TitleQuery),
    responses(
        (status = 200, description = "Matching perks, possibly empty", body = [PerkDto]),
        (status = 400, description = "Missing or empty title", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn filter_perks(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<TitleQuery>, QueryRejection>,
) -> Result<Json<Vec<PerkDto>>, ApiError> {
    let Query(query) = query?;
    info!("Filtering perks by title: {:?}", query.title);

    match svc.filter_perks(query.title.as_deref()).await {
        Ok(perks) => Ok(to_dtos(perks)),
        Err(e) => {
            error!("Failed to filter perks: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Get a specific perk by ID
#[utoipa::path(
    get,
    path = "/perks/{id}",
    tag = "perks",
    operation_id = "perks.get_perk",
    params(("id" = Uuid, Path, description = "Perk UUID")),
    responses(
        (status = 200, description = "Perk found", body = PerkEnvelope),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn get_perk(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<PerkEnvelope>, ApiError> {
    let Path(id) = id?;
    info!("Getting perk with id: {}", id);

    match svc.get_perk(id).await {
        Ok(perk) => Ok(Json(PerkEnvelope::from(perk))),
        Err(e) => {
            error!("Failed to get perk {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Create a new perk
#[utoipa::path(
    post,
    path = "/perks",
    tag = "perks",
    operation_id = "perks.create_perk",
    request_body = CreatePerkReq,
    responses(
        (status = 201, description = "Created perk", body = PerkEnvelope),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 409, description = "Conflict", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn create_perk(
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<CreatePerkReq>, JsonRejection>,
) -> Result<(StatusCode, Json<PerkEnvelope>), ApiError> {
    let Json(req_body) = body?;
    info!("Creating perk: {:?}", req_body);

    match svc.create_perk(req_body.into()).await {
        Ok(perk) => Ok((StatusCode::CREATED, Json(PerkEnvelope::from(perk)))),
        Err(e) => {
            error!("Failed to create perk: {}", e);
            Err(map_domain_error(&e))
        }
    }
}

/// Change the title of an existing perk; other fields are untouched
#[utoipa::path(
    method(patch, put),
    path = "/perks/{id}",
    tag = "perks",
    operation_id = "perks.update_perk_title",
    params(("id" = Uuid, Path, description = "Perk UUID")),
    request_body = UpdatePerkTitleReq,
    responses(
        (status = 200, description = "Updated perk", body = PerkEnvelope),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 409, description = "Conflict", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn update_perk_title(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdatePerkTitleReq>, JsonRejection>,
) -> Result<Json<PerkEnvelope>, ApiError> {
    let Path(id) = id?;
    let Json(req_body) = body?;
    info!("Updating perk {} with: {:?}", id, req_body);

    match svc.update_title(id, req_body.title).await {
        Ok(perk) => Ok(Json(PerkEnvelope::from(perk))),
        Err(e) => {
            error!("Failed to update perk {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}

/// Delete a perk by ID
#[utoipa::path(
    delete,
    path = "/perks/{id}",
    tag = "perks",
    operation_id = "perks.delete_perk",
    params(("id" = Uuid, Path, description = "Perk UUID")),
    responses(
        (status = 200, description = "Perk deleted", body = DeleteAck),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not Found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody)
    )
)]
pub async fn delete_perk(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DeleteAck>, ApiError> {
    let Path(id) = id?;
    info!("Deleting perk: {}", id);

    match svc.delete_perk(id).await {
        Ok(()) => Ok(Json(DeleteAck { ok: true })),
        Err(e) => {
            error!("Failed to delete perk {}: {}", id, e);
            Err(map_domain_error(&e))
        }
    }
}
