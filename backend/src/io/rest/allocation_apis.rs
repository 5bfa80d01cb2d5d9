//! # REST API for Allocation Management
//!
//! Endpoints for creating, moving, deleting and listing vehicle allocations.
//! Each route is registered with and without a trailing slash.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::{error, info};

use crate::io::rest::error::ApiError;
use crate::io::rest::extract::{ValidatedJson, ValidatedQuery};
use crate::io::rest::mappers::AllocationMapper;
use crate::AppState;
use shared::{AllocationFilter, CreateAllocationRequest, MessageResponse, UpdateAllocationRequest};

/// Create a router for allocation related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/allocations", get(list_allocations).post(create_allocation))
        .route("/allocations/", get(list_allocations).post(create_allocation))
        .route(
            "/allocations/:allocation_id",
            put(update_allocation).delete(delete_allocation),
        )
}

/// Create a new allocation
pub async fn create_allocation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAllocationRequest>,
) -> impl IntoResponse {
    info!("POST /allocations - request: {:?}", request);

    let command = AllocationMapper::to_create_command(request);
    match state.allocation_service.create_allocation(command).await {
        Ok(allocation) => {
            (StatusCode::CREATED, Json(AllocationMapper::to_dto(allocation))).into_response()
        }
        Err(e) => {
            error!("Failed to create allocation: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Move an allocation to another date
pub async fn update_allocation(
    State(state): State<AppState>,
    Path(allocation_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateAllocationRequest>,
) -> impl IntoResponse {
    info!("PUT /allocations/{} - request: {:?}", allocation_id, request);

    let command = AllocationMapper::to_update_command(request);
    match state.allocation_service.update_allocation(&allocation_id, command).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Allocation updated successfully.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update allocation {}: {}", allocation_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Delete an allocation
pub async fn delete_allocation(
    State(state): State<AppState>,
    Path(allocation_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /allocations/{}", allocation_id);

    match state.allocation_service.delete_allocation(&allocation_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Allocation deleted successfully.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete allocation {}: {}", allocation_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// List allocations, optionally filtered by employee, vehicle and date
pub async fn list_allocations(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<AllocationFilter>,
) -> impl IntoResponse {
    info!("GET /allocations - filter: {:?}", filter);

    let query = AllocationMapper::to_list_query(filter);
    match state.allocation_service.list_allocations(query).await {
        Ok(allocations) => {
            (StatusCode::OK, Json(AllocationMapper::to_dto_list(allocations))).into_response()
        }
        Err(e) => {
            error!("Failed to list allocations: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
