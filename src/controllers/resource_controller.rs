//! HTTP handlers shared by every resource. Each one is instantiated per
//! service type when the routes are mounted, so `S` decides which resource a
//! request lands on.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{error::ServiceError, services::CrudService, AppState};

// POST /api/{resource}
pub async fn create<S, T>(
    State(service): State<Arc<S>>,
    Json(body): Json<T>,
) -> Result<Json<T>, ServiceError>
where
    S: CrudService<T, i64> + 'static,
    Arc<S>: FromRef<AppState>,
    T: Serialize + DeserializeOwned + Send + 'static,
{
    let created = service.create(body).await?;
    Ok(Json(created))
}

// GET /api/{resource}/:id
pub async fn read<S, T>(
    State(service): State<Arc<S>>,
    Path(id): Path<i64>,
) -> Result<Json<T>, ServiceError>
where
    S: CrudService<T, i64> + 'static,
    Arc<S>: FromRef<AppState>,
    T: Serialize + DeserializeOwned + Send + 'static,
{
    Ok(Json(service.read(id).await?))
}

// GET /api/{resource}
pub async fn read_all<S, T>(State(service): State<Arc<S>>) -> Result<Json<Vec<T>>, ServiceError>
where
    S: CrudService<T, i64> + 'static,
    Arc<S>: FromRef<AppState>,
    T: Serialize + DeserializeOwned + Send + 'static,
{
    Ok(Json(service.read_all().await?))
}

// PUT /api/{resource}/:id
pub async fn update<S, T>(
    State(service): State<Arc<S>>,
    Path(id): Path<i64>,
    Json(body): Json<T>,
) -> Result<Json<T>, ServiceError>
where
    S: CrudService<T, i64> + 'static,
    Arc<S>: FromRef<AppState>,
    T: Serialize + DeserializeOwned + Send + 'static,
{
    Ok(Json(service.update(id, body).await?))
}

// DELETE /api/{resource}/:id
pub async fn delete<S, T>(
    State(service): State<Arc<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError>
where
    S: CrudService<T, i64> + 'static,
    Arc<S>: FromRef<AppState>,
    T: Serialize + DeserializeOwned + Send + 'static,
{
    service.delete(id).await?;
    Ok(StatusCode::OK)
}
