use dto::page::PageDto;
use dto::unregistered::{BulkUnregisterDto, UnregisteredEducatorDto, UnregisteredInfoDto};
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::listing::ListQuery;

pub async fn get_unregistered(
    api: &ApiClient,
    query: ListQuery,
) -> Result<PageDto<UnregisteredEducatorDto>, ApiError> {
    api.get(&format!("/teacher/unregistered?{}", query.query_string()))
        .await?
        .into_payload()
}

pub async fn get_unregistered_info(
    api: &ApiClient,
    id: Uuid,
) -> Result<UnregisteredInfoDto, ApiError> {
    api.get(&format!("/teacher/unregistered/{id}"))
        .await?
        .into_payload()
}

pub async fn unregister(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("/teacher/unregistered-delete/{id}"))
        .await?
        .into_unit()
}

pub async fn unregister_all(api: &ApiClient, ids: Vec<Uuid>) -> Result<(), ApiError> {
    api.delete_with_body("/teacher/unregistered-delete-all", &BulkUnregisterDto { ids })
        .await?
        .into_unit()
}
