use dto::educator::{CreateEducatorDto, EducatorDto, EducatorInfoDto, UpdateEducatorDto};
use dto::page::PageDto;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::listing::ListQuery;

pub async fn get_educators(
    api: &ApiClient,
    query: ListQuery,
) -> Result<PageDto<EducatorDto>, ApiError> {
    api.get(&format!("/teacher?{}", query.query_string()))
        .await?
        .into_payload()
}

/// The list row only carries summary fields; edit and view need this.
pub async fn get_educator_info(api: &ApiClient, id: Uuid) -> Result<EducatorInfoDto, ApiError> {
    api.get(&format!("/teacher/info/{id}")).await?.into_payload()
}

pub async fn create_educator(api: &ApiClient, dto: &CreateEducatorDto) -> Result<(), ApiError> {
    api.post("/teacher/create", dto).await?.into_unit()
}

pub async fn update_educator(api: &ApiClient, dto: &UpdateEducatorDto) -> Result<(), ApiError> {
    api.put("/teacher/update", dto).await?.into_unit()
}

/// Soft delete; the backend keeps the record and flips its status.
pub async fn delete_educator(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.put_empty(&format!("/teacher/delete/{id}"))
        .await?
        .into_unit()
}
