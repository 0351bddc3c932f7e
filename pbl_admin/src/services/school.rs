use dto::page::PageDto;
use dto::school::{
    CreateSchoolDto, SchoolDto, SchoolInfoDto, SchoolOptionDto, UpdateSchoolDto,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::listing::ListQuery;

pub async fn get_schools(
    api: &ApiClient,
    query: ListQuery,
) -> Result<PageDto<SchoolDto>, ApiError> {
    api.get(&format!("/school/all?{}", query.query_string()))
        .await?
        .into_payload()
}

pub async fn get_school(api: &ApiClient, id: Uuid) -> Result<SchoolInfoDto, ApiError> {
    api.get(&format!("/school/{id}")).await?.into_payload()
}

/// Unpaginated id/name pairs for the educator forms' dropdown.
pub async fn get_school_options(api: &ApiClient) -> Result<Vec<SchoolOptionDto>, ApiError> {
    #[derive(Deserialize)]
    struct Payload {
        schools: Vec<SchoolOptionDto>,
    }

    let payload: Payload = api.get("/school").await?.into_payload()?;
    Ok(payload.schools)
}

pub async fn create_school(api: &ApiClient, dto: &CreateSchoolDto) -> Result<(), ApiError> {
    api.post("/school/create", dto).await?.into_unit()
}

pub async fn update_school(api: &ApiClient, dto: &UpdateSchoolDto) -> Result<(), ApiError> {
    api.put("/school/update", dto).await?.into_unit()
}

pub async fn delete_school(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.put_empty(&format!("/school/delete/{id}"))
        .await?
        .into_unit()
}
