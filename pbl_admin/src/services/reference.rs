use dto::pbl_file::{GradeDto, ThemeDto};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};

pub async fn get_grades(api: &ApiClient) -> Result<Vec<GradeDto>, ApiError> {
    #[derive(Deserialize)]
    struct Payload {
        grades: Vec<GradeDto>,
    }

    let payload: Payload = api.get("/grade/list").await?.into_payload()?;
    Ok(payload.grades)
}

pub async fn get_themes(api: &ApiClient) -> Result<Vec<ThemeDto>, ApiError> {
    #[derive(Deserialize)]
    struct Payload {
        themes: Vec<ThemeDto>,
    }

    let payload: Payload = api.get("/theme/list").await?.into_payload()?;
    Ok(payload.themes)
}
