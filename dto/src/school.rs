use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary row from the paginated school list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SchoolDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Full record from `GET /school/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SchoolInfoDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub pincode: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateSchoolDto {
    pub code: String,
    pub name: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub pincode: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateSchoolDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub pincode: Option<String>,
}

/// Slim shape served by `GET /school` for dropdowns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SchoolOptionDto {
    pub id: Uuid,
    pub name: String,
}
