use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row from `GET /teacher/unregistered`. The id is required by both
/// unregister endpoints, so it is part of the row even though the rest of
/// the contact fields only arrive with the detail fetch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UnregisteredEducatorDto {
    pub id: Uuid,
    pub name: String,
    pub school_name: String,
    pub email_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UnregisteredInfoDto {
    pub id: Uuid,
    pub name: String,
    pub school_name: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of `DELETE /teacher/unregistered-delete-all`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BulkUnregisterDto {
    pub ids: Vec<Uuid>,
}
