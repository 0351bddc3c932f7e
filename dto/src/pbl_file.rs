use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row from `GET /file/list`. Classification references arrive denormalized
/// as names; edit forms match them back against the reference lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PblFileDto {
    pub id: Uuid,
    pub name: String,
    pub grade_name: String,
    pub theme_name: String,
    pub access_type_name: String,
    pub file_url: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Metadata fields of the multipart create request. The PDF and thumbnail
/// travel as separate parts.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PblFileMetaDto {
    pub name: String,
    pub grade_id: Uuid,
    pub theme_id: Uuid,
    pub access_type_id: Uuid,
}

/// Metadata fields of the multipart update request. `remove_image` tells the
/// backend to drop the stored thumbnail when no replacement part is sent.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdatePblFileDto {
    pub id: Uuid,
    pub name: String,
    pub grade_id: Uuid,
    pub theme_id: Uuid,
    pub access_type_id: Uuid,
    pub remove_image: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GradeDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ThemeDto {
    pub id: Uuid,
    pub name: String,
}
