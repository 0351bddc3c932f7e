use dto::page::PageDto;
use dto::pbl_file::{PblFileDto, PblFileMetaDto, UpdatePblFileDto};
use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::listing::ListQuery;

/// A file pulled out of an `<input type="file">`, ready to become a
/// multipart part.
#[derive(Clone, Debug)]
pub struct FileUpload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    fn into_part(self) -> Result<Part, ApiError> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.name)
            .mime_str(&self.mime)?)
    }
}

pub async fn get_pbl_files(
    api: &ApiClient,
    query: ListQuery,
) -> Result<PageDto<PblFileDto>, ApiError> {
    api.get(&format!("/file/list?{}", query.query_string()))
        .await?
        .into_payload()
}

/// Multipart create: metadata fields plus the PDF and its thumbnail.
pub async fn create_pbl_file(
    api: &ApiClient,
    meta: &PblFileMetaDto,
    document: FileUpload,
    image: FileUpload,
) -> Result<(), ApiError> {
    let form = Form::new()
        .text("name", meta.name.clone())
        .text("grade_id", meta.grade_id.to_string())
        .text("theme_id", meta.theme_id.to_string())
        .text("access_type_id", meta.access_type_id.to_string())
        .part("file", document.into_part()?)
        .part("image", image.into_part()?);

    api.post_multipart("/file/upload", form).await?.into_unit()
}

/// Multipart update. Either upload may be omitted to keep the stored one;
/// `remove_image` asks the backend to drop the thumbnail instead.
pub async fn update_pbl_file(
    api: &ApiClient,
    meta: &UpdatePblFileDto,
    document: Option<FileUpload>,
    image: Option<FileUpload>,
) -> Result<(), ApiError> {
    let mut form = Form::new()
        .text("id", meta.id.to_string())
        .text("name", meta.name.clone())
        .text("grade_id", meta.grade_id.to_string())
        .text("theme_id", meta.theme_id.to_string())
        .text("access_type_id", meta.access_type_id.to_string())
        .text("remove_image", meta.remove_image.to_string());

    if let Some(document) = document {
        form = form.part("file", document.into_part()?);
    }
    if let Some(image) = image {
        form = form.part("image", image.into_part()?);
    }

    api.put_multipart("/file/update", form).await?.into_unit()
}

pub async fn delete_pbl_file(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("/file/delete/{id}")).await?.into_unit()
}
