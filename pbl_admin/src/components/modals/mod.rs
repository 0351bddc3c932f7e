use leptos::html;
use leptos::prelude::*;
use leptos::web_sys::File;

use crate::api::ApiError;
use crate::services::pbl_file::FileUpload;

pub mod access_type_form;
pub mod add_educator;
pub mod add_pbl_file;
pub mod add_school;
pub mod delete_access_type;
pub mod delete_educator;
pub mod delete_pbl_file;
pub mod delete_school;
pub mod edit_educator;
pub mod edit_pbl_file;
pub mod edit_school;
pub mod unregister;
pub mod view_educator;
pub mod view_school;
pub mod view_unregistered;

/// First file picked in an `<input type="file">`, if any.
pub(crate) fn picked(input: NodeRef<html::Input>) -> Option<File> {
    input
        .get_untracked()
        .and_then(|el| el.files())
        .and_then(|files| files.item(0))
}

pub(crate) async fn read_upload(file: File) -> Result<FileUpload, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::Transport(String::from("could not read the selected file")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload {
        name: file.name(),
        mime: file.type_(),
        bytes,
    })
}
