use dto::access_type::AccessTypeDto;
use dto::pbl_file::{GradeDto, PblFileMetaDto, ThemeDto};
use leptos::either::EitherOf3;
use leptos::html;
use leptos::prelude::*;
use leptos::web_sys::File;

use crate::api::ApiClient;
use crate::components::dropdown::Dropdown;
use crate::components::form::FieldError;
use crate::components::loader::Loader;
use crate::components::modal::use_modal;
use crate::components::modals::{picked, read_upload};
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::icons::close::CloseIcon;
use crate::services::access_type::get_access_type_options;
use crate::services::pbl_file::create_pbl_file;
use crate::services::reference::{get_grades, get_themes};
use crate::validation::{is_image, is_pdf, validate_title, FieldErrors};

/// Upload validation: classification complete, the document a PDF and the
/// thumbnail an image. The size limits in the helper copy are not enforced.
fn validate_new_file(
    name: &str,
    grade: Option<&GradeDto>,
    theme: Option<&ThemeDto>,
    access_type: Option<&AccessTypeDto>,
    document_mime: Option<&str>,
    image_mime: Option<&str>,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("name", validate_title(name));
    if grade.is_none() {
        errors.set("grade", "Select a grade");
    }
    if theme.is_none() {
        errors.set("theme", "Select a theme");
    }
    if access_type.is_none() {
        errors.set("access_type", "Select an access type");
    }
    match document_mime {
        None => errors.set("file", "Choose a PDF document"),
        Some(mime) if !is_pdf(mime) => errors.set("file", "The document must be a PDF"),
        _ => {}
    }
    match image_mime {
        None => errors.set("image", "Choose a thumbnail image"),
        Some(mime) if !is_image(mime) => errors.set("image", "The thumbnail must be an image"),
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[component]
pub fn AddPblFileModal(on_saved: impl Fn() + Send + Sync + Copy + 'static) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let grades_load = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move { get_grades(&api).await }
        }
    });
    let themes_load = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move { get_themes(&api).await }
        }
    });
    let types_load = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move { get_access_type_options(&api).await }
        }
    });
    let fired = StoredValue::new(false);
    Effect::new(move || {
        if !fired.get_value() {
            fired.set_value(true);
            grades_load.dispatch(());
            themes_load.dispatch(());
            types_load.dispatch(());
        }
    });

    view! {
        {move || {
            let grades = grades_load.value().get();
            let themes = themes_load.value().get();
            let types = types_load.value().get();
            match (grades, themes, types) {
                (Some(Ok(grades)), Some(Ok(themes)), Some(Ok(types))) => {
                    EitherOf3::A(view! { <InnerAddPblFileModal grades themes types on_saved /> })
                }
                (Some(Err(e)), _, _) | (_, Some(Err(e)), _) | (_, _, Some(Err(e))) => {
                    EitherOf3::B(
                        view! {
                            <div class="text-red-400 p-2">
                                {format!("Failed to load reference data: {e}")}
                            </div>
                        },
                    )
                }
                _ => EitherOf3::C(view! { <Loader /> }),
            }
        }}
    }
}

#[component]
fn InnerAddPblFileModal(
    grades: Vec<GradeDto>,
    themes: Vec<ThemeDto>,
    types: Vec<AccessTypeDto>,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let (name, set_name) = signal(String::new());
    let (grade, set_grade) = signal(None::<GradeDto>);
    let (theme, set_theme) = signal(None::<ThemeDto>);
    let (access_type, set_access_type) = signal(None::<AccessTypeDto>);
    let (errors, set_errors) = signal(FieldErrors::default());

    let document_ref: NodeRef<html::Input> = NodeRef::new();
    let image_ref: NodeRef<html::Input> = NodeRef::new();
    let (document_name, set_document_name) = signal(None::<String>);
    let (image_name, set_image_name) = signal(None::<String>);

    // The input carries raw `File` handles, so the whole action stays local.
    let save = Action::new_unsync_local({
        let api = api.clone();
        move |input: &(PblFileMetaDto, File, File)| {
            let api = api.clone();
            let (meta, document, image) = input.clone();
            async move {
                modal.set_busy(true);
                let result = async {
                    let document = read_upload(document).await?;
                    let image = read_upload(image).await?;
                    create_pbl_file(&api, &meta, document, image).await
                }
                .await;
                modal.set_busy(false);
                match result {
                    Ok(()) => {
                        snackbar.success("File uploaded");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => snackbar.error("Failed to upload file", e),
                }
            }
        }
    });

    let on_save = move |_| {
        let document = picked(document_ref);
        let image = picked(image_ref);
        let document_mime = document.as_ref().map(|f| f.type_());
        let image_mime = image.as_ref().map(|f| f.type_());

        match validate_new_file(
            &name(),
            grade().as_ref(),
            theme().as_ref(),
            access_type().as_ref(),
            document_mime.as_deref(),
            image_mime.as_deref(),
        ) {
            Ok(()) => {
                set_errors(FieldErrors::default());
                let (Some(grade), Some(theme), Some(access_type)) =
                    (grade(), theme(), access_type())
                else {
                    return;
                };
                let (Some(document), Some(image)) = (document, image) else {
                    return;
                };
                let meta = PblFileMetaDto {
                    name: name().trim().to_string(),
                    grade_id: grade.id,
                    theme_id: theme.id,
                    access_type_id: access_type.id,
                };
                save.dispatch((meta, document, image));
            }
            Err(found) => set_errors(found),
        }
    };

    view! {
        <div class="flex flex-row items-center gap-2">
            <h2 class="text-lg flex-1 text-center">Upload PBL file</h2>
            <button class="btn" disabled=move || modal.busy() on:click=move |_| modal.request_close()>
                <CloseIcon />
            </button>
        </div>
        <div class="flex flex-col gap-2">
            <label for="name">Name</label>
            <input id="name" class="input" bind:value=(name, set_name) />
            <FieldError errors field="name" />

            <label for="grade">Grade</label>
            <Dropdown
                name="grade"
                options=move || grades.clone()
                key=|g: &GradeDto| g.id
                label=|g: &GradeDto| g.name.clone()
                on_select=move |g| set_grade(Some(g))
            />
            <FieldError errors field="grade" />

            <label for="theme">Theme</label>
            <Dropdown
                name="theme"
                options=move || themes.clone()
                key=|t: &ThemeDto| t.id
                label=|t: &ThemeDto| t.name.clone()
                on_select=move |t| set_theme(Some(t))
            />
            <FieldError errors field="theme" />

            <label for="access_type">Access type</label>
            <Dropdown
                name="access_type"
                options=move || types.clone()
                key=|t: &AccessTypeDto| t.id
                label=|t: &AccessTypeDto| t.name.clone()
                on_select=move |t| set_access_type(Some(t))
            />
            <FieldError errors field="access_type" />

            <label for="file">Document</label>
            <input
                id="file"
                type="file"
                accept="application/pdf"
                node_ref=document_ref
                on:change=move |_| set_document_name(picked(document_ref).map(|f| f.name()))
            />
            <span class="text-sm text-gray-400">
                {move || document_name().unwrap_or_else(|| String::from("PDF, up to 10MB"))}
            </span>
            <FieldError errors field="file" />

            <label for="image">Thumbnail</label>
            <input
                id="image"
                type="file"
                accept="image/*"
                node_ref=image_ref
                on:change=move |_| set_image_name(picked(image_ref).map(|f| f.name()))
            />
            <span class="text-sm text-gray-400">
                {move || image_name().unwrap_or_else(|| String::from("PNG or JPG, up to 5MB"))}
            </span>
            <FieldError errors field="image" />

            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| modal.request_close()
                    disabled=move || modal.busy()
                >
                    Cancel
                </button>
                <button class="btn save" on:click=on_save disabled=move || modal.busy()>
                    Upload
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    fn grade() -> GradeDto {
        GradeDto {
            id: Uuid::new_v4(),
            name: "Grade 6".into(),
        }
    }

    fn theme() -> ThemeDto {
        ThemeDto {
            id: Uuid::new_v4(),
            name: "Sustainability".into(),
        }
    }

    fn access_type() -> AccessTypeDto {
        AccessTypeDto {
            id: Uuid::new_v4(),
            name: "Educator".into(),
            description: String::new(),
        }
    }

    #[test]
    fn complete_upload_passes() {
        let (g, t, a) = (grade(), theme(), access_type());
        let result = validate_new_file(
            "Water Cycle Project",
            Some(&g),
            Some(&t),
            Some(&a),
            Some("application/pdf"),
            Some("image/png"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn both_uploads_are_required() {
        let (g, t, a) = (grade(), theme(), access_type());
        let errors =
            validate_new_file("Water Cycle Project", Some(&g), Some(&t), Some(&a), None, None)
                .unwrap_err();

        assert!(errors.get("file").is_some());
        assert!(errors.get("image").is_some());
    }

    #[test]
    fn only_the_mime_type_is_enforced() {
        let (g, t, a) = (grade(), theme(), access_type());
        let errors = validate_new_file(
            "Water Cycle Project",
            Some(&g),
            Some(&t),
            Some(&a),
            Some("application/msword"),
            Some("application/pdf"),
        )
        .unwrap_err();

        assert!(errors.get("file").is_some());
        assert!(errors.get("image").is_some());
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn missing_classification_blocks_the_upload() {
        let errors = validate_new_file(
            "Water Cycle Project",
            None,
            None,
            None,
            Some("application/pdf"),
            Some("image/jpeg"),
        )
        .unwrap_err();

        assert!(errors.get("grade").is_some());
        assert!(errors.get("theme").is_some());
        assert!(errors.get("access_type").is_some());
    }
}
