use dto::access_type::AccessTypeDto;
use dto::pbl_file::{GradeDto, PblFileDto, ThemeDto, UpdatePblFileDto};
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
use crate::services::pbl_file::update_pbl_file;
use crate::services::reference::{get_grades, get_themes};
use crate::validation::{is_image, is_pdf, validate_title, FieldErrors};

/// Both uploads are optional on edit; whichever is present still has to be
/// the right kind of file.
fn validate_update(
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
    if let Some(mime) = document_mime {
        if !is_pdf(mime) {
            errors.set("file", "The document must be a PDF");
        }
    }
    if let Some(mime) = image_mime {
        if !is_image(mime) {
            errors.set("image", "The thumbnail must be an image");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[component]
pub fn EditPblFileModal(
    file: PblFileDto,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
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
        {
            let file = file.clone();
            move || {
                let grades = grades_load.value().get();
                let themes = themes_load.value().get();
                let types = types_load.value().get();
                match (grades, themes, types) {
                    (Some(Ok(grades)), Some(Ok(themes)), Some(Ok(types))) => {
                        EitherOf3::A(
                            view! {
                                <InnerEditPblFileModal
                                    file=file.clone()
                                    grades
                                    themes
                                    types
                                    on_saved
                                />
                            },
                        )
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
            }
        }
    }
}

#[component]
fn InnerEditPblFileModal(
    file: PblFileDto,
    grades: Vec<GradeDto>,
    themes: Vec<ThemeDto>,
    types: Vec<AccessTypeDto>,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    // The row carries denormalized names only; match them back against the
    // reference lists for the dropdowns' initial selections.
    let initial_grade = grades.iter().find(|g| g.name == file.grade_name).cloned();
    let initial_theme = themes.iter().find(|t| t.name == file.theme_name).cloned();
    let initial_type = types
        .iter()
        .find(|t| t.name == file.access_type_name)
        .cloned();

    let (name, set_name) = signal(file.name.clone());
    let (grade, set_grade) = signal(initial_grade);
    let (theme, set_theme) = signal(initial_theme);
    let (access_type, set_access_type) = signal(initial_type);
    let (remove_image, set_remove_image) = signal(false);
    let (errors, set_errors) = signal(FieldErrors::default());

    let document_ref: NodeRef<html::Input> = NodeRef::new();
    let image_ref: NodeRef<html::Input> = NodeRef::new();
    let (document_name, set_document_name) = signal(None::<String>);
    let (image_name, set_image_name) = signal(None::<String>);

    let file_id = file.id;
    let has_image = file.image_url.is_some();

    // The input carries raw `File` handles, so the whole action stays local.
    let save = Action::new_unsync_local({
        let api = api.clone();
        move |input: &(UpdatePblFileDto, Option<File>, Option<File>)| {
            let api = api.clone();
            let (meta, document, image) = input.clone();
            async move {
                modal.set_busy(true);
                let result = async {
                    let document = match document {
                        Some(file) => Some(read_upload(file).await?),
                        None => None,
                    };
                    let image = match image {
                        Some(file) => Some(read_upload(file).await?),
                        None => None,
                    };
                    update_pbl_file(&api, &meta, document, image).await
                }
                .await;
                modal.set_busy(false);
                match result {
                    Ok(()) => {
                        snackbar.success("File updated");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => snackbar.error("Failed to update file", e),
                }
            }
        }
    });

    let on_save = move |_| {
        let document = picked(document_ref);
        let image = picked(image_ref);
        let document_mime = document.as_ref().map(|f| f.type_());
        let image_mime = image.as_ref().map(|f| f.type_());

        match validate_update(
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
                let meta = UpdatePblFileDto {
                    id: file_id,
                    name: name().trim().to_string(),
                    grade_id: grade.id,
                    theme_id: theme.id,
                    access_type_id: access_type.id,
                    // A freshly picked image wins over the removal flag.
                    remove_image: remove_image() && image.is_none(),
                };
                save.dispatch((meta, document, image));
            }
            Err(found) => set_errors(found),
        }
    };

    view! {
        <div class="flex flex-row items-center gap-2">
            <h2 class="text-lg flex-1 text-center">Edit PBL file</h2>
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
                initial=file.grade_name.clone()
            />
            <FieldError errors field="grade" />

            <label for="theme">Theme</label>
            <Dropdown
                name="theme"
                options=move || themes.clone()
                key=|t: &ThemeDto| t.id
                label=|t: &ThemeDto| t.name.clone()
                on_select=move |t| set_theme(Some(t))
                initial=file.theme_name.clone()
            />
            <FieldError errors field="theme" />

            <label for="access_type">Access type</label>
            <Dropdown
                name="access_type"
                options=move || types.clone()
                key=|t: &AccessTypeDto| t.id
                label=|t: &AccessTypeDto| t.name.clone()
                on_select=move |t| set_access_type(Some(t))
                initial=file.access_type_name.clone()
            />
            <FieldError errors field="access_type" />

            <label for="file">Replace document (optional)</label>
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

            <label for="image">Replace thumbnail (optional)</label>
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

            {has_image
                .then(|| {
                    view! {
                        <label class="flex flex-row gap-1 items-center">
                            <input
                                type="checkbox"
                                prop:checked=remove_image
                                on:change=move |e| set_remove_image(event_target_checked(&e))
                            />
                            Remove current thumbnail
                        </label>
                    }
                })}

            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| modal.request_close()
                    disabled=move || modal.busy()
                >
                    Cancel
                </button>
                <button class="btn save" on:click=on_save disabled=move || modal.busy()>
                    Save
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    fn refs() -> (GradeDto, ThemeDto, AccessTypeDto) {
        (
            GradeDto {
                id: Uuid::new_v4(),
                name: "Grade 6".into(),
            },
            ThemeDto {
                id: Uuid::new_v4(),
                name: "Sustainability".into(),
            },
            AccessTypeDto {
                id: Uuid::new_v4(),
                name: "Educator".into(),
                description: String::new(),
            },
        )
    }

    #[test]
    fn uploads_are_optional_on_edit() {
        let (g, t, a) = refs();
        let result = validate_update("Water Cycle Project", Some(&g), Some(&t), Some(&a), None, None);
        assert!(result.is_ok());
    }

    #[test]
    fn a_present_replacement_is_still_type_checked() {
        let (g, t, a) = refs();
        let errors = validate_update(
            "Water Cycle Project",
            Some(&g),
            Some(&t),
            Some(&a),
            Some("image/png"),
            None,
        )
        .unwrap_err();

        assert!(errors.get("file").is_some());
    }
}
