use dto::access_type::{AccessTypeDto, CreateAccessTypeDto, UpdateAccessTypeDto};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::form::FieldError;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::config::AppConfig;
use crate::icons::close::CloseIcon;
use crate::services::access_type::{
    create_access_type, mock_create_access_type, mock_update_access_type, update_access_type,
    AccessTypeStore,
};
use crate::validation::{validate_required, validate_title, FieldErrors};

fn validate_access_type(name: &str, description: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("name", validate_title(name));
    errors.check("description", validate_required(description, 200));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Create and edit in one form; `initial` switches the mode. Whether the
/// mutation goes to the in-memory store or the REST service is decided by
/// `AppConfig::mock_access_types`, never by dead code paths.
#[component]
pub fn AccessTypeFormModal(
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
    initial: Option<AccessTypeDto>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<AppConfig>();
    let store = expect_context::<AccessTypeStore>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let mock = config.mock_access_types;
    let update_id = initial.as_ref().map(|i| i.id);

    let (name, set_name) = signal(initial.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        initial
            .as_ref()
            .map(|i| i.description.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(FieldErrors::default());

    let save = Action::new_unsync({
        let api = api.clone();
        move |input: &(String, String)| {
            let api = api.clone();
            let (name, description) = input.clone();
            async move {
                modal.set_busy(true);
                let result = match update_id {
                    Some(id) => {
                        let dto = UpdateAccessTypeDto {
                            id,
                            name,
                            description,
                        };
                        if mock {
                            mock_update_access_type(store, dto).await
                        } else {
                            update_access_type(&api, &dto).await
                        }
                    }
                    None => {
                        let dto = CreateAccessTypeDto { name, description };
                        if mock {
                            mock_create_access_type(store, dto).await
                        } else {
                            create_access_type(&api, &dto).await
                        }
                    }
                };
                modal.set_busy(false);
                match result {
                    Ok(()) => {
                        snackbar.success(if update_id.is_some() {
                            "Access type updated"
                        } else {
                            "Access type added"
                        });
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => snackbar.error("Failed to save access type", e),
                }
            }
        }
    });

    let on_save = move |_| match validate_access_type(&name(), &description()) {
        Ok(()) => {
            set_errors(FieldErrors::default());
            save.dispatch((name(), description().trim().to_string()));
        }
        Err(found) => set_errors(found),
    };

    view! {
        <div class="flex flex-row items-center gap-2">
            <h2 class="text-lg flex-1 text-center">
                {if update_id.is_none() { "Add access type" } else { "Edit access type" }}
            </h2>
            <button class="btn" disabled=move || modal.busy() on:click=move |_| modal.request_close()>
                <CloseIcon />
            </button>
        </div>
        <div class="flex flex-col gap-2">
            <label for="name">Name</label>
            <input id="name" class="input" bind:value=(name, set_name) />
            <FieldError errors field="name" />

            <label for="description">Description</label>
            <textarea
                id="description"
                class="input"
                rows=3
                bind:value=(description, set_description)
            ></textarea>
            <FieldError errors field="description" />

            <div class="flex flex-row gap-2 justify-end">
                <button
                    class="btn cancel"
                    on:click=move |_| modal.request_close()
                    disabled=move || modal.busy()
                >
                    Cancel
                </button>
                <button class="btn save" on:click=on_save disabled=move || modal.busy()>
                    {if update_id.is_some() { "Save" } else { "Add" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn name_and_description_are_both_required() {
        let errors = validate_access_type("", "").unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("description").is_some());

        assert!(validate_access_type("Read Only", "Browse-only access").is_ok());
    }
}
