use dto::educator::{EducatorInfoDto, UpdateEducatorDto};
use dto::school::SchoolOptionDto;
use leptos::either::EitherOf3;
use leptos::prelude::*;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::dropdown::Dropdown;
use crate::components::form::FieldError;
use crate::components::loader::Loader;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::icons::close::CloseIcon;
use crate::services::educator::{get_educator_info, update_educator};
use crate::services::school::get_school_options;
use crate::validation::{
    restrict_alphanumeric, restrict_letters, restrict_phone, validate_email, validate_login_id,
    validate_name, validate_phone, FieldErrors, COUNTRIES,
};

/// Same mapping as the create form, but with the permissive email rule and
/// the wider login-id bound this form shipped with.
fn build_update_dto(
    id: Uuid,
    first_name: &str,
    last_name: &str,
    school: Option<&SchoolOptionDto>,
    login_id: &str,
    email_id: &str,
    country: &str,
    phone: &str,
) -> Result<UpdateEducatorDto, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("first_name", validate_name(first_name));
    errors.check("last_name", validate_name(last_name));
    if school.is_none() {
        errors.set("school", "Select a school");
    }
    errors.check("login_id", validate_login_id(login_id, 100));
    errors.check("email_id", validate_email(email_id));
    errors.check("phone", validate_phone(country, phone));

    let Some(school) = school else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateEducatorDto {
        id,
        name: format!("{} {}", first_name.trim(), last_name.trim()),
        school_id: school.id,
        login_id: login_id.to_string(),
        email_id: email_id.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
    })
}

#[component]
pub fn EditEducatorModal(
    educator_id: Uuid,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let schools_load = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move { get_school_options(&api).await }
        }
    });
    let info_load = Action::new_unsync({
        let api = api.clone();
        move |id: &Uuid| {
            let api = api.clone();
            let id = *id;
            async move { get_educator_info(&api, id).await }
        }
    });

    let schools_fired = StoredValue::new(false);
    Effect::new(move || {
        if !schools_fired.get_value() {
            schools_fired.set_value(true);
            schools_load.dispatch(());
        }
    });

    // The detail response only carries the school name, so the dropdown's
    // options have to be in hand before it is fetched and cross-referenced.
    // The guard keeps the fetch from re-firing on later re-renders.
    let info_fired = StoredValue::new(false);
    Effect::new(move || {
        if matches!(schools_load.value().get(), Some(Ok(_))) && !info_fired.get_value() {
            info_fired.set_value(true);
            info_load.dispatch(educator_id);
        }
    });

    view! {
        {move || {
            let schools = schools_load.value().get();
            let info = info_load.value().get();
            match (schools, info) {
                (Some(Ok(schools)), Some(Ok(info))) => {
                    EitherOf3::A(view! { <InnerEditEducatorModal schools info on_saved /> })
                }
                (Some(Err(e)), _) | (_, Some(Err(e))) => {
                    EitherOf3::B(
                        view! {
                            <div class="text-red-400 p-2">
                                {format!("Failed to load educator: {e}")}
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
fn InnerEditEducatorModal(
    schools: Vec<SchoolOptionDto>,
    info: EducatorInfoDto,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let (initial_first, initial_last) = match info.name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (info.name.clone(), String::new()),
    };
    let initial_school = schools
        .iter()
        .find(|s| s.name == info.school_name)
        .cloned();

    let (first_name, set_first_name) = signal(initial_first);
    let (last_name, set_last_name) = signal(initial_last);
    let (school, set_school) = signal(initial_school);
    let (login_id, set_login_id) = signal(info.login_id.clone());
    let (email, set_email) = signal(info.email_id.clone());
    let (country, set_country) = signal(info.country.clone().unwrap_or_else(|| String::from("IN")));
    let (phone, set_phone) = signal(info.phone.clone().unwrap_or_default());
    let (errors, set_errors) = signal(FieldErrors::default());

    let educator_id = info.id;

    let save = Action::new_unsync({
        let api = api.clone();
        move |dto: &UpdateEducatorDto| {
            let api = api.clone();
            let dto = dto.clone();
            async move {
                modal.set_busy(true);
                match update_educator(&api, &dto).await {
                    Ok(()) => {
                        modal.set_busy(false);
                        snackbar.success("Educator updated");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => {
                        modal.set_busy(false);
                        snackbar.error("Failed to update educator", e);
                    }
                }
            }
        }
    });

    let on_save = move |_| {
        match build_update_dto(
            educator_id,
            &first_name(),
            &last_name(),
            school().as_ref(),
            &login_id(),
            &email(),
            &country(),
            &phone(),
        ) {
            Ok(dto) => {
                set_errors(FieldErrors::default());
                save.dispatch(dto);
            }
            Err(found) => set_errors(found),
        }
    };

    view! {
        <div class="flex flex-row items-center gap-2">
            <h2 class="text-lg flex-1 text-center">Edit educator</h2>
            <button class="btn" disabled=move || modal.busy() on:click=move |_| modal.request_close()>
                <CloseIcon />
            </button>
        </div>
        <div class="flex flex-col gap-2">
            <div class="flex flex-row gap-2">
                <div class="flex flex-col flex-1">
                    <label for="first_name">First name</label>
                    <input
                        id="first_name"
                        class="input"
                        prop:value=first_name
                        on:input=move |e| set_first_name(restrict_letters(&event_target_value(&e)))
                    />
                    <FieldError errors field="first_name" />
                </div>
                <div class="flex flex-col flex-1">
                    <label for="last_name">Last name</label>
                    <input
                        id="last_name"
                        class="input"
                        prop:value=last_name
                        on:input=move |e| set_last_name(restrict_letters(&event_target_value(&e)))
                    />
                    <FieldError errors field="last_name" />
                </div>
            </div>

            <label for="school">School</label>
            <Dropdown
                name="school"
                options=move || schools.clone()
                key=|s: &SchoolOptionDto| s.id
                label=|s: &SchoolOptionDto| s.name.clone()
                on_select=move |s| set_school(Some(s))
                initial=info.school_name.clone()
            />
            <FieldError errors field="school" />

            <label for="login_id">Login id</label>
            <input
                id="login_id"
                class="input"
                prop:value=login_id
                on:input=move |e| set_login_id(restrict_alphanumeric(&event_target_value(&e)))
            />
            <FieldError errors field="login_id" />

            <label for="email_id">Email</label>
            <input id="email_id" class="input" bind:value=(email, set_email) />
            <FieldError errors field="email_id" />

            <div class="flex flex-row gap-2">
                <div class="flex flex-col">
                    <label for="country">Country</label>
                    <select
                        id="country"
                        class="input"
                        on:change=move |e| set_country(event_target_value(&e))
                    >
                        {COUNTRIES
                            .into_iter()
                            .map(|(code, name)| {
                                view! {
                                    <option value=code selected=move || country() == code>
                                        {name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="flex flex-col flex-1">
                    <label for="phone">Phone (optional)</label>
                    <input
                        id="phone"
                        class="input"
                        prop:value=phone
                        on:input=move |e| set_phone(restrict_phone(&event_target_value(&e)))
                    />
                    <FieldError errors field="phone" />
                </div>
            </div>

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

    fn school() -> SchoolOptionDto {
        SchoolOptionDto {
            id: Uuid::new_v4(),
            name: "Horizon Public School".into(),
        }
    }

    #[test]
    fn edit_form_accepts_what_the_create_form_rejects() {
        // Uppercase local part and an unlisted TLD pass the permissive rule,
        // and the login id may run to 100 characters here.
        let school = school();
        let login = "a".repeat(60);
        let dto = build_update_dto(
            Uuid::new_v4(),
            "Asha",
            "Rao",
            Some(&school),
            &login,
            "Asha@school.io",
            "IN",
            "",
        )
        .unwrap();

        assert!(dto.login_id == login);
    }

    #[test]
    fn edit_form_still_requires_a_parseable_email() {
        let school = school();
        let err = build_update_dto(
            Uuid::new_v4(),
            "Asha",
            "Rao",
            Some(&school),
            "asharao",
            "not-an-email",
            "IN",
            "",
        )
        .unwrap_err();

        assert!(err.get("email_id").is_some());
    }
}
