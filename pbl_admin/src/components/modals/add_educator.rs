use dto::educator::CreateEducatorDto;
use dto::school::SchoolOptionDto;
use leptos::either::EitherOf3;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::dropdown::Dropdown;
use crate::components::form::FieldError;
use crate::components::loader::Loader;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::icons::close::CloseIcon;
use crate::services::educator::create_educator;
use crate::services::school::get_school_options;
use crate::validation::{
    restrict_alphanumeric, restrict_letters, restrict_phone, validate_email_strict,
    validate_login_id, validate_name, validate_phone, FieldErrors, COUNTRIES,
};

/// Validates the form and maps it onto the wire payload. The name travels as
/// one whitespace-joined field; the email key is `email_id`. A non-empty
/// error map means nothing may be sent.
fn build_create_dto(
    first_name: &str,
    last_name: &str,
    school: Option<&SchoolOptionDto>,
    login_id: &str,
    email_id: &str,
    country: &str,
    phone: &str,
) -> Result<CreateEducatorDto, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("first_name", validate_name(first_name));
    errors.check("last_name", validate_name(last_name));
    if school.is_none() {
        errors.set("school", "Select a school");
    }
    errors.check("login_id", validate_login_id(login_id, 30));
    errors.check("email_id", validate_email_strict(email_id));
    errors.check("phone", validate_phone(country, phone));

    let Some(school) = school else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CreateEducatorDto {
        name: format!("{} {}", first_name.trim(), last_name.trim()),
        school_id: school.id,
        login_id: login_id.to_string(),
        email_id: email_id.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
    })
}

#[component]
pub fn AddEducatorModal(on_saved: impl Fn() + Send + Sync + Copy + 'static) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let schools_load = Action::new_unsync({
        let api = api.clone();
        move |_: &()| {
            let api = api.clone();
            async move { get_school_options(&api).await }
        }
    });
    let fired = StoredValue::new(false);
    Effect::new(move || {
        if !fired.get_value() {
            fired.set_value(true);
            schools_load.dispatch(());
        }
    });

    view! {
        {move || match schools_load.value().get() {
            None => EitherOf3::A(view! { <Loader /> }),
            Some(Err(e)) => {
                EitherOf3::B(
                    view! {
                        <div class="text-red-400 p-2">{format!("Failed to load schools: {e}")}</div>
                    },
                )
            }
            Some(Ok(schools)) => EitherOf3::C(view! { <InnerAddEducatorModal schools on_saved /> }),
        }}
    }
}

#[component]
fn InnerAddEducatorModal(
    schools: Vec<SchoolOptionDto>,
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (school, set_school) = signal(None::<SchoolOptionDto>);
    let (login_id, set_login_id) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (country, set_country) = signal(String::from("IN"));
    let (phone, set_phone) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());

    let save = Action::new_unsync({
        let api = api.clone();
        move |dto: &CreateEducatorDto| {
            let api = api.clone();
            let dto = dto.clone();
            async move {
                modal.set_busy(true);
                match create_educator(&api, &dto).await {
                    Ok(()) => {
                        modal.set_busy(false);
                        snackbar.success("Educator added");
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => {
                        modal.set_busy(false);
                        snackbar.error("Failed to add educator", e);
                    }
                }
            }
        }
    });

    let on_save = move |_| {
        match build_create_dto(
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
            <h2 class="text-lg flex-1 text-center">Add educator</h2>
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
                    Add
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use uuid::Uuid;

    fn school() -> SchoolOptionDto {
        SchoolOptionDto {
            id: Uuid::new_v4(),
            name: "Horizon Public School".into(),
        }
    }

    #[test]
    fn valid_form_maps_onto_the_wire_payload() {
        let school = school();
        let dto = build_create_dto(
            "Asha",
            "Rao",
            Some(&school),
            "asharao",
            "asha@school.edu",
            "IN",
            "9876543210",
        )
        .unwrap();

        assert!(dto.name == "Asha Rao");
        assert!(dto.school_id == school.id);
        assert!(dto.phone.as_deref() == Some("9876543210"));

        let wire = serde_json::to_value(&dto).unwrap();
        assert!(wire.get("email_id").is_some());
        assert!(wire.get("email").is_none());
    }

    #[test]
    fn missing_required_fields_block_the_submit() {
        let err = build_create_dto("", "Rao", None, "asharao", "asha@school.edu", "IN", "")
            .unwrap_err();

        assert!(err.get("first_name").is_some());
        assert!(err.get("school").is_some());
        assert!(err.get("last_name").is_none());
    }

    #[test]
    fn create_form_applies_the_strict_email_rule() {
        let school = school();
        let err = build_create_dto(
            "Asha",
            "Rao",
            Some(&school),
            "asharao",
            "Asha@school.io",
            "IN",
            "",
        )
        .unwrap_err();

        assert!(err.get("email_id").is_some());
    }

    #[test]
    fn invalid_phone_blocks_the_submit() {
        let school = school();
        let err = build_create_dto(
            "Asha",
            "Rao",
            Some(&school),
            "asharao",
            "asha@school.edu",
            "IN",
            "12345",
        )
        .unwrap_err();

        assert!(err.get("phone").is_some());
    }

    #[test]
    fn empty_phone_is_sent_as_absent() {
        let school = school();
        let dto = build_create_dto(
            "Asha",
            "Rao",
            Some(&school),
            "asharao",
            "asha@school.edu",
            "IN",
            "",
        )
        .unwrap();

        assert!(dto.phone.is_none());
    }
}
