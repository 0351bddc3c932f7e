use dto::school::{CreateSchoolDto, SchoolInfoDto, UpdateSchoolDto};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::form::FieldError;
use crate::components::modal::use_modal;
use crate::components::snackbar::{use_snackbar, Notifier};
use crate::icons::close::CloseIcon;
use crate::services::school::{create_school, update_school};
use crate::validation::{
    restrict_alphanumeric, restrict_digits, restrict_letters, restrict_phone, validate_email,
    validate_name, validate_phone, validate_pincode, validate_required, validate_school_code,
    FieldErrors, COUNTRIES,
};

/// One rule set for both create and update; the school forms never diverged
/// the way the educator ones did.
#[allow(clippy::too_many_arguments)]
fn build_school_dto(
    code: &str,
    name: &str,
    email_id: &str,
    country: &str,
    phone: &str,
    address_line1: &str,
    address_line2: &str,
    city: &str,
    state: &str,
    pincode: &str,
) -> Result<CreateSchoolDto, FieldErrors> {
    let mut errors = FieldErrors::default();
    errors.check("code", validate_school_code(code));
    errors.check("name", validate_name(name));
    errors.check("email_id", validate_email(email_id));
    errors.check("phone", validate_phone(country, phone));
    errors.check("address_line1", validate_required(address_line1, 100));
    errors.check("city", validate_name(city));
    errors.check("state", validate_name(state));
    errors.check("pincode", validate_pincode(pincode));

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CreateSchoolDto {
        code: code.to_string(),
        name: name.trim().to_string(),
        email_id: email_id.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        country: Some(country.to_string()),
        address_line1: address_line1.trim().to_string(),
        address_line2: (!address_line2.trim().is_empty()).then(|| address_line2.trim().to_string()),
        city: city.trim().to_string(),
        state: state.trim().to_string(),
        pincode: (!pincode.is_empty()).then(|| pincode.to_string()),
    })
}

/// Handles both create and edit; `initial` switches the mode, the same way
/// the educator list row opens this with the full record already fetched.
#[component]
pub fn AddSchoolModal(
    on_saved: impl Fn() + Send + Sync + Copy + 'static,
    initial: Option<SchoolInfoDto>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let snackbar = use_snackbar();
    let modal = use_modal();

    let update_id = initial.as_ref().map(|i| i.id);

    let (code, set_code) = signal(initial.as_ref().map(|i| i.code.clone()).unwrap_or_default());
    let (name, set_name) = signal(initial.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let (email, set_email) = signal(
        initial
            .as_ref()
            .map(|i| i.email_id.clone())
            .unwrap_or_default(),
    );
    let (country, set_country) = signal(
        initial
            .as_ref()
            .and_then(|i| i.country.clone())
            .unwrap_or_else(|| String::from("IN")),
    );
    let (phone, set_phone) = signal(
        initial
            .as_ref()
            .and_then(|i| i.phone.clone())
            .unwrap_or_default(),
    );
    let (address_line1, set_address_line1) = signal(
        initial
            .as_ref()
            .map(|i| i.address_line1.clone())
            .unwrap_or_default(),
    );
    let (address_line2, set_address_line2) = signal(
        initial
            .as_ref()
            .and_then(|i| i.address_line2.clone())
            .unwrap_or_default(),
    );
    let (city, set_city) = signal(initial.as_ref().map(|i| i.city.clone()).unwrap_or_default());
    let (state, set_state) = signal(initial.as_ref().map(|i| i.state.clone()).unwrap_or_default());
    let (pincode, set_pincode) = signal(
        initial
            .as_ref()
            .and_then(|i| i.pincode.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(FieldErrors::default());

    let save = Action::new_unsync({
        let api = api.clone();
        move |dto: &CreateSchoolDto| {
            let api = api.clone();
            let dto = dto.clone();
            async move {
                modal.set_busy(true);
                let result = if let Some(id) = update_id {
                    update_school(
                        &api,
                        &UpdateSchoolDto {
                            id,
                            code: dto.code,
                            name: dto.name,
                            email_id: dto.email_id,
                            phone: dto.phone,
                            country: dto.country,
                            address_line1: dto.address_line1,
                            address_line2: dto.address_line2,
                            city: dto.city,
                            state: dto.state,
                            pincode: dto.pincode,
                        },
                    )
                    .await
                } else {
                    create_school(&api, &dto).await
                };
                modal.set_busy(false);
                match result {
                    Ok(()) => {
                        snackbar.success(if update_id.is_some() {
                            "School updated"
                        } else {
                            "School added"
                        });
                        on_saved();
                        modal.request_close();
                    }
                    Err(e) => snackbar.error("Failed to save school", e),
                }
            }
        }
    });

    let on_save = move |_| {
        match build_school_dto(
            &code(),
            &name(),
            &email(),
            &country(),
            &phone(),
            &address_line1(),
            &address_line2(),
            &city(),
            &state(),
            &pincode(),
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
            <h2 class="text-lg flex-1 text-center">
                {if update_id.is_none() { "Add school" } else { "Edit school" }}
            </h2>
            <button class="btn" disabled=move || modal.busy() on:click=move |_| modal.request_close()>
                <CloseIcon />
            </button>
        </div>
        <div class="flex flex-col gap-2">
            <div class="flex flex-row gap-2">
                <div class="flex flex-col">
                    <label for="code">Code</label>
                    <input
                        id="code"
                        class="input"
                        prop:value=code
                        on:input=move |e| set_code(restrict_alphanumeric(&event_target_value(&e)))
                    />
                    <FieldError errors field="code" />
                </div>
                <div class="flex flex-col flex-1">
                    <label for="name">Name</label>
                    <input
                        id="name"
                        class="input"
                        prop:value=name
                        on:input=move |e| set_name(restrict_letters(&event_target_value(&e)))
                    />
                    <FieldError errors field="name" />
                </div>
            </div>

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

            <label for="address_line1">Address line 1</label>
            <input id="address_line1" class="input" bind:value=(address_line1, set_address_line1) />
            <FieldError errors field="address_line1" />

            <label for="address_line2">Address line 2 (optional)</label>
            <input id="address_line2" class="input" bind:value=(address_line2, set_address_line2) />

            <div class="flex flex-row gap-2">
                <div class="flex flex-col flex-1">
                    <label for="city">City</label>
                    <input
                        id="city"
                        class="input"
                        prop:value=city
                        on:input=move |e| set_city(restrict_letters(&event_target_value(&e)))
                    />
                    <FieldError errors field="city" />
                </div>
                <div class="flex flex-col flex-1">
                    <label for="state">State</label>
                    <input
                        id="state"
                        class="input"
                        prop:value=state
                        on:input=move |e| set_state(restrict_letters(&event_target_value(&e)))
                    />
                    <FieldError errors field="state" />
                </div>
                <div class="flex flex-col">
                    <label for="pincode">Pincode</label>
                    <input
                        id="pincode"
                        class="input"
                        prop:value=pincode
                        on:input=move |e| set_pincode(restrict_digits(&event_target_value(&e)))
                    />
                    <FieldError errors field="pincode" />
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
    fn optional_fields_are_sent_as_absent_when_blank() {
        let dto = build_school_dto(
            "HPS01",
            "Horizon Public School",
            "office@horizon.edu",
            "IN",
            "",
            "12 Lake Road",
            "",
            "Bengaluru",
            "Karnataka",
            "",
        )
        .unwrap();

        assert!(dto.phone.is_none());
        assert!(dto.address_line2.is_none());
        assert!(dto.pincode.is_none());
        assert!(dto.country.as_deref() == Some("IN"));
    }

    #[test]
    fn code_and_pincode_have_their_own_rules() {
        let err = build_school_dto(
            "H",
            "Horizon Public School",
            "office@horizon.edu",
            "IN",
            "",
            "12 Lake Road",
            "",
            "Bengaluru",
            "Karnataka",
            "12",
        )
        .unwrap_err();

        assert!(err.get("code").is_some());
        assert!(err.get("pincode").is_some());
        assert!(err.get("name").is_none());
    }

    #[test]
    fn school_email_uses_the_permissive_rule() {
        let dto = build_school_dto(
            "HPS01",
            "Horizon Public School",
            "Office@horizon.io",
            "IN",
            "",
            "12 Lake Road",
            "",
            "Bengaluru",
            "Karnataka",
            "560001",
        );

        assert!(dto.is_ok());
    }
}
