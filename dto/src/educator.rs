use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary row returned by the paginated educator list. Full contact fields
/// require a second request to the info endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EducatorDto {
    pub id: Uuid,
    pub name: String,
    pub school_name: String,
    pub status: String,
}

/// Full record from `GET /teacher/info/{id}`. The school is denormalized to
/// its name only; callers match it back against the school options list when
/// they need an id.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EducatorInfoDto {
    pub id: Uuid,
    pub name: String,
    pub school_name: String,
    pub login_id: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateEducatorDto {
    pub name: String,
    pub school_id: Uuid,
    pub login_id: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateEducatorDto {
    pub id: Uuid,
    pub name: String,
    pub school_id: Uuid,
    pub login_id: String,
    pub email_id: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_payload_uses_backend_field_names() {
        let dto = CreateEducatorDto {
            name: "Asha Rao".into(),
            school_id: Uuid::new_v4(),
            login_id: "asharao".into(),
            email_id: "asha@school.edu".into(),
            phone: None,
        };
        let value = serde_json::to_value(&dto).unwrap();
        let keys = value.as_object().unwrap();

        assert!(keys.contains_key("email_id"));
        assert!(!keys.contains_key("email"));
        assert!(keys.contains_key("school_id"));
        assert!(keys.contains_key("login_id"));
    }
}
