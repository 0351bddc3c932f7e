use dto::access_type::{AccessTypeDto, CreateAccessTypeDto, UpdateAccessTypeDto};
use dto::page::PageDto;
use leptos::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError};
use crate::listing::ListQuery;

// -- REST facade, used when `AppConfig::mock_access_types` is off ----------

pub async fn get_access_types(
    api: &ApiClient,
    query: ListQuery,
) -> Result<PageDto<AccessTypeDto>, ApiError> {
    api.get(&format!("/user_access_type?{}", query.query_string()))
        .await?
        .into_payload()
}

/// Unpaginated list for the PBL file forms' dropdown.
pub async fn get_access_type_options(api: &ApiClient) -> Result<Vec<AccessTypeDto>, ApiError> {
    #[derive(Deserialize)]
    struct Payload {
        types: Vec<AccessTypeDto>,
    }

    let payload: Payload = api.get("/user_access_type/list").await?.into_payload()?;
    Ok(payload.types)
}

pub async fn create_access_type(
    api: &ApiClient,
    dto: &CreateAccessTypeDto,
) -> Result<(), ApiError> {
    api.post("/user_access_type/create", dto).await?.into_unit()
}

pub async fn update_access_type(
    api: &ApiClient,
    dto: &UpdateAccessTypeDto,
) -> Result<(), ApiError> {
    api.put("/user_access_type/update", dto).await?.into_unit()
}

pub async fn delete_access_type(api: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    api.delete(&format!("/user_access_type/delete/{id}"))
        .await?
        .into_unit()
}

// -- In-memory store, the shipped default ----------------------------------

/// Context-provided store backing the access-type page while the backend
/// integration is pending. Mutations edit the vector behind a short
/// simulated latency so the page exercises the same loading states as the
/// REST path.
#[derive(Clone, Copy)]
pub struct AccessTypeStore(RwSignal<Vec<AccessTypeDto>>);

impl AccessTypeStore {
    pub fn seeded() -> Self {
        AccessTypeStore(RwSignal::new(seed_rows()))
    }
}

fn seed_rows() -> Vec<AccessTypeDto> {
    [
        ("Administrator", "Full console access including user management"),
        ("School Lead", "Manages educators and files for one school"),
        ("Educator", "Reads curriculum files assigned to their grades"),
        ("Content Author", "Uploads and maintains PBL files"),
        ("Reviewer", "Read-only access with annotation rights"),
        ("Read Only", "Browse-only access to published files"),
    ]
    .into_iter()
    .map(|(name, description)| AccessTypeDto {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

async fn simulate_latency() {
    gloo_timers::future::TimeoutFuture::new(400).await;
}

fn paginate(all: Vec<AccessTypeDto>, query: &ListQuery) -> PageDto<AccessTypeDto> {
    let needle = query.search.to_lowercase();
    let matched: Vec<_> = all
        .into_iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect();

    let total = matched.len();
    let size = query.size.max(1) as usize;
    let content = matched
        .into_iter()
        .skip(query.page as usize * size)
        .take(size)
        .collect();

    PageDto {
        content,
        total_pages: total.div_ceil(size) as u32,
        total_elements: total as u64,
    }
}

pub async fn mock_get_access_types(
    store: AccessTypeStore,
    query: ListQuery,
) -> Result<PageDto<AccessTypeDto>, ApiError> {
    simulate_latency().await;
    Ok(paginate(store.0.get_untracked(), &query))
}

pub async fn mock_create_access_type(
    store: AccessTypeStore,
    dto: CreateAccessTypeDto,
) -> Result<(), ApiError> {
    simulate_latency().await;
    store.0.update(|rows| {
        rows.push(AccessTypeDto {
            id: Uuid::new_v4(),
            name: dto.name,
            description: dto.description,
        });
    });
    Ok(())
}

pub async fn mock_update_access_type(
    store: AccessTypeStore,
    dto: UpdateAccessTypeDto,
) -> Result<(), ApiError> {
    simulate_latency().await;
    let mut found = false;
    store.0.update(|rows| {
        if let Some(row) = rows.iter_mut().find(|r| r.id == dto.id) {
            row.name = dto.name.clone();
            row.description = dto.description.clone();
            found = true;
        }
    });
    if found {
        Ok(())
    } else {
        Err(ApiError::Backend(String::from("Access type no longer exists")))
    }
}

pub async fn mock_delete_access_type(
    store: AccessTypeStore,
    id: Uuid,
) -> Result<(), ApiError> {
    simulate_latency().await;
    store.0.update(|rows| rows.retain(|r| r.id != id));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn query(page: u32, size: u32, search: &str) -> ListQuery {
        ListQuery {
            page,
            size,
            search: search.to_string(),
        }
    }

    #[test]
    fn mock_paging_matches_the_wire_shape() {
        let page = paginate(seed_rows(), &query(0, 5, ""));
        assert!(page.content.len() == 5);
        assert!(page.total_pages == 2);
        assert!(page.total_elements == 6);

        let last = paginate(seed_rows(), &query(1, 5, ""));
        assert!(last.content.len() == 1);
    }

    #[test]
    fn mock_search_scans_name_and_description() {
        let by_name = paginate(seed_rows(), &query(0, 10, "reviewer"));
        assert!(by_name.total_elements == 1);

        let by_description = paginate(seed_rows(), &query(0, 10, "read-only"));
        assert!(by_description.total_elements == 1);

        let nothing = paginate(seed_rows(), &query(0, 10, "superuser"));
        assert!(nothing.content.is_empty());
        assert!(nothing.total_pages == 0);
    }
}
