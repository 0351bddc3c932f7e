use serde::{Deserialize, Serialize};

/// Paginated payload merged into every list response envelope. The backend
/// wraps rows in Spring-style camelCase counters while entity fields stay
/// snake_case.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PageDto<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    #[serde(rename = "totalElements", default)]
    pub total_elements: u64,
}

impl<T> Default for PageDto<T> {
    fn default() -> Self {
        PageDto {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn page_counters_use_camel_case_on_the_wire() {
        let page: PageDto<String> = serde_json::from_value(serde_json::json!({
            "content": ["a", "b"],
            "totalPages": 3,
            "totalElements": 11,
        }))
        .unwrap();

        assert!(page.content.len() == 2);
        assert!(page.total_pages == 3);
        assert!(page.total_elements == 11);
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let page: PageDto<String> = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(page.content.is_empty());
        assert!(page.total_pages == 0);
        assert!(page.total_elements == 0);
    }
}
