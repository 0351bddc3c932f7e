//! Shared state for the paginated, searchable list pages. Every entity page
//! drives the same machine; the Leptos wiring lives in
//! `components::paginated`.

pub const PAGE_SIZES: [u32; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// One-based page state as the UI sees it. The committed search term is kept
/// separate from the live input: typing never fetches, submitting does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    pub page: u32,
    pub size: u32,
    pub applied_search: String,
    pub version: u32,
}

impl Default for ListState {
    fn default() -> Self {
        ListState {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            applied_search: String::new(),
            version: 0,
        }
    }
}

impl ListState {
    pub fn go_to(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size;
        self.page = 1;
    }

    pub fn submit_search(&mut self, input: &str) {
        self.applied_search = input.to_string();
        self.page = 1;
    }

    /// Re-fetch the current page after a mutation.
    pub fn bump(&mut self) {
        self.version += 1;
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page - 1,
            size: self.size,
            search: self.applied_search.clone(),
        }
    }
}

/// What actually goes on the wire. The backend is zero-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub search: String,
}

impl ListQuery {
    pub fn query_string(&self) -> String {
        format!("page={}&size={}&search={}", self.page, self.size, self.search)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Gap,
}

/// Page-number strip with a sliding window around the current page. Ellipsis
/// entries are non-interactive.
pub fn page_entries(current: u32, total: u32) -> Vec<PageEntry> {
    use PageEntry::{Gap, Page};

    if total <= 4 {
        return (1..=total).map(Page).collect();
    }
    if current <= 2 {
        vec![Page(1), Page(2), Page(3), Gap, Page(total)]
    } else if current >= total - 1 {
        vec![Page(1), Gap, Page(total - 2), Page(total - 1), Page(total)]
    } else {
        vec![
            Page(1),
            Gap,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Gap,
            Page(total),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::PageEntry::{Gap, Page};
    use super::*;

    #[test]
    fn size_change_resets_to_first_page() {
        let mut state = ListState::default();
        state.go_to(4);
        state.set_size(20);

        assert!(state.page == 1);
        assert!(state.size == 20);
    }

    #[test]
    fn search_submission_resets_to_first_page() {
        let mut state = ListState::default();
        state.go_to(7);
        state.submit_search("Horizon");

        assert!(state.page == 1);
        assert!(state.applied_search == "Horizon");
    }

    #[test]
    fn version_bump_keeps_the_current_page() {
        let mut state = ListState::default();
        state.go_to(3);
        state.bump();

        assert!(state.page == 3);
        assert!(state.version == 1);
    }

    #[test]
    fn wire_query_is_zero_based() {
        // School list loads with defaults, then "Horizon" is submitted.
        let mut state = ListState::default();
        assert!(state.query().query_string() == "page=0&size=5&search=");

        state.go_to(3);
        state.submit_search("Horizon");
        assert!(state.page == 1);
        assert!(state.query().query_string() == "page=0&size=5&search=Horizon");
    }

    #[test]
    fn short_lists_show_every_page() {
        assert!(page_entries(1, 1) == vec![Page(1)]);
        assert!(page_entries(3, 4) == vec![Page(1), Page(2), Page(3), Page(4)]);
        assert!(page_entries(2, 0).is_empty());
    }

    #[test]
    fn window_slides_around_the_current_page() {
        assert!(
            page_entries(5, 10)
                == vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[test]
    fn window_collapses_at_the_edges() {
        let head = vec![Page(1), Page(2), Page(3), Gap, Page(10)];
        assert!(page_entries(1, 10) == head);
        assert!(page_entries(2, 10) == head);

        let tail = vec![Page(1), Gap, Page(8), Page(9), Page(10)];
        assert!(page_entries(9, 10) == tail);
        assert!(page_entries(10, 10) == tail);
    }
}
