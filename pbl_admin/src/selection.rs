use std::collections::HashSet;

use uuid::Uuid;

/// Checkbox selection for the unregistered-educator table. Only rows on the
/// current page can ever be selected; the page clears it on navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<Uuid>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    Unchecked,
    Indeterminate,
    Checked,
}

impl Selection {
    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// The header checkbox toggles between nothing and the whole page.
    pub fn toggle_all(&mut self, page_ids: &[Uuid]) {
        if self.ids.is_empty() {
            self.ids = page_ids.iter().copied().collect();
        } else {
            self.ids.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn header_state(&self, page_ids: &[Uuid]) -> HeaderState {
        if self.ids.is_empty() || page_ids.is_empty() {
            HeaderState::Unchecked
        } else if page_ids.iter().all(|id| self.ids.contains(id))
            && self.ids.len() == page_ids.len()
        {
            HeaderState::Checked
        } else {
            HeaderState::Indeterminate
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn page(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn select_all_takes_the_whole_page() {
        let ids = page(6);
        let mut selection = Selection::default();
        selection.toggle_all(&ids);

        assert!(selection.len() == 6);
        assert!(selection.header_state(&ids) == HeaderState::Checked);
    }

    #[test]
    fn select_all_with_anything_selected_empties() {
        let ids = page(4);
        let mut selection = Selection::default();
        selection.toggle(ids[0]);
        selection.toggle_all(&ids);

        assert!(selection.is_empty());
        assert!(selection.header_state(&ids) == HeaderState::Unchecked);
    }

    #[test]
    fn partial_selection_is_indeterminate() {
        let ids = page(3);
        let mut selection = Selection::default();
        selection.toggle(ids[0]);
        selection.toggle(ids[2]);

        assert!(selection.header_state(&ids) == HeaderState::Indeterminate);
    }

    #[test]
    fn page_change_clears_regardless_of_size() {
        let ids = page(6);
        let mut selection = Selection::default();
        selection.toggle_all(&ids);
        selection.clear();

        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let id = Uuid::new_v4();
        let mut selection = Selection::default();
        selection.toggle(id);
        assert!(selection.contains(id));
        selection.toggle(id);
        assert!(!selection.contains(id));
    }
}
