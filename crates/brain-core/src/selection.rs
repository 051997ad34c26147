//! Generic selection state utilities.
//!
//! Provides a reusable single-selection state that any view can use for
//! cursor movement over a list or grid.

/// State for single-item selection in a list.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    /// Create a new selection state with no selection.
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Move selection forward by `step`, stopping at the last item.
    pub fn advance(&mut self, step: usize, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_add(step).min(max_count - 1),
            None => 0,
        });
    }

    /// Move selection back by `step`, stopping at the first item.
    pub fn retreat(&mut self, step: usize) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(step),
            None => 0,
        });
    }

    pub fn next(&mut self, max_count: usize) {
        self.advance(1, max_count);
    }

    pub fn prev(&mut self) {
        self.retreat(1);
    }

    /// Select the first item when nothing is selected and items exist.
    pub fn auto_select_first_if_empty(&mut self, has_items: bool) {
        if self.selected_index.is_none() && has_items {
            self.selected_index = Some(0);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Clamp selection to valid range after list size changes.
    pub fn clamp(&mut self, max_count: usize) {
        if let Some(idx) = self.selected_index {
            if max_count == 0 {
                self.selected_index = None;
            } else if idx >= max_count {
                self.selected_index = Some(max_count - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionState::new();
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_next_and_prev() {
        let mut selection = SelectionState::new();

        // From None
        selection.next(5);
        assert_eq!(selection.get(), Some(0));

        selection.next(5);
        assert_eq!(selection.get(), Some(1));

        // At boundary
        selection.set(Some(4));
        selection.next(5);
        assert_eq!(selection.get(), Some(4));

        selection.prev();
        assert_eq!(selection.get(), Some(3));

        selection.set(Some(0));
        selection.prev();
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_advance_by_row() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.advance(3, 6);
        assert_eq!(selection.get(), Some(4));

        // Short last row lands on the last item
        selection.advance(3, 6);
        assert_eq!(selection.get(), Some(5));

        selection.retreat(3);
        assert_eq!(selection.get(), Some(2));
        selection.retreat(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_next_empty_list() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_auto_select_first() {
        let mut selection = SelectionState::new();
        selection.auto_select_first_if_empty(false);
        assert!(selection.get().is_none());

        selection.auto_select_first_if_empty(true);
        assert_eq!(selection.get(), Some(0));
        assert!(selection.is_selected(0));
        assert!(!selection.is_selected(1));

        selection.set(Some(3));
        selection.auto_select_first_if_empty(true);
        assert_eq!(selection.get(), Some(3));
    }

    #[test]
    fn test_clamp() {
        let mut selection = SelectionState::new();
        selection.set(Some(10));

        selection.clamp(5);
        assert_eq!(selection.get(), Some(4));

        selection.clamp(0);
        assert!(selection.get().is_none());

        selection.set(Some(3));
        selection.clamp(10);
        assert_eq!(selection.get(), Some(3));
    }
}
