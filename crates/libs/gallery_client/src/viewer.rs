use crate::state::GalleryState;
use common_types::ImageRecord;

/// Modal cursor over a snapshot of the filtered view taken when it was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    ids: Vec<i64>,
    position: usize,
}

impl Viewer {
    /// Opens on `id`. Refused in admin mode, where clicks select instead, and for ids that
    /// are not in the current view.
    #[must_use]
    pub fn open(state: &GalleryState, id: i64) -> Option<Self> {
        if state.admin_mode() {
            return None;
        }
        let ids: Vec<i64> = state.filtered_view().iter().map(|r| r.id).collect();
        let position = ids.iter().position(|candidate| *candidate == id)?;
        Some(Self { ids, position })
    }

    #[must_use]
    pub fn current_id(&self) -> i64 {
        self.ids[self.position]
    }

    #[must_use]
    pub fn current<'a>(&self, state: &'a GalleryState) -> Option<&'a ImageRecord> {
        state.document().find(self.current_id())
    }

    /// 1-based position and total, as shown in the modal counter.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.position + 1, self.ids.len())
    }

    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.ids.len() > 1
    }

    pub fn next(&mut self) -> i64 {
        if self.can_navigate() {
            self.position = (self.position + 1) % self.ids.len();
        }
        self.current_id()
    }

    pub fn previous(&mut self) -> i64 {
        if self.can_navigate() {
            self.position = (self.position + self.ids.len() - 1) % self.ids.len();
        }
        self.current_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_types::sample_gallery;

    #[test]
    fn test_navigation_wraps_around() {
        let state = GalleryState::new(sample_gallery());
        let mut viewer = Viewer::open(&state, 4).expect("record 4 is visible");

        assert_eq!(viewer.position(), (4, 4));
        assert_eq!(viewer.next(), 1);
        assert_eq!(viewer.previous(), 4);
        assert_eq!(viewer.previous(), 3);
        assert_eq!(viewer.current(&state).map(|r| r.id), Some(3));
    }

    #[test]
    fn test_single_record_view_does_not_move() {
        let mut state = GalleryState::new(sample_gallery());
        state.set_category("exhaust");
        let mut viewer = Viewer::open(&state, 4).expect("exhaust is visible");

        assert!(!viewer.can_navigate());
        assert_eq!(viewer.next(), 4);
        assert_eq!(viewer.previous(), 4);
    }

    #[test]
    fn test_open_refused_in_admin_mode_or_outside_view() {
        let mut state = GalleryState::new(sample_gallery());
        state.set_category("exhaust");
        assert!(Viewer::open(&state, 1).is_none());

        state.set_category("all");
        state.set_admin_mode(true);
        assert!(Viewer::open(&state, 1).is_none());
    }
}
