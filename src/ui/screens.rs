use crate::models::StudentRecord;
use crate::store::{Extremes, RecordStore, SortKey};

/// Backing state for the main records table. `rows` is the current view:
/// the canonical records run through lookup pinning or search filtering,
/// then through the active sort.
pub(crate) struct RecordsScreen {
    pub(crate) rows: Vec<StudentRecord>,
    pub(crate) filter: Option<String>,
    pub(crate) sort: Option<SortKey>,
    pub(crate) pinned: Option<String>,
    pub(crate) selected: usize,
}

impl RecordsScreen {
    pub(crate) fn new(store: &RecordStore) -> Self {
        let mut screen = Self {
            rows: Vec::new(),
            filter: None,
            sort: None,
            pinned: None,
            selected: 0,
        };
        screen.refresh(store);
        screen
    }

    /// Rebuild the visible rows from the store. A pinned lookup wins over
    /// the search filter; the sort applies to whichever rows survive.
    pub(crate) fn refresh(&mut self, store: &RecordStore) {
        let mut rows = if let Some(identifier) = &self.pinned {
            store.exact_lookup(identifier)
        } else if let Some(query) = &self.filter {
            store.search(query)
        } else {
            store.records().to_vec()
        };
        if let Some(key) = self.sort {
            key.apply(&mut rows);
        }
        self.rows = rows;
        self.ensure_in_bounds();
    }

    pub(crate) fn set_filter(&mut self, filter: Option<String>, store: &RecordStore) {
        self.filter = filter;
        self.refresh(store);
    }

    pub(crate) fn set_sort(&mut self, sort: Option<SortKey>, store: &RecordStore) {
        self.sort = sort;
        self.refresh(store);
    }

    pub(crate) fn set_pinned(&mut self, pinned: Option<String>, store: &RecordStore) {
        self.pinned = pinned;
        self.refresh(store);
    }

    pub(crate) fn clear_view(&mut self, store: &RecordStore) {
        self.filter = None;
        self.pinned = None;
        self.refresh(store);
    }

    pub(crate) fn current_record(&self) -> Option<&StudentRecord> {
        self.rows.get(self.selected)
    }

    pub(crate) fn focus_number(&mut self, number: &str) {
        if let Some(position) = self.rows.iter().position(|record| record.number == number) {
            self.selected = position;
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

/// Snapshot shown on the extreme-scores screen.
pub(crate) struct ScoresScreen {
    pub(crate) highest: StudentRecord,
    pub(crate) lowest: StudentRecord,
}

impl ScoresScreen {
    pub(crate) fn new(extremes: Extremes) -> Self {
        Self {
            highest: extremes.highest,
            lowest: extremes.lowest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seeded(contents: &str) -> (TempDir, RecordStore) {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("studentMarks.txt");
        fs::write(&path, contents).expect("seed marks file");
        let store = RecordStore::open(&path).expect("open store");
        (dir, store)
    }

    #[test]
    fn pinned_lookup_wins_over_the_filter() {
        let (_dir, store) = seeded("1,Alice,10,20,15,50\n2,Bob,30,30,30,80\n");
        let mut screen = RecordsScreen::new(&store);

        screen.set_filter(Some("bob".to_string()), &store);
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].name, "Bob");

        screen.set_pinned(Some("Alice".to_string()), &store);
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].name, "Alice");

        screen.clear_view(&store);
        assert_eq!(screen.rows.len(), 2);
    }

    #[test]
    fn sort_applies_to_the_filtered_view() {
        let (_dir, store) = seeded("1,Ben,10,10,10,10\n2,Bea,20,20,20,20\n3,Kim,30,30,30,30\n");
        let mut screen = RecordsScreen::new(&store);
        screen.set_filter(Some("be".to_string()), &store);
        screen.set_sort(Some(SortKey::PercentDesc), &store);

        let names: Vec<&str> = screen.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Bea", "Ben"]);
    }

    #[test]
    fn selection_is_clamped_when_the_view_shrinks() {
        let (_dir, store) = seeded("1,Ann,1,1,1,1\n2,Bob,2,2,2,2\n3,Cat,3,3,3,3\n");
        let mut screen = RecordsScreen::new(&store);
        screen.select_last();
        assert_eq!(screen.selected, 2);

        screen.set_filter(Some("bob".to_string()), &store);
        assert_eq!(screen.selected, 0);
        assert_eq!(screen.current_record().map(|r| r.name.as_str()), Some("Bob"));
    }

    #[test]
    fn move_selection_stops_at_the_edges() {
        let (_dir, store) = seeded("1,Ann,1,1,1,1\n2,Bob,2,2,2,2\n");
        let mut screen = RecordsScreen::new(&store);
        screen.move_selection(-3);
        assert_eq!(screen.selected, 0);
        screen.move_selection(10);
        assert_eq!(screen.selected, 1);
    }
}
