use std::collections::VecDeque;

use crate::SharedFile;

/// Pure data structure for the shared-file list.
///
/// Rows are ordered newest-first for user additions; seed rows are
/// appended once at startup in their fixture order. Rows are never
/// removed or edited, so a session that leaves the empty state never
/// returns to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareList {
    rows: VecDeque<SharedFile>,
}

impl ShareList {
    pub fn new() -> Self {
        Self {
            rows: VecDeque::new(),
        }
    }

    /// Add incoming files to the front of the list, most recent first.
    ///
    /// Each file is pushed to the front in order, so the last element
    /// of `incoming` ends up at the top. A no-op for an empty batch.
    pub fn add_files(&mut self, incoming: Vec<SharedFile>) {
        for file in incoming {
            self.rows.push_front(file);
        }
    }

    /// Append seed rows in their given order, only into an empty list.
    ///
    /// A strict no-op once any row exists, so seed data never mixes
    /// into a session that already has real entries.
    pub fn load_seed(&mut self, seed: Vec<SharedFile>) {
        if !self.rows.is_empty() {
            return;
        }
        for file in seed {
            self.rows.push_back(file);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &SharedFile> {
        self.rows.iter()
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the "no files yet" placeholder row should be shown.
    pub fn show_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text for the item-count label: "0 items", "1 item", "2 items".
    pub fn count_label(&self) -> String {
        let count = self.rows.len();
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> SharedFile {
        SharedFile::just_now(name, 1024)
    }

    fn names(list: &ShareList) -> Vec<&str> {
        list.rows().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_add_files_newest_first() {
        let mut list = ShareList::new();
        list.add_files(vec![file("a"), file("b")]);
        assert_eq!(names(&list), vec!["b", "a"]);
        assert_eq!(list.count_label(), "2 items");

        list.add_files(vec![file("c")]);
        assert_eq!(names(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_add_empty_batch_is_noop() {
        let mut list = ShareList::new();
        list.add_files(vec![file("a")]);
        list.add_files(Vec::new());
        assert_eq!(names(&list), vec!["a"]);
    }

    #[test]
    fn test_seed_appends_in_order() {
        let mut list = ShareList::new();
        list.load_seed(vec![file("one"), file("two"), file("three")]);
        assert_eq!(names(&list), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_seed_into_nonempty_list_is_noop() {
        let mut list = ShareList::new();
        list.add_files(vec![file("real")]);
        list.load_seed(vec![file("mock")]);
        assert_eq!(names(&list), vec!["real"]);
    }

    #[test]
    fn test_user_rows_go_above_seed_rows() {
        let mut list = ShareList::new();
        list.load_seed(vec![file("seed1"), file("seed2")]);
        list.add_files(vec![file("dropped")]);
        assert_eq!(names(&list), vec!["dropped", "seed1", "seed2"]);
    }

    #[test]
    fn test_placeholder_derivation() {
        let mut list = ShareList::new();
        assert!(list.show_placeholder());
        assert_eq!(list.count_label(), "0 items");

        list.add_files(vec![file("a")]);
        assert!(!list.show_placeholder());

        // An empty add later never brings the placeholder back
        list.add_files(Vec::new());
        assert!(!list.show_placeholder());
    }

    #[test]
    fn test_count_label_singular() {
        let mut list = ShareList::new();
        list.add_files(vec![file("a")]);
        assert_eq!(list.count_label(), "1 item");
    }
}
