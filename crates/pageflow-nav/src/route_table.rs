//! Fixed, ordered table of navigable routes.
//!
//! Table order is the adjacency order for swipe navigation: index `i` and
//! `i ± 1` are neighbors.

use pageflow_foundation::SwipeDirection;

/// Ordered list of navigable paths. Never empty.
#[derive(Debug, Clone)]
pub struct RouteTable {
    paths: Vec<String>,
}

impl RouteTable {
    /// Builds a table from an ordered list of paths.
    ///
    /// # Panics
    /// Panics if `paths` is empty; an empty table has no valid index.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        assert!(!paths.is_empty(), "route table must not be empty");
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn index_of(&self, path: &str) -> Option<usize> {
        self.paths.iter().position(|candidate| candidate == path)
    }

    pub fn path(&self, index: usize) -> Option<&str> {
        self.paths.get(index).map(String::as_str)
    }

    /// Neighboring index in the given semantic direction, or `None` at the
    /// ends of the table. `Right` navigates to the previous route, `Left`
    /// to the next one.
    pub fn neighbor(&self, index: usize, direction: SwipeDirection) -> Option<usize> {
        if index >= self.paths.len() {
            return None;
        }
        match direction {
            SwipeDirection::Right => index.checked_sub(1),
            SwipeDirection::Left => {
                let next = index + 1;
                (next < self.paths.len()).then_some(next)
            }
        }
    }

    /// Whether `index` is the first route (no previous neighbor).
    pub fn at_left_boundary(&self, index: usize) -> bool {
        index == 0
    }

    /// Whether `index` is the last route (no next neighbor).
    pub fn at_right_boundary(&self, index: usize) -> bool {
        index + 1 == self.paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(["/", "/about", "/project", "/contact"])
    }

    #[test]
    fn index_lookup_round_trips() {
        let table = table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.index_of("/about"), Some(1));
        assert_eq!(table.path(1), Some("/about"));
        assert_eq!(table.index_of("/missing"), None);
        assert_eq!(table.path(9), None);
    }

    #[test]
    fn neighbors_follow_table_order() {
        let table = table();
        assert_eq!(table.neighbor(1, SwipeDirection::Left), Some(2));
        assert_eq!(table.neighbor(1, SwipeDirection::Right), Some(0));
    }

    #[test]
    fn boundaries_have_no_neighbor() {
        let table = table();
        assert_eq!(table.neighbor(0, SwipeDirection::Right), None);
        assert_eq!(table.neighbor(3, SwipeDirection::Left), None);
    }

    #[test]
    fn out_of_range_index_has_no_neighbor() {
        let table = table();
        assert_eq!(table.neighbor(9, SwipeDirection::Left), None);
        assert_eq!(table.neighbor(9, SwipeDirection::Right), None);
    }

    #[test]
    fn boundary_predicates() {
        let table = table();
        assert!(table.at_left_boundary(0));
        assert!(!table.at_left_boundary(1));
        assert!(table.at_right_boundary(3));
        assert!(!table.at_right_boundary(2));
    }

    #[test]
    #[should_panic(expected = "route table must not be empty")]
    fn empty_table_is_rejected() {
        RouteTable::new(Vec::<String>::new());
    }
}
