//! Refresh Coalescing
//!
//! At most one load per category is in flight. Requests arriving meanwhile
//! collapse into a single follow-up load once the current one finishes.

use std::collections::HashSet;

use crate::models::Category;

#[derive(Debug, Clone, Default)]
pub struct RefreshGuard {
    in_flight: HashSet<Category>,
    pending: HashSet<Category>,
}

impl RefreshGuard {
    /// Returns `true` when the caller should start loading `category`.
    /// Otherwise the request is remembered for the running load.
    pub fn begin(&mut self, category: Category) -> bool {
        if self.in_flight.contains(&category) {
            self.pending.insert(category);
            false
        } else {
            self.in_flight.insert(category);
            true
        }
    }

    /// Marks the running load as done. Returns `true` if another request came
    /// in meanwhile; the category then stays in flight and the caller loads again.
    pub fn finish(&mut self, category: Category) -> bool {
        if self.pending.remove(&category) {
            true
        } else {
            self.in_flight.remove(&category);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_refresh() {
        let mut guard = RefreshGuard::default();

        assert!(guard.begin(Category::Laundry));
        assert!(!guard.finish(Category::Laundry));
        // Idle again, the next request starts a load
        assert!(guard.begin(Category::Laundry));
    }

    #[test]
    fn test_overlapping_requests_coalesce_into_one_rerun() {
        let mut guard = RefreshGuard::default();

        assert!(guard.begin(Category::Kitchen));
        assert!(!guard.begin(Category::Kitchen));
        assert!(!guard.begin(Category::Kitchen));

        // Still in flight for the rerun, so further requests queue again
        assert!(guard.finish(Category::Kitchen));
        assert!(!guard.begin(Category::Kitchen));
        assert!(guard.finish(Category::Kitchen));
        assert!(!guard.finish(Category::Kitchen));
        assert!(guard.begin(Category::Kitchen));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut guard = RefreshGuard::default();

        assert!(guard.begin(Category::Laundry));
        assert!(guard.begin(Category::Kitchen));
        assert!(!guard.finish(Category::Laundry));
        assert!(!guard.begin(Category::Kitchen));
    }
}
