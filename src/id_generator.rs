use std::sync::atomic::{AtomicUsize, Ordering};

use crate::element::ElementId;

// Single static counter for all elements
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> ElementId {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_within_a_burst() {
        let ids: Vec<ElementId> = (0..64).map(|_| generate_id()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
