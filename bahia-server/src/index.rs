//! In-memory schedule index.

use crate::domain::Service;
use crate::feed::Dataset;

/// The normalized schedule, held read-only.
///
/// Built once from a published dataset and then only read: queries
/// allocate their own results, so the index can be shared behind an
/// `Arc` with no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleIndex {
    services: Vec<Service>,
}

impl ScheduleIndex {
    /// Build an index over a set of services.
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// All services, in dataset order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if the index holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl From<Dataset> for ScheduleIndex {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset.services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    #[test]
    fn from_dataset_keeps_services() {
        let dataset = Dataset::new(vec![Service {
            id: "T1".into(),
            line: Line::C1,
            stops: vec![],
        }]);

        let index = ScheduleIndex::from(dataset);
        assert_eq!(index.len(), 1);
        assert_eq!(index.services()[0].id, "T1");
    }

    #[test]
    fn empty_index() {
        let index = ScheduleIndex::new(vec![]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
