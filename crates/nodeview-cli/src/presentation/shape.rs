use nodeview_types::{BridgeType, JobSpec, JobSpecWithRuns};
use std::any::Any;

/// Values the table renderer has a layout for.
///
/// Classification tries the guards in a fixed order and the first match
/// wins: bridge list, job with runs, single bridge, job list.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    BridgeList(&'a [BridgeType]),
    JobDetail(&'a JobSpecWithRuns),
    BridgeDetail(&'a BridgeType),
    JobList(&'a [JobSpec]),
}

impl<'a> Shape<'a> {
    pub fn classify<T: Any>(value: &'a T) -> Option<Self> {
        let value: &'a dyn Any = value;

        if let Some(bridges) = value.downcast_ref::<Vec<BridgeType>>() {
            return Some(Shape::BridgeList(bridges));
        }
        if let Some(job) = value.downcast_ref::<JobSpecWithRuns>() {
            return Some(Shape::JobDetail(job));
        }
        if let Some(bridge) = value.downcast_ref::<BridgeType>() {
            return Some(Shape::BridgeDetail(bridge));
        }
        if let Some(jobs) = value.downcast_ref::<Vec<JobSpec>>() {
            return Some(Shape::JobList(jobs));
        }
        None
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::BridgeList(_) => "bridge list",
            Shape::JobDetail(_) => "job detail",
            Shape::BridgeDetail(_) => "bridge detail",
            Shape::JobList(_) => "job list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeview_testing::fixtures;

    #[test]
    fn test_classifies_known_shapes() {
        let bridge = fixtures::sample_bridge("hapax", "http://hap.ax");
        let bridges = vec![bridge.clone()];
        let jobs = vec![fixtures::sample_job(1)];
        let detail = fixtures::sample_job_with_runs(1);

        assert!(matches!(Shape::classify(&bridges), Some(Shape::BridgeList(b)) if b.len() == 1));
        assert!(matches!(Shape::classify(&bridge), Some(Shape::BridgeDetail(_))));
        assert!(matches!(Shape::classify(&jobs), Some(Shape::JobList(_))));
        assert!(matches!(Shape::classify(&detail), Some(Shape::JobDetail(_))));
    }

    #[test]
    fn test_rejects_everything_else() {
        #[derive(serde::Serialize)]
        struct Anonymous {
            name: String,
        }

        let anon = Anonymous {
            name: "Romeo".to_string(),
        };
        assert!(Shape::classify(&anon).is_none());
        assert!(Shape::classify(&"hapax").is_none());
        assert!(Shape::classify(&fixtures::sample_job(1)).is_none());
        assert!(Shape::classify(&vec![fixtures::sample_job_with_runs(1)]).is_none());
    }

    #[test]
    fn test_empty_lists_keep_their_element_type() {
        let no_bridges: Vec<BridgeType> = vec![];
        let no_jobs: Vec<JobSpec> = vec![];
        assert_eq!(Shape::classify(&no_bridges).unwrap().name(), "bridge list");
        assert_eq!(Shape::classify(&no_jobs).unwrap().name(), "job list");
    }
}
