//! @ai:module:intent Ordered, write-once collection of per-model run outcomes
//! @ai:module:layer domain
//! @ai:module:public_api ResultsCollection
//! @ai:module:stateless false

use crate::model::ModelArch;
use crate::stats::RunStats;
use serde::{Serialize, Serializer};

/// @ai:intent Outcome of each classifier run, in the order runs completed
/// @ai:invariant a model's outcome is recorded at most once and never revised
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsCollection {
    entries: Vec<(ModelArch, Option<RunStats>)>,
}

impl ResultsCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Record the outcome of a model's run; `None` marks a failed run
    /// @ai:post returns false and keeps the earlier outcome if the model was already recorded
    /// @ai:effects pure
    pub fn record(&mut self, model: ModelArch, outcome: Option<RunStats>) -> bool {
        if self.contains(model) {
            tracing::warn!("Ignoring duplicate result for {}", model.label());
            return false;
        }

        self.entries.push((model, outcome));
        true
    }

    pub fn contains(&self, model: ModelArch) -> bool {
        self.entries.iter().any(|(m, _)| *m == model)
    }

    /// Stats for a model, `None` when it failed or was never run.
    pub fn get(&self, model: ModelArch) -> Option<&RunStats> {
        self.entries
            .iter()
            .find(|(m, _)| *m == model)
            .and_then(|(_, stats)| stats.as_ref())
    }

    /// @ai:intent Iterate outcomes in insertion order
    /// @ai:effects pure
    pub fn iter(&self) -> impl Iterator<Item = (ModelArch, Option<&RunStats>)> {
        self.entries.iter().map(|(m, stats)| (*m, stats.as_ref()))
    }

    /// First successful run, if any.
    pub fn first_present(&self) -> Option<(ModelArch, &RunStats)> {
        self.entries
            .iter()
            .find_map(|(m, stats)| stats.as_ref().map(|s| (*m, s)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|(_, stats)| stats.is_some()).count()
    }
}

impl Serialize for ResultsCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (model, stats) in &self.entries {
            map.serialize_entry(model.as_str(), stats)?;
        }
        map.end()
    }
}
