// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::RuleSet;
use crate::engine::frequency_map::FrequencyMap;
use crate::engine::normalizer::Normalizer;
use crate::observability::messages::{pipeline::AggregationCompleted, StructuredLog};
use crate::traits::TokenExtractor;

/// Folds raw text into a [`FrequencyMap`].
///
/// The extractor decides what the candidate tokens are; every candidate goes
/// through the normalizer and each surviving entry adds its count to the map.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    normalizer: Normalizer<'a>,
}

impl<'a> Aggregator<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self {
            normalizer: Normalizer::new(rules),
        }
    }

    /// Aggregate one text blob into a fresh map.
    ///
    /// # Example
    /// ```
    /// use ticket_tally::config::RuleSet;
    /// use ticket_tally::engine::Aggregator;
    /// use ticket_tally::extractors::DelimitedExtractor;
    ///
    /// let rules = RuleSet::standard();
    /// let map = Aggregator::new(&rules).aggregate("45 45 7-2, BOX", &DelimitedExtractor::new());
    ///
    /// assert_eq!(map.get_str("045"), Some(2));
    /// assert_eq!(map.get_str("007"), Some(2));
    /// assert_eq!(map.get_str("BOX"), Some(1));
    /// ```
    pub fn aggregate(&self, text: &str, extractor: &dyn TokenExtractor) -> FrequencyMap {
        let mut map = FrequencyMap::new();
        self.aggregate_into(text, extractor, &mut map);
        map
    }

    /// Fold one text blob into an existing map, returning how many candidates
    /// were accepted.
    pub fn aggregate_into(
        &self,
        text: &str,
        extractor: &dyn TokenExtractor,
        map: &mut FrequencyMap,
    ) -> usize {
        if text.trim().is_empty() {
            return 0;
        }

        let candidates = extractor.extract(text);
        let mut accepted = 0;

        for candidate in &candidates {
            for entry in self.normalizer.normalize(candidate) {
                map.add_entry(entry);
                accepted += 1;
            }
        }

        AggregationCompleted {
            extractor: extractor.name(),
            candidates: candidates.len(),
            accepted,
            distinct_keys: map.len(),
        }
        .log();

        accepted
    }
}
