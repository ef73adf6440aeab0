// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::frequency_map::FrequencyMap;
use crate::engine::types::OutputEntry;

/// Render a map into output entries, in first-seen order.
///
/// No sorting happens here: the same input order always renders the same list.
pub fn render(map: &FrequencyMap) -> Vec<OutputEntry> {
    map.iter()
        .map(|(key, count)| OutputEntry {
            key: key.clone(),
            count,
        })
        .collect()
}

/// Render a map straight to its canonical strings (`045-3`, `BOX`, ...).
pub fn render_strings(map: &FrequencyMap) -> Vec<String> {
    render(map).iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{NormalizedEntry, TokenKey};

    #[test]
    fn single_counts_have_no_suffix() {
        let map: FrequencyMap = vec![
            NormalizedEntry::numeric("007", 2),
            NormalizedEntry::numeric("008", 1),
            NormalizedEntry::keyword("BOX"),
        ]
        .into_iter()
        .collect();

        assert_eq!(render_strings(&map), vec!["007-2", "008", "BOX"]);
    }

    #[test]
    fn keeps_discovery_order() {
        let mut map = FrequencyMap::new();
        map.add(TokenKey::Numeric("900".to_string()), 1);
        map.add(TokenKey::Numeric("100".to_string()), 1);
        map.add(TokenKey::Numeric("900".to_string()), 1);

        assert_eq!(render_strings(&map), vec!["900-2", "100"]);
    }

    #[test]
    fn empty_map_renders_nothing() {
        assert!(render(&FrequencyMap::new()).is_empty());
    }
}
