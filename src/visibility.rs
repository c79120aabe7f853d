use std::collections::HashMap;
use std::hash::Hash;

pub const SECTION_THRESHOLD: f64 = 0.1;
pub const WIDGET_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityRecord {
    has_been_seen: bool,
}

impl VisibilityRecord {
    pub fn has_been_seen(&self) -> bool {
        self.has_been_seen
    }

    fn mark_seen(&mut self) -> bool {
        let first = !self.has_been_seen;
        self.has_been_seen = true;
        first
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Revealed,
    Unchanged,
}

#[derive(Clone, Debug, PartialEq)]
struct Tracked {
    threshold: f64,
    record: VisibilityRecord,
}

#[derive(Clone, Debug)]
pub struct VisibilityRegistry<K> {
    tracked: HashMap<K, Tracked>,
    fail_open: bool,
}

impl<K: Eq + Hash> VisibilityRegistry<K> {
    pub fn new() -> Self {
        Self {
            tracked: HashMap::new(),
            fail_open: false,
        }
    }

    /// Starts tracking `key`. Re-tracking keeps the existing record so a
    /// remounted element never replays its entrance.
    pub fn track(&mut self, key: K, threshold: f64) {
        let fail_open = self.fail_open;
        self.tracked.entry(key).or_insert_with(|| Tracked {
            threshold,
            record: VisibilityRecord {
                has_been_seen: fail_open,
            },
        });
    }

    pub fn observe(&mut self, key: &K, sample: IntersectionSample) -> Transition {
        let Some(tracked) = self.tracked.get_mut(key) else {
            return Transition::Unchanged;
        };

        if tracked.record.has_been_seen() || !meets_threshold(sample, tracked.threshold) {
            return Transition::Unchanged;
        }

        if tracked.record.mark_seen() {
            Transition::Revealed
        } else {
            Transition::Unchanged
        }
    }

    pub fn is_seen(&self, key: &K) -> bool {
        self.tracked
            .get(key)
            .map(|tracked| tracked.record.has_been_seen())
            .unwrap_or(self.fail_open)
    }

    /// Observation is unavailable: every current and future record reads as
    /// seen so content is never left hidden.
    pub fn fail_open(&mut self) {
        self.fail_open = true;
        for tracked in self.tracked.values_mut() {
            tracked.record.mark_seen();
        }
    }

    pub fn clear(&mut self) {
        self.tracked.clear();
        self.fail_open = false;
    }
}

impl<K: Eq + Hash> Default for VisibilityRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn meets_threshold(sample: IntersectionSample, threshold: f64) -> bool {
    sample.intersecting && sample.ratio >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn record_flips_once_threshold_is_met() {
        let mut registry = VisibilityRegistry::new();
        registry.track("about", SECTION_THRESHOLD);

        assert_eq!(registry.observe(&"about", sample(0.05)), Transition::Unchanged);
        assert!(!registry.is_seen(&"about"));
        assert_eq!(registry.observe(&"about", sample(0.1)), Transition::Revealed);
        assert!(registry.is_seen(&"about"));
    }

    #[test]
    fn scrolling_away_and_back_never_replays() {
        let mut registry = VisibilityRegistry::new();
        registry.track("skill:CRM", WIDGET_THRESHOLD);

        assert_eq!(registry.observe(&"skill:CRM", sample(0.6)), Transition::Revealed);
        assert_eq!(registry.observe(&"skill:CRM", sample(0.0)), Transition::Unchanged);
        assert_eq!(registry.observe(&"skill:CRM", sample(0.9)), Transition::Unchanged);
        assert!(registry.is_seen(&"skill:CRM"));
    }

    #[test]
    fn retracking_keeps_existing_record() {
        let mut registry = VisibilityRegistry::new();
        registry.track("contact", SECTION_THRESHOLD);
        registry.observe(&"contact", sample(1.0));

        registry.track("contact", SECTION_THRESHOLD);
        assert!(registry.is_seen(&"contact"));
    }

    #[test]
    fn untracked_keys_are_ignored() {
        let mut registry: VisibilityRegistry<&str> = VisibilityRegistry::new();

        assert_eq!(registry.observe(&"ghost", sample(1.0)), Transition::Unchanged);
        assert!(!registry.is_seen(&"ghost"));
    }

    #[test]
    fn fail_open_reveals_current_and_future_records() {
        let mut registry = VisibilityRegistry::new();
        registry.track("home", SECTION_THRESHOLD);

        registry.fail_open();
        registry.track("education", SECTION_THRESHOLD);

        assert!(registry.is_seen(&"home"));
        assert!(registry.is_seen(&"education"));
        assert!(registry.is_seen(&"never-tracked"));
    }

    proptest! {
        #[test]
        fn records_are_monotonic(ratios in proptest::collection::vec(0.0f64..=1.0, 1..40)) {
            let mut registry = VisibilityRegistry::new();
            registry.track(7u32, WIDGET_THRESHOLD);

            let mut reveals = 0;
            let mut seen = false;
            for ratio in ratios {
                if registry.observe(&7, sample(ratio)) == Transition::Revealed {
                    reveals += 1;
                }
                let now_seen = registry.is_seen(&7);
                prop_assert!(!seen || now_seen);
                seen = now_seen;
            }
            prop_assert!(reveals <= 1);
        }
    }
}
