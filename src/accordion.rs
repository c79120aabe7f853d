#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion<K> {
    open: Option<K>,
}

impl<K: PartialEq> Accordion<K> {
    pub fn new() -> Self {
        Self { open: None }
    }

    pub fn open_key(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    /// Collapses `key` when it is open, otherwise opens it and collapses
    /// whatever was open. Items without details are not togglable. Returns
    /// `true` when the register changed.
    pub fn toggle(&mut self, key: K, has_details: bool) -> bool {
        if !has_details {
            return false;
        }

        if self.is_open(&key) {
            self.open = None;
        } else {
            self.open = Some(key);
        }
        true
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }
}

impl<K: PartialEq> Default for Accordion<K> {
    fn default() -> Self {
        Self::new()
    }
}

pub const DETAILS_EXIT_MS: u32 = 400;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presence {
    #[default]
    Absent,
    Present,
    Exiting,
}

impl Presence {
    pub fn follow(self, open: bool) -> Self {
        match (self, open) {
            (_, true) => Self::Present,
            (Self::Absent, false) => Self::Absent,
            (Self::Present | Self::Exiting, false) => Self::Exiting,
        }
    }

    pub fn exit_finished(self) -> Self {
        match self {
            Self::Exiting => Self::Absent,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Self::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_key_collapses() {
        let mut accordion = Accordion::new();

        accordion.toggle("k1", true);
        accordion.toggle("k2", true);
        accordion.toggle("k2", true);
        assert_eq!(accordion.open_key(), None);
    }

    #[test]
    fn opening_another_key_replaces_the_open_one() {
        let mut accordion = Accordion::new();

        accordion.toggle("k1", true);
        accordion.toggle("k2", true);
        assert_eq!(accordion.open_key(), Some(&"k2"));
        assert!(!accordion.is_open(&"k1"));
    }

    #[test]
    fn entries_without_details_are_inert() {
        let mut accordion = Accordion::new();
        accordion.toggle("Ipath Solutions-Customer Data Analyst", true);

        let changed = accordion.toggle("Etech Global Services-Member Support", false);
        assert!(!changed);
        assert_eq!(
            accordion.open_key(),
            Some(&"Ipath Solutions-Customer Data Analyst")
        );
    }

    #[test]
    fn collapsed_details_stay_mounted_until_exit_finishes() {
        let opened = Presence::Absent.follow(true);
        assert_eq!(opened, Presence::Present);

        let closing = opened.follow(false);
        assert_eq!(closing, Presence::Exiting);
        assert!(closing.is_mounted());

        assert_eq!(closing.exit_finished(), Presence::Absent);
        assert!(!closing.exit_finished().is_mounted());
    }

    #[test]
    fn reopening_during_exit_keeps_details() {
        let reopened = Presence::Present.follow(false).follow(true);

        assert_eq!(reopened, Presence::Present);
        assert_eq!(reopened.exit_finished(), Presence::Present);
        assert_eq!(Presence::Absent.follow(false), Presence::Absent);
    }

    #[test]
    fn collapse_closes_any_open_entry() {
        let mut accordion = Accordion::new();
        accordion.toggle("k1", true);

        accordion.collapse();
        assert_eq!(accordion.open_key(), None);
    }

    proptest! {
        #[test]
        fn at_most_one_key_is_open(keys in proptest::collection::vec(0u8..5, 0..50)) {
            let mut accordion = Accordion::new();
            let mut expected: Option<u8> = None;

            for key in keys {
                accordion.toggle(key, true);
                expected = if expected == Some(key) { None } else { Some(key) };

                let open_count = (0u8..5).filter(|candidate| accordion.is_open(candidate)).count();
                prop_assert!(open_count <= 1);
                prop_assert_eq!(accordion.open_key().copied(), expected);
            }
        }
    }
}
