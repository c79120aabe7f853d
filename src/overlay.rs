use crate::section::SectionId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }

    pub fn navigate(&mut self, target: SectionId) -> NavigationRequest {
        *self = Self::Closed;
        NavigationRequest { target }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: SectionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_toggles_between_states() {
        let state = OverlayState::default();
        assert!(!state.is_open());

        let opened = state.toggled();
        assert!(opened.is_open());
        assert_eq!(opened.toggled(), OverlayState::Closed);
    }

    #[test]
    fn any_navigation_closes_the_overlay() {
        for target in SectionId::ALL {
            let mut state = OverlayState::Open;
            let request = state.navigate(target);
            assert_eq!(state, OverlayState::Closed);
            assert_eq!(request.target, target);
        }
    }

    #[test]
    fn navigation_while_closed_stays_closed() {
        let mut state = OverlayState::Closed;
        state.navigate(SectionId::Contact);
        assert_eq!(state, OverlayState::Closed);
    }
}
