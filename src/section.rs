pub const ACTIVE_SECTION_OFFSET_PX: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Education,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Education,
        Self::Testimonials,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }
}

/// Scans bottom-to-top and returns the lowest section whose top edge sits at
/// or above `offset_px` from the viewport top. Sections missing from the
/// layout (`top_of` returns `None`) are skipped.
pub fn resolve_active_section<F>(top_of: F, offset_px: f64) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<f64>,
{
    SectionId::ALL
        .into_iter()
        .rev()
        .find(|id| top_of(*id).is_some_and(|top| top <= offset_px))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionResolver {
    active: SectionId,
    offset_px: f64,
}

impl ActiveSectionResolver {
    pub fn new(offset_px: f64) -> Self {
        Self {
            active: SectionId::Home,
            offset_px,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Returns `true` when the active section changed. No qualifying section
    /// leaves the previous value in place.
    pub fn update<F>(&mut self, top_of: F) -> bool
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        match resolve_active_section(top_of, self.offset_px) {
            Some(next) if next != self.active => {
                self.active = next;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.active = SectionId::Home;
    }
}

impl Default for ActiveSectionResolver {
    fn default() -> Self {
        Self::new(ACTIVE_SECTION_OFFSET_PX)
    }
}
