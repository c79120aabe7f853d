use crate::accordion::Accordion;
use crate::config::EngineConfig;
use crate::contact::{SubmitOutcome, SubmitState};
use crate::motion::{progress_ratio, HeroFrame, HeroParallax, Spring};
use crate::overlay::{NavigationRequest, OverlayState};
use crate::section::{ActiveSectionResolver, SectionId};
use crate::telemetry::{FrameInput, PointerSample, ScrollSample};
use crate::visibility::{IntersectionSample, Transition, VisibilityRegistry};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub document_height: f64,
    pub viewport_height: f64,
    pub section_tops: Vec<(SectionId, f64)>,
}

impl PageLayout {
    pub fn top_of(&self, id: SectionId) -> Option<f64> {
        self.section_tops
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, top)| *top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub progress: f64,
    pub hero: HeroFrame,
    pub pointer: PointerSample,
    pub nav_scrolled: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub active_changed: bool,
    pub motion_changed: bool,
    pub animating: bool,
}

#[derive(Clone, Debug)]
pub struct PageContext {
    config: EngineConfig,
    scroll: ScrollSample,
    pointer: PointerSample,
    active: ActiveSectionResolver,
    progress: Spring,
    hero: HeroParallax,
    visibility: VisibilityRegistry<String>,
    accordion: Accordion<String>,
    overlay: OverlayState,
    submit: SubmitState,
    mounted: bool,
}

impl PageContext {
    pub fn mount(config: EngineConfig) -> Self {
        Self {
            scroll: ScrollSample::default(),
            pointer: PointerSample::offscreen(),
            active: ActiveSectionResolver::new(config.active_offset_px),
            progress: Spring::new(config.spring_stiffness, config.spring_damping),
            hero: HeroParallax::default(),
            visibility: VisibilityRegistry::new(),
            accordion: Accordion::new(),
            overlay: OverlayState::Closed,
            submit: SubmitState::new(config.sent_window_ms),
            mounted: true,
            config,
        }
    }

    pub fn teardown(&mut self) {
        self.scroll = ScrollSample::default();
        self.pointer = PointerSample::offscreen();
        self.active.reset();
        self.progress.reset();
        self.visibility.clear();
        self.accordion.collapse();
        self.overlay = OverlayState::Closed;
        self.submit = SubmitState::new(self.config.sent_window_ms);
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn apply_frame(
        &mut self,
        input: FrameInput,
        layout: &PageLayout,
        elapsed_seconds: f64,
    ) -> FrameOutcome {
        let before = self.motion_frame();

        self.scroll = input.scroll;
        self.pointer = input.pointer;
        let active_changed = self.active.update(|id| layout.top_of(id));
        self.progress.set_target(progress_ratio(
            self.scroll.offset(),
            layout.document_height,
            layout.viewport_height,
        ));
        let animating = self.progress.step(elapsed_seconds);

        FrameOutcome {
            active_changed,
            motion_changed: self.motion_frame() != before,
            animating,
        }
    }

    pub fn advance(&mut self, elapsed_seconds: f64) -> FrameOutcome {
        let before = self.progress.value();
        let animating = self.progress.step(elapsed_seconds);

        FrameOutcome {
            active_changed: false,
            motion_changed: self.progress.value() != before,
            animating,
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.active.active()
    }

    pub fn motion_frame(&self) -> MotionFrame {
        MotionFrame {
            progress: self.progress.value(),
            hero: self.hero.sample(self.scroll.offset()),
            pointer: self.pointer,
            nav_scrolled: self.scroll.offset() > self.config.nav_scrolled_offset_px,
        }
    }

    pub fn track(&mut self, key: &str, threshold: f64) {
        self.visibility.track(key.to_string(), threshold);
    }

    pub fn observe(&mut self, key: &str, sample: IntersectionSample) -> Transition {
        self.visibility.observe(&key.to_string(), sample)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.visibility.is_seen(&key.to_string())
    }

    pub fn fail_open(&mut self) {
        self.visibility.fail_open();
    }

    pub fn toggle_entry(&mut self, key: &str, has_details: bool) -> bool {
        self.accordion.toggle(key.to_string(), has_details)
    }

    pub fn is_entry_open(&self, key: &str) -> bool {
        self.accordion.is_open(&key.to_string())
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn toggle_overlay(&mut self) -> OverlayState {
        self.overlay = self.overlay.toggled();
        self.overlay
    }

    pub fn navigate(&mut self, target: SectionId) -> NavigationRequest {
        self.overlay.navigate(target)
    }

    pub fn submit_state(&self) -> &SubmitState {
        &self.submit
    }

    pub fn begin_submit(&mut self) -> bool {
        self.submit.begin()
    }

    pub fn finish_submit(&mut self, outcome: SubmitOutcome, now_ms: f64) {
        self.submit.finish(outcome, now_ms);
    }

    pub fn tick_submit(&mut self, now_ms: f64) -> bool {
        self.submit.tick(now_ms)
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::mount(EngineConfig::default())
    }
}
