pub const NAV_SCROLLED_OFFSET_PX: f64 = 50.0;
pub const PROGRESS_SPRING_STIFFNESS: f64 = 100.0;
pub const PROGRESS_SPRING_DAMPING: f64 = 30.0;

const SPRING_MASS: f64 = 1.0;
const SPRING_REST_DELTA: f64 = 0.005;
const SPRING_REST_SPEED: f64 = 0.01;
const SPRING_MAX_FRAME_SECONDS: f64 = 0.04;
const SPRING_STEP_SECONDS: f64 = 1.0 / 240.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearMap {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, input: f64) -> f64 {
        let (from, to) = self.domain;
        let span = to - from;
        let t = if span == 0.0 {
            if input >= to {
                1.0
            } else {
                0.0
            }
        } else {
            ((input - from) / span).clamp(0.0, 1.0)
        };

        self.range.0 + (self.range.1 - self.range.0) * t
    }
}

/// Scroll offset over the scrollable length, clamped to `[0, 1]`. A page that
/// cannot scroll reports full progress.
pub fn progress_ratio(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 1.0;
    }

    (offset / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub content_y: f64,
    pub caption_y: f64,
    pub opacity: f64,
}

impl HeroFrame {
    pub fn content_style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0); opacity: {:.3};",
            self.content_y, self.opacity
        )
    }

    pub fn caption_style(&self) -> String {
        format!("transform: translate3d(0, {:.2}px, 0);", self.caption_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    content: LinearMap,
    caption: LinearMap,
    fade: LinearMap,
}

impl HeroParallax {
    pub fn sample(&self, offset: f64) -> HeroFrame {
        HeroFrame {
            content_y: self.content.apply(offset),
            caption_y: self.caption.apply(offset),
            opacity: self.fade.apply(offset),
        }
    }
}

impl Default for HeroParallax {
    fn default() -> Self {
        Self {
            content: LinearMap::new((0.0, 500.0), (0.0, -100.0)),
            caption: LinearMap::new((0.0, 500.0), (0.0, -50.0)),
            fade: LinearMap::new((0.0, 400.0), (1.0, 0.0)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() <= SPRING_REST_DELTA
            && self.velocity.abs() <= SPRING_REST_SPEED
    }

    /// Advances by `elapsed_seconds` (capped to one long frame). Returns
    /// `true` while the spring is still moving.
    pub fn step(&mut self, elapsed_seconds: f64) -> bool {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        let mut remaining = elapsed_seconds.clamp(0.0, SPRING_MAX_FRAME_SECONDS);
        while remaining > 0.0 {
            let dt = remaining.min(SPRING_STEP_SECONDS);
            let displacement = self.position - self.target;
            let acceleration =
                (-self.stiffness * displacement - self.damping * self.velocity) / SPRING_MASS;
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
            remaining -= dt;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        true
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
        self.velocity = 0.0;
        self.target = 0.0;
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(PROGRESS_SPRING_STIFFNESS, PROGRESS_SPRING_DAMPING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn linear_map_clamps_outside_domain() {
        let map = LinearMap::new((0.0, 500.0), (0.0, -100.0));

        assert!(approx(map.apply(-20.0), 0.0));
        assert!(approx(map.apply(250.0), -50.0));
        assert!(approx(map.apply(500.0), -100.0));
        assert!(approx(map.apply(5_000.0), -100.0));
    }

    #[test]
    fn degenerate_domain_steps_at_its_edge() {
        let map = LinearMap::new((10.0, 10.0), (0.0, 1.0));

        assert!(approx(map.apply(9.0), 0.0));
        assert!(approx(map.apply(10.0), 1.0));
    }

    #[test]
    fn hero_layers_move_at_different_rates() {
        let hero = HeroParallax::default();

        let frame = hero.sample(250.0);
        assert!(approx(frame.content_y, -50.0));
        assert!(approx(frame.caption_y, -25.0));
        assert!(approx(frame.opacity, 0.375));

        let faded = hero.sample(400.0);
        assert!(approx(faded.opacity, 0.0));
        assert!(approx(faded.content_y, -80.0));
    }

    #[test]
    fn progress_ratio_is_clamped() {
        assert!(approx(progress_ratio(0.0, 3_000.0, 1_000.0), 0.0));
        assert!(approx(progress_ratio(1_000.0, 3_000.0, 1_000.0), 0.5));
        assert!(approx(progress_ratio(2_400.0, 3_000.0, 1_000.0), 1.0));
        assert!(approx(progress_ratio(10.0, 800.0, 1_000.0), 1.0));
    }

    #[test]
    fn spring_lags_then_settles_on_target() {
        let mut spring = Spring::default();
        spring.set_target(1.0);

        assert!(spring.step(FRAME));
        assert!(spring.value() > 0.0);
        assert!(spring.value() < 1.0);

        let mut frames = 0;
        while spring.step(FRAME) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert!(approx(spring.value(), 1.0));
    }

    #[test]
    fn spring_at_rest_reports_settled() {
        let mut spring = Spring::default();

        assert!(!spring.step(FRAME));
        assert!(approx(spring.value(), 0.0));
    }

    #[test]
    fn long_frames_are_capped() {
        let mut capped = Spring::default();
        capped.set_target(1.0);
        capped.step(5.0);

        let mut single = Spring::default();
        single.set_target(1.0);
        single.step(SPRING_MAX_FRAME_SECONDS);

        assert!(approx(capped.value(), single.value()));
    }
}
