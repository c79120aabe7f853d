pub const REVEAL_EASE: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub axis: Axis,
    pub offset_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub from_opacity: f64,
    pub from_scale: f64,
}

impl Entrance {
    pub const fn rise(offset_px: f64, duration_s: f64, delay_s: f64) -> Self {
        Self {
            axis: Axis::Vertical,
            offset_px,
            duration_s,
            delay_s,
            from_opacity: 0.0,
            from_scale: 1.0,
        }
    }

    pub fn section(delay_s: f64) -> Self {
        Self::rise(80.0, 0.9, delay_s)
    }

    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            format!(
                "opacity: 1; transform: none; transition: opacity {duration:.2}s {REVEAL_EASE} {delay:.2}s, transform {duration:.2}s {REVEAL_EASE} {delay:.2}s;",
                duration = self.duration_s,
                delay = self.delay_s,
            )
        } else {
            let (x, y) = match self.axis {
                Axis::Vertical => (0.0, self.offset_px),
                Axis::Horizontal => (self.offset_px, 0.0),
            };
            let scale = if self.from_scale == 1.0 {
                String::new()
            } else {
                format!(" scale({})", self.from_scale)
            };
            format!(
                "opacity: {}; transform: translate3d({x:.0}px, {y:.0}px, 0){scale};",
                self.from_opacity
            )
        }
    }
}

pub const HERO_BADGE: Entrance = Entrance {
    from_scale: 0.9,
    ..Entrance::rise(0.0, 0.8, 0.3)
};
pub const HERO_TITLE: Entrance = Entrance::rise(50.0, 1.0, 0.5);
pub const HERO_CAPTION: Entrance = Entrance::rise(30.0, 0.8, 0.8);
pub const HERO_ACTIONS: Entrance = Entrance::rise(30.0, 0.8, 1.1);
pub const HERO_SCROLL_HINT: Entrance = Entrance::rise(0.0, 0.5, 1.5);

/// Slides down from above the viewport; never transparent.
pub const NAVBAR_ENTRANCE: Entrance = Entrance {
    from_opacity: 1.0,
    ..Entrance::rise(-100.0, 0.8, 0.0)
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub step_s: f64,
    pub axis: Axis,
    pub offset_px: f64,
    pub duration_s: f64,
}

pub const GROUP_STAGGER: Stagger = Stagger {
    step_s: 0.12,
    axis: Axis::Vertical,
    offset_px: 40.0,
    duration_s: 0.7,
};

pub const OVERLAY_STAGGER: Stagger = Stagger {
    step_s: 0.08,
    axis: Axis::Vertical,
    offset_px: 30.0,
    duration_s: 0.5,
};

pub const BULLET_STAGGER: Stagger = Stagger {
    step_s: 0.05,
    axis: Axis::Horizontal,
    offset_px: -10.0,
    duration_s: 0.4,
};

impl Stagger {
    pub fn child(&self, index: usize) -> Entrance {
        Entrance {
            axis: self.axis,
            ..Entrance::rise(self.offset_px, self.duration_s, index as f64 * self.step_s)
        }
    }

    pub fn styles(&self, count: usize, parent_revealed: bool) -> Vec<String> {
        (0..count)
            .map(|index| self.child(index).style(parent_revealed))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeterFill {
    pub percent: u8,
}

impl MeterFill {
    const DURATION_S: f64 = 1.4;
    const DELAY_S: f64 = 0.2;

    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            format!(
                "width: {}%; transition: width {:.1}s {REVEAL_EASE} {:.1}s;",
                self.percent.min(100),
                Self::DURATION_S,
                Self::DELAY_S,
            )
        } else {
            "width: 0%;".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_entrance_rises_eighty_pixels() {
        let entrance = Entrance::section(0.2);

        assert_eq!(
            entrance.style(false),
            "opacity: 0; transform: translate3d(0px, 80px, 0);"
        );
        assert_eq!(
            entrance.style(true),
            format!(
                "opacity: 1; transform: none; transition: opacity 0.90s {REVEAL_EASE} 0.20s, transform 0.90s {REVEAL_EASE} 0.20s;"
            )
        );
    }

    #[test]
    fn group_children_are_delayed_by_index() {
        let delays: Vec<f64> = (0..4).map(|index| GROUP_STAGGER.child(index).delay_s).collect();

        assert_eq!(delays.len(), 4);
        for (index, delay) in delays.iter().enumerate() {
            assert!((delay - index as f64 * 0.12).abs() < 1e-12);
        }
        assert!((OVERLAY_STAGGER.child(3).delay_s - 0.24).abs() < 1e-12);
    }

    #[test]
    fn children_stay_hidden_until_parent_reveals() {
        let hidden = GROUP_STAGGER.styles(3, false);
        assert!(hidden.iter().all(|style| style.starts_with("opacity: 0;")));

        let shown = GROUP_STAGGER.styles(3, true);
        assert!(shown[0].contains(" 0.00s;"));
        assert!(shown[2].contains(" 0.24s;"));
    }

    #[test]
    fn bullets_slide_in_horizontally() {
        assert_eq!(
            BULLET_STAGGER.child(1).style(false),
            "opacity: 0; transform: translate3d(-10px, 0px, 0);"
        );
    }

    #[test]
    fn hero_parts_enter_in_sequence() {
        let delays: Vec<f64> = [HERO_BADGE, HERO_TITLE, HERO_CAPTION, HERO_ACTIONS, HERO_SCROLL_HINT]
            .iter()
            .map(|entrance| entrance.delay_s)
            .collect();

        assert_eq!(delays, vec![0.3, 0.5, 0.8, 1.1, 1.5]);
        assert_eq!(
            HERO_BADGE.style(false),
            "opacity: 0; transform: translate3d(0px, 0px, 0) scale(0.9);"
        );
        assert_eq!(
            HERO_TITLE.style(false),
            "opacity: 0; transform: translate3d(0px, 50px, 0);"
        );
    }

    #[test]
    fn navbar_slides_in_without_fading() {
        assert_eq!(
            NAVBAR_ENTRANCE.style(false),
            "opacity: 1; transform: translate3d(0px, -100px, 0);"
        );
        assert!(NAVBAR_ENTRANCE.style(true).contains("transform 0.80s"));
    }

    #[test]
    fn meter_grows_to_its_percentage() {
        let fill = MeterFill { percent: 92 };

        assert_eq!(fill.style(false), "width: 0%;");
        assert_eq!(
            fill.style(true),
            format!("width: 92%; transition: width 1.4s {REVEAL_EASE} 0.2s;")
        );
    }
}
