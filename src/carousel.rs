#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_ms: u32,
    pub looped: bool,
    pub clickable_pagination: bool,
    pub space_between_px: u32,
    /// `(min viewport width, slides per view)`, ascending.
    pub breakpoints: Vec<(f64, usize)>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_ms: 3_500,
            looped: true,
            clickable_pagination: true,
            space_between_px: 30,
            breakpoints: vec![(0.0, 1), (768.0, 2), (1200.0, 3)],
        }
    }
}

impl CarouselConfig {
    pub fn slides_per_view(&self, viewport_width: f64) -> usize {
        self.breakpoints
            .iter()
            .rev()
            .find(|(min_width, _)| viewport_width >= *min_width)
            .map(|(_, slides)| *slides)
            .unwrap_or(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    index: usize,
    looped: bool,
    skip_next_autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize, per_view: usize, looped: bool) -> Self {
        let mut carousel = Self {
            len,
            per_view: 1,
            index: 0,
            looped,
            skip_next_autoplay: false,
        };
        carousel.set_per_view(per_view);
        carousel
    }

    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.clamp(1, self.len.max(1));
        self.index = self.index.min(self.page_count().saturating_sub(1));
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn current_page(&self) -> usize {
        self.index
    }

    /// One bullet per slide when looping, otherwise one per reachable start
    /// position.
    pub fn page_count(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        if self.looped {
            self.len
        } else {
            self.len - self.per_view + 1
        }
    }

    pub fn visible_slides(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }

        (0..self.per_view)
            .map(|offset| self.index + offset)
            .filter(|slide| self.looped || *slide < self.len)
            .map(|slide| slide % self.len)
            .collect()
    }

    pub fn advance(&mut self) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        self.index = (self.index + 1) % pages;
    }

    /// Autoplay interval fired. A page selected by the user since the last
    /// tick holds for one more interval.
    pub fn autoplay_tick(&mut self) {
        if self.skip_next_autoplay {
            self.skip_next_autoplay = false;
            return;
        }
        self.advance();
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= self.page_count() {
            return false;
        }
        self.index = page;
        self.skip_next_autoplay = true;
        true
    }
}
