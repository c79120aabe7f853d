#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    offset: f64,
}

impl ScrollSample {
    pub fn new(offset: f64) -> Self {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        Self { offset }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn offscreen() -> Self {
        Self {
            x: -1000.0,
            y: -1000.0,
        }
    }
}

impl Default for PointerSample {
    fn default() -> Self {
        Self::offscreen()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub scroll: ScrollSample,
    pub pointer: PointerSample,
}

#[derive(Clone, Debug, Default)]
pub struct Telemetry {
    scroll: ScrollSample,
    pointer: PointerSample,
    pending: bool,
}

impl Telemetry {
    /// Returns `true` when this sample opened a new batch and the caller
    /// should request an animation frame.
    pub fn record_scroll(&mut self, sample: ScrollSample) -> bool {
        self.scroll = sample;
        self.open_batch()
    }

    pub fn record_pointer(&mut self, sample: PointerSample) -> bool {
        self.pointer = sample;
        self.open_batch()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn take_frame(&mut self) -> Option<FrameInput> {
        if !self.pending {
            return None;
        }

        self.pending = false;
        Some(self.latest())
    }

    pub fn latest(&self) -> FrameInput {
        FrameInput {
            scroll: self.scroll,
            pointer: self.pointer,
        }
    }

    fn open_batch(&mut self) -> bool {
        let opened = !self.pending;
        self.pending = true;
        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_invalid_offsets_clamp_to_zero() {
        assert_eq!(ScrollSample::new(-35.0).offset(), 0.0);
        assert_eq!(ScrollSample::new(f64::NAN).offset(), 0.0);
        assert_eq!(ScrollSample::new(412.5).offset(), 412.5);
    }

    #[test]
    fn burst_of_events_requests_a_single_frame() {
        let mut telemetry = Telemetry::default();

        assert!(telemetry.record_scroll(ScrollSample::new(10.0)));
        assert!(!telemetry.record_scroll(ScrollSample::new(20.0)));
        assert!(!telemetry.record_pointer(PointerSample { x: 4.0, y: 8.0 }));
        assert!(!telemetry.record_scroll(ScrollSample::new(30.0)));

        let frame = telemetry.take_frame().expect("batch is pending");
        assert_eq!(frame.scroll.offset(), 30.0);
        assert_eq!(frame.pointer, PointerSample { x: 4.0, y: 8.0 });
        assert!(telemetry.take_frame().is_none());

        assert!(telemetry.record_scroll(ScrollSample::new(31.0)));
    }

    #[test]
    fn pointer_starts_offscreen() {
        let telemetry = Telemetry::default();

        assert_eq!(telemetry.latest().pointer, PointerSample::offscreen());
        assert!(!telemetry.is_pending());
    }
}
