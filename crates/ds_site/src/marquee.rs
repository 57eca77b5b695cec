/// Endless left-scrolling banner. The text is repeated so that shifting it by
/// half its width lands on an identical frame, which makes the loop seamless.
#[derive(Debug, Clone)]
pub struct Marquee {
    period: f64,
    repeats: usize,
}

impl Marquee {
    pub fn new(period: f64, repeats: usize) -> Self {
        Self {
            period,
            repeats: repeats.max(2),
        }
    }

    pub fn text(&self, text: &str) -> String {
        format!("{text} •    ").repeat(self.repeats)
    }

    /// Horizontal offset in points, always in `(-half_width, 0]`.
    pub fn offset(&self, now: f64, half_width: f32) -> f32 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let progress = (now.rem_euclid(self.period) / self.period) as f32;
        -progress * half_width
    }
}
