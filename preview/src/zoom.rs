// zoom handling for the preview frame
//
// the level is stored as an integer percentage so the clamp bounds and the
// displayed value stay exact under repeated stepping; the css transform
// consumes the factor form

pub const MIN_ZOOM_PERCENT: u16 = 50;
pub const MAX_ZOOM_PERCENT: u16 = 200;
pub const DEFAULT_ZOOM_PERCENT: u16 = 100;
pub const ZOOM_STEP_PERCENT: u16 = 10;

// zoom percentage, guaranteed to be within [50, 200].  clamping, not error,
// is the policy at the boundary, so every constructed value is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zoom(u16);

impl Zoom {
    pub fn new(percent: u16) -> Self {
        Zoom(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    // scale factor applied to the frame, in [0.5, 2.0]
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn zoom_in(self) -> Self {
        Zoom::new(self.0 + ZOOM_STEP_PERCENT)
    }

    pub fn zoom_out(self) -> Self {
        Zoom::new(self.0.saturating_sub(ZOOM_STEP_PERCENT))
    }

    pub fn is_min(self) -> bool {
        self.0 == MIN_ZOOM_PERCENT
    }

    pub fn is_max(self) -> bool {
        self.0 == MAX_ZOOM_PERCENT
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom(DEFAULT_ZOOM_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_hundred_percent() {
        let zoom = Zoom::default();
        assert_eq!(zoom.percent(), 100);
        assert_eq!(zoom.factor(), 1.0);
    }

    #[test]
    fn steps_move_by_ten_percent() {
        let zoom = Zoom::default().zoom_in();
        assert_eq!(zoom.percent(), 110);

        let zoom = zoom.zoom_out().zoom_out();
        assert_eq!(zoom.percent(), 90);
    }

    #[test]
    fn construction_clamps_out_of_range_values() {
        assert_eq!(Zoom::new(10).percent(), MIN_ZOOM_PERCENT);
        assert_eq!(Zoom::new(500).percent(), MAX_ZOOM_PERCENT);
        assert_eq!(Zoom::new(130).percent(), 130);
    }

    #[test]
    fn stepping_is_idempotent_at_the_bounds() {
        let mut zoom = Zoom::new(MIN_ZOOM_PERCENT);
        for _ in 0..4 {
            zoom = zoom.zoom_out();
        }
        assert_eq!(zoom.percent(), MIN_ZOOM_PERCENT);
        assert!(zoom.is_min());

        let mut zoom = Zoom::new(MAX_ZOOM_PERCENT);
        for _ in 0..4 {
            zoom = zoom.zoom_in();
        }
        assert_eq!(zoom.percent(), MAX_ZOOM_PERCENT);
        assert!(zoom.is_max());
    }

    #[test]
    fn factor_matches_percent() {
        assert_eq!(Zoom::new(50).factor(), 0.5);
        assert_eq!(Zoom::new(130).factor(), 1.3);
        assert_eq!(Zoom::new(200).factor(), 2.0);
    }

    #[test]
    fn any_step_sequence_stays_in_range() {
        let mut zoom = Zoom::default();
        let steps = [true, false, true, true, true, true, true, true, true, false, true];

        for step_in in steps {
            zoom = if step_in { zoom.zoom_in() } else { zoom.zoom_out() };
            assert!(zoom.percent() >= MIN_ZOOM_PERCENT);
            assert!(zoom.percent() <= MAX_ZOOM_PERCENT);
        }
    }
}
