use crate::device::{DeviceKind, Dimensions};
use crate::source::{AddressError, DEFAULT_ADDRESS, PreviewSource, resolve_address};
use crate::zoom::Zoom;

// the preview controller
//
// owns the device profile, the optional screen override, the zoom level, and
// the content source.  every operation is a total function over these four
// fields; the ui recomputes geometry() after each one simply by re-rendering.
// there is exactly one of these, owned by the viewer page for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    device: DeviceKind,
    screen_override: Option<Dimensions>,
    zoom: Zoom,
    source: PreviewSource,
}

impl PreviewState {
    pub fn new() -> Self {
        PreviewState {
            device: DeviceKind::Mobile,
            screen_override: None,
            zoom: Zoom::default(),
            source: PreviewSource::Remote(DEFAULT_ADDRESS.to_owned()),
        }
    }

    pub fn device(&self) -> DeviceKind {
        self.device
    }

    pub fn screen_override(&self) -> Option<Dimensions> {
        self.screen_override
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn source(&self) -> &PreviewSource {
        &self.source
    }

    pub fn select_device(&mut self, device: DeviceKind) {
        self.device = device;
    }

    // the selector emits "WxH" strings or "" for the device default; malformed
    // values also clear the override
    pub fn set_screen_override(&mut self, selection: &str) {
        self.screen_override = Dimensions::parse(selection);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    // resolve the entered address and point the frame at it.  an empty entry
    // is the normal route to the offline document; a rejected address leaves
    // the state untouched so the caller can fall back explicitly.
    pub fn load(&mut self, raw: &str) -> Result<(), AddressError> {
        self.source = resolve_address(raw)?;
        Ok(())
    }

    pub fn load_fallback(&mut self) {
        self.source = PreviewSource::Fallback;
    }

    // pure function of the current state; the override wins over the device
    // default when present
    pub fn geometry(&self) -> FrameGeometry {
        let Dimensions { width, height } = self
            .screen_override
            .unwrap_or_else(|| self.device.dimensions());

        FrameGeometry {
            width,
            height,
            scale: self.zoom.factor(),
        }
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        PreviewState::new()
    }
}

// what the frame presentation consumes: the effective pixel size plus the
// scale transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_a_mobile_frame_at_full_zoom() {
        let state = PreviewState::new();

        assert_eq!(state.device(), DeviceKind::Mobile);
        assert_eq!(state.screen_override(), None);
        assert_eq!(state.zoom().percent(), 100);
        assert_eq!(
            state.source(),
            &PreviewSource::Remote(DEFAULT_ADDRESS.to_owned())
        );
    }

    #[test]
    fn device_selection_drives_geometry() {
        let mut state = PreviewState::new();

        for device in DeviceKind::ALL {
            state.select_device(device);
            let geometry = state.geometry();
            assert_eq!(geometry.width, device.dimensions().width);
            assert_eq!(geometry.height, device.dimensions().height);
        }
    }

    #[test]
    fn override_wins_over_any_device_until_cleared() {
        let mut state = PreviewState::new();
        state.set_screen_override("800x600");

        for device in DeviceKind::ALL {
            state.select_device(device);
            let geometry = state.geometry();
            assert_eq!((geometry.width, geometry.height), (800, 600));
        }

        state.set_screen_override("");
        let geometry = state.geometry();
        assert_eq!(
            (geometry.width, geometry.height),
            (
                DeviceKind::Desktop.dimensions().width,
                DeviceKind::Desktop.dimensions().height
            )
        );
    }

    #[test]
    fn malformed_override_clears_rather_than_errors() {
        let mut state = PreviewState::new();
        state.set_screen_override("800x600");
        state.set_screen_override("garbage");

        assert_eq!(state.screen_override(), None);
    }

    #[test]
    fn geometry_carries_the_zoom_factor() {
        let mut state = PreviewState::new();
        state.zoom_in();

        let geometry = state.geometry();
        assert_eq!(geometry.scale, 1.1);
        assert_eq!((geometry.width, geometry.height), (375, 667));
    }

    #[test]
    fn empty_loads_show_the_offline_document() {
        let mut state = PreviewState::new();

        state.load("").unwrap();
        assert!(state.source().is_fallback());

        state.load("example.com").unwrap();
        state.load("   ").unwrap();
        assert!(state.source().is_fallback());
    }

    #[test]
    fn loads_default_the_scheme_and_preserve_explicit_ones() {
        let mut state = PreviewState::new();

        state.load("example.com").unwrap();
        assert_eq!(state.source().address(), Some("https://example.com"));

        state.load("http://example.com").unwrap();
        assert_eq!(state.source().address(), Some("http://example.com"));
    }

    #[test]
    fn rejected_loads_leave_the_state_for_the_caller() {
        let mut state = PreviewState::new();
        state.load("example.com").unwrap();

        let err = state.load("bad url with spaces").unwrap_err();
        assert_eq!(err, AddressError::Whitespace);
        // untouched until the caller decides
        assert_eq!(state.source().address(), Some("https://example.com"));

        // the caller's recovery: show the offline document
        state.load_fallback();
        assert!(state.source().is_fallback());
    }

    #[test]
    fn three_steps_in_reads_130_percent() {
        let mut state = PreviewState::new();

        state.zoom_in();
        state.zoom_in();
        state.zoom_in();

        assert_eq!(state.zoom().percent(), 130);
        assert_eq!(state.geometry().scale, 1.3);
        assert_eq!(format!("{}%", state.zoom().percent()), "130%");
    }

    #[test]
    fn ten_steps_out_clamp_at_50_percent() {
        let mut state = PreviewState::new();
        state.zoom_in();
        state.zoom_in();
        state.zoom_in();

        for _ in 0..10 {
            state.zoom_out();
        }

        assert_eq!(state.zoom().percent(), 50);
        assert_eq!(state.geometry().scale, 0.5);
        assert_eq!(format!("{}%", state.zoom().percent()), "50%");
    }
}
