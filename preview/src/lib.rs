// preview: the state machine behind the device preview frame
//
// this crate is deliberately free of dom and wasm dependencies so that the
// webapp can drive it from event handlers while the whole operation set stays
// testable on the host

pub mod device;
pub mod fallback;
pub mod source;
pub mod state;
pub mod zoom;
