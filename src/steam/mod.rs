//! 물/증기 물성 공급자 모듈.

pub mod if97;
pub mod properties;

pub use if97::{saturation_pressure_bar, If97Steam};
pub use properties::{Property, PropertyError, PropertyInput, PropertyResult, SteamProperties};
