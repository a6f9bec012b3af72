//! Interactive component collection as a plain state machine. Terminal
//! prompting lives in `prompt::components`.

mod components;
mod error;
mod shortcode;

pub use components::{Answer, ComponentFlow, Decision, US_LOCATIONS};
pub use error::*;
pub use shortcode::{MAX_SHORT_CODE_LEN, suggest_short_code, validate_short_code};
