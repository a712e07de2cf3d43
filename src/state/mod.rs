pub mod alerts;
pub mod inputs;
pub mod navigator;

pub use alerts::{Alert, Alerts};
pub use inputs::{InputId, TextInputs};
pub use navigator::{Activation, Navigator, NavigatorOptions, Selection};
