pub mod alerts;
pub mod file_select;
pub mod general;
pub mod prompt;

pub use file_select::FileSelect;
pub use prompt::TextPrompt;
