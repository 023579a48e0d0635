// Console module
// Interactive login and menu loop over line-based input/output

pub mod controller;
pub mod prompt;

pub use controller::{Console, MenuChoice, SessionState};
pub use prompt::Prompter;
