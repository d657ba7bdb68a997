pub mod prompt;
pub mod providers;
