pub mod filters;
pub mod package;
pub mod prompts;
pub mod tools;
