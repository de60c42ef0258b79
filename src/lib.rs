pub mod config;
pub mod consts;
pub mod flows;
pub mod prompt;
pub mod prompts;
pub mod search;
