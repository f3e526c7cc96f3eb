pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod nav;
pub mod output;
pub mod selector;
pub mod session;
pub mod state;
pub mod urlcodec;

#[cfg(test)]
mod tests;
