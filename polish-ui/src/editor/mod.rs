pub mod controller;
pub mod debounce;
pub mod session;
mod view;

#[cfg(test)]
mod scenarios;

pub use view::Editor;
