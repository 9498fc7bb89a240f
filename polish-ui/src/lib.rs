pub mod api;
pub mod components;
pub mod editor;
pub mod interop;

pub use api::*;
pub use components::*;
pub use editor::Editor;
pub use interop::*;
