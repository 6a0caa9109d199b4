pub mod fee;
pub(crate) mod html;

pub use html::*;
