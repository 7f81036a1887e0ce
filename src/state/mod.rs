//! Application state module

mod forms;
mod notification;
mod wizard;

pub use forms::*;
pub use notification::*;
pub use wizard::*;
