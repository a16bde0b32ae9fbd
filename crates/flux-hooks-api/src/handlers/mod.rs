pub mod events;
pub mod page;
pub mod webhook;

pub use events::*;
pub use page::*;
pub use webhook::*;
