pub mod events;
pub mod page;

pub use events::{dispatch_click, CartAction, Element};
pub use page::MemoryPage;
