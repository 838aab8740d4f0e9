//! Static catalog of known site sections and the keyword groups routed to them.

pub mod page;
pub mod site;
pub mod table;

pub use page::{PageEntry, RouteGroup};
pub use table::PathRegistry;
