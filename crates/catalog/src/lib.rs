//! Menu domain for the Luna Bistro site.
//!
//! Holds everything the rendering layer consumes but does not own: the
//! category enumeration, the immutable menu catalog and the view-state
//! holder for the active category. No UI framework types leak in here,
//! so the whole crate tests on the host.

pub mod category;
pub mod entry;
pub mod error;
pub mod menu;
pub mod selector;

pub use category::Category;
pub use entry::MenuEntry;
pub use error::CatalogError;
pub use menu::MenuCatalog;
pub use selector::CategorySelector;
