//! Tab and custom-content registries.
//!
//! One registry per sheet kind, owned by an explicitly constructed
//! [`SheetRuntime`] that callers inject where needed - there is no ambient
//! module-level singleton. Registration happens at module-load time on the
//! host's event loop; renders only read.

mod registry;
mod types;

pub use registry::SheetRuntime;
pub use types::{
    tab_ids, ContentVisibility, RegisteredContent, RegisteredTab, RegistrationOptions, TabTitle,
};
