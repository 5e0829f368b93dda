//! Output rendering for generated catalogs.
//!
//! [`render_document`] produces the YAML content document consumed by the
//! game plugin; [`render_effective_config`] dumps the resolved configuration.

pub mod document;
pub mod effective;
pub mod writer;

pub use document::render_document;
pub use effective::render_effective_config;
