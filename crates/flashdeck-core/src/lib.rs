pub mod catalog;
pub mod resolver;
pub mod slug;
pub mod swf;

pub use catalog::{Catalog, CatalogError, GameEntry};
pub use resolver::{EmbedError, ResolveError, SwfHost, expected_path, resolve_and_load};
pub use slug::{Slug, SlugError};
