//! The site's bundled content.
//!
//! The JSON documents under `data/` are compiled into the binary and
//! parsed once on first use, mirroring how the original site ships its
//! content alongside the pages. There is no other content source.

use ananta_core::Catalog;
use once_cell::sync::Lazy;

static BLOGS: &str = include_str!("../data/blogs.json");
static EVENTS: &str = include_str!("../data/events.json");
static RETREATS: &str = include_str!("../data/retreats.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_sources(BLOGS, EVENTS, RETREATS)
        .expect("bundled content documents are valid")
});

/// The preloaded content catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
