#![deny(missing_docs)]
//! Ananta site engine: routing, bundled content, and page view models.

/// Bundled content catalog.
pub mod catalog;
/// Per-locale date formatting.
pub mod dates;
/// HTML emission for rendered article bodies.
pub mod html;
/// Page view models.
pub mod pages;
/// Route matching for site paths.
pub mod routes;
/// Static UI string tables.
pub mod strings;

pub use catalog::catalog;
pub use dates::format_date;
pub use html::paragraphs_to_html;
pub use pages::{
    BlogIndexView, BlogPostView, BlogTeaser, EventView, EventsView, PageView, RetreatCard,
    RetreatDetailView, RetreatSection, RetreatsView, resolve_page,
};
pub use routes::Route;
pub use strings::{
    HomeStrings, NavStrings, OfferingStrings, RetreatDetailStrings, SectionStrings, UiStrings,
    ui_strings,
};
