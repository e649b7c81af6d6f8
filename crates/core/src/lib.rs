#![deny(missing_docs)]
//! Ananta core: content records, locales, and inline markup rendering.

/// Content records and the slug-addressed catalog.
pub mod content;
/// Core error types.
pub mod error;
/// Inline markup scanning and span emission.
pub mod inline;
/// Language tags and localized value pairs.
pub mod locale;

pub use content::{BlogPost, Catalog, Event, Retreat};
pub use error::ContentError;
pub use inline::{Paragraph, Span, SpanStyle, render};
pub use locale::{Lang, Localized};
