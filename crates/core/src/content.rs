//! Content records backing the studio site.
//!
//! Records mirror the bundled JSON documents (`blogs.json`, `events.json`,
//! `retreats.json`). The catalog owns every record and answers slug
//! lookups for the detail pages; a miss is reported to the caller so the
//! page layer can show its not-found state.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::locale::Localized;

/// A journal article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Stable record identifier.
    pub id: String,
    /// URL path segment addressing this post.
    pub slug: String,
    /// Editorial category shown above the title.
    #[serde(rename = "type")]
    pub kind: String,
    /// Publication date, ISO `YYYY-MM-DD`.
    pub date: String,
    /// Localized title.
    pub title: Localized<String>,
    /// Localized reading-time label.
    pub reading_time: Localized<String>,
    /// Localized body text in the inline markup dialect.
    pub content: Localized<String>,
}

/// A workshop, ceremony, or other one-off gathering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable record identifier.
    pub id: String,
    /// Event category shown above the title.
    #[serde(rename = "type")]
    pub kind: String,
    /// Localized title.
    pub title: Localized<String>,
    /// Localized description.
    pub description: Localized<String>,
    /// Display date label.
    pub date: String,
    /// Display time label.
    pub time: String,
    /// Venue label.
    pub place: String,
    /// External reservation link.
    pub reserve_link: String,
    /// Optional site path to a related journal post.
    #[serde(default)]
    pub blog_link: Option<String>,
}

/// An immersive multi-day retreat offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retreat {
    /// Stable record identifier.
    pub id: String,
    /// URL path segment addressing this retreat.
    pub slug: String,
    /// Localized retreat name.
    pub name: Localized<String>,
    /// Localized date-range label.
    pub dates: Localized<String>,
    /// Localized location label.
    pub place: Localized<String>,
    /// Localized one-line focus.
    pub focus: Localized<String>,
    /// Localized description.
    pub description: Localized<String>,
    /// Price label, shared across languages.
    pub price: String,
    /// Localized benefit bullet points.
    pub benefits: Localized<Vec<String>>,
    /// Localized list of what the price includes.
    pub includes: Localized<Vec<String>>,
    /// Localized daily activities.
    pub activities: Localized<Vec<String>>,
    /// Localized preparation tasks for participants.
    pub tasks: Localized<Vec<String>>,
    /// Localized closing note on what participants take home.
    pub receiving: Localized<String>,
}

/// All site content, addressable by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Journal posts in editorial order.
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    /// Upcoming events in display order.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Retreat offerings in display order.
    #[serde(default)]
    pub retreats: Vec<Retreat>,
}

impl Catalog {
    /// Assembles a catalog from the three per-section JSON documents.
    pub fn from_sources(
        blogs: &str,
        events: &str,
        retreats: &str,
    ) -> Result<Self, ContentError> {
        #[derive(Deserialize)]
        struct Blogs {
            posts: Vec<BlogPost>,
        }
        #[derive(Deserialize)]
        struct Events {
            events: Vec<Event>,
        }
        #[derive(Deserialize)]
        struct Retreats {
            retreats: Vec<Retreat>,
        }

        let blogs: Blogs = serde_json::from_str(blogs)?;
        let events: Events = serde_json::from_str(events)?;
        let retreats: Retreats = serde_json::from_str(retreats)?;

        Ok(Self {
            posts: blogs.posts,
            events: events.events,
            retreats: retreats.retreats,
        })
    }

    /// Resolves a journal post by its slug.
    pub fn post_by_slug(&self, slug: &str) -> Result<&BlogPost, ContentError> {
        self.posts
            .iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| ContentError::slug_not_found(slug))
    }

    /// Resolves a retreat by its slug.
    pub fn retreat_by_slug(&self, slug: &str) -> Result<&Retreat, ContentError> {
        self.retreats
            .iter()
            .find(|retreat| retreat.slug == slug)
            .ok_or_else(|| ContentError::slug_not_found(slug))
    }
}
