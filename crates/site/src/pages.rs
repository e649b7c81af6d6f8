//! Page view models.
//!
//! Each view is the serializable structure a presentation layer needs to
//! draw one page. Building a view resolves catalog records, formats dates
//! for the requested language, and renders article bodies into styled
//! spans; the presentation layer maps those spans to visual emphasis.

use ananta_core::{Catalog, ContentError, Lang, Paragraph, render};
use serde::Serialize;

use crate::dates::format_date;
use crate::routes::Route;
use crate::strings::{HomeStrings, ui_strings};

/// A journal post ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostView {
    /// Post slug.
    pub slug: String,
    /// Editorial category label.
    pub kind: String,
    /// Localized title.
    pub title: String,
    /// Display-formatted publication date.
    pub date: String,
    /// Localized reading-time label.
    pub reading_time: String,
    /// Rendered body paragraphs.
    pub body: Vec<Paragraph>,
}

impl BlogPostView {
    /// Builds the view for the post addressed by `slug`.
    pub fn build(catalog: &Catalog, slug: &str, lang: Lang) -> Result<Self, ContentError> {
        let post = catalog.post_by_slug(slug)?;
        Ok(Self {
            slug: post.slug.clone(),
            kind: post.kind.clone(),
            title: post.title.get(lang).clone(),
            date: format_date(&post.date, lang),
            reading_time: post.reading_time.get(lang).clone(),
            body: render(post.content.get(lang)),
        })
    }
}

/// A journal teaser on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogTeaser {
    /// Post slug.
    pub slug: String,
    /// Editorial category label.
    pub kind: String,
    /// Localized title.
    pub title: String,
    /// Display-formatted publication date.
    pub date: String,
    /// Localized reading-time label.
    pub reading_time: String,
}

/// The journal index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogIndexView {
    /// Teasers in editorial order.
    pub posts: Vec<BlogTeaser>,
}

impl BlogIndexView {
    /// Builds the journal index.
    pub fn build(catalog: &Catalog, lang: Lang) -> Self {
        let posts = catalog
            .posts
            .iter()
            .map(|post| BlogTeaser {
                slug: post.slug.clone(),
                kind: post.kind.clone(),
                title: post.title.get(lang).clone(),
                date: format_date(&post.date, lang),
                reading_time: post.reading_time.get(lang).clone(),
            })
            .collect();
        Self { posts }
    }
}

/// One event card on the events page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Event category label.
    pub kind: String,
    /// Localized title.
    pub title: String,
    /// Localized description.
    pub description: String,
    /// Display date label.
    pub date: String,
    /// Display time label.
    pub time: String,
    /// Venue label.
    pub place: String,
    /// External reservation link.
    pub reserve_link: String,
    /// Optional site path to a related journal post.
    pub blog_link: Option<String>,
}

/// The events listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsView {
    /// Event cards in display order.
    pub events: Vec<EventView>,
}

impl EventsView {
    /// Builds the events listing.
    pub fn build(catalog: &Catalog, lang: Lang) -> Self {
        let events = catalog
            .events
            .iter()
            .map(|event| EventView {
                kind: event.kind.clone(),
                title: event.title.get(lang).clone(),
                description: event.description.get(lang).clone(),
                date: event.date.clone(),
                time: event.time.clone(),
                place: event.place.clone(),
                reserve_link: event.reserve_link.clone(),
                blog_link: event.blog_link.clone(),
            })
            .collect();
        Self { events }
    }
}

/// One retreat card on the retreats page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetreatCard {
    /// Retreat slug.
    pub slug: String,
    /// Localized name.
    pub name: String,
    /// Localized date-range label.
    pub dates: String,
    /// Localized location label.
    pub place: String,
    /// Localized one-line focus.
    pub focus: String,
    /// Localized description.
    pub description: String,
    /// Price label.
    pub price: String,
}

/// The retreats listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetreatsView {
    /// Retreat cards in display order.
    pub retreats: Vec<RetreatCard>,
}

impl RetreatsView {
    /// Builds the retreats listing.
    pub fn build(catalog: &Catalog, lang: Lang) -> Self {
        let retreats = catalog
            .retreats
            .iter()
            .map(|retreat| RetreatCard {
                slug: retreat.slug.clone(),
                name: retreat.name.get(lang).clone(),
                dates: retreat.dates.get(lang).clone(),
                place: retreat.place.get(lang).clone(),
                focus: retreat.focus.get(lang).clone(),
                description: retreat.description.get(lang).clone(),
                price: retreat.price.clone(),
            })
            .collect();
        Self { retreats }
    }
}

/// A titled list section on the retreat detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetreatSection {
    /// Section heading.
    pub label: String,
    /// Bullet items.
    pub items: Vec<String>,
}

/// A single retreat in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetreatDetailView {
    /// Card fields shared with the listing page.
    #[serde(flatten)]
    pub card: RetreatCard,
    /// Benefits, inclusions, activities, and preparation sections.
    pub sections: Vec<RetreatSection>,
    /// Closing note on what participants take home.
    pub receiving: String,
}

impl RetreatDetailView {
    /// Builds the view for the retreat addressed by `slug`.
    pub fn build(catalog: &Catalog, slug: &str, lang: Lang) -> Result<Self, ContentError> {
        let retreat = catalog.retreat_by_slug(slug)?;
        let labels = ui_strings(lang).retreat_detail;
        let sections = vec![
            RetreatSection {
                label: labels.benefits.to_string(),
                items: retreat.benefits.get(lang).clone(),
            },
            RetreatSection {
                label: labels.includes.to_string(),
                items: retreat.includes.get(lang).clone(),
            },
            RetreatSection {
                label: labels.activities.to_string(),
                items: retreat.activities.get(lang).clone(),
            },
            RetreatSection {
                label: labels.preparation.to_string(),
                items: retreat.tasks.get(lang).clone(),
            },
        ];

        Ok(Self {
            card: RetreatCard {
                slug: retreat.slug.clone(),
                name: retreat.name.get(lang).clone(),
                dates: retreat.dates.get(lang).clone(),
                place: retreat.place.get(lang).clone(),
                focus: retreat.focus.get(lang).clone(),
                description: retreat.description.get(lang).clone(),
                price: retreat.price.clone(),
            },
            sections,
            receiving: retreat.receiving.get(lang).clone(),
        })
    }
}

/// View data for any routed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum PageView {
    /// The landing page, carrying the static copy for the requested
    /// language.
    Home(&'static HomeStrings),
    /// The journal index.
    Blog(BlogIndexView),
    /// A single journal post.
    BlogPost(BlogPostView),
    /// The events listing.
    Events(EventsView),
    /// The retreats listing.
    Retreats(RetreatsView),
    /// A single retreat.
    RetreatDetail(RetreatDetailView),
}

/// Resolves a site path into its page view.
///
/// Unknown paths surface [`ContentError::UnknownRoute`]; detail paths
/// whose slug misses the catalog surface [`ContentError::SlugNotFound`].
/// Both let the caller draw its not-found page.
pub fn resolve_page(
    catalog: &Catalog,
    path: &str,
    lang: Lang,
) -> Result<PageView, ContentError> {
    let Some(route) = Route::parse(path) else {
        return Err(ContentError::unknown_route(path));
    };

    let view = match route {
        Route::Home => PageView::Home(&ui_strings(lang).home),
        Route::Blog => PageView::Blog(BlogIndexView::build(catalog, lang)),
        Route::BlogPost(slug) => {
            PageView::BlogPost(BlogPostView::build(catalog, &slug, lang)?)
        }
        Route::Events => PageView::Events(EventsView::build(catalog, lang)),
        Route::Retreats => PageView::Retreats(RetreatsView::build(catalog, lang)),
        Route::RetreatDetail(slug) => {
            PageView::RetreatDetail(RetreatDetailView::build(catalog, &slug, lang)?)
        }
    };
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use ananta_core::SpanStyle;

    #[test]
    fn blog_post_view_renders_body_and_date() {
        let view = BlogPostView::build(catalog(), "breath-as-anchor", Lang::En).unwrap();
        assert_eq!(view.title, "Breath as Anchor");
        assert_eq!(view.date, "January 12, 2026");
        assert!(view.body.len() > 1, "body should have paragraphs");
        assert!(
            view.body
                .iter()
                .flat_map(|p| p.spans.iter())
                .any(|s| s.style == SpanStyle::Bold),
            "sample body should exercise bold markup"
        );
    }

    #[test]
    fn blog_post_view_localizes() {
        let view = BlogPostView::build(catalog(), "breath-as-anchor", Lang::Es).unwrap();
        assert_eq!(view.title, "La respiración como ancla");
        assert_eq!(view.date, "12 de enero de 2026");
    }

    #[test]
    fn missing_slug_surfaces_not_found() {
        let err = BlogPostView::build(catalog(), "nope", Lang::En).unwrap_err();
        assert!(matches!(err, ContentError::SlugNotFound { .. }));
        let err = RetreatDetailView::build(catalog(), "nope", Lang::En).unwrap_err();
        assert!(matches!(err, ContentError::SlugNotFound { .. }));
    }

    #[test]
    fn retreat_detail_sections_follow_the_language() {
        let view =
            RetreatDetailView::build(catalog(), "mountain-stillness", Lang::Es).unwrap();
        assert_eq!(view.sections.len(), 4);
        assert_eq!(view.sections[0].label, "Beneficios");
        assert_eq!(view.sections[3].label, "Preparación");
        assert!(!view.receiving.is_empty());
    }

    #[test]
    fn listings_cover_every_record() {
        let cat = catalog();
        assert_eq!(BlogIndexView::build(cat, Lang::En).posts.len(), cat.posts.len());
        assert_eq!(EventsView::build(cat, Lang::En).events.len(), cat.events.len());
        assert_eq!(
            RetreatsView::build(cat, Lang::Es).retreats.len(),
            cat.retreats.len()
        );
    }

    #[test]
    fn resolve_page_walks_the_route_table() {
        let cat = catalog();
        assert!(matches!(
            resolve_page(cat, "/", Lang::En).unwrap(),
            PageView::Home(_)
        ));
        assert!(matches!(
            resolve_page(cat, "/blog", Lang::En).unwrap(),
            PageView::Blog(_)
        ));
        assert!(matches!(
            resolve_page(cat, "/blog/breath-as-anchor", Lang::Es).unwrap(),
            PageView::BlogPost(_)
        ));
        assert!(matches!(
            resolve_page(cat, "/events", Lang::En).unwrap(),
            PageView::Events(_)
        ));
        assert!(matches!(
            resolve_page(cat, "/retreats/mountain-stillness", Lang::En).unwrap(),
            PageView::RetreatDetail(_)
        ));
    }

    #[test]
    fn home_view_carries_the_language_copy() {
        let cat = catalog();
        let PageView::Home(home) = resolve_page(cat, "/", Lang::Es).unwrap() else {
            panic!("expected the landing page view");
        };
        assert_eq!(home.hero.title, "Donde comienza lo infinito.");
        assert_eq!(home.schedule.section_label, "Ritmo semanal");

        let PageView::Home(home) = resolve_page(cat, "/", Lang::En).unwrap() else {
            panic!("expected the landing page view");
        };
        assert_eq!(home.hero.title, "Where the infinite begins.");

        let json = serde_json::to_value(&PageView::Home(home)).unwrap();
        assert_eq!(json["page"], "home");
        assert_eq!(json["hero"]["ctaSchedule"], "View Schedule");
    }

    #[test]
    fn page_views_serialize_with_a_page_tag() {
        let view = resolve_page(catalog(), "/blog", Lang::En).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["page"], "blog");
        assert!(json["posts"].is_array());
    }

    #[test]
    fn resolve_page_reports_route_and_slug_misses() {
        let cat = catalog();
        assert!(matches!(
            resolve_page(cat, "/nowhere", Lang::En).unwrap_err(),
            ContentError::UnknownRoute { .. }
        ));
        assert!(matches!(
            resolve_page(cat, "/blog/nope", Lang::En).unwrap_err(),
            ContentError::SlugNotFound { .. }
        ));
    }
}
