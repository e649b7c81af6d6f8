//! Route matching for the site's path space.
//!
//! The table mirrors the site map: a landing page, the journal index and
//! its posts, the events listing, and the retreats listing with detail
//! pages. Anything else is a miss and the caller renders not-found.

/// A matched site route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page (`/`).
    Home,
    /// Journal index (`/blog`).
    Blog,
    /// A single journal post (`/blog/{slug}`).
    BlogPost(String),
    /// Events listing (`/events`).
    Events,
    /// Retreats listing (`/retreats`).
    Retreats,
    /// A single retreat (`/retreats/{slug}`).
    RetreatDetail(String),
}

impl Route {
    /// Matches an absolute site path against the route table.
    ///
    /// A single trailing slash is tolerated (`/blog/` is the journal
    /// index), but empty segments are not: `/blog//` matches nothing,
    /// and only `/` itself is the landing page, never `//`. Returns
    /// `None` for any path outside the table.
    pub fn parse(path: &str) -> Option<Route> {
        let rest = path.strip_prefix('/')?;
        // Dropping the trailing slash must not collapse "//" into "/".
        let rest = rest
            .strip_suffix('/')
            .filter(|stripped| !stripped.is_empty())
            .unwrap_or(rest);

        let segments: Vec<&str> = rest.split('/').collect();
        let route = match segments.as_slice() {
            [""] => Route::Home,
            ["blog"] => Route::Blog,
            ["blog", slug] if !slug.is_empty() => Route::BlogPost((*slug).to_string()),
            ["events"] => Route::Events,
            ["retreats"] => Route::Retreats,
            ["retreats", slug] if !slug.is_empty() => {
                Route::RetreatDetail((*slug).to_string())
            }
            _ => {
                log::debug!("no route matches path '{path}'");
                return None;
            }
        };
        Some(route)
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{slug}"),
            Route::Events => "/events".to_string(),
            Route::Retreats => "/retreats".to_string(),
            Route::RetreatDetail(slug) => format!("/retreats/{slug}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_full_table() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/blog"), Some(Route::Blog));
        assert_eq!(
            Route::parse("/blog/breath-as-anchor"),
            Some(Route::BlogPost("breath-as-anchor".to_string()))
        );
        assert_eq!(Route::parse("/events"), Some(Route::Events));
        assert_eq!(Route::parse("/retreats"), Some(Route::Retreats));
        assert_eq!(
            Route::parse("/retreats/mountain-stillness"),
            Some(Route::RetreatDetail("mountain-stillness".to_string()))
        );
    }

    #[test]
    fn tolerates_one_trailing_slash() {
        assert_eq!(Route::parse("/blog/"), Some(Route::Blog));
        assert_eq!(
            Route::parse("/blog/slow-mornings/"),
            Some(Route::BlogPost("slow-mornings".to_string()))
        );
    }

    #[test]
    fn rejects_paths_outside_the_table() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("//"), None);
        assert_eq!(Route::parse("blog"), None);
        assert_eq!(Route::parse("/unknown"), None);
        assert_eq!(Route::parse("/blog//"), None);
        assert_eq!(Route::parse("/blog/a/b"), None);
        assert_eq!(Route::parse("/events/extra"), None);
    }

    #[test]
    fn path_round_trips() {
        for path in ["/", "/blog", "/blog/a-post", "/events", "/retreats", "/retreats/r"] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.path(), path);
        }
    }
}
