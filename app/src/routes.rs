//! The site's navigation table and the rules for deciding which entry is active.
//!
//! Both the desktop bar and the mobile panel of the header render [`ROUTES`] in
//! order, and the router registers one page per entry.

/// One navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub label: &'static str,
}

impl RouteDescriptor {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    /// Whether this route should be highlighted for `current`.
    pub fn is_active(&self, current: Option<&str>) -> bool {
        is_active(current, self.path)
    }

    /// The path segment used by the router; empty for the root route.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new("/", "Home"),
    RouteDescriptor::new("/our-work", "Our Work"),
    RouteDescriptor::new("/events", "Events"),
    RouteDescriptor::new("/blog", "Blog"),
    RouteDescriptor::new("/members", "Members"),
    RouteDescriptor::new("/contact", "Contact"),
];

/// Returns `true` when `current` is exactly `route` or a page nested below it.
///
/// Nesting requires a `/` separator, so `/events-archive` does not activate
/// `/events`. The root route `/` only ever matches itself. A missing path is
/// never active.
pub fn is_active(current: Option<&str>, route: &str) -> bool {
    let Some(current) = current else {
        return false;
    };
    current == route
        || current
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// The first route in display order that is active for `current`.
pub fn active_route(current: Option<&str>) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.is_active(current))
}

/// Exact lookup by path.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}
