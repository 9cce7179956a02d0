use crate::error::InsertError;
use crate::fragments::Fragments;
use crate::params::Params;
use crate::route::Route;
use crate::url;

use log::{debug, trace};

/// A deep link router: a registered scheme plus a ranked collection of route
/// templates.
///
/// Resolving never mutates the router, so a `Router` behind a shared
/// reference can serve any number of threads at once. Registration takes
/// `&mut self`; hosts that replace routes at runtime keep the router in a
/// cell of their choosing and swap it wholesale, so concurrent readers see
/// either the old ranked collection or the new one, never a mix.
///
/// ```rust
/// # fn main() -> Result<(), beckon::InsertError> {
/// let mut router = beckon::Router::new("app");
/// router.insert("profile:{user}")?;
/// router.insert("profile:admin")?;
///
/// // the concrete route outranks the wildcard one
/// let location = router.resolve("app://profile:admin").unwrap();
/// assert_eq!(location.path, "profile:admin");
///
/// let location = router.resolve("app://profile:jack").unwrap();
/// assert_eq!(location.path, "profile:{user}");
/// assert_eq!(location.arguments.get("user"), Some("jack"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Router {
    scheme: String,
    routes: Vec<Route>,
}

impl Router {
    /// Creates a router for the given URL scheme.
    ///
    /// Both `"app"` and `"app://"` are accepted; the separator is not part
    /// of the scheme. Schemes compare case-sensitively during resolve.
    pub fn new(scheme: impl Into<String>) -> Self {
        let mut scheme = scheme.into();
        if scheme.ends_with("://") {
            scheme.truncate(scheme.len() - 3);
        }

        Self {
            scheme,
            routes: Vec::new(),
        }
    }

    /// The registered scheme, without the `://` separator.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Registers a route template.
    ///
    /// Template syntax errors surface here, at registration time, never
    /// during resolve.
    pub fn insert(&mut self, route: &str) -> Result<(), InsertError> {
        let route = Route::parse(route)?;
        self.routes.push(route);
        self.rank();
        Ok(())
    }

    /// Replaces the whole route collection.
    ///
    /// The previous collection is kept untouched if any of the new templates
    /// fails to parse.
    pub fn set_routes<'r>(
        &mut self,
        routes: impl IntoIterator<Item = &'r str>,
    ) -> Result<(), InsertError> {
        self.routes = routes
            .into_iter()
            .map(Route::parse)
            .collect::<Result<_, _>>()?;

        self.rank();
        Ok(())
    }

    /// Returns the registered templates in the order they are tried.
    pub fn routes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.routes.iter().map(Route::raw)
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    // Re-derives the ranked order after every mutation. The sort is stable,
    // so routes with equal wildcard counts keep their registration order,
    // which makes same-specificity overlaps resolve deterministically.
    fn rank(&mut self) {
        self.routes.sort_by_key(Route::wildcards);
    }

    /// Resolves a URL against the registered routes.
    ///
    /// Returns `None` when the scheme differs from the registered one, the
    /// URL has no `://` separator, or no template matches the URL's path
    /// segments. All of these are expected outcomes, not errors.
    pub fn resolve<'p>(&'p self, url: &'p str) -> Option<Location<'p>> {
        self.resolve_with(url, Fragments::new())
    }

    /// Resolves a URL, attaching caller-supplied out-of-band values.
    ///
    /// The fragments are echoed back verbatim on [`Location::fragments`];
    /// they are never merged into the URL arguments.
    pub fn resolve_with<'p>(&'p self, url: &'p str, fragments: Fragments) -> Option<Location<'p>> {
        let (scheme, rest) = url::split_scheme(url)?;
        if scheme != self.scheme {
            debug!("scheme {:?} does not match registered {:?}", scheme, self.scheme);
            return None;
        }

        let path: Vec<&str> = url::path_of(rest).split(':').collect();

        // first match in ranked order wins, remaining candidates are skipped
        let mut arguments = Params::new();
        let route = self
            .routes
            .iter()
            .find(|route| route.matches(&path, &mut arguments))?;
        trace!("{:?} matched {:?}", url, route.raw());

        // trailing pairs come from the original url text; a pair never
        // shadows a placeholder binding with the same key
        let bound = arguments.len();
        for (key, value) in url::pairs(url) {
            arguments.merge_pair(bound, key, value);
        }

        Some(Location {
            path: route.raw(),
            arguments,
            fragments,
        })
    }
}

/// The result of a successful resolve.
#[derive(Debug)]
pub struct Location<'p> {
    /// The raw template string of the matched route, e.g. `profile:{user}`.
    /// Stable across calls, so callers dispatch on it.
    pub path: &'p str,
    /// Placeholder bindings merged with query/fragment pairs.
    pub arguments: Params<'p>,
    /// The caller-supplied values passed to
    /// [`resolve_with`](Router::resolve_with), unmodified.
    pub fragments: Fragments,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES: &[&str] = &[
        "profile:{user}",
        "profile:admin",
        "login",
        "callback",
        "user:list:{userId}:{kind}",
        "user:list",
        "{appId}:user:list:{userId}:{kind}",
    ];

    #[test]
    fn scheme_separator_is_normalized() {
        assert_eq!(Router::new("app").scheme(), "app");
        assert_eq!(Router::new("app://").scheme(), "app");
    }

    #[test]
    fn ranked_concrete_first() {
        let mut router = Router::new("app");
        router.set_routes(ROUTES.iter().copied()).unwrap();

        let ranked: Vec<&str> = router.routes().collect();
        assert_eq!(
            ranked,
            vec![
                "profile:admin",
                "login",
                "callback",
                "user:list",
                "profile:{user}",
                "user:list:{userId}:{kind}",
                "{appId}:user:list:{userId}:{kind}",
            ]
        );
    }

    #[test]
    fn rank_recomputed_on_insert() {
        let mut router = Router::new("app");
        router.insert("profile:{user}").unwrap();
        router.insert("profile:admin").unwrap();

        assert_eq!(
            router.routes().collect::<Vec<_>>(),
            vec!["profile:admin", "profile:{user}"]
        );
    }

    #[test]
    fn set_routes_replaces() {
        let mut router = Router::new("app");
        router.insert("login").unwrap();
        router.set_routes(["logout"]).unwrap();

        assert_eq!(router.routes().collect::<Vec<_>>(), vec!["logout"]);
    }

    #[test]
    fn set_routes_keeps_old_collection_on_error() {
        let mut router = Router::new("app");
        router.insert("login").unwrap();

        assert_eq!(
            router.set_routes(["ok", "bad:{}"]),
            Err(InsertError::UnnamedParam)
        );
        assert_eq!(router.routes().collect::<Vec<_>>(), vec!["login"]);
    }

    #[test]
    fn same_specificity_ties_keep_registration_order() {
        let mut router = Router::new("app");
        router.set_routes(["{a}:x", "{b}:x"]).unwrap();
        assert_eq!(router.routes().collect::<Vec<_>>(), vec!["{a}:x", "{b}:x"]);

        // both match; the earlier registration wins
        let location = router.resolve("app://1:x").unwrap();
        assert_eq!(location.path, "{a}:x");
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }
}
