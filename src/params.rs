use std::{fmt, slice};

/// A single URL argument, consisting of a key and a value.
///
/// Keys come either from a placeholder name in the matched route, or from a
/// query/fragment pair in the URL itself; values are always slices of the
/// resolved URL.
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone)]
struct Param<'p> {
    key: &'p str,
    value: &'p str,
}

/// The arguments extracted by a successful resolve.
///
/// ```rust
/// let mut router = beckon::Router::new("app");
/// router.insert("user:list:{id}").unwrap();
/// let location = router.resolve("app://user:list:7?page=2").unwrap();
///
/// // Iterate through the keys and values.
/// for (key, value) in location.arguments.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// assert_eq!(location.arguments.get("id"), Some("7"));
/// assert_eq!(location.arguments.get("page"), Some("2"));
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone, Default)]
pub struct Params<'p> {
    inner: Vec<Param<'p>>,
}

impl<'p> Params<'p> {
    pub(crate) fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value of the first argument registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'p str> {
        let key = key.as_ref();
        self.inner
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Returns an iterator over the arguments, in binding order: placeholder
    /// bindings first, query/fragment pairs after.
    pub fn iter(&self) -> ParamsIter<'_, 'p> {
        ParamsIter {
            inner: self.inner.iter(),
        }
    }

    /// Appends a key value pair to the list.
    pub(crate) fn push(&mut self, key: &'p str, value: &'p str) {
        self.inner.push(Param { key, value });
    }

    // Truncates the list to the given length. Used by the matcher to roll
    // back bindings from a candidate that failed on a later segment.
    pub(crate) fn truncate(&mut self, n: usize) {
        self.inner.truncate(n);
    }

    /// Merges a query/fragment pair into the list.
    ///
    /// The first `bound` entries are placeholder bindings and always win over
    /// a pair with the same key. Among pairs themselves the last occurrence
    /// wins, so a duplicate pair key overwrites the earlier value in place.
    pub(crate) fn merge_pair(&mut self, bound: usize, key: &'p str, value: &'p str) {
        match self.inner.iter().position(|param| param.key == key) {
            Some(i) if i < bound => {}
            Some(i) => self.inner[i].value = value,
            None => self.push(key, value),
        }
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a location's [arguments](Params).
pub struct ParamsIter<'ps, 'p> {
    inner: slice::Iter<'ps, Param<'p>>,
}

impl<'ps, 'p> Iterator for ParamsIter<'ps, 'p> {
    type Item = (&'p str, &'p str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|param| (param.key, param.value))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
