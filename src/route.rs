use crate::error::InsertError;
use crate::params::Params;

/// One `:`-delimited component of a route template.
///
/// A component is a placeholder iff it is wrapped in `{` and `}`; everything
/// else is a literal, compared exactly (case-sensitive, no trimming). There
/// is no escape for a literal `:` inside a segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Segment {
    Literal(String),
    Param(String),
}

impl Segment {
    fn parse(component: &str) -> Result<Segment, InsertError> {
        match component
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some("") => Err(InsertError::UnnamedParam),
            Some(name) => Ok(Segment::Param(name.to_owned())),
            None => Ok(Segment::Literal(component.to_owned())),
        }
    }
}

/// A parsed route template, e.g. `user:list:{userId}:{kind}`.
///
/// Templates are parsed once at registration and immutable afterwards.
#[derive(Clone, Debug)]
pub(crate) struct Route {
    raw: String,
    segments: Vec<Segment>,
}

impl Route {
    pub fn parse(raw: &str) -> Result<Route, InsertError> {
        if raw.is_empty() {
            return Err(InsertError::Empty);
        }

        // splitting a non-empty string always yields at least one segment
        let segments = raw
            .split(':')
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Route {
            raw: raw.to_owned(),
            segments,
        })
    }

    /// The original template string, used as the stable route identifier.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The number of placeholder segments, i.e. the inverse of specificity.
    /// Routes with fewer wildcards are tried first.
    pub fn wildcards(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Param(_)))
            .count()
    }

    /// Matches this template against the URL's path segments, pushing
    /// placeholder bindings into `params`.
    ///
    /// Matching requires the segment counts to be equal: there is no partial,
    /// prefix, or variable-arity matching. On failure any bindings pushed for
    /// this candidate are rolled back and `params` is left untouched.
    pub fn matches<'p>(&'p self, path: &[&'p str], params: &mut Params<'p>) -> bool {
        if self.segments.len() != path.len() {
            return false;
        }

        let checkpoint = params.len();
        for (segment, &part) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        params.truncate(checkpoint);
                        return false;
                    }
                }
                Segment::Param(name) => params.push(name, part),
            }
        }

        true
    }
}
