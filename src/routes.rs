//! Route table — which view renders a given path.
//!
//! # Table
//!
//! | Pattern            | Name        | View        |
//! |--------------------|-------------|-------------|
//! | `/`                | `Generator` | `Generator` |
//! | `/library`         | `Library`   | `Library`   |
//! | `/:pathMatch(.*)*` | `NotFound`  | `NotFound`  |
//!
//! Routes are tried in order and the first match wins, so the catch-all
//! must stay last.
//!
//! # Pattern syntax
//!
//! | Segment            | Matches                                          |
//! |--------------------|--------------------------------------------------|
//! | `library`          | that literal segment (case-insensitive)          |
//! | `:id`              | one segment, captured as `id`                    |
//! | `:id(\d+)`         | one segment matching the regex                   |
//! | `:rest(.*)*`       | zero or more segments, captured as `rest`        |
//! | `:rest(.*)+`       | one or more segments                             |
//! | `:id?`             | an optional segment                              |
//!
//! Every pattern also accepts one trailing slash. Query strings and
//! fragments are dropped before matching.

use std::collections::BTreeMap;

use regex::Regex;
use thiserror::Error;

/// The views a route can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Palette generator (harmonies and moods).
    Generator,
    /// Browsable library of the built-in mood palettes.
    Library,
    /// Fallback for unknown paths.
    NotFound,
}

/// The application's routes, in match order.
pub const ROUTES: &[(&str, &str, View)] = &[
    ("/", "Generator", View::Generator),
    ("/library", "Library", View::Library),
    ("/:pathMatch(.*)*", "NotFound", View::NotFound),
];

/// A route pattern that could not be compiled.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route {pattern:?}: unclosed '(' in segment {segment:?}")]
    UnclosedGroup { pattern: String, segment: String },

    #[error("route {pattern:?}: parameter in segment {segment:?} has no name")]
    MissingName { pattern: String, segment: String },

    #[error("route {pattern:?}: unexpected {rest:?} after parameter")]
    TrailingInput { pattern: String, rest: String },

    #[error("route {pattern:?}: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One compiled route.
#[derive(Debug)]
pub struct Route {
    pub pattern: &'static str,
    pub name: &'static str,
    pub view: View,
    regex: Regex,
    params: Vec<String>,
}

impl Route {
    /// Compile `pattern` into an anchored matcher.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] for malformed parameter segments or an
    /// invalid embedded regex.
    pub fn new(pattern: &'static str, name: &'static str, view: View) -> Result<Self, RouteError> {
        let (source, params) = compile_pattern(pattern)?;
        let regex = Regex::new(&source).map_err(|source| RouteError::Regex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern, name, view, regex, params })
    }

    fn capture(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let caps = self.regex.captures(path)?;
        let params = self
            .params
            .iter()
            .filter_map(|name| {
                caps.name(name)
                    .map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Some(params)
    }
}

/// A resolved path: the route that matched and its captured parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: BTreeMap<String, String>,
}

/// An ordered, immutable list of routes.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Compile a route table. Order is preserved.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn new(table: &[(&'static str, &'static str, View)]) -> Result<Self, RouteError> {
        let routes = table
            .iter()
            .map(|&(pattern, name, view)| Route::new(pattern, name, view))
            .collect::<Result<_, _>>()?;
        Ok(Self { routes })
    }

    /// The application's table, [`ROUTES`].
    ///
    /// # Errors
    ///
    /// Only if a built-in pattern is malformed.
    pub fn builtin() -> Result<Self, RouteError> {
        Self::new(ROUTES)
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route matching `path`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(path);
        self.routes.iter().find_map(|route| {
            route.capture(&path).map(|params| RouteMatch { route, params })
        })
    }
}

/// Drop query and fragment, and make the path absolute.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

// ---------------------------------------------------------------------------
// Pattern compiler
// ---------------------------------------------------------------------------

/// Default regex for a parameter segment.
const SEGMENT: &str = "[^/]+";

fn compile_pattern(pattern: &str) -> Result<(String, Vec<String>), RouteError> {
    let mut source = String::from("(?i)^");
    let mut params = Vec::new();

    let trimmed = pattern.trim_start_matches('/');
    for segment in trimmed.split('/').filter(|s| !s.is_empty()) {
        if let Some(param) = segment.strip_prefix(':') {
            let (name, re, modifier) = parse_param(pattern, segment, param)?;
            source.push_str(&param_regex(&name, re, modifier));
            params.push(name);
        } else {
            source.push('/');
            source.push_str(&regex::escape(segment));
        }
    }

    source.push_str("/?$");
    Ok((source, params))
}

/// Split `name(re)mod` into its parts.
fn parse_param<'a>(
    pattern: &str,
    segment: &str,
    param: &'a str,
) -> Result<(String, &'a str, Option<char>), RouteError> {
    let name_end = param
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(param.len());
    let (name, mut rest) = param.split_at(name_end);
    if name.is_empty() {
        return Err(RouteError::MissingName {
            pattern: pattern.to_string(),
            segment: segment.to_string(),
        });
    }

    let mut re = SEGMENT;
    if rest.starts_with('(') {
        let close = matching_paren(rest).ok_or_else(|| RouteError::UnclosedGroup {
            pattern: pattern.to_string(),
            segment: segment.to_string(),
        })?;
        re = &rest[1..close];
        rest = &rest[close + 1..];
    }

    let mut chars = rest.chars();
    let modifier = match chars.next() {
        None => None,
        Some(m @ ('*' | '+' | '?')) if chars.as_str().is_empty() => Some(m),
        Some(_) => {
            return Err(RouteError::TrailingInput {
                pattern: pattern.to_string(),
                rest: rest.to_string(),
            });
        }
    };

    Ok((name.to_string(), re, modifier))
}

/// Byte index of the `)` closing the `(` at index 0.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn param_regex(name: &str, re: &str, modifier: Option<char>) -> String {
    let repeated = format!("(?:{re})(?:/(?:{re}))*");
    match modifier {
        Some('*') => format!("(?:/(?P<{name}>{repeated}))?"),
        Some('+') => format!("/(?P<{name}>{repeated})"),
        Some('?') => format!("(?:/(?P<{name}>{re}))?"),
        _ => format!("/(?P<{name}>{re})"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
