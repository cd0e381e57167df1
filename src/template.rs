//! URL path templating.
//!
//! Endpoint URLs may carry `{name}` placeholders in their path, e.g.
//! `https://api.example.com/users/{id}/posts/{post}`. At call time each
//! placeholder is replaced with the string form of the matching path
//! parameter. Placeholders without a parameter render as an empty string.
//!
//! Only the path is templated. Scheme, authority, query and fragment are
//! carried over from the template untouched, so braces in a query string
//! stay braces.
//!
//! Parameter values are percent-encoded before substitution, so a value is
//! sent as its own text: `100%` goes out as `100%25`. A `/` in a value is
//! kept and splits the path.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::errors::EndpointError;

const OPEN: char = '{';
const CLOSE: char = '}';

/// Bytes escaped in a substituted path value.
const PATH_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Replaces every `{name}` in `template` with `params[name]`, or with the
/// empty string when `name` is unknown.
///
/// An opening brace without a matching closing brace is copied verbatim.
pub fn render_path(template: &str, params: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let tail = &rest[start + OPEN.len_utf8()..];
        match tail.find(CLOSE) {
            Some(end) => {
                let name = &tail[..end];
                if let Some(value) = params.get(name) {
                    out.push_str(value);
                }
                rest = &tail[end + CLOSE.len_utf8()..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

/// Parses `template` as an absolute URL and substitutes path placeholders.
///
/// Returns [`EndpointError::Configuration`] when the template is not a valid
/// absolute URL, or when its path cannot be located in the template text.
pub fn resolve_url(template: &str, params: &HashMap<String, String>) -> Result<Url, EndpointError> {
    let mut url = Url::parse(template)
        .map_err(|e| EndpointError::configuration(format!("invalid URL template {template:?}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(EndpointError::configuration(format!(
            "URL template {template:?} has no hierarchical path"
        )));
    }

    // The parsed URL has already percent-encoded the braces, so the
    // placeholders are looked up in the raw template text instead.
    let raw = raw_path(template);

    // The raw slice must be the path the parser found, or the host could
    // end up templated into the path.
    let mut check = url.clone();
    check.set_path(raw);
    if check.path() != url.path() {
        return Err(EndpointError::configuration(format!(
            "URL template {template:?} is parsed with path {:?}, not {raw:?}",
            url.path()
        )));
    }

    let encoded: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| (k.clone(), utf8_percent_encode(v, PATH_VALUE).to_string()))
        .collect();
    url.set_path(&render_path(raw, &encoded));

    Ok(url)
}

/// Returns the path portion of an absolute URL string, without touching its
/// encoding.
fn raw_path(template: &str) -> &str {
    let after_scheme = match template.find(':') {
        Some(idx) => &template[idx + 1..],
        None => template,
    };

    let path_and_more = match after_scheme.strip_prefix("//") {
        Some(authority_and_more) => {
            let end = authority_and_more
                .find(['/', '?', '#'])
                .unwrap_or(authority_and_more.len());
            &authority_and_more[end..]
        }
        None => after_scheme,
    };

    let end = path_and_more.find(['?', '#']).unwrap_or(path_and_more.len());
    &path_and_more[..end]
}
