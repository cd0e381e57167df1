//! Multi-valued, case-insensitive header accumulation.
//!
//! Option setters cannot fail, so invalid header names or values are
//! remembered here and reported when the request is dispatched.

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::errors::EndpointError;

/// Header values collected from option setters.
///
/// Values for the same name (compared case-insensitively) accumulate in the
/// order they were added.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    map: HeaderMap,
    rejected: Vec<String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `values` under `name`.
    pub fn add<I, V>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(n) => n,
            Err(_) => {
                self.rejected.push(format!("invalid header name {name:?}"));
                return;
            }
        };

        for value in values {
            let value = value.as_ref();
            match HeaderValue::from_str(value) {
                Ok(v) => {
                    self.map.append(header_name.clone(), v);
                }
                Err(_) => self
                    .rejected
                    .push(format!("invalid value {value:?} for header {name:?}")),
            }
        }
    }

    pub fn map(&self) -> &HeaderMap {
        &self.map
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty() && self.rejected.is_empty()
    }

    /// Fails with the first rejected header, if any.
    pub fn validate(&self) -> Result<(), EndpointError> {
        match self.rejected.first() {
            Some(msg) => Err(EndpointError::configuration(msg.clone())),
            None => Ok(()),
        }
    }

    pub(crate) fn into_map(self) -> Result<HeaderMap, EndpointError> {
        self.validate()?;
        Ok(self.map)
    }
}

/// Layers `overrides` on top of `defaults`.
///
/// Every name present in `overrides` replaces all of its values in
/// `defaults`; names only present in `defaults` are kept as they are.
pub fn merge_headers(defaults: &HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();

    for name in overrides.keys() {
        merged.remove(name);
        for value in overrides.get_all(name) {
            merged.append(name.clone(), value.clone());
        }
    }

    merged
}
