//! RFC 6901 JSON Pointer parsing and tree navigation.

use crate::error::{PatchError, PatchResult};
use serde_json::Value;

/// A parsed JSON Pointer: the unescaped reference tokens, in order, plus
/// the raw text for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pointer {
    tokens: Vec<String>,
    raw: String,
}

impl Pointer {
    /// Parses an RFC 6901 pointer. The empty string addresses the document
    /// root; every other pointer must start with `/`.
    pub(crate) fn parse(path: &str) -> PatchResult<Self> {
        if path.is_empty() {
            return Ok(Self {
                tokens: Vec::new(),
                raw: String::new(),
            });
        }
        let Some(rest) = path.strip_prefix('/') else {
            return Err(PatchError::Parse {
                path: path.to_string(),
            });
        };
        let tokens = rest
            .split('/')
            .map(|token| unescape(token, path))
            .collect::<PatchResult<Vec<_>>>()?;
        Ok(Self {
            tokens,
            raw: path.to_string(),
        })
    }

    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Splits into (parent tokens, last token); `None` for the root pointer.
    pub(crate) fn split_last(&self) -> Option<(&[String], &str)> {
        let (last, parent) = self.tokens.split_last()?;
        Some((parent, last))
    }

    /// True if `self` addresses a location strictly inside `ancestor`.
    pub(crate) fn is_strict_descendant_of(&self, ancestor: &Pointer) -> bool {
        self.tokens.len() > ancestor.tokens.len()
            && self.tokens[..ancestor.tokens.len()] == ancestor.tokens[..]
    }
}

/// Unescapes one reference token: `~1` is `/`, `~0` is `~`. A dangling or
/// unknown escape is a parse error.
fn unescape(token: &str, path: &str) -> PatchResult<String> {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => {
                    return Err(PatchError::Parse {
                        path: path.to_string(),
                    });
                }
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Parses an array-index token. RFC 6901 forbids leading zeros and signs.
pub(crate) fn parse_index(token: &str, raw: &str) -> PatchResult<usize> {
    let valid = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !valid {
        return Err(PatchError::Parse {
            path: raw.to_string(),
        });
    }
    token.parse::<usize>().map_err(|_| PatchError::Parse {
        path: raw.to_string(),
    })
}

/// Walks `tokens` down the document, immutably.
pub(crate) fn resolve<'a>(doc: &'a Value, tokens: &[String], raw: &str) -> PatchResult<&'a Value> {
    let mut current = doc;
    for token in tokens {
        current = match current {
            Value::Object(map) => map.get(token).ok_or_else(|| PatchError::PathNotFound {
                path: raw.to_string(),
            })?,
            Value::Array(items) => {
                let index = parse_index(token, raw)?;
                if index >= items.len() {
                    return Err(PatchError::IndexOutOfRange {
                        path: raw.to_string(),
                    });
                }
                &items[index]
            }
            _ => {
                return Err(PatchError::PathNotFound {
                    path: raw.to_string(),
                });
            }
        };
    }
    Ok(current)
}

/// Walks `tokens` down the document, mutably.
pub(crate) fn resolve_mut<'a>(
    doc: &'a mut Value,
    tokens: &[String],
    raw: &str,
) -> PatchResult<&'a mut Value> {
    let mut current = doc;
    for token in tokens {
        current = match current {
            Value::Object(map) => map.get_mut(token).ok_or_else(|| PatchError::PathNotFound {
                path: raw.to_string(),
            })?,
            Value::Array(items) => {
                let index = parse_index(token, raw)?;
                if index >= items.len() {
                    return Err(PatchError::IndexOutOfRange {
                        path: raw.to_string(),
                    });
                }
                &mut items[index]
            }
            _ => {
                return Err(PatchError::PathNotFound {
                    path: raw.to_string(),
                });
            }
        };
    }
    Ok(current)
}
