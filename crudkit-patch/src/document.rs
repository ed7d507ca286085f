//! Patch operations and document application.

use crate::error::{PatchError, PatchResult};
use crate::pointer::{Pointer, parse_index, resolve, resolve_mut};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single RFC 6902 operation.
///
/// The wire format is the standard tagged object, e.g.
/// `{"op": "add", "path": "/tags/-", "value": "urgent"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Insert a value. Appends to arrays via the `-` index; replaces an
    /// existing object member outright.
    Add { path: String, value: Value },

    /// Remove the value at `path`; the target must exist.
    Remove { path: String },

    /// Swap the value at `path`; the target must exist.
    Replace { path: String, value: Value },

    /// Remove the value at `from` and add it at `path`. `from` must not be
    /// an ancestor of `path`.
    Move { from: String, path: String },

    /// Copy the value at `from` to `path`.
    Copy { from: String, path: String },

    /// Assert that the value at `path` equals `value` exactly.
    Test { path: String, value: Value },
}

impl PatchOp {
    /// Applies this operation in place. On error the document may be
    /// partially modified; [`PatchDocument::apply`] shields callers from
    /// that by operating on a scratch copy.
    pub fn apply(&self, doc: &mut Value) -> PatchResult<()> {
        match self {
            PatchOp::Add { path, value } => {
                add(doc, &Pointer::parse(path)?, value.clone())
            }
            PatchOp::Remove { path } => remove(doc, &Pointer::parse(path)?).map(|_| ()),
            PatchOp::Replace { path, value } => {
                let ptr = Pointer::parse(path)?;
                let target = resolve_mut(doc, ptr.tokens(), ptr.raw())?;
                *target = value.clone();
                Ok(())
            }
            PatchOp::Move { from, path } => {
                let from_ptr = Pointer::parse(from)?;
                let to_ptr = Pointer::parse(path)?;
                if to_ptr.is_strict_descendant_of(&from_ptr) {
                    return Err(PatchError::IllegalMove {
                        from: from.clone(),
                        path: path.clone(),
                    });
                }
                let value = remove(doc, &from_ptr)?;
                add(doc, &to_ptr, value)
            }
            PatchOp::Copy { from, path } => {
                let from_ptr = Pointer::parse(from)?;
                let to_ptr = Pointer::parse(path)?;
                let value = resolve(doc, from_ptr.tokens(), from_ptr.raw())?.clone();
                add(doc, &to_ptr, value)
            }
            PatchOp::Test { path, value } => {
                let ptr = Pointer::parse(path)?;
                let actual = resolve(doc, ptr.tokens(), ptr.raw())?;
                if actual == value {
                    Ok(())
                } else {
                    Err(PatchError::TestFailed { path: path.clone() })
                }
            }
        }
    }
}

/// An ordered sequence of patch operations, consumed once per update
/// request. Deserializes from the standard JSON array form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOp>);

impl PatchDocument {
    /// Creates a document from a list of operations.
    #[must_use]
    pub fn new(ops: Vec<PatchOp>) -> Self {
        Self(ops)
    }

    /// The operations, in application order.
    #[must_use]
    pub fn ops(&self) -> &[PatchOp] {
        &self.0
    }

    /// Number of operations in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the document contains no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies all operations in document order and returns the patched
    /// tree. All-or-nothing: if any operation fails, the error is returned
    /// and `doc` itself is never modified.
    pub fn apply(&self, doc: &Value) -> PatchResult<Value> {
        let mut scratch = doc.clone();
        for op in &self.0 {
            op.apply(&mut scratch)?;
        }
        Ok(scratch)
    }
}

impl From<Vec<PatchOp>> for PatchDocument {
    fn from(ops: Vec<PatchOp>) -> Self {
        Self(ops)
    }
}

/// Inserts `value` at `ptr`. The root pointer replaces the whole document.
fn add(doc: &mut Value, ptr: &Pointer, value: Value) -> PatchResult<()> {
    let Some((parent_tokens, last)) = ptr.split_last() else {
        *doc = value;
        return Ok(());
    };
    let parent = resolve_mut(doc, parent_tokens, ptr.raw())?;
    match parent {
        Value::Object(map) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            if last == "-" {
                items.push(value);
                return Ok(());
            }
            let index = parse_index(last, ptr.raw())?;
            if index > items.len() {
                return Err(PatchError::IndexOutOfRange {
                    path: ptr.raw().to_string(),
                });
            }
            items.insert(index, value);
            Ok(())
        }
        _ => Err(PatchError::PathNotFound {
            path: ptr.raw().to_string(),
        }),
    }
}

/// Removes and returns the value at `ptr`; the target must exist.
fn remove(doc: &mut Value, ptr: &Pointer) -> PatchResult<Value> {
    let Some((parent_tokens, last)) = ptr.split_last() else {
        // The document root cannot be removed.
        return Err(PatchError::PathNotFound {
            path: ptr.raw().to_string(),
        });
    };
    let parent = resolve_mut(doc, parent_tokens, ptr.raw())?;
    match parent {
        Value::Object(map) => map.remove(last).ok_or_else(|| PatchError::PathNotFound {
            path: ptr.raw().to_string(),
        }),
        Value::Array(items) => {
            let index = parse_index(last, ptr.raw())?;
            if index >= items.len() {
                return Err(PatchError::IndexOutOfRange {
                    path: ptr.raw().to_string(),
                });
            }
            Ok(items.remove(index))
        }
        _ => Err(PatchError::PathNotFound {
            path: ptr.raw().to_string(),
        }),
    }
}
