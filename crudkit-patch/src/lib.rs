//! JSON patch documents for partial record updates.
//!
//! Implements the RFC 6902 operation set (add, remove, replace, move, copy,
//! test) over `serde_json::Value` trees, addressed by RFC 6901 JSON
//! Pointers. A document is an ordered sequence of operations; application
//! is all-or-nothing, so any failing operation aborts the whole document
//! and the input value is left untouched.
//!
//! The wire format is the standard one, so documents deserialize directly
//! from client request bodies:
//!
//! ```json
//! [
//!   {"op": "replace", "path": "/name", "value": "Gadget"},
//!   {"op": "remove", "path": "/tags/0"}
//! ]
//! ```

mod document;
mod error;
mod pointer;

pub use document::{PatchDocument, PatchOp};
pub use error::{PatchError, PatchResult};
