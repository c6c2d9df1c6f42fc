#![warn(missing_docs)]
//! # ProseMirror step replay
//!
//! This crate re-implements the document model and the replace step of the
//! [ProseMirror](https://prosemirror.net) API in Rust. It can be used to rebuild a document
//! from a recorded log of steps, optionally compacting that log first.
//!
//! ```
//! use prosemirror_replay::article::{helper::*, Article};
//! use prosemirror_replay::replay::replay_from_empty;
//! use prosemirror_replay::transform::Step;
//!
//! let steps: Vec<Step<Article>> = serde_json::from_str(r#"[
//!     {"stepType": "replace", "from": 0, "to": 0,
//!      "slice": {"content": [{"type": "body", "content": [{"type": "paragraph"}]}]}},
//!     {"stepType": "replace", "from": 2, "to": 2,
//!      "slice": {"content": [{"type": "text", "text": "Hello"}]}}
//! ]"#).unwrap();
//!
//! assert_eq!(replay_from_empty(&steps), Ok(doc(body(p("Hello")))));
//! ```

#[macro_use]
extern crate derive_new;

pub mod article;
pub(crate) mod de;
pub mod model;
pub mod replay;
pub mod transform;
pub(crate) mod util;
