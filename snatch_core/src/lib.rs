//! `snatch_core` is the engine behind [snatch](https://github.com/pynickle/python-cheatsheet-redefined).
//! It turns the interpreter transcripts embedded in the python cheatsheet into
//! clean, runnable source, and extracts a doctest corpus from the same
//! document with the nondeterministic statements left out.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown document
//!   → Fence scanner (finds ``` blocks, drops a block left open at the end)
//!   → Prompt normalizer (strips `>>> ` / `... `, drops echoed output)
//!   → Block reinserter (writes each cleaned block back in a ```python fence)
//!
//! Markdown document
//!   → Corpus filter (Outside / InCode / InNotest, deny list, <BLANKLINE>)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `snatch.toml`: source URL, fence language, deny list, heading pairs and output names.
//! - [`fence`]: Fenced block scanning with diagnostics for unclosed fences.
//! - [`prompt`]: Prompt line classification and transcript normalization.
//! - [`corpus`]: The doctest corpus state machine.
//! - [`deny`]: Built-in and configured deny lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use snatch_core::clean_document;
//!
//! let document = "# Title\n\n```python\n>>> a = 5\n>>> print(a)\n5\n```\n";
//! let cleaned = clean_document(document, "python");
//! assert_eq!(cleaned, "# Title\n\n```python\na = 5\nprint(a)\n```\n");
//! ```

pub use config::*;
pub use contents::*;
pub use corpus::*;
pub use deny::*;
pub use error::*;
pub use fence::*;
pub use localize::*;
pub use pipeline::*;
pub use prompt::*;
pub use reinsert::*;
pub use render::*;

pub mod config;
mod contents;
pub mod corpus;
pub mod deny;
#[allow(unused_assignments)]
mod error;
pub mod fence;
mod localize;
mod pipeline;
pub mod prompt;
mod reinsert;
mod render;

#[cfg(test)]
mod __fixtures;
