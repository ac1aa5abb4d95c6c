//! zipnear-cli
//! ===========
//!
//! Command-line interface for the `zipnear-core` provider ranking library.
//!
//! This crate primarily provides a binary (`zipnear`). The library target
//! only carries this overview so that docs.rs renders a page for it.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install zipnear-cli
//! export ZIP_CODE_API_KEY=...
//! zipnear --records providers.json search 12345 --radius 10
//! zipnear --records providers.json --json rank --distances radius.json
//! ```
//!
//! For programmatic access use the `zipnear-core` crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
