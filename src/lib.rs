//! # txt2link
//!
//! Auto-links URLs in plain text for safe HTML embedding.
//!
//! The core is a single pure function, [`linkify`]: given an optional piece
//! of plain text, it finds URL-like tokens (`http://`, `https://`, `ftp://`,
//! `mailto:` or bare `www.` prefixes), entity-escapes the whole text and
//! wraps each token in an anchor tag. Text without any URL passes through
//! untouched. Transformed output is tagged [`SafeHtml`] so a rendering layer
//! knows not to escape it a second time.
//!
//! ## Example
//!
//! ```
//! use txt2link::{linkify, Linkified};
//!
//! match linkify(Some("Visit www.example.com today")) {
//!     Linkified::Safe(html) => {
//!         assert!(html.as_str().contains(r#"href="https://www.example.com""#));
//!     }
//!     Linkified::Raw(_) => unreachable!("input contains a URL"),
//! }
//! ```
//!
//! A ready-made Handlebars helper lives in [`template`], so templates can
//! write `{{linkify description}}` after calling
//! [`register_helpers`](template::register_helpers).

pub mod error;
pub mod render;
pub mod safe;
pub mod template;

pub use error::{Error, Result};
pub use render::{encode_html_entities, linkify};
pub use safe::{Linkified, SafeHtml};
pub use template::{register_helpers, render_template, LinkifyHelper};
