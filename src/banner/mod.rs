//! Banner rendering - `/etc/issue` style templates with host substitutions
//!
//! # Structure
//!
//! - [`render`] - Streaming directive interpreter
//! - [`template`] - Template loading and the full banner + prompt sequence

mod render;
mod template;

pub use render::{render, Directive, RenderContext, TRIGGER};
pub use template::{
    Banner, BannerTemplate, TemplateSource, DEFAULT_ISSUE_PATH, DEFAULT_PROMPT, DEFAULT_TEMPLATE,
};
