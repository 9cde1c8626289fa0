//! Console report rendering using Handlebars.
//!
//! Every block the reporter prints (status banner, manual instructions and
//! the final success or failure notice) is a template in this directory.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Width of the `=` rule framing the report.
pub const RULE_WIDTH: usize = 70;

pub(crate) const BANNER_TEMPLATE: &str = include_str!("banner.hbs");
pub(crate) const MANUAL_INSTRUCTIONS_TEMPLATE: &str = include_str!("manual_instructions.hbs");
pub(crate) const CREATED_TEMPLATE: &str = include_str!("created.hbs");
pub(crate) const FAILED_TEMPLATE: &str = include_str!("failed.hbs");

/// Returns the horizontal rule used to frame the report.
#[must_use]
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
