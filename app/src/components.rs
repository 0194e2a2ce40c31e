//! Reusable UI components: the site header, icon helpers and the error page.

pub mod error_template;
pub mod header;
pub mod icons;
