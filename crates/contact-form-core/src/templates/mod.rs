//! Template system for contact form scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module and looked up through a [`store::TemplateStore`], which can also
//! read them from a directory on disk. [`renderer::render`] then substitutes the
//! configuration values.
//!
//! ## Placeholders
//!
//! Only three literal tokens are recognised:
//! - `{{EMAIL_TO}}`: address that receives submissions
//! - `{{SMTP_HOST}}`: SMTP server host
//! - `{{SMTP_PORT}}`: SMTP server port
//!
//! Each token is replaced at its first occurrence only. Any other `{{...}}` text is
//! left untouched, so templates may contain JSX object literals freely.
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
pub mod store;
