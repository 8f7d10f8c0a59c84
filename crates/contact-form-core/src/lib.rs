//! Core library for the contact-form scaffolder.
//!
//! Adds a contact form to a Next.js project: an API route that mails
//! submissions (with per-client rate limiting through Vercel KV), a form
//! component, and SMTP/KV stubs in `.env.local`.
//!
//! The pieces, leaves first:
//! - [`templates`]: embedded templates and literal placeholder rendering
//! - [`project`]: directory creation, file writes, `.env.local` append
//! - [`installer`]: the [`installer::DependencyInstaller`] trait and the package-manager implementation
//! - [`scaffold`]: the ordered steps that tie them together
//!
//! [`config`] holds the collected [`config::FormConfig`] and the prompt flow
//! that produces it; [`guidance`] builds the next-step text shown afterwards.

pub mod config;
pub mod error;
pub mod guidance;
pub mod installer;
pub mod project;
pub mod scaffold;
pub mod templates;
