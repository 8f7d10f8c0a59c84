//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/contact-form-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here
//! and the matching [`TemplateKind::relative_path`](super::store::TemplateKind::relative_path).

/// Next.js route handler written to `app/api/send/route.ts`.
pub const API_ROUTE: &str = include_str!("../../../../templates/api/send/route.ts.tmpl");

/// Client form component written to `app/contact/page.tsx`. Contains no placeholders.
pub const CONTACT_PAGE: &str = include_str!("../../../../templates/contact/page.tsx.tmpl");

/// Block appended to `.env.local`.
pub const ENV_BLOCK: &str = include_str!("../../../../templates/env/env.local.tmpl");
