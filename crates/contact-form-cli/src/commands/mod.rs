//! CLI command implementations for contact-form.
//!
//! Each module corresponds to a subcommand (`contact-form <command>`).

pub mod init;
