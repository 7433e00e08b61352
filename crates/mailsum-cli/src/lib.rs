//! CLI library components for the mail report summarizer.

pub mod logging;
pub mod runner;
