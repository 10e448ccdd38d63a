//! Resume document model and loading

pub mod document;

pub use document::{About, ConfidenceEntry, Project, ProjectLinks, ResumeDocument, Skills};
