//! scaffold - Starter-project generator
//!
//! "Every idea deserves a repo it can grow into."
//!
//! The scaffold tool exists because a backlog of project ideas dies in a
//! notes file. Giving each idea a real directory - README, LICENSE,
//! gitignore, and a runnable GitHub API starter script - lowers the cost of
//! actually starting one to zero.
//!
//! Everything is compiled in: a static catalog of ideas, a handful of text
//! templates, and {{PLACEHOLDER}} substitution. One sequential pass writes
//! the files. No network, no daemon, no state.

pub mod catalog;
pub mod plan;
pub mod scaffolder;
pub mod templates;
pub mod variables;

pub use catalog::{ProjectIdea, ProjectKind, CATALOG};
pub use plan::{plan, PlannedFile};
pub use scaffolder::{GeneratedProject, ScaffoldError, Scaffolder};
pub use variables::Variables;
