//! Render a catalog entry into its file set
//!
//! Pure code: decides which files a project gets and what their contents
//! are, with all substitution done. Writing to disk happens in
//! [`crate::scaffolder`], so the expected output of a project can be
//! inspected and tested without touching the filesystem.

use std::path::PathBuf;

use crate::catalog::{ProjectIdea, ProjectKind};
use crate::templates;
use crate::variables::Variables;

/// A file the scaffolder will write, path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl PlannedFile {
    fn new(path: &str, contents: String) -> Self {
        Self {
            path: PathBuf::from(path),
            contents,
        }
    }
}

/// Render the full file set for one idea, in deterministic order
pub fn plan(idea: &ProjectIdea, vars: &Variables) -> Vec<PlannedFile> {
    let mut readme = vars.substitute(templates::README);
    if idea.kind == ProjectKind::GithubAction {
        readme.push_str(templates::README_ACTION_NOTE);
    }
    readme.push_str(templates::README_FOOTER);

    let mut files = vec![
        PlannedFile::new("README.md", readme),
        PlannedFile::new("LICENSE", vars.substitute(templates::LICENSE_MIT)),
    ];

    match idea.kind {
        ProjectKind::Python => {
            files.push(PlannedFile::new(
                ".gitignore",
                templates::GITIGNORE_PYTHON.to_string(),
            ));
            files.push(PlannedFile::new(
                "requirements.txt",
                templates::REQUIREMENTS_TXT.to_string(),
            ));
            files.push(PlannedFile::new(
                "example.py",
                vars.substitute(templates::STARTER_PYTHON),
            ));
        }
        ProjectKind::Node => {
            files.push(PlannedFile::new(
                ".gitignore",
                templates::GITIGNORE_NODE.to_string(),
            ));
            files.push(PlannedFile::new(
                "package.json",
                vars.substitute(templates::PACKAGE_JSON),
            ));
            files.push(PlannedFile::new(
                "index.js",
                vars.substitute(templates::STARTER_NODE),
            ));
        }
        ProjectKind::GithubAction => {
            files.push(PlannedFile::new(
                ".gitignore",
                templates::GITIGNORE_ACTION.to_string(),
            ));
            files.push(PlannedFile::new(
                ".github/workflows/ci.yml",
                templates::WORKFLOW_CI.to_string(),
            ));
        }
    }

    files
}
