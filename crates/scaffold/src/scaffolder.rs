//! Filesystem side of generation
//!
//! Takes the planned file set for an idea and writes it under the base
//! directory. Each project is independent; a failure aborts the run with
//! context naming the project, and nothing already written is rolled back.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{ProjectIdea, CATALOG};
use crate::plan::plan;
use crate::variables::Variables;

/// Scaffolder-specific errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Unknown project idea: {0}")]
    IdeaNotFound(String),

    #[error("Destination already exists: {} (use --force to overwrite)", .0.display())]
    DestinationExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of scaffolding one project
#[derive(Debug)]
pub struct GeneratedProject {
    /// Catalog entry name
    pub name: String,
    /// Project root directory on disk
    pub root: PathBuf,
    /// Files written, relative to the root
    pub files: Vec<PathBuf>,
}

/// Writes scaffolded projects under a base directory
pub struct Scaffolder {
    base: PathBuf,
}

impl Scaffolder {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Scaffold a single project
    pub fn generate(
        &self,
        idea: &ProjectIdea,
        vars: &Variables,
        force: bool,
    ) -> Result<GeneratedProject> {
        let root = self.base.join(idea.name);

        if root.exists() {
            if force {
                fs::remove_dir_all(&root).with_context(|| {
                    format!("Failed to remove existing directory: {}", root.display())
                })?;
            } else {
                return Err(ScaffoldError::DestinationExists(root).into());
            }
        }

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create directory: {}", root.display()))?;

        let mut written = Vec::new();
        for file in plan(idea, vars) {
            let dest = root.join(&file.path);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }

            fs::write(&dest, &file.contents)
                .with_context(|| format!("Failed to write: {}", dest.display()))?;
            written.push(file.path);
        }

        Ok(GeneratedProject {
            name: idea.name.to_string(),
            root,
            files: written,
        })
    }

    /// Scaffold the entire catalog, one sequential pass
    pub fn generate_all(
        &self,
        overrides: &[String],
        force: bool,
    ) -> Result<Vec<GeneratedProject>> {
        let mut generated = Vec::with_capacity(CATALOG.len());

        for idea in CATALOG {
            let mut vars = Variables::for_idea(idea);
            vars.add_from_pairs(overrides);

            let project = self
                .generate(idea, &vars, force)
                .with_context(|| format!("Failed to scaffold project: {}", idea.name))?;
            generated.push(project);
        }

        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::env;

    fn pinned_vars(idea: &ProjectIdea) -> Variables {
        let mut vars = Variables::for_idea(idea);
        vars.set("AUTHOR", "Test Author");
        vars.set("YEAR", "2026");
        vars
    }

    #[test]
    fn test_generate_python_project() {
        let base = env::temp_dir().join("scaffold_test_generate_py");
        let _ = fs::remove_dir_all(&base);

        let idea = catalog::find("github-issue-bot").unwrap();
        let scaffolder = Scaffolder::new(&base);
        let project = scaffolder.generate(idea, &pinned_vars(idea), false).unwrap();

        assert_eq!(project.files.len(), 5);

        let readme = fs::read_to_string(project.root.join("README.md")).unwrap();
        assert!(readme.starts_with("# github-issue-bot"));

        let license = fs::read_to_string(project.root.join("LICENSE")).unwrap();
        assert!(license.contains("Copyright (c) 2026 Test Author"));

        assert_eq!(
            fs::read_to_string(project.root.join("requirements.txt")).unwrap(),
            "PyGithub\n"
        );

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_generate_action_creates_nested_dirs() {
        let base = env::temp_dir().join("scaffold_test_generate_action");
        let _ = fs::remove_dir_all(&base);

        let idea = catalog::find("ci-cd-workflow-enhancer").unwrap();
        let scaffolder = Scaffolder::new(&base);
        let project = scaffolder.generate(idea, &pinned_vars(idea), false).unwrap();

        let workflow = project.root.join(".github/workflows/ci.yml");
        assert!(workflow.is_file());
        assert!(fs::read_to_string(workflow).unwrap().contains("name: CI"));

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_generate_refuses_existing_destination() {
        let base = env::temp_dir().join("scaffold_test_existing");
        let _ = fs::remove_dir_all(&base);

        let idea = catalog::find("github-issue-bot").unwrap();
        let scaffolder = Scaffolder::new(&base);
        let vars = pinned_vars(idea);

        scaffolder.generate(idea, &vars, false).unwrap();
        let err = scaffolder.generate(idea, &vars, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        // With force the project is rebuilt from scratch
        fs::write(base.join(idea.name).join("stale.txt"), "old").unwrap();
        let project = scaffolder.generate(idea, &vars, true).unwrap();
        assert!(!project.root.join("stale.txt").exists());

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_generate_all() {
        let base = env::temp_dir().join("scaffold_test_generate_all");
        let _ = fs::remove_dir_all(&base);

        let scaffolder = Scaffolder::new(&base);
        let overrides = vec!["AUTHOR=Test Author".to_string(), "YEAR=2026".to_string()];
        let generated = scaffolder.generate_all(&overrides, false).unwrap();

        assert_eq!(generated.len(), CATALOG.len());
        for project in &generated {
            assert!(project.root.join("README.md").is_file());
            assert!(project.root.join("LICENSE").is_file());
            assert!(project.root.join(".gitignore").is_file());
        }

        let _ = fs::remove_dir_all(&base);
    }
}
