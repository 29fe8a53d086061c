//! scaffold - Starter-project generator
//!
//! "Every idea deserves a repo it can grow into."
//!
//! Generate starter-project directories for a catalog of project ideas.
//!
//! Commands:
//! - all: Scaffold every catalog entry (also the default)
//! - new <NAME>: Scaffold one catalog entry
//! - list: List the catalog
//! - show <NAME>: Show an entry and the files it would get

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scaffold::catalog::{self, ProjectIdea, ProjectKind};
use scaffold::{plan, ScaffoldError, Scaffolder, Variables, CATALOG};

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Starter-project generator - scaffold a catalog of GitHub API project ideas")]
#[command(version)]
#[command(after_help = r#"PROJECT KINDS:
    python          README, LICENSE, .gitignore, requirements.txt, example.py
    node            README, LICENSE, .gitignore, package.json, index.js
    github-action   README, LICENSE, .gitignore, .github/workflows/ci.yml

TEMPLATE VARIABLES:
    Generated files can include placeholders:
    {{NAME}}        Project name (kebab-case)
    {{TITLE}}       Project name in Title Case
    {{SUMMARY}}     One-line summary from the catalog
    {{AUTHOR}}      Author name (from git config)
    {{DATE}}        Current date (YYYY-MM-DD)
    {{YEAR}}        Current year

EXAMPLES:
    scaffold                                # Scaffold the whole catalog into ./projects
    scaffold all --base ~/ideas             # Same, elsewhere
    scaffold new github-issue-bot           # Scaffold one project
    scaffold new github-issue-bot --force   # Overwrite an existing directory
    scaffold all --var AUTHOR="Jane Doe"    # Override a variable
    scaffold list --json                    # Catalog as JSON
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold every catalog entry
    All {
        /// Base output directory
        #[arg(long, default_value = "projects")]
        base: PathBuf,

        /// Set a template variable (KEY=VALUE)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Overwrite existing project directories
        #[arg(long)]
        force: bool,
    },

    /// Scaffold one catalog entry
    New {
        /// Catalog entry name
        name: String,

        /// Base output directory
        #[arg(long, default_value = "projects")]
        base: PathBuf,

        /// Set a template variable (KEY=VALUE)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Overwrite an existing project directory
        #[arg(long)]
        force: bool,
    },

    /// List the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a catalog entry and the files it would get
    Show {
        /// Catalog entry name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::All { base, vars, force }) => cmd_all(&base, &vars, force),

        Some(Commands::New {
            name,
            base,
            vars,
            force,
        }) => cmd_new(&name, &base, &vars, force),

        Some(Commands::List { json }) => cmd_list(json),

        Some(Commands::Show { name, json }) => cmd_show(&name, json),

        None => cmd_all(&PathBuf::from("projects"), &[], false),
    }
}

/// Scaffold the entire catalog
fn cmd_all(base: &PathBuf, custom_vars: &[String], force: bool) -> Result<()> {
    let scaffolder = Scaffolder::new(base);

    println!(
        "info: Scaffolding {} projects under {}",
        CATALOG.len(),
        base.display()
    );

    let generated = scaffolder.generate_all(custom_vars, force)?;

    for project in &generated {
        println!(
            "  \x1b[32m{}\x1b[0m \x1b[2m({} files)\x1b[0m",
            project.name,
            project.files.len()
        );
    }

    println!();
    println!(
        "success: Scaffold complete: created {} project folders under {}",
        generated.len(),
        base.display()
    );

    Ok(())
}

/// Scaffold one catalog entry
fn cmd_new(name: &str, base: &PathBuf, custom_vars: &[String], force: bool) -> Result<()> {
    let idea = catalog::find(name).ok_or_else(|| ScaffoldError::IdeaNotFound(name.to_string()))?;

    let mut vars = Variables::for_idea(idea);
    vars.add_from_pairs(custom_vars);

    println!("info: Scaffolding project: {} ({})", idea.name, idea.kind);

    let scaffolder = Scaffolder::new(base);
    let project = scaffolder.generate(idea, &vars, force)?;

    for file in &project.files {
        println!("  \x1b[2m{}\x1b[0m", file.display());
    }

    println!();
    println!("success: Project created: {}", project.root.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", project.root.display());
    for step in next_steps(idea) {
        println!("  {}", step);
    }

    Ok(())
}

/// Kind-specific follow-up commands shown after creation
fn next_steps(idea: &ProjectIdea) -> Vec<&'static str> {
    match idea.kind {
        ProjectKind::Python => vec![
            "pip install -r requirements.txt",
            "export GITHUB_TOKEN=<your token>",
            "python example.py",
        ],
        ProjectKind::Node => vec![
            "npm install",
            "export GITHUB_TOKEN=<your token>",
            "node index.js",
        ],
        ProjectKind::GithubAction => {
            vec!["git init", "Push to GitHub to run the starter workflow"]
        }
    }
}

/// List the catalog
fn cmd_list(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = CATALOG
            .iter()
            .map(|idea| {
                serde_json::json!({
                    "name": idea.name,
                    "kind": idea.kind,
                    "summary": idea.summary,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("\x1b[1mProject Ideas\x1b[0m");
    println!();

    for kind in [ProjectKind::Python, ProjectKind::Node, ProjectKind::GithubAction] {
        let entries: Vec<_> = CATALOG.iter().filter(|i| i.kind == kind).collect();
        if entries.is_empty() {
            continue;
        }

        println!("\x1b[36m{}:\x1b[0m", kind);
        for idea in entries {
            println!("  \x1b[32m{}\x1b[0m", idea.name);
            println!("    \x1b[2m{}\x1b[0m", idea.summary);
        }
        println!();
    }

    Ok(())
}

/// Show one catalog entry with its planned files
fn cmd_show(name: &str, json: bool) -> Result<()> {
    let idea = catalog::find(name).ok_or_else(|| ScaffoldError::IdeaNotFound(name.to_string()))?;

    let vars = Variables::for_idea(idea);
    let files = plan(idea, &vars);

    if json {
        let output = serde_json::json!({
            "name": idea.name,
            "kind": idea.kind,
            "summary": idea.summary,
            "title": idea.title(),
            "files": files
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "path": f.path.to_string_lossy(),
                        "bytes": f.contents.len(),
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\x1b[1mProject: {}\x1b[0m", idea.name);
    println!("\x1b[2mKind: {}\x1b[0m", idea.kind);
    println!("\x1b[2mSummary: {}\x1b[0m", idea.summary);
    println!();

    println!("\x1b[36mFiles:\x1b[0m");
    for file in &files {
        println!("  {} \x1b[2m({} bytes)\x1b[0m", file.path.display(), file.contents.len());
    }

    Ok(())
}
