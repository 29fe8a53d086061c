//! Template variable handling
//!
//! Provides variable substitution using {{PLACEHOLDER}} syntax. Placeholders
//! are UPPER_SNAKE identifiers; anything else between braces is left alone.

use chrono::Local;
use regex::Regex;
use std::collections::HashMap;
use std::process::Command;

use crate::catalog::ProjectIdea;

/// Template variables container
#[derive(Debug, Clone)]
pub struct Variables {
    vars: HashMap<String, String>,
}

impl Variables {
    /// Create the standard variable set for a catalog entry
    pub fn for_idea(idea: &ProjectIdea) -> Self {
        let mut vars = HashMap::new();

        vars.insert("NAME".to_string(), idea.name.to_string());
        vars.insert("TITLE".to_string(), idea.title());
        vars.insert("SUMMARY".to_string(), idea.summary.to_string());
        vars.insert("AUTHOR".to_string(), Self::get_author());
        vars.insert(
            "DATE".to_string(),
            Local::now().format("%Y-%m-%d").to_string(),
        );
        vars.insert("YEAR".to_string(), Local::now().format("%Y").to_string());

        Self { vars }
    }

    /// Author name from git config, falling back to $USER
    fn get_author() -> String {
        if let Ok(output) = Command::new("git").args(["config", "user.name"]).output() {
            if output.status.success() {
                let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !name.is_empty() {
                    return name;
                }
            }
        }

        std::env::var("USER").unwrap_or_else(|_| "unknown".to_string())
    }

    /// Set a variable value (keys are uppercased)
    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_uppercase(), value.to_string());
    }

    /// Get a variable value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.vars.get(&key.to_uppercase())
    }

    /// Parse KEY=VALUE strings and add them as variables
    pub fn add_from_pairs(&mut self, pairs: &[String]) {
        for pair in pairs {
            if let Some((key, value)) = pair.split_once('=') {
                self.set(key.trim(), value.trim());
            }
        }
    }

    /// Replace all {{PLACEHOLDER}} patterns in a string
    ///
    /// Unknown placeholders are left verbatim so a bad template is visible
    /// in the output rather than silently blanked.
    pub fn substitute(&self, content: &str) -> String {
        let re = Regex::new(r"\{\{([A-Z_][A-Z0-9_]*)\}\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let key = &caps[1];
            self.vars
                .get(key)
                .cloned()
                .unwrap_or_else(|| format!("{{{{{}}}}}", key))
        })
        .to_string()
    }

    /// Find all placeholders used in a string
    pub fn find_used_variables(content: &str) -> Vec<String> {
        let re = Regex::new(r"\{\{([A-Z_][A-Z0-9_]*)\}\}").unwrap();

        let mut vars: Vec<String> = re
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect();

        vars.sort();
        vars.dedup();
        vars
    }

    /// All defined variable names, sorted
    pub fn names(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.vars.keys().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn test_vars() -> Variables {
        let idea = catalog::find("github-issue-bot").unwrap();
        Variables::for_idea(idea)
    }

    #[test]
    fn test_standard_variables() {
        let vars = test_vars();

        assert_eq!(vars.get("NAME"), Some(&"github-issue-bot".to_string()));
        assert_eq!(vars.get("TITLE"), Some(&"Github Issue Bot".to_string()));
        assert!(vars.get("YEAR").is_some());
    }

    #[test]
    fn test_substitute_basic() {
        let mut vars = test_vars();
        vars.set("CUSTOM", "custom_value");

        let output = vars.substitute("Project: {{NAME}}, Custom: {{CUSTOM}}");
        assert_eq!(output, "Project: github-issue-bot, Custom: custom_value");
    }

    #[test]
    fn test_substitute_unknown_left_verbatim() {
        let vars = test_vars();
        assert_eq!(vars.substitute("Value: {{UNKNOWN}}"), "Value: {{UNKNOWN}}");
    }

    #[test]
    fn test_substitute_ignores_non_placeholder_braces() {
        let vars = test_vars();
        let input = "const { Octokit } = require(\"@octokit/rest\");";
        assert_eq!(vars.substitute(input), input);
    }

    #[test]
    fn test_add_from_pairs() {
        let mut vars = test_vars();
        vars.add_from_pairs(&["year=2026".to_string(), "AUTHOR = Jane".to_string()]);

        assert_eq!(vars.get("YEAR"), Some(&"2026".to_string()));
        assert_eq!(vars.get("AUTHOR"), Some(&"Jane".to_string()));
    }

    #[test]
    fn test_find_used_variables() {
        let content = "Name: {{NAME}}, Year: {{YEAR}}, Name again: {{NAME}}";
        let used = Variables::find_used_variables(content);
        assert_eq!(used, vec!["NAME".to_string(), "YEAR".to_string()]);
    }
}
