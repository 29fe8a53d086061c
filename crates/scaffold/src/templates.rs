//! Compiled-in template text
//!
//! Every file the generator writes comes from one of these constants, run
//! through {{PLACEHOLDER}} substitution. The starter scripts are meant to be
//! runnable as written once the named client library is installed.

/// MIT license text
pub const LICENSE_MIT: &str = r#"MIT License

Copyright (c) {{YEAR}} {{AUTHOR}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

pub const GITIGNORE_PYTHON: &str = "__pycache__/\n*.pyc\n.venv/\n.env\n";

pub const GITIGNORE_NODE: &str = "node_modules/\ndist/\n.env\n";

pub const GITIGNORE_ACTION: &str = "# no files\n";

/// README body; the footer and the action trailer are appended separately
pub const README: &str = r#"# {{NAME}}

{{TITLE}} is a starter project demonstrating GitHub API integration for {{NAME}}.

## Key Features
- Starter code
- Example API usage
- Basic README and license

## How it uses the GitHub API
Uses the GitHub REST API to list or modify repositories, issues, or secrets depending on the project.

## Example usage
See the starter script in the repository for a runnable example.
"#;

/// Extra paragraph for GitHub Action projects
pub const README_ACTION_NOTE: &str = "\nThis repo contains a starter GitHub Action workflow.\n";

/// Every README ends with this
pub const README_FOOTER: &str = "\n---\n\n[License](LICENSE)\n";

/// Minimal PyGithub example
pub const STARTER_PYTHON: &str = r#""""
Starter example demonstrating a minimal GitHub API call using PyGithub.
Ensure `PyGithub` is installed: pip install PyGithub
"""
from github import Github
import os

def list_repos(token=None):
    token = token or os.getenv('GITHUB_TOKEN')
    if not token:
        print('Set GITHUB_TOKEN environment variable to run')
        return
    g = Github(token)
    user = g.get_user()
    for repo in user.get_repos():
        print(repo.full_name)

if __name__ == '__main__':
    list_repos()
"#;

pub const REQUIREMENTS_TXT: &str = "PyGithub\n";

/// Minimal @octokit/rest example
pub const STARTER_NODE: &str = r#"// Starter example using @octokit/rest
// npm install @octokit/rest
const { Octokit } = require("@octokit/rest");

async function listRepos(token) {
  const octokit = new Octokit({ auth: token });
  const res = await octokit.rest.repos.listForAuthenticatedUser();
  res.data.forEach(r => console.log(r.full_name));
}

if (require.main === module) {
  const token = process.env.GITHUB_TOKEN;
  if (!token) {
    console.log('Set GITHUB_TOKEN');
    process.exit(1);
  }
  listRepos(token);
}
"#;

pub const PACKAGE_JSON: &str = r#"{
  "name": "{{NAME}}",
  "version": "0.1.0",
  "main": "index.js",
  "license": "MIT",
  "dependencies": {
    "@octokit/rest": "^19.0.0"
  }
}
"#;

/// Starter CI workflow for GitHub Action projects
pub const WORKFLOW_CI: &str = r#"name: CI
on: [push, pull_request]
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v3
      - name: Set up Python
        uses: actions/setup-python@v4
        with:
          python-version: '3.x'
      - name: Install
        run: pip install -r requirements.txt || true
      - name: Run tests
        run: echo "Add tests here"
"#;
