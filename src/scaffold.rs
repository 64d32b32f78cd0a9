//! Repository scaffolding: sample data files and boilerplate documents,
//! written verbatim to fixed paths.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// One row of the sample model inventory.
#[derive(Debug, Clone, Copy)]
pub struct ModelRecord {
    pub model_name: &'static str,
    pub status: &'static str,
    pub source: &'static str,
    pub release_date: &'static str,
    pub parameters: &'static str,
    pub context_length: u32,
    pub cost_per_1k_tokens: f64,
}

pub const CSV_HEADER: &str =
    "model_name,status,source,release_date,parameters,context_length,cost_per_1k_tokens";

pub const SAMPLE_MODELS: [ModelRecord; 15] = [
    ModelRecord { model_name: "gpt-4-turbo", status: "Available", source: "OpenAI", release_date: "2024-04-09", parameters: "1.76T", context_length: 128000, cost_per_1k_tokens: 0.01 },
    ModelRecord { model_name: "claude-3-opus", status: "Available", source: "Anthropic", release_date: "2024-02-29", parameters: "Unknown", context_length: 200000, cost_per_1k_tokens: 0.015 },
    ModelRecord { model_name: "gemini-pro", status: "Available", source: "Google", release_date: "2023-12-06", parameters: "Unknown", context_length: 32000, cost_per_1k_tokens: 0.0005 },
    ModelRecord { model_name: "claude-3-sonnet", status: "Available", source: "Anthropic", release_date: "2024-02-29", parameters: "Unknown", context_length: 200000, cost_per_1k_tokens: 0.003 },
    ModelRecord { model_name: "gpt-3.5-turbo", status: "Available", source: "OpenAI", release_date: "2022-11-30", parameters: "175B", context_length: 16385, cost_per_1k_tokens: 0.0005 },
    ModelRecord { model_name: "llama-2-70b", status: "Available", source: "Meta", release_date: "2023-07-18", parameters: "70B", context_length: 4096, cost_per_1k_tokens: 0.0008 },
    ModelRecord { model_name: "mistral-large", status: "Available", source: "Mistral", release_date: "2024-02-26", parameters: "Unknown", context_length: 32000, cost_per_1k_tokens: 0.008 },
    ModelRecord { model_name: "claude-3-haiku", status: "Available", source: "Anthropic", release_date: "2024-03-13", parameters: "Unknown", context_length: 200000, cost_per_1k_tokens: 0.00025 },
    ModelRecord { model_name: "gpt-4", status: "Available", source: "OpenAI", release_date: "2023-03-14", parameters: "1.76T", context_length: 8192, cost_per_1k_tokens: 0.03 },
    ModelRecord { model_name: "gemini-ultra", status: "Limited Access", source: "Google", release_date: "2023-12-06", parameters: "Unknown", context_length: 32000, cost_per_1k_tokens: 0.002 },
    ModelRecord { model_name: "command-r-plus", status: "Available", source: "Cohere", release_date: "2024-04-04", parameters: "104B", context_length: 128000, cost_per_1k_tokens: 0.003 },
    ModelRecord { model_name: "mixtral-8x7b", status: "Available", source: "Mistral", release_date: "2023-12-11", parameters: "46.7B", context_length: 32000, cost_per_1k_tokens: 0.0007 },
    ModelRecord { model_name: "deepseek-coder-33b", status: "Available", source: "DeepSeek", release_date: "2023-11-20", parameters: "33B", context_length: 16000, cost_per_1k_tokens: 0.0014 },
    ModelRecord { model_name: "yi-34b-chat", status: "Available", source: "01.AI", release_date: "2023-11-05", parameters: "34B", context_length: 4096, cost_per_1k_tokens: 0.0006 },
    ModelRecord { model_name: "palm-2", status: "Deprecated", source: "Google", release_date: "2023-05-10", parameters: "540B", context_length: 8000, cost_per_1k_tokens: 0.001 },
];

/// Header row plus one data row per sample model. Field values contain no
/// commas or quotes, so no escaping is required.
pub fn model_list_csv() -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in SAMPLE_MODELS {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            record.model_name,
            record.status,
            record.source,
            record.release_date,
            record.parameters,
            record.context_length,
            record.cost_per_1k_tokens
        ));
    }
    out
}

/// The header-map companion file: one data row repeating the column names.
pub fn header_map_csv() -> String {
    format!("{CSV_HEADER}\n{CSV_HEADER}\n")
}

pub fn last_updated_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Every scaffold file as a (relative path, contents) pair, in write
/// order.
pub fn scaffold_files() -> Vec<(PathBuf, String)> {
    vec![
        (PathBuf::from("model_list.csv"), model_list_csv()),
        (PathBuf::from("model_list_headers.csv"), header_map_csv()),
        (PathBuf::from("last-updated.txt"), last_updated_stamp()),
        (PathBuf::from(".gitignore"), GITIGNORE.to_string()),
        (
            PathBuf::from(".github/workflows/deploy.yml"),
            DEPLOY_WORKFLOW.to_string(),
        ),
        (
            PathBuf::from(".lighthouserc.json"),
            LIGHTHOUSE_CONFIG.to_string(),
        ),
        (
            PathBuf::from(".github/ISSUE_TEMPLATE/bug_report.md"),
            BUG_TEMPLATE.to_string(),
        ),
        (
            PathBuf::from(".github/ISSUE_TEMPLATE/feature_request.md"),
            FEATURE_TEMPLATE.to_string(),
        ),
        (PathBuf::from("CONTRIBUTING.md"), CONTRIBUTING.to_string()),
    ]
}

/// Writes the full scaffold under `root`, creating directories as needed,
/// and returns the written paths.
pub fn write_scaffold(root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (rel, contents) in scaffold_files() {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        log::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

const GITIGNORE: &str = r##"# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Runtime data
pids
*.pid
*.seed
*.pid.lock

# Coverage directory used by tools like istanbul
coverage/

# nyc test coverage
.nyc_output

# Dependency directories
node_modules/

# Optional npm cache directory
.npm

# Optional REPL history
.node_repl_history

# Environment variables
.env
.env.local
.env.development.local
.env.test.local
.env.production.local

# IDE files
.vscode/
.idea/
*.swp
*.swo
*~

# OS generated files
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
ehthumbs.db
Thumbs.db

# Temporary files
*.tmp
*.temp

# Security
*.key
*.pem
*.p12
secrets.json
config/secrets.yml

# Build outputs
dist/
build/
*.tgz

# Local test files
test-data/
*.test.csv
"##;

const DEPLOY_WORKFLOW: &str = r##"name: Deploy AI Models Dashboard

on:
  push:
    branches: [ main, master ]
  pull_request:
    branches: [ main, master ]
  workflow_dispatch:
  schedule:
    - cron: '0 2 * * 1'  # Weekly Monday at 2 AM

permissions:
  contents: read
  pages: write
  id-token: write

concurrency:
  group: "pages"
  cancel-in-progress: false

jobs:
  # Security and quality checks
  security-audit:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4

      - name: Validate CSV Data
        run: |
          # Check CSV file format
          if [ -f "model_list.csv" ]; then
            echo "Validating CSV structure..."
            head -1 model_list.csv | grep -q "model_name,status,source" || (echo "Invalid CSV header" && exit 1)
            echo "CSV validation passed"
          fi

      - name: Security Headers Check
        run: |
          # Check for security headers in HTML
          grep -q "Content-Security-Policy" index.html || echo "Warning: No CSP found"
          grep -q "viewport" index.html || echo "Warning: No viewport meta tag"
          echo "Security check completed"

  # Build and deploy
  deploy:
    needs: security-audit
    environment:
      name: github-pages
      url: ${{ steps.deployment.outputs.page_url }}
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4

      - name: Update timestamp
        run: |
          echo "$(date '+%Y-%m-%d %H:%M:%S')" > last-updated.txt
          git config --local user.email "action@github.com"
          git config --local user.name "GitHub Action"
          git add last-updated.txt
          git diff --staged --quiet || git commit -m "Auto-update timestamp [skip ci]"

      - name: Setup Pages
        uses: actions/configure-pages@v4

      - name: Upload artifact
        uses: actions/upload-pages-artifact@v3
        with:
          path: '.'

      - name: Deploy to GitHub Pages
        id: deployment
        uses: actions/deploy-pages@v4

  # Performance and accessibility testing
  lighthouse:
    runs-on: ubuntu-latest
    if: github.event_name == 'pull_request'
    steps:
      - name: Checkout
        uses: actions/checkout@v4

      - name: Lighthouse CI
        uses: treosh/lighthouse-ci-action@v10
        with:
          configPath: './.lighthouserc.json'
          uploadArtifacts: true
          temporaryPublicStorage: true
"##;

const LIGHTHOUSE_CONFIG: &str = r##"{
  "ci": {
    "collect": {
      "url": ["http://localhost:3000"],
      "startServerCommand": "python -m http.server 3000",
      "startServerReadyPattern": "Serving HTTP"
    },
    "assert": {
      "assertions": {
        "categories:performance": ["warn", {"minScore": 0.8}],
        "categories:accessibility": ["error", {"minScore": 0.9}],
        "categories:best-practices": ["warn", {"minScore": 0.8}],
        "categories:seo": ["warn", {"minScore": 0.8}]
      }
    }
  }
}"##;

const BUG_TEMPLATE: &str = r##"---
name: Bug Report
about: Create a report to help us improve
title: '[BUG] '
labels: 'bug'
assignees: ''

---

**Describe the bug**
A clear and concise description of what the bug is.

**To Reproduce**
Steps to reproduce the behavior:
1. Go to '...'
2. Click on '....'
3. Scroll down to '....'
4. See error

**Expected behavior**
A clear and concise description of what you expected to happen.

**Screenshots**
If applicable, add screenshots to help explain your problem.

**Environment (please complete the following information):**
 - OS: [e.g. iOS]
 - Browser [e.g. chrome, safari]
 - Version [e.g. 22]

**Additional context**
Add any other context about the problem here.
"##;

const FEATURE_TEMPLATE: &str = r##"---
name: Feature Request
about: Suggest an idea for this project
title: '[FEATURE] '
labels: 'enhancement'
assignees: ''

---

**Is your feature request related to a problem? Please describe.**
A clear and concise description of what the problem is. Ex. I'm always frustrated when [...]

**Describe the solution you'd like**
A clear and concise description of what you want to happen.

**Describe alternatives you've considered**
A clear and concise description of any alternative solutions or features you've considered.

**Additional context**
Add any other context or screenshots about the feature request here.
"##;

const CONTRIBUTING: &str = r##"# Contributing to AI Models Dashboard

Thank you for your interest in contributing to the AI Models Dashboard! This document provides guidelines and instructions for contributing.

## 🤝 How to Contribute

### Reporting Issues
- Use the GitHub issue tracker
- Search existing issues before creating new ones
- Use the provided issue templates
- Include clear, detailed descriptions
- Add screenshots when applicable

### Suggesting Features
- Use the feature request template
- Explain the use case and benefit
- Consider implementation complexity
- Discuss with maintainers before starting work

### Code Contributions
1. **Fork** the repository
2. **Create** a feature branch (`git checkout -b feature/amazing-feature`)
3. **Make** your changes
4. **Test** your changes thoroughly
5. **Commit** with clear messages (`git commit -m 'Add amazing feature'`)
6. **Push** to your branch (`git push origin feature/amazing-feature`)
7. **Create** a Pull Request

## 📋 Development Guidelines

### Code Style
- Use consistent indentation (2 spaces)
- Follow JavaScript best practices
- Comment complex logic
- Use meaningful variable names
- Keep functions focused and small

### Testing
- Test all functionality before submitting
- Verify mobile responsiveness
- Check cross-browser compatibility
- Validate data formats

### Documentation
- Update README.md for new features
- Add inline comments for complex code
- Update MAINTENANCE.md for new processes
- Include examples where helpful

## 🔍 Pull Request Process

### Before Submitting
- [ ] Code follows project style guidelines
- [ ] All tests pass
- [ ] Documentation is updated
- [ ] No merge conflicts exist
- [ ] Branch is up to date with main

### PR Requirements
- Clear title and description
- Link to related issues
- Include screenshots for UI changes
- List breaking changes (if any)
- Request appropriate reviewers

### Review Process
1. **Automated checks** must pass
2. **Code review** by maintainers
3. **Testing** by reviewers
4. **Approval** and merge

## 🎯 Types of Contributions

### Data Updates
- Adding new AI models
- Updating pricing information
- Correcting model specifications
- Adding new providers

### Feature Development
- New filtering options
- Enhanced search capabilities
- Additional export formats
- Performance improvements

### Bug Fixes
- Fixing broken functionality
- Resolving display issues
- Correcting data parsing errors
- Improving error handling

### Documentation
- Improving README clarity
- Adding code comments
- Creating tutorials
- Updating maintenance guides

## 🚀 Getting Started

### Development Setup
1. **Clone** the repository:
   ```bash
   git clone https://github.com/yourusername/ai-models-dashboard.git
   cd ai-models-dashboard
   ```

2. **Create** a local server:
   ```bash
   python -m http.server 8000
   # or
   npx serve .
   ```

3. **Open** in browser: `http://localhost:8000`

### Making Changes
1. **Edit** the relevant files
2. **Test** locally
3. **Validate** CSV data format
4. **Check** for JavaScript errors
5. **Verify** responsive design

## 📊 Data Contribution Guidelines

### Adding New Models
When adding new AI models to `model_list.csv`:

- **Research** thoroughly for accurate information
- **Use consistent** naming conventions
- **Verify** all data points
- **Include** release date in YYYY-MM-DD format
- **Update** last-updated.txt timestamp

### Data Quality Standards
- All fields must be complete (use "Unknown" if necessary)
- Dates must be in ISO format (YYYY-MM-DD)
- Costs must be in USD per 1K tokens
- Status must be: Available, Limited Access, Deprecated, or Beta
- Source must be the official provider name

## 🎨 Design Contributions

### UI/UX Improvements
- Maintain consistent design language
- Ensure accessibility compliance
- Test on multiple devices
- Consider colorblind users
- Maintain fast loading times

### Responsive Design
- Mobile-first approach
- Test on various screen sizes
- Ensure touch-friendly interactions
- Optimize for performance

## 🔧 Technical Requirements

### Browser Support
- Chrome 80+
- Firefox 75+
- Safari 13+
- Edge 80+

### Performance Standards
- Page load time < 3 seconds
- Mobile performance score > 80
- Accessibility score > 90
- SEO score > 80

## 📞 Getting Help

### Communication Channels
- **GitHub Issues**: Bug reports and feature requests
- **GitHub Discussions**: Questions and general discussion
- **Pull Request Comments**: Code-specific discussions

### Maintainer Contact
- Create an issue for general questions
- Tag maintainers in urgent matters
- Use draft PRs for early feedback

## 🏆 Recognition

Contributors are recognized in several ways:
- Listed in repository contributors
- Mentioned in release notes
- Featured in documentation
- Repository badges and achievements

## 📜 Code of Conduct

This project follows the [Contributor Covenant](https://www.contributor-covenant.org/) Code of Conduct. By participating, you are expected to uphold this code.

### Our Standards
- Be respectful and inclusive
- Focus on constructive feedback
- Help create a welcoming environment
- Respect different viewpoints and experiences

---

Thank you for contributing to making the AI Models Dashboard better for everyone! 🚀
"##;
