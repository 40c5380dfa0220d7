//! Demo catalog: the static command/output pairs played by the demo terminal
//! and the install snippets offered for copying.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoEntry {
    pub command: String,
    pub output: String,
}

impl DemoEntry {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }

    /// Splits the output on `\n`, keeping empty lines.
    ///
    /// An empty output still yields a single (empty) line.
    pub fn output_lines(&self) -> Vec<String> {
        self.output.split('\n').map(str::to_string).collect()
    }
}

impl Display for DemoEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.command)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InstallMethod {
    pub title: String,
    pub command: String,
    pub description: Option<String>,
}

impl Display for InstallMethod {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.title, self.command)
    }
}

/// Ordered, immutable list of demo entries.
///
/// Order defines the selector order; the default selection is the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCatalog {
    entries: Vec<DemoEntry>,
    install_methods: Vec<InstallMethod>,
}

impl DemoCatalog {
    /// Builds a catalog, rejecting an empty entry list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if `entries` is empty, since a selection
    /// index must always reference a valid entry.
    pub fn new(entries: Vec<DemoEntry>, install_methods: Vec<InstallMethod>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::empty_catalog("<in-memory>".to_string()));
        }

        Ok(Self {
            entries,
            install_methods,
        })
    }

    pub fn get(&self, index: usize) -> Option<&DemoEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DemoEntry> {
        self.entries.iter()
    }

    pub fn install_methods(&self) -> &[InstallMethod] {
        &self.install_methods
    }

    pub fn install_method(&self, item_id: usize) -> Option<&InstallMethod> {
        self.install_methods.get(item_id)
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self {
            entries: builtin_demos(),
            install_methods: builtin_install_methods(),
        }
    }
}

fn builtin_demos() -> Vec<DemoEntry> {
    vec![
        DemoEntry::new(
            "gocat connect google.com 80",
            "Connecting to google.com:80...\n\
             Connected successfully!\n\
             Connection established to 142.250.191.14:80\n\
             Ready to send/receive data.",
        ),
        DemoEntry::new(
            "gocat listen 8080",
            "Starting server on port 8080...\n\
             Listening on 0.0.0.0:8080\n\
             Server ready to accept connections.\n\
             Waiting for incoming connections...",
        ),
        DemoEntry::new(
            "gocat scan localhost 1-100",
            "Scanning localhost ports 1-100...\n\
             Port 22: Open (SSH)\n\
             Port 80: Open (HTTP)\n\
             Port 443: Open (HTTPS)\n\
             Scan completed. 3 open ports found.",
        ),
        DemoEntry::new(
            "gocat --help",
            [
                "GoCat - Modern netcat alternative",
                "",
                "Usage:",
                "  gocat [command]",
                "",
                "Available Commands:",
                "  connect     Connect to a remote host",
                "  listen      Listen for incoming connections",
                "  scan        Scan for open ports",
                "  help        Help about any command",
                "",
                "Flags:",
                "  -h, --help     help for gocat",
                "  -v, --version  version for gocat",
            ]
            .join("\n"),
        ),
    ]
}

fn builtin_install_methods() -> Vec<InstallMethod> {
    let method = |title: &str, command: &str, description: &str| InstallMethod {
        title: title.to_string(),
        command: command.to_string(),
        description: Some(description.to_string()),
    };

    vec![
        method(
            "Homebrew (macOS/Linux)",
            "brew install gocat",
            "The easiest way to install on macOS and Linux",
        ),
        method(
            "Go Install",
            "go install github.com/ibrahmsql/gocat@latest",
            "Install directly from source using Go",
        ),
        method(
            "Package Managers (.deb/.rpm)",
            "apt install gocat  # or yum install gocat.rpm, yay -S gocat",
            "Available as .deb and .rpm packages for Linux distributions",
        ),
        method(
            "Direct Download",
            "curl -L https://github.com/ibrahmsql/gocat/releases/latest",
            "Download pre-built binaries for all platforms",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lines_preserves_empty_lines() {
        let entry = DemoEntry::new("gocat --help", "a\n\nb\n");
        assert_eq!(entry.output_lines(), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_output_lines_empty_output() {
        let entry = DemoEntry::new("true", "");
        assert_eq!(entry.output_lines(), vec![""]);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = DemoCatalog::default();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0).unwrap().command, "gocat connect google.com 80");
        assert_eq!(catalog.get(1).unwrap().command, "gocat listen 8080");
        assert!(catalog.get(4).is_none());
        assert_eq!(
            catalog.install_method(0).unwrap().command,
            "brew install gocat"
        );
    }

    #[test]
    fn test_help_output_keeps_blank_lines() {
        let catalog = DemoCatalog::default();
        let lines = catalog.get(3).unwrap().output_lines();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[1], "");
        assert_eq!(lines[13], "  -v, --version  version for gocat");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = DemoCatalog::new(vec![], vec![]);
        assert!(matches!(result, Err(Error::EmptyCatalog { .. })));
    }

    #[test]
    fn test_display() {
        let entry = DemoEntry::new("gocat listen 8080", "ok");
        assert_eq!(format!("{entry}"), "gocat listen 8080");

        let catalog = DemoCatalog::default();
        assert_eq!(
            format!("{}", catalog.install_method(0).unwrap()),
            "Homebrew (macOS/Linux): brew install gocat"
        );
    }
}
