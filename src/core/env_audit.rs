use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const DEFAULT_SEPARATOR: &str = "=";

/// Where an env-like file lives and which variables it has to declare.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvProfile {
    pub path: String,
    pub file: String,
    /// Comma-separated variable names.
    pub vars: String,
    pub sep: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    Complete,
    FileNotFound { path: PathBuf },
    MissingVars { path: PathBuf, missing: Vec<String> },
}

impl AuditOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, AuditOutcome::Complete)
    }
}

impl EnvProfile {
    pub fn target(&self) -> PathBuf {
        Path::new(&self.path).join(&self.file)
    }

    pub fn separator(&self) -> &str {
        if self.sep.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.sep
        }
    }

    pub fn expected_vars(&self) -> impl Iterator<Item = &str> {
        self.vars.split(',').map(str::trim)
    }

    pub fn audit(&self) -> AuditOutcome {
        let path = self.target();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                // Absent and unreadable files get the same report.
                tracing::debug!(path = %path.display(), error = %err, "env file unreadable");
                return AuditOutcome::FileNotFound { path };
            }
        };

        let found = declared_names(&content, self.separator()).join(",");
        let missing: Vec<String> = self
            .expected_vars()
            .filter(|expected| !found.contains(expected))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            AuditOutcome::Complete
        } else {
            AuditOutcome::MissingVars { path, missing }
        }
    }
}

/// Keys of every line that splits into exactly one key and one value.
pub fn declared_names<'a>(content: &'a str, sep: &str) -> Vec<&'a str> {
    content
        .split('\n')
        .filter_map(|line| {
            let mut parts = line.split(sep);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(_), None) => Some(key),
                _ => None,
            }
        })
        .collect()
}

/// Audits every profile; one profile failing never stops the others.
pub fn audit_all(profiles: &BTreeMap<String, EnvProfile>) -> Vec<(&str, AuditOutcome)> {
    profiles
        .iter()
        .map(|(name, profile)| {
            let outcome = profile.audit();
            tracing::debug!(profile = %name, complete = outcome.is_complete(), "audited env profile");
            (name.as_str(), outcome)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn profile(dir: &Path, vars: &str, sep: &str) -> EnvProfile {
        EnvProfile {
            path: dir.to_string_lossy().into_owned(),
            file: ".env".to_string(),
            vars: vars.to_string(),
            sep: sep.to_string(),
        }
    }

    #[test]
    fn test_all_vars_present() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "A=1\nB=2\n").unwrap();
        let outcome = profile(tmp.path(), "A,B", "=").audit();
        assert_eq!(outcome, AuditOutcome::Complete);
    }

    #[test]
    fn test_missing_var_is_named() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "A=1\n").unwrap();
        let outcome = profile(tmp.path(), "A,B", "=").audit();
        assert_eq!(
            outcome,
            AuditOutcome::MissingVars {
                path: tmp.path().join(".env"),
                missing: vec!["B".to_string()],
            }
        );
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().unwrap();
        let outcome = profile(tmp.path(), "A", "=").audit();
        assert!(matches!(outcome, AuditOutcome::FileNotFound { .. }));
        assert!(!outcome.is_complete());
    }

    #[test]
    fn test_substring_containment_is_kept() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "AB=1\n").unwrap();
        let outcome = profile(tmp.path(), "A", "=").audit();
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_custom_separator() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "HOST: localhost\nPORT: 80\n").unwrap();
        assert!(profile(tmp.path(), "HOST,PORT", ":").audit().is_complete());
    }

    #[test]
    fn test_declared_names_skip_malformed_lines() {
        let names = declared_names("A=1\n# comment\nB=x=y\n\nC=\n", "=");
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_separator_defaults_to_equals() {
        let p = profile(Path::new("."), "A", "");
        assert_eq!(p.separator(), "=");
    }

    #[test]
    fn test_audit_all_continues_after_failure() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("good");
        fs::create_dir(&good).unwrap();
        fs::write(good.join(".env"), "A=1\n").unwrap();

        let mut profiles = BTreeMap::new();
        profiles.insert("broken".to_string(), profile(&tmp.path().join("missing"), "A", "="));
        profiles.insert("good".to_string(), profile(&good, "A", "="));

        let outcomes = audit_all(&profiles);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].0, "broken");
        assert!(!outcomes[0].1.is_complete());
        assert_eq!(outcomes[1].0, "good");
        assert!(outcomes[1].1.is_complete());
    }
}
