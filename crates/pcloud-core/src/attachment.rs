//! Attachment planning: file references to (file, display name) pairs
//!
//! A file reference is either a bare path or `path:name`, where the name
//! bypasses alias matching. Bare paths are matched against the configured
//! alias rules, and fall back to their base name.

use std::fmt;
use std::path::{Path, PathBuf};

use pcloud_meta::AliasRules;
use regex::Regex;

use crate::catalog::check_attachment;
use crate::{Error, Result};

/// A file given on the command line, with an optional explicit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    pub path: PathBuf,
    pub name: Option<String>,
}

impl FileRef {
    /// Parse `path` or `path:name`.
    ///
    /// The split happens on the last `:` and only when the text after it
    /// is non-empty and free of path separators, so `C:\take.mp3` stays a
    /// plain path.
    pub fn parse(arg: &str) -> Self {
        if let Some((path, name)) = arg.rsplit_once(':') {
            let name = name.trim();
            if !path.is_empty() && !name.is_empty() && !name.contains(['/', '\\']) {
                return Self {
                    path: PathBuf::from(path),
                    name: Some(name.to_string()),
                };
            }
        }

        Self {
            path: PathBuf::from(arg),
            name: None,
        }
    }
}

/// Why a file was left out of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    UnsupportedExtension(String),
    NotFound,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedExtension(ext) if ext.is_empty() => {
                write!(f, "no file extension (expected mp3 or mid)")
            }
            Self::UnsupportedExtension(ext) => {
                write!(f, "unsupported type `{ext}` (expected mp3 or mid)")
            }
            Self::NotFound => write!(f, "file not found"),
        }
    }
}

/// A file left out of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub path: PathBuf,
    pub reason: RejectReason,
}

/// A file accepted for upload under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAttachment {
    pub path: PathBuf,
    pub name: String,
}

/// Ordered upload plan for one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPlan {
    pub partition_id: String,
    pub accepted: Vec<PlannedAttachment>,
    pub rejected: Vec<Rejection>,
}

impl AttachmentPlan {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Human-readable mapping shown before asking for approval.
    pub fn summary(&self) -> String {
        let mut out = format!("Attach to partition {}:\n", self.partition_id);
        for item in &self.accepted {
            out.push_str(&format!("  {} -> {}\n", item.path.display(), item.name));
        }
        out
    }
}

struct CompiledRule {
    name: String,
    patterns: Vec<Regex>,
}

/// Maps local files to attachment display names.
pub struct AttachmentMatcher {
    rules: Vec<CompiledRule>,
}

impl AttachmentMatcher {
    /// Compile the alias rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for a pattern that does not form
    /// a valid expression, e.g. an unclosed `[`.
    pub fn new(aliases: &AliasRules) -> Result<Self> {
        let rules = aliases
            .iter()
            .map(|rule| {
                let patterns = rule
                    .patterns
                    .iter()
                    .map(|pattern| {
                        compile_glob(pattern).map_err(|reason| Error::InvalidPattern {
                            alias: rule.name.clone(),
                            pattern: pattern.clone(),
                            reason,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledRule {
                    name: rule.name.clone(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Display name for `path` from the alias rules alone.
    ///
    /// The first rule with a pattern matching either the file name or the
    /// base name wins; otherwise the base name is returned as-is.
    pub fn display_name(&self, path: &Path) -> String {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.rules
            .iter()
            .find(|rule| {
                rule.patterns
                    .iter()
                    .any(|re| re.is_match(&file_name) || re.is_match(&stem))
            })
            .map(|rule| rule.name.clone())
            .unwrap_or(stem)
    }

    /// Validate every file and name the accepted ones.
    ///
    /// Files are checked one by one; a rejection never stops the others.
    /// Nothing here touches the network.
    pub fn plan(&self, partition_id: &str, files: &[FileRef]) -> AttachmentPlan {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for file in files {
            let reason = match check_attachment(&file.path) {
                Err(Error::UnsupportedAttachment { extension, .. }) => {
                    Some(RejectReason::UnsupportedExtension(extension))
                }
                _ if !file.path.is_file() => Some(RejectReason::NotFound),
                _ => None,
            };

            if let Some(reason) = reason {
                tracing::warn!(path = %file.path.display(), %reason, "attachment rejected");
                rejected.push(Rejection {
                    path: file.path.clone(),
                    reason,
                });
                continue;
            }

            let name = match &file.name {
                Some(name) => name.clone(),
                None => self.display_name(&file.path),
            };
            accepted.push(PlannedAttachment {
                path: file.path.clone(),
                name,
            });
        }

        AttachmentPlan {
            partition_id: partition_id.to_string(),
            accepted,
            rejected,
        }
    }
}

/// Translate a shell glob (`*`, `?`, `[...]`) into an anchored,
/// case-insensitive expression.
fn compile_glob(pattern: &str) -> std::result::Result<Regex, String> {
    let mut re = String::from("(?i)^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '[' => {
                let mut class = String::from("[");
                if matches!(chars.peek(), Some('!') | Some('^')) {
                    chars.next();
                    class.push('^');
                }
                let mut closed = false;
                let mut first = true;
                while let Some(c) = chars.next() {
                    match c {
                        ']' if !first => {
                            closed = true;
                            break;
                        }
                        '-' => class.push('-'),
                        '\\' | '[' | ']' | '^' | '&' | '~' => {
                            class.push('\\');
                            class.push(c);
                        }
                        _ => class.push(c),
                    }
                    first = false;
                }
                if !closed {
                    return Err("unclosed `[`".to_string());
                }
                class.push(']');
                re.push_str(&class);
            }
            _ => re.push_str(&regex::escape(&c.to_string())),
        }
    }

    re.push('$');
    Regex::new(&re).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ref_plain_path() {
        assert_eq!(
            FileRef::parse("take1.mp3"),
            FileRef {
                path: PathBuf::from("take1.mp3"),
                name: None
            }
        );
    }

    #[test]
    fn test_file_ref_with_name() {
        let file = FileRef::parse("dir/take1.mp3:Lead vocals");
        assert_eq!(file.path, PathBuf::from("dir/take1.mp3"));
        assert_eq!(file.name.as_deref(), Some("Lead vocals"));
    }

    #[test]
    fn test_file_ref_splits_on_last_colon() {
        let file = FileRef::parse("a:b.mp3:Name");
        assert_eq!(file.path, PathBuf::from("a:b.mp3"));
        assert_eq!(file.name.as_deref(), Some("Name"));
    }

    #[test]
    fn test_file_ref_ignores_drive_prefix_and_empty_name() {
        assert_eq!(FileRef::parse(r"C:\music\take.mp3").name, None);
        assert_eq!(FileRef::parse("take.mp3:").name, None);
    }

    #[test]
    fn test_glob_translation() {
        let re = compile_glob("*piano*").unwrap();
        assert!(re.is_match("Grand PIANO take"));
        assert!(!re.is_match("guitar"));

        let re = compile_glob("take?.mp3").unwrap();
        assert!(re.is_match("take1.mp3"));
        assert!(!re.is_match("take10.mp3"));
        assert!(!re.is_match("take1xmp3"));

        let re = compile_glob("[!a]*").unwrap();
        assert!(re.is_match("bass"));
        assert!(!re.is_match("alto"));

        let re = compile_glob("part[1-3]").unwrap();
        assert!(re.is_match("part2"));
        assert!(!re.is_match("part4"));
    }

    #[test]
    fn test_glob_unclosed_class_is_error() {
        assert!(compile_glob("[abc").is_err());
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(
            RejectReason::UnsupportedExtension("wav".into()).to_string(),
            "unsupported type `wav` (expected mp3 or mid)"
        );
        assert_eq!(RejectReason::NotFound.to_string(), "file not found");
    }
}
