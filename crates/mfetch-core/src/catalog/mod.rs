//! Model catalog and group selection.
//!
//! A catalog is an ordered list of named groups; each group is an ordered
//! list of download tasks. Selecting a group is a pure lookup: no I/O, and an
//! unknown name becomes a [`UsageError`] that lists what is available.

mod builtin;
mod category;

pub use builtin::builtin;
pub use category::ModelCategory;

use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/// Pseudo-group selecting every group in declaration order.
pub const ALL_GROUPS: &str = "all";

/// One file to materialize: where it comes from and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub source_url: String,
    pub destination: PathBuf,
}

impl DownloadTask {
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
        }
    }

    /// File name of the destination, for progress lines.
    pub fn file_name(&self) -> Cow<'_, str> {
        match self.destination.file_name() {
            Some(name) => name.to_string_lossy(),
            None => self.destination.to_string_lossy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub tasks: Vec<DownloadTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate group name '{0}'")]
    DuplicateGroup(String),
    #[error("group name '{0}' is reserved")]
    ReservedName(String),
}

/// Bad group selection on the command line. Carries the valid choices so the
/// caller can print them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown group '{requested}'; available groups: {}", .available.join(", "))]
    UnknownGroup {
        requested: String,
        available: Vec<String>,
    },
    #[error("expected exactly one group name, got {given}; available groups: {}", .available.join(", "))]
    GroupCount { given: usize, available: Vec<String> },
}

impl UsageError {
    /// Valid choices, including `all`.
    pub fn available(&self) -> &[String] {
        match self {
            UsageError::UnknownGroup { available, .. } | UsageError::GroupCount { available, .. } => {
                available
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<Group>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate group names and the reserved `all`.
    pub fn new(groups: Vec<Group>) -> Result<Self, CatalogError> {
        for (i, g) in groups.iter().enumerate() {
            if g.name == ALL_GROUPS {
                return Err(CatalogError::ReservedName(g.name.clone()));
            }
            if groups[..i].iter().any(|prev| prev.name == g.name) {
                return Err(CatalogError::DuplicateGroup(g.name.clone()));
            }
        }
        Ok(Self { groups })
    }

    pub(crate) fn from_groups_unchecked(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Group names in declaration order (without `all`).
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    /// Every valid selector: group names, then `all`.
    pub fn choices(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|g| g.name.clone())
            .chain(std::iter::once(ALL_GROUPS.to_string()))
            .collect()
    }

    /// Tasks for `name`; `all` is the concatenation of every group in order.
    pub fn resolve(&self, name: &str) -> Result<Vec<&DownloadTask>, UsageError> {
        if name == ALL_GROUPS {
            return Ok(self.groups.iter().flat_map(|g| g.tasks.iter()).collect());
        }
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.tasks.iter().collect())
            .ok_or_else(|| UsageError::UnknownGroup {
                requested: name.to_string(),
                available: self.choices(),
            })
    }

    /// Resolve raw positional arguments: exactly one group name is accepted.
    pub fn select<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<&DownloadTask>, UsageError> {
        match args {
            [name] => self.resolve(name.as_ref()),
            _ => Err(UsageError::GroupCount {
                given: args.len(),
                available: self.choices(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(url: &str, dest: &str) -> DownloadTask {
        DownloadTask::new(url, dest)
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            Group {
                name: "a".into(),
                tasks: vec![task("http://h/1", "x/1.bin"), task("http://h/2", "x/2.bin")],
            },
            Group {
                name: "b".into(),
                tasks: vec![task("http://h/3", "y/3.gguf")],
            },
            Group {
                name: "c".into(),
                tasks: vec![],
            },
        ])
        .unwrap()
    }

    #[test]
    fn resolve_named_group() {
        let c = sample();
        let tasks = c.resolve("b").unwrap();
        assert_eq!(tasks, vec![&task("http://h/3", "y/3.gguf")]);
    }

    #[test]
    fn resolve_all_is_ordered_concatenation() {
        let c = sample();
        let all: Vec<DownloadTask> = c.resolve("all").unwrap().into_iter().cloned().collect();
        let expected: Vec<DownloadTask> = c
            .groups()
            .iter()
            .flat_map(|g| g.tasks.clone())
            .collect();
        assert_eq!(all, expected);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].source_url, "http://h/1");
        assert_eq!(all[2].source_url, "http://h/3");
    }

    #[test]
    fn resolve_unknown_lists_choices() {
        let c = sample();
        let err = c.resolve("zzz").unwrap_err();
        assert_eq!(err.available(), ["a", "b", "c", "all"]);
        let msg = err.to_string();
        assert!(msg.contains("'zzz'"), "{msg}");
        assert!(msg.contains("a, b, c, all"), "{msg}");
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(sample().resolve("A").is_err());
        assert!(sample().resolve("ALL").is_err());
    }

    #[test]
    fn select_requires_exactly_one() {
        let c = sample();
        let none: [&str; 0] = [];
        assert!(matches!(
            c.select(&none),
            Err(UsageError::GroupCount { given: 0, .. })
        ));
        assert!(matches!(
            c.select(&["a", "b"]),
            Err(UsageError::GroupCount { given: 2, .. })
        ));
        assert_eq!(c.select(&["a"]).unwrap().len(), 2);
    }

    #[test]
    fn duplicate_group_rejected() {
        let err = Catalog::new(vec![
            Group { name: "a".into(), tasks: vec![] },
            Group { name: "a".into(), tasks: vec![] },
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGroup("a".into()));
    }

    #[test]
    fn all_is_reserved() {
        let err = Catalog::new(vec![Group { name: "all".into(), tasks: vec![] }]).unwrap_err();
        assert_eq!(err, CatalogError::ReservedName("all".into()));
    }

    #[test]
    fn file_name_for_progress_lines() {
        let t = task("http://h/x", "/models/checkpoints/hunyuan_3d_v2.1.safetensors");
        assert_eq!(t.file_name(), "hunyuan_3d_v2.1.safetensors");
    }
}
