use std::path::Path;

use indexmap::IndexSet;

/// Sub-folders of the scan root that a run is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    folders: IndexSet<String>,
}

impl Whitelist {
    /// Parse a comma-separated folder list. Entries are trimmed; empty entries are dropped.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::from_folders(list.split(','))
    }

    pub fn from_folders<I, S>(folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folders = folders
            .into_iter()
            .map(|f| {
                f.as_ref()
                    .trim()
                    .replace('\\', "/")
                    .trim_matches('/')
                    .to_string()
            })
            .filter(|f| !f.is_empty())
            .collect();
        Self { folders }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.iter().map(String::as_str)
    }

    /// True if `path` lies under `root/<folder>` for some whitelisted folder.
    #[must_use]
    pub fn allows(&self, root: &Path, path: &Path) -> bool {
        self.folders
            .iter()
            .any(|folder| path.starts_with(root.join(folder)))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_entries() {
        let whitelist = Whitelist::parse(" a , b,, /c/ ");
        assert_eq!(whitelist.folders().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_deduplicates_entries() {
        let whitelist = Whitelist::parse("a,b,a");
        assert_eq!(whitelist.folders().count(), 2);
    }

    #[test]
    fn empty_list_is_empty() {
        assert!(Whitelist::parse("").is_empty());
        assert!(Whitelist::parse(" , ").is_empty());
    }

    #[test]
    fn allows_files_under_listed_folders() {
        let root = PathBuf::from("/project");
        let whitelist = Whitelist::parse("a,b");

        assert!(whitelist.allows(&root, Path::new("/project/a/x.vue")));
        assert!(whitelist.allows(&root, Path::new("/project/b/deep/y.js")));
        assert!(!whitelist.allows(&root, Path::new("/project/c/z.vue")));
    }

    #[test]
    fn folder_match_is_component_wise() {
        let root = PathBuf::from("/project");
        let whitelist = Whitelist::parse("src");

        assert!(!whitelist.allows(&root, Path::new("/project/src-old/a.vue")));
    }

    #[test]
    fn nested_folder_entries() {
        let root = PathBuf::from("/project");
        let whitelist = Whitelist::parse("src/components");

        assert!(whitelist.allows(&root, Path::new("/project/src/components/W/a.vue")));
        assert!(!whitelist.allows(&root, Path::new("/project/src/views/a.vue")));
    }
}
