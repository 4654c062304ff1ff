use std::{
    ffi::OsStr,
    path::{is_separator, Path, PathBuf},
    process::Command,
};

use hop_launch::Opener;
use tracing::debug;

use crate::{
    aliases::{AliasTable, Target},
    error::HopError,
};

/// What a resolved alias asks for. Turning it into a process is a separate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenUrl(String),
    OpenDir(PathBuf),
    OpenTab(PathBuf),
}

impl Action {
    pub fn command(&self, opener: &dyn Opener) -> Command {
        match self {
            Action::OpenUrl(url) => opener.open_default(OsStr::new(url)),
            Action::OpenDir(dir) => opener.open_default(dir.as_os_str()),
            Action::OpenTab(dir) => opener.new_tab(dir),
        }
    }
}

/// Replace a leading `~` segment with `home`. `~user` forms are left alone.
pub fn expand_home(path: &str, home: Option<&Path>) -> Result<PathBuf, HopError> {
    let wants_home = match path.strip_prefix('~') {
        Some(rest) => rest.is_empty() || rest.starts_with(is_separator),
        None => false,
    };
    if !wants_home {
        return Ok(PathBuf::from(path));
    }

    let home = home.ok_or(HopError::NoHomeDir)?;
    let expanded = shellexpand::tilde_with_context(path, || Some(home.to_string_lossy()));
    Ok(PathBuf::from(expanded.into_owned()))
}

pub fn resolve(
    table: &AliasTable,
    alias: &str,
    tab: bool,
    home: Option<&Path>,
) -> Result<Action, HopError> {
    let target = table
        .get(alias)
        .ok_or_else(|| HopError::UnknownAlias(alias.to_owned()))?;
    debug!(alias, value = target, "resolved alias");

    match Target::classify(target) {
        Target::Url(_) if tab => Err(HopError::Usage(format!(
            "--tab only applies to directories, but {} is a URL",
            alias
        ))),
        Target::Url(url) => Ok(Action::OpenUrl(url.to_owned())),
        Target::Path(path) => {
            let dir = expand_home(path, home)?;
            if !dir.exists() {
                return Err(HopError::NotFound(dir));
            }

            Ok(if tab {
                Action::OpenTab(dir)
            } else {
                Action::OpenDir(dir)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn table() -> AliasTable {
        AliasTable::from_entries([
            ("docs", "~/Documents"),
            ("home", "~"),
            ("gone", "~/no/such/dir"),
            ("gh", "https://github.com"),
            ("plain", "http://example.com"),
        ])
        .unwrap()
    }

    #[test]
    fn tilde_is_replaced_and_rest_kept() {
        let home = Path::new("/home/u");
        assert_eq!(
            expand_home("~/Documents", Some(home)).unwrap(),
            PathBuf::from("/home/u/Documents")
        );
        assert_eq!(
            expand_home("~/a/b c/", Some(home)).unwrap(),
            PathBuf::from("/home/u/a/b c/")
        );
        assert_eq!(expand_home("~", Some(home)).unwrap(), home);
    }

    #[test]
    fn non_tilde_paths_are_untouched() {
        assert_eq!(expand_home("/tmp", None).unwrap(), PathBuf::from("/tmp"));
        assert_eq!(
            expand_home("~bob/x", Some(Path::new("/home/u"))).unwrap(),
            PathBuf::from("~bob/x")
        );
        assert_eq!(expand_home("a/~/b", None).unwrap(), PathBuf::from("a/~/b"));
    }

    #[test]
    fn missing_home_is_fatal_only_when_needed() {
        assert!(matches!(
            expand_home("~/Documents", None),
            Err(HopError::NoHomeDir)
        ));
        assert!(matches!(
            resolve(&table(), "docs", false, None),
            Err(HopError::NoHomeDir)
        ));
        assert!(resolve(&table(), "gh", false, None).is_ok());
    }

    #[test]
    fn unknown_alias_is_named() {
        let err = resolve(&table(), "nope", false, None).unwrap_err();
        assert_eq!(err.to_string(), "unknown alias: nope");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn existing_directory_opens_by_default() {
        let home = tempfile::tempdir().unwrap();
        let docs = home.path().join("Documents");
        fs::create_dir(&docs).unwrap();

        let action = resolve(&table(), "docs", false, Some(home.path())).unwrap();
        assert_eq!(action, Action::OpenDir(docs.clone()));

        let action = resolve(&table(), "docs", true, Some(home.path())).unwrap();
        assert_eq!(action, Action::OpenTab(docs));

        let action = resolve(&table(), "home", false, Some(home.path())).unwrap();
        assert_eq!(action, Action::OpenDir(home.path().to_path_buf()));
    }

    #[test]
    fn missing_directory_is_not_found_with_or_without_tab() {
        let home = tempfile::tempdir().unwrap();
        for tab in [false, true] {
            let err = resolve(&table(), "gone", tab, Some(home.path())).unwrap_err();
            assert!(err.to_string().starts_with("directory not found: "));
            assert!(matches!(err, HopError::NotFound(ref p) if p.ends_with("no/such/dir")));
        }
    }

    #[test]
    fn urls_open_in_browser() {
        assert_eq!(
            resolve(&table(), "gh", false, None).unwrap(),
            Action::OpenUrl(String::from("https://github.com"))
        );
        assert_eq!(
            resolve(&table(), "plain", false, None).unwrap(),
            Action::OpenUrl(String::from("http://example.com"))
        );
    }

    #[test]
    fn tab_with_url_is_a_usage_error() {
        for alias in ["gh", "plain"] {
            let err = resolve(&table(), alias, true, None).unwrap_err();
            assert!(matches!(err, HopError::Usage(_)));
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn actions_map_onto_opener_commands() {
        let opener = hop_launch::for_os("linux").unwrap();
        let dir = PathBuf::from("/Users/a/Documents");

        let open = Action::OpenDir(dir.clone()).command(opener.as_ref());
        assert_eq!(open.get_program(), "xdg-open");
        assert_eq!(open.get_args().collect::<Vec<_>>(), [dir.as_os_str()]);

        let tab = Action::OpenTab(dir).command(opener.as_ref());
        assert_eq!(tab.get_program(), "gnome-terminal");

        let url = Action::OpenUrl(String::from("https://github.com")).command(opener.as_ref());
        assert_eq!(url.get_args().collect::<Vec<_>>(), ["https://github.com"]);
    }
}
