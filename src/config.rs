use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Syntax extensions on top of the generic blocks.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// Term lines followed by `:`-prefixed descriptions
    pub definition_lists: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            definition_lists: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub line_ending: LineEnding,
    pub extensions: Extensions,
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = ending;
        self
    }

    pub fn definition_lists(mut self, enabled: bool) -> Self {
        self.config.extensions.definition_lists = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    /// Follow the first line ending of the input
    #[default]
    Auto,
    Lf,
    Crlf,
}

const CANDIDATE_NAMES: &[&str] = &[".deflist.toml", "deflist.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    let candidates = [
        env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        dirs::home_dir().map(|home| home.join(".config")),
        dirs::config_dir(),
    ];
    candidates
        .into_iter()
        .flatten()
        .map(|dir| dir.join("deflist").join("config.toml"))
        .find(|p| p.is_file())
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .deflist.toml, deflist.toml
/// 3) XDG: $XDG_CONFIG_HOME/deflist/config.toml or ~/.config/deflist/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = toml::from_str::<Config>("line_ending = \"crlf\"").unwrap();
        assert_eq!(cfg.line_ending, LineEnding::Crlf);
        assert!(cfg.extensions.definition_lists);
    }

    #[test]
    fn extensions_table_disables_definition_lists() {
        let cfg = toml::from_str::<Config>("[extensions]\ndefinition_lists = false\n").unwrap();
        assert_eq!(cfg.line_ending, LineEnding::Auto);
        assert!(!cfg.extensions.definition_lists);
    }

    #[test]
    fn invalid_value_is_invalid_data() {
        let err = parse_config_str("line_ending = \"cr\"", Path::new("deflist.toml")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("deflist.toml"));
    }

    #[test]
    fn explicit_path_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn finds_config_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".deflist.toml"), "line_ending = \"lf\"\n").unwrap();

        let (cfg, path) = load(None, &nested).unwrap();
        assert_eq!(cfg.line_ending, LineEnding::Lf);
        assert_eq!(path, Some(dir.path().join(".deflist.toml")));
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = ConfigBuilder::default()
            .line_ending(LineEnding::Crlf)
            .definition_lists(false)
            .build();
        assert_eq!(cfg.line_ending, LineEnding::Crlf);
        assert!(!cfg.extensions.definition_lists);
    }
}
