use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::output::Labels;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ConfigFile {
    pub catalog: Option<String>,
    #[serde(alias = "url")]
    pub location: Option<String>,
    pub base_path: Option<String>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub interactive: Option<bool>,
    pub reveal: Option<usize>,
    pub debounce_ms: Option<u64>,
    pub columns: Option<usize>,
    pub avatar_template: Option<String>,
    pub no_color: Option<bool>,
    pub labels: Option<Labels>,
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".coursedeck").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn parse_config(contents: &str, path: &PathBuf) -> Result<ConfigFile, String> {
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str::<ConfigFile>(contents)
        .map_err(|e| format!("failed to parse config '{}': {e}", path.display()))
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

fn default_config_yaml() -> String {
    r#"# coursedeck config
#
# Location (default):
#   ~/.coursedeck/config.yml

# Catalog (optional, YAML or JSON list of courses; built-in catalog otherwise)
# catalog: ./courses.yml

# Starting address; only its category/search query is read
# location: /courses?category=Marketing&search=ads
base_path: /

# One-shot output (optional)
# output: ./view.html
# output_format: html
# reveal: 0

# Interactive session
interactive: false
debounce_ms: 300
columns: 3

# Presentation
# avatar_template: "https://ui-avatars.com/api/?name={name}&size=400&background=random&color=fff&bold=true"
no_color: false

# Display strings
# labels:
#   all: All
#   empty_title: No courses found matching your criteria
#   empty_hint: Try adjusting your search or filters
#   no_results: No courses found
#   showing: "Showing {shown} of {total} courses"
#   load_more: Load more
#   search_placeholder: Search Course...
#   currency: "$"
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<bool, String> {
    if path.exists() {
        return Ok(false);
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(true)
}
