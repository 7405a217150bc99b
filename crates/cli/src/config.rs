use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::util::parse_store_url;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const NO_STORE_URL_ERROR_MESSAGE: &str = "No store URL configured.
Set the URL of the deployed spreadsheet script with:
\tkeebtrack config set-url <url>
Or pass it for a single run with `--store-url <url>` or KEEBTRACK_STORE_URL.";

// Any change here must be coordinated with Config::doc
#[derive(Default, Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RawConfig {
    store_url: Option<String>,
    request_timeout_secs: Option<u64>,
    assume_yes: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Config {
    home: RawConfig,
    home_path: PathBuf,
    // The TOML document that was parsed to create `home`.
    // We need to keep it to preserve comments and formatting when saving the config.
    doc: DocumentMut,
    store_url_override: Option<String>,
}

/// Sets `key` to `value`, keeping any comment attached to the old value.
/// `None` removes the key.
fn set_opt_value<V: Into<toml_edit::Value>>(doc: &mut DocumentMut, key: &str, value: Option<V>) {
    let Some(value) = value else {
        doc.remove(key);
        return;
    };
    let mut value = value.into();
    if let Some(old) = doc.get(key).and_then(Item::as_value) {
        *value.decor_mut() = old.decor().clone();
    }
    doc[key] = Item::Value(value);
}

impl Config {
    /// `<config dir>/keebtrack/config.toml`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(dir.join("keebtrack").join("config.toml"))
    }

    /// Loads the config at `home_path`, or an empty one if the file does not exist yet.
    pub fn load(home_path: PathBuf) -> anyhow::Result<Self> {
        let contents = match std::fs::read_to_string(&home_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("could not read config file {}", home_path.display()));
            }
        };
        let home: RawConfig =
            toml::from_str(&contents).with_context(|| format!("config file {} is invalid", home_path.display()))?;
        let doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("config file {} is invalid", home_path.display()))?;
        Ok(Self {
            home,
            home_path,
            doc,
            store_url_override: None,
        })
    }

    /// Uses `url` instead of the configured store URL for this run only.
    pub fn with_store_url_override(mut self, url: Option<String>) -> Self {
        self.store_url_override = url;
        self
    }

    pub fn path(&self) -> &Path {
        &self.home_path
    }

    pub fn store_url(&self) -> anyhow::Result<&str> {
        self.store_url_override
            .as_deref()
            .or(self.home.store_url.as_deref())
            .ok_or_else(|| anyhow::anyhow!(NO_STORE_URL_ERROR_MESSAGE))
    }

    /// The request timeout; `request_timeout_secs = 0` disables it.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.home.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn assume_yes(&self) -> bool {
        self.home.assume_yes.unwrap_or(false)
    }

    pub fn set_store_url(&mut self, url: &str) -> anyhow::Result<()> {
        parse_store_url(url)?;
        self.home.store_url = Some(url.to_owned());
        Ok(())
    }

    pub fn set_request_timeout_secs(&mut self, secs: u64) {
        self.home.request_timeout_secs = Some(secs);
    }

    /// Returns a preserving copy of the parsed document with the current values applied.
    fn doc(&self) -> anyhow::Result<DocumentMut> {
        let mut doc = self.doc.clone();
        set_opt_value(&mut doc, "store_url", self.home.store_url.as_deref());
        let timeout = self
            .home
            .request_timeout_secs
            .map(i64::try_from)
            .transpose()
            .context("request_timeout_secs is too large")?;
        set_opt_value(&mut doc, "request_timeout_secs", timeout);
        set_opt_value(&mut doc, "assume_yes", self.home.assume_yes);
        Ok(doc)
    }

    /// Writes the config back to disk, atomically replacing the old file.
    pub fn save(&self) -> anyhow::Result<()> {
        let home_path = &self.home_path;
        let parent = match home_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).with_context(|| format!("could not create {}", parent.display()))?;

        let config = self.doc()?.to_string();
        tracing::debug!(path = %home_path.display(), "saving config");

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(config.as_bytes())?;
        tmp.persist(home_path)
            .with_context(|| format!("could not save config file {}", home_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    const CONFIG_FULL: &str = r#"# keebtrack settings
store_url = "https://script.example.com/macros/s/old/exec" # deployed script
request_timeout_secs = 10
"#;

    const CONFIG_CHANGED: &str = r#"# keebtrack settings
store_url = "https://script.example.com/macros/s/new/exec" # deployed script
request_timeout_secs = 10
"#;

    fn check_config<F>(input: &str, output: &str, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut Config) -> anyhow::Result<()>,
    {
        let tmp = tempfile::tempdir()?;
        let config_path = tmp.path().join("config.toml");

        fs::write(&config_path, input)?;

        let mut config = Config::load(config_path.clone())?;
        f(&mut config)?;
        config.save()?;

        let contents = fs::read_to_string(&config_path)?;

        assert_eq!(contents, output);

        Ok(())
    }

    // Test editing the config file.
    #[test]
    fn test_config_edits() -> anyhow::Result<()> {
        check_config(CONFIG_FULL, CONFIG_FULL, |_| Ok(()))?;
        check_config(CONFIG_FULL, CONFIG_CHANGED, |config| {
            config.set_store_url("https://script.example.com/macros/s/new/exec")
        })?;
        Ok(())
    }

    #[test]
    fn test_config_adds() -> anyhow::Result<()> {
        check_config("", "store_url = \"http://127.0.0.1:8080/exec\"\n", |config| {
            config.set_store_url("http://127.0.0.1:8080/exec")
        })
    }

    #[test]
    fn missing_file_loads_defaults() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let config = Config::load(tmp.path().join("nested").join("config.toml"))?;
        assert!(config.store_url().is_err());
        assert_eq!(
            config.request_timeout(),
            Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        );
        assert!(!config.assume_yes());

        config.save()?;
        assert!(config.path().exists());
        Ok(())
    }

    #[test]
    fn override_wins_and_zero_timeout_disables() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("config.toml");
        fs::write(&path, "store_url = \"https://a.example/exec\"\nrequest_timeout_secs = 0\nassume_yes = true\n")?;

        let config = Config::load(path)?.with_store_url_override(Some("https://b.example/exec".into()));
        assert_eq!(config.store_url()?, "https://b.example/exec");
        assert_eq!(config.request_timeout(), None);
        assert!(config.assume_yes());
        Ok(())
    }

    #[test]
    fn rejects_invalid_urls() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let mut config = Config::load(tmp.path().join("config.toml"))?;
        assert!(config.set_store_url("not a url").is_err());
        assert!(config.store_url().is_err());
        Ok(())
    }
}
