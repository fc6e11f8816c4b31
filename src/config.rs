//! Build configuration for the icon pipeline.
//!
//! Settings can come from an optional YAML document and from command-line
//! flags. Flags win over the document, which wins over the built-in defaults.
//! The document may also carry per-icon metadata overrides that replace the
//! default categories and tags in the metadata index.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Icons directory used when neither the CLI nor the document provides one.
pub const DEFAULT_ICONS_DIR: &str = "icons";
/// Output directory used when neither the CLI nor the document provides one.
pub const DEFAULT_OUTPUT_DIR: &str = "src/icons";

/// Per-icon metadata overrides keyed by icon name.
pub type IconOverrides = BTreeMap<String, IconMetadata,>;

/// Root configuration document.
///
/// # Examples
///
/// ```
/// use iconsmith::parse_config;
///
/// let yaml = r#"
/// icons_dir: assets/icons
/// package: react
/// icons:
///   home:
///     categories: [navigation]
/// "#;
/// let config = parse_config(yaml,)?;
/// assert_eq!(config.package.as_deref(), Some("react"));
/// assert_eq!(config.icons["home"].categories.as_deref(), Some(&["navigation".to_owned()][..]));
/// # Ok::<(), iconsmith::Error>(())
/// ```
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq,)]
pub struct BuildConfig
{
    /// Directory containing one sub-directory per style.
    #[serde(default, alias = "icons-dir", alias = "iconsDir")]
    pub icons_dir: Option<PathBuf,>,

    /// Directory receiving generated sources.
    #[serde(default, alias = "output_dir", alias = "output-dir", alias = "outputDir")]
    pub output: Option<PathBuf,>,

    /// Target package; enables component generation when set.
    #[serde(default)]
    pub package: Option<String,>,

    /// Metadata overrides applied by the aggregator.
    #[serde(default)]
    pub icons: IconOverrides,
}

/// Metadata override for a single icon.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq,)]
pub struct IconMetadata
{
    /// Replacement categories.
    #[serde(default)]
    pub categories: Option<Vec<String,>,>,
    /// Replacement search tags.
    #[serde(default)]
    pub tags:       Option<Vec<String,>,>,
}

/// Fully resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct BuildOptions
{
    /// Directory containing one sub-directory per style.
    pub icons_dir:  PathBuf,
    /// Directory receiving generated sources.
    pub output_dir: PathBuf,
    /// Target package, if component generation was requested.
    pub package:    Option<String,>,
    /// Metadata overrides applied by the aggregator.
    pub overrides:  IconOverrides,
}

impl Default for BuildOptions
{
    fn default() -> Self
    {
        Self {
            icons_dir:  PathBuf::from(DEFAULT_ICONS_DIR,),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR,),
            package:    None,
            overrides:  IconOverrides::new(),
        }
    }
}

impl BuildOptions
{
    /// Merges command-line values over an optional configuration document.
    ///
    /// Blank package names are treated as absent.
    pub fn resolve(
        config: Option<BuildConfig,>,
        icons_dir: Option<PathBuf,>,
        output_dir: Option<PathBuf,>,
        package: Option<String,>,
    ) -> Self
    {
        let config = config.unwrap_or_default();
        let package = package
            .or(config.package,)
            .map(|value| value.trim().to_owned(),)
            .filter(|value| !value.is_empty(),);

        Self {
            icons_dir: icons_dir
                .or(config.icons_dir,)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ICONS_DIR,),),
            output_dir: output_dir
                .or(config.output,)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR,),),
            package,
            overrides: config.icons,
        }
    }
}

/// Loads a configuration document from `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, [`Error::Config`] when
/// the YAML cannot be decoded and [`Error::Validation`] when overrides are
/// invalid.
pub fn load_config(path: &Path,) -> Result<BuildConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::read_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses a configuration document from a YAML string.
///
/// # Errors
///
/// Propagates [`Error::Config`] when the YAML cannot be decoded and
/// [`Error::Validation`] when an override list is empty or contains blank
/// entries.
pub fn parse_config(contents: &str,) -> Result<BuildConfig, Error,>
{
    if contents.trim().is_empty() {
        return Ok(BuildConfig::default(),);
    }

    let config: BuildConfig = serde_yaml::from_str(contents,)?;
    for (name, metadata,) in &config.icons {
        validate_list(name, "categories", metadata.categories.as_deref(),)?;
        validate_list(name, "tags", metadata.tags.as_deref(),)?;
    }

    Ok(config,)
}

fn validate_list(icon: &str, field: &str, values: Option<&[String],>,) -> Result<(), Error,>
{
    let Some(values,) = values else {
        return Ok((),);
    };

    if values.is_empty() {
        return Err(Error::validation(format!("{field} override for '{icon}' must not be empty"),),);
    }
    if values.iter().any(|value| value.trim().is_empty(),) {
        return Err(Error::validation(format!(
            "{field} override for '{icon}' contains a blank entry"
        ),),);
    }

    Ok((),)
}
