//! TOML project manifest loader.
//!
//! Reads a `buildgen.toml` file and resolves it into a domain
//! [`ProjectManifest`]. Relative resource directories are resolved against
//! the directory holding the manifest.
//!
//! # `buildgen.toml` format
//!
//! ```toml
//! [[build_config]]
//! name    = "Hello world!"
//! group   = "my.website"
//! version = "2.0"
//! debug   = true               # optional, default false
//! scheme  = "qualified"        # optional, default "default"
//! package = "my.website"       # optional, default = group
//! class_name = "BuildConfig"   # optional
//! artifact = "site"            # optional: artifact, description, email, url
//!
//! [[build_config.fields]]
//! name  = "A_DOUBLE"
//! type  = "double"             # string | bool | int | double
//! value = 12.0
//!
//! [schemes.short]
//! name = "APP"                 # role = identifier
//!
//! [resources]
//! uppercase_keys = false
//!
//! [[resources.sets]]
//! namespace = "style"
//! entries = [{ id = "text-field", value = "text-field" }, { path = "some.css" }]
//!
//! [[resources.directories]]
//! path = "src/main/resources"
//! exclude = ["drafts"]
//! css = { class_selectors = true, id_selectors = true, element_selectors = false }
//! properties = { enabled = true, resource_bundle = false }
//! json = { enabled = true, recursive = false, arrays = true }
//! ```
//!
//! Unknown keys are rejected at every level. Schemes are registered in
//! declaration order.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, instrument};

use buildgen_core::{
    application::{ApplicationError, ports::ProjectSource},
    domain::{
        BuildConfigSpec, CssOptions, JsonOptions, KeyOptions, NamingScheme, ProjectManifest,
        PropertiesOptions, RawLiteral, ResourceDirectory, ResourceManifest, Role, ScanOptions,
        ValueKind,
    },
    error::BuildgenResult,
};

/// File name looked up when no manifest path is given.
pub const DEFAULT_MANIFEST_NAME: &str = "buildgen.toml";

// ── Manifest types ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    build_config: Vec<BuildConfigSection>,
    /// Scheme id → role → identifier, in file order.
    #[serde(default)]
    schemes: IndexMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    resources: ResourcesSection,
}

/// One `[[build_config]]` record.
///
/// Required fields are optional here so a missing one surfaces as
/// `MissingRequiredField` from the domain builder.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BuildConfigSection {
    name: Option<String>,
    group: Option<String>,
    version: Option<String>,
    debug: Option<bool>,
    scheme: Option<String>,
    package: Option<String>,
    class_name: Option<String>,
    artifact: Option<String>,
    description: Option<String>,
    email: Option<String>,
    url: Option<String>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    value: RawLiteral,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ResourcesSection {
    #[serde(default)]
    uppercase_keys: bool,
    #[serde(default)]
    sets: Vec<ResourceManifest>,
    #[serde(default)]
    directories: Vec<DirectoryEntry>,
}

/// One `[[resources.directories]]` record. Omitted tables take their
/// defaults field by field.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DirectoryEntry {
    path: PathBuf,
    #[serde(default)]
    exclude: Vec<String>,
    css: Option<CssOptions>,
    properties: Option<PropertiesOptions>,
    json: Option<JsonOptions>,
}

// ── Conversion ────────────────────────────────────────────────────────────────

impl DirectoryEntry {
    fn into_directory(self, base_dir: &Path) -> ResourceDirectory {
        let path = if self.path.is_absolute() {
            self.path
        } else {
            base_dir.join(self.path)
        };
        let options = ScanOptions {
            exclude: self.exclude,
            css: self.css.unwrap_or_default(),
            properties: self.properties.unwrap_or_default(),
            json: self.json.unwrap_or_default(),
        };
        ResourceDirectory::new(path, options)
    }
}

impl BuildConfigSection {
    fn into_spec(self) -> BuildgenResult<BuildConfigSpec> {
        let mut builder = BuildConfigSpec::builder();

        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(group) = self.group {
            builder = builder.group(group);
        }
        if let Some(version) = self.version {
            builder = builder.version(version);
        }
        if let Some(debug) = self.debug {
            builder = builder.debug(debug);
        }
        if let Some(scheme) = self.scheme {
            builder = builder.scheme(scheme);
        }
        if let Some(package) = self.package {
            builder = builder.package(package);
        }
        if let Some(class_name) = self.class_name {
            builder = builder.class_name(class_name);
        }
        if let Some(artifact) = self.artifact {
            builder = builder.artifact(artifact);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(email) = self.email {
            builder = builder.email(email);
        }
        if let Some(url) = self.url {
            builder = builder.url(url);
        }

        for field in self.fields {
            let kind: ValueKind = field.kind.parse()?;
            builder = builder.typed_field(field.name, kind, field.value)?;
        }

        Ok(builder.build()?)
    }
}

fn scheme_from(id: String, renames: BTreeMap<String, String>) -> BuildgenResult<NamingScheme> {
    let mut builder = NamingScheme::builder(id);
    for (role, identifier) in renames {
        let role: Role = role.parse()?;
        builder = builder.rename(role, identifier);
    }
    Ok(builder.build()?)
}

/// Parse manifest text, resolving relative directories against `base_dir`.
///
/// `origin` is the path reported in parse errors.
pub(crate) fn parse_manifest(
    raw: &str,
    origin: &Path,
    base_dir: &Path,
) -> BuildgenResult<ProjectManifest> {
    let file: ManifestFile =
        toml::from_str(raw).map_err(|e| ApplicationError::InvalidManifest {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut manifest = ProjectManifest::new().with_key_options(KeyOptions {
        uppercase_keys: file.resources.uppercase_keys,
    });

    for (id, renames) in file.schemes {
        manifest = manifest.with_scheme(scheme_from(id, renames)?);
    }
    for section in file.build_config {
        manifest = manifest.with_build_config(section.into_spec()?);
    }
    for set in file.resources.sets {
        manifest = manifest.with_resource_set(set);
    }
    for dir in file.resources.directories {
        manifest = manifest.with_resource_dir(dir.into_directory(base_dir));
    }

    Ok(manifest)
}

// ── Source ────────────────────────────────────────────────────────────────────

/// Loads a [`ProjectManifest`] from a `buildgen.toml` file.
///
/// # Example
///
/// ```no_run
/// use buildgen_adapters::TomlProjectSource;
/// use buildgen_core::application::ports::ProjectSource;
///
/// let source = TomlProjectSource::new("buildgen.toml");
/// let manifest = source.load()?;
/// println!("{} build configs", manifest.build_configs().len());
/// # Ok::<(), buildgen_core::error::BuildgenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TomlProjectSource {
    path: PathBuf,
}

impl TomlProjectSource {
    /// The file does not need to exist until [`ProjectSource::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl ProjectSource for TomlProjectSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> BuildgenResult<ProjectManifest> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::SourceUnavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        let manifest = parse_manifest(&raw, &self.path, self.base_dir())?;

        debug!(
            build_configs = manifest.build_configs().len(),
            schemes = manifest.schemes().len(),
            resource_sets = manifest.resource_sets().len(),
            resource_dirs = manifest.resource_dirs().len(),
            "loaded project manifest"
        );
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildgen_core::{
        domain::{ConfigValue, DomainError, ResourceEntry},
        error::BuildgenError,
    };
    use tempfile::TempDir;

    const SCENARIO: &str = r#"
[[build_config]]
name = "Hello world!"
group = "my.website"
version = "2.0"
debug = true
scheme = "short"

[[build_config.fields]]
name = "A_DOUBLE"
type = "double"
value = 12.0

[[build_config.fields]]
name = "AN_INT"
type = "int"
value = 9

[schemes.short]
name = "APP"
GROUP = "GROUP_ID"

[resources]
uppercase_keys = true

[[resources.sets]]
namespace = "style"
entries = [{ id = "text-field", value = "text-field" }, { path = "some.css" }]

[[resources.directories]]
path = "res"
exclude = ["drafts"]
properties = { enabled = false }
json = { recursive = true }
"#;

    fn parse(raw: &str) -> BuildgenResult<ProjectManifest> {
        parse_manifest(raw, Path::new("buildgen.toml"), Path::new("/project"))
    }

    #[test]
    fn parses_full_manifest() {
        let manifest = parse(SCENARIO).unwrap();

        let config = &manifest.build_configs()[0];
        assert_eq!(config.name(), "Hello world!");
        assert_eq!(config.package(), "my.website");
        assert_eq!(config.debug(), Some(true));
        assert_eq!(config.scheme(), Some("short"));
        assert_eq!(config.fields()[0].value(), &ConfigValue::Double(12.0));
        assert_eq!(config.fields()[1].value(), &ConfigValue::Int(9));

        let scheme = &manifest.schemes()[0];
        assert_eq!(scheme.id(), "short");
        assert_eq!(scheme.identifier(Role::Name), "APP");
        assert_eq!(scheme.identifier(Role::Group), "GROUP_ID");
        assert_eq!(scheme.identifier(Role::Version), "VERSION");

        assert!(manifest.key_options().uppercase_keys);

        let set = &manifest.resource_sets()[0];
        assert_eq!(set.namespace(), "style");
        assert_eq!(
            set.entries(),
            [
                ResourceEntry::named("text-field", "text-field"),
                ResourceEntry::anonymous("some.css"),
            ]
        );

        let dir = &manifest.resource_dirs()[0];
        assert_eq!(dir.path(), Path::new("/project/res"));
        assert_eq!(dir.options().exclude, ["drafts"]);
        assert!(!dir.options().properties.enabled);
        assert!(!dir.options().properties.resource_bundle);
        assert!(dir.options().json.enabled);
        assert!(dir.options().json.recursive);
        assert!(dir.options().json.arrays);
        assert!(dir.options().css.class_selectors);
    }

    #[test]
    fn empty_manifest_is_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn bad_field_value_names_the_field() {
        let err = parse(
            r#"
[[build_config]]
name = "x"
group = "g"
version = "1"

[[build_config.fields]]
name = "AN_INT"
type = "int"
value = "nine"
"#,
        )
        .unwrap_err();

        match err {
            BuildgenError::Domain(DomainError::TypeMismatch { field, .. }) => {
                assert_eq!(field.as_deref(), Some("AN_INT"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_version_is_reported() {
        let err = parse("[[build_config]]\nname = \"x\"\ngroup = \"g\"\n").unwrap_err();
        assert!(matches!(
            err,
            BuildgenError::Domain(DomainError::MissingRequiredField { field: "version" })
        ));
    }

    #[test]
    fn unknown_keys_are_invalid_manifest() {
        let err = parse("[[build_config]]\nnmae = \"typo\"\n").unwrap_err();
        assert!(matches!(
            err,
            BuildgenError::Application(ApplicationError::InvalidManifest { .. })
        ));
    }

    fn assert_invalid_manifest(raw: &str) {
        match parse(raw) {
            Err(BuildgenError::Application(ApplicationError::InvalidManifest { .. })) => {}
            other => panic!("expected InvalidManifest for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn entry_with_id_and_path_is_rejected() {
        assert_invalid_manifest(
            r#"
[[resources.sets]]
namespace = "style"
entries = [{ id = "text-field", path = "some.css" }]
"#,
        );
        assert_invalid_manifest(
            r#"
[[resources.sets]]
namespace = "style"
entries = [{ path = "some.css", note = "x" }]
"#,
        );
        assert_invalid_manifest(
            r#"
[[resources.sets]]
namespace = "a"
entires = []
"#,
        );
    }

    #[test]
    fn misspelled_directory_keys_are_rejected() {
        for table in [
            r#"exlude = ["drafts"]"#,
            "json = { recursve = true }",
            "properties = { bundle = true }",
            "css = { classes = true }",
        ] {
            assert_invalid_manifest(&format!(
                "[[resources.directories]]\npath = \"res\"\n{table}\n"
            ));
        }
    }

    #[test]
    fn directory_tables_fill_in_defaults() {
        let manifest = parse(
            r#"
[[resources.directories]]
path = "res"
json = { enabled = false }
"#,
        )
        .unwrap();
        let options = manifest.resource_dirs()[0].options();
        assert!(!options.json.enabled);
        assert!(options.json.arrays);
        assert!(options.properties.enabled);
        assert_eq!(options.css, CssOptions::default());
    }

    #[test]
    fn schemes_keep_declaration_order() {
        let manifest = parse(
            r#"
[schemes.zeta]
name = "Z_NAME"

[schemes.alpha]
name = "A_NAME"

[schemes.mid]
name = "M_NAME"
"#,
        )
        .unwrap();
        let ids: Vec<_> = manifest.schemes().iter().map(NamingScheme::id).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn unknown_scheme_role_is_rejected() {
        let err = parse("[schemes.odd]\nflavour = \"X\"\n").unwrap_err();
        assert!(matches!(
            err,
            BuildgenError::Domain(DomainError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_MANIFEST_NAME);
        fs::write(&path, SCENARIO).unwrap();

        let manifest = TomlProjectSource::new(&path).load().unwrap();
        assert_eq!(manifest.resource_dirs()[0].path(), dir.path().join("res"));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let err = TomlProjectSource::new(dir.path().join("absent.toml"))
            .load()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildgenError::Application(ApplicationError::SourceUnavailable { .. })
        ));
    }
}
