//! AST producers.
//!
//! A producer turns the header tree into a directory of Doxygen-format XML
//! files that ingestion reads.

use super::GenerateError;
use crate::config::{GeneratorConfig, TagSettings};
use crate::model::Role;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Subdirectory of the scratch directory Doxygen writes XML into.
const XML_OUTPUT: &str = "ast";

/// Fixed Doxygen settings, written before the per-run ones.
const DOXYGEN_SETTINGS: &[(&str, &str)] = &[
    ("DOXYFILE_ENCODING", "UTF-8"),
    ("GENERATE_BUGLIST", "NO"),
    ("GENERATE_DEPRECATEDLIST", "NO"),
    ("GENERATE_HTML", "NO"),
    ("GENERATE_LATEX", "NO"),
    ("GENERATE_XML", "YES"),
    ("INPUT_ENCODING", "UTF-8"),
    ("JAVADOC_AUTOBRIEF", "YES"),
    ("OUTPUT_LANGUAGE", "English"),
    ("PROJECT_NAME", "\"Reflect\""),
    ("QUIET", "YES"),
    ("RECURSIVE", "YES"),
    ("WARN_IF_DOC_ERROR", "NO"),
    ("WARN_IF_UNDOCUMENTED", "NO"),
    ("WARN_NO_PARAMDOC", "NO"),
    ("WARNINGS", "NO"),
    ("XML_PROGRAMLISTING", "NO"),
];

/// Produces the AST directory for a header tree.
pub trait AstProducer {
    /// Produce XML for the headers under `input_dir`, using `scratch_dir`
    /// for any intermediate files. Returns the directory holding the XML.
    fn produce(
        &self,
        input_dir: &Path,
        scratch_dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<PathBuf, GenerateError>;

    /// Whether the producer writes into the scratch directory. When false
    /// the scratch directory is neither created nor removed.
    fn uses_scratch(&self) -> bool {
        true
    }
}

/// Runs the Doxygen executable named in the config.
#[derive(Clone, Copy, Debug, Default)]
pub struct Doxygen;

impl AstProducer for Doxygen {
    fn produce(
        &self,
        input_dir: &Path,
        scratch_dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<PathBuf, GenerateError> {
        let doxyfile = scratch_dir.join("Doxyfile");
        std::fs::write(&doxyfile, doxyfile_contents(input_dir, scratch_dir, config)).map_err(
            |source| GenerateError::Write {
                path: doxyfile.clone(),
                source,
            },
        )?;

        let program = config.doxygen_executable.clone();
        tracing::info!("Generating AST with '{program}'...");
        let status = Command::new(&program)
            .arg(&doxyfile)
            .current_dir(scratch_dir)
            .stdout(Stdio::null())
            .status()
            .map_err(|source| GenerateError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(GenerateError::ProducerFailed { program, status });
        }
        Ok(scratch_dir.join(XML_OUTPUT))
    }
}

/// Uses XML that already exists, such as output from an earlier Doxygen run.
#[derive(Clone, Debug)]
pub struct PrebuiltXml {
    pub dir: PathBuf,
}

impl PrebuiltXml {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl AstProducer for PrebuiltXml {
    fn produce(
        &self,
        _input_dir: &Path,
        _scratch_dir: &Path,
        _config: &GeneratorConfig,
    ) -> Result<PathBuf, GenerateError> {
        tracing::info!("Using prebuilt AST in '{}'", self.dir.display());
        Ok(self.dir.clone())
    }

    fn uses_scratch(&self) -> bool {
        false
    }
}

/// Doxyfile text for one run, with aliases for every configured tag.
pub fn doxyfile_contents(input_dir: &Path, output_dir: &Path, config: &GeneratorConfig) -> String {
    let mut text = String::new();
    for (key, value) in DOXYGEN_SETTINGS {
        let _ = writeln!(text, "{key} = {value}");
    }
    let _ = writeln!(text, "FILE_PATTERNS = {}", config.file_patterns.join(" "));
    let _ = writeln!(text, "INPUT = \"{}\"", input_dir.display());
    let _ = writeln!(text, "OUTPUT_DIRECTORY = \"{}\"", output_dir.display());
    let _ = writeln!(text, "XML_OUTPUT = {XML_OUTPUT}");

    for (alias, marker) in marker_aliases(&config.tags) {
        let _ = writeln!(text, "ALIASES += {alias}=\"{marker}\"");
    }
    if let Some(property) = alias_name(&config.tags.property) {
        let marker = &config.tags.property;
        let _ = writeln!(text, "ALIASES += {property}=\"{marker}\"");
        for arity in 1..=4 {
            let arguments: String = (1..=arity).map(|n| format!("{{\\{n}}}")).collect();
            let _ = writeln!(text, "ALIASES += {property}{{{arity}}}=\"{marker}{arguments}\"");
        }
    }
    text
}

/// `(alias, marker)` pairs for the role and encodable markers.
fn marker_aliases(tags: &TagSettings) -> Vec<(&str, &str)> {
    Role::STRUCTURAL
        .into_iter()
        .flat_map(|role| tags.role_markers(role))
        .chain(&tags.encodable)
        .filter_map(|marker| Some((alias_name(marker)?, marker.as_str())))
        .collect()
}

/// `[component]` is spelled `\component` in headers. Markers that are not a
/// bracketed word get no alias.
fn alias_name(marker: &str) -> Option<&str> {
    let name = marker.strip_prefix('[')?.strip_suffix(']')?;
    let is_word = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then_some(name)
}
