//! Generation run orchestration.
//!
//! A run checks staleness, produces the AST into a scratch directory,
//! ingests and classifies it, emits the registration source and replaces
//! the output file atomically. A scratch directory used by the producer is
//! removed afterwards whether or not the run succeeded.

mod error;
mod producer;
mod report;
mod staleness;

pub use error::GenerateError;
pub use producer::{doxyfile_contents, AstProducer, Doxygen, PrebuiltXml};
pub use report::GenerationReport;
pub use staleness::{is_up_to_date, newest_source};

use crate::classify::{classify, link, RegistrationPlan};
use crate::config::GeneratorConfig;
use crate::emit::Emitter;
use crate::ingest::ingest_dir;
use crate::template::TemplateSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of [`Generator::run`].
#[derive(Debug)]
pub enum Outcome {
    /// The output was newer than every header; nothing was touched.
    UpToDate,
    Generated(GenerationReport),
}

/// One header tree, one output directory, one namespace.
pub struct Generator {
    input_dir: PathBuf,
    output_dir: PathBuf,
    namespace: String,
    config: GeneratorConfig,
    producer: Box<dyn AstProducer>,
}

impl Generator {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            namespace: namespace.into(),
            config: GeneratorConfig::default(),
            producer: Box::new(Doxygen),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_producer(mut self, producer: impl AstProducer + 'static) -> Self {
        self.producer = Box::new(producer);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.config.output_file_name)
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.output_dir.join(&self.config.scratch_dir_name)
    }

    pub fn is_up_to_date(&self) -> bool {
        is_up_to_date(&self.input_dir, &self.output_path(), &self.config.file_patterns)
    }

    /// Regenerate the output unless it is current. `force` skips the check.
    pub fn run(&self, force: bool) -> Result<Outcome, GenerateError> {
        if !force && self.is_up_to_date() {
            tracing::info!("Reflection code is up to date");
            return Ok(Outcome::UpToDate);
        }

        let templates = match &self.config.template_dir {
            Some(dir) => TemplateSet::load(dir)?,
            None => TemplateSet::builtin(),
        };

        // The producer may run from another working directory, and header
        // locations in the AST are absolute.
        let input_dir = resolve(&self.input_dir)?;
        let output_dir = resolve(&self.output_dir)?;

        create_dir(&output_dir)?;
        let scratch_dir = output_dir.join(&self.config.scratch_dir_name);
        let uses_scratch = self.producer.uses_scratch();
        if uses_scratch {
            create_dir(&scratch_dir)?;
        }

        let result = self.generate(&input_dir, &output_dir, &scratch_dir, &templates);

        if uses_scratch {
            if let Err(err) = std::fs::remove_dir_all(&scratch_dir) {
                tracing::warn!("failed to remove '{}': {err}", scratch_dir.display());
            }
        }

        let report = result?;
        report.log();
        Ok(Outcome::Generated(report))
    }

    fn generate(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        scratch_dir: &Path,
        templates: &TemplateSet,
    ) -> Result<GenerationReport, GenerateError> {
        let mut report = GenerationReport::new(output_dir.join(&self.config.output_file_name));

        let ast_dir = report.time_phase("produce", || {
            self.producer.produce(input_dir, scratch_dir, &self.config)
        })?;

        tracing::info!("Parsing AST...");
        let mut model = report.time_phase("ingest", || ingest_dir(&ast_dir, &self.config))?;
        report.time_phase("link", || link(&mut model));
        report.time_phase("classify", || classify(&mut model, &self.config.bases))?;

        let plan = RegistrationPlan::new(&model, &self.config);
        report.record_plan(model.len(), &plan);

        tracing::info!("Generating reflection code...");
        let emitter = Emitter {
            templates,
            output_dir,
            namespace: &self.namespace,
        };
        let code = report.time_phase("emit", || emitter.emit(&model, &plan))?;

        write_atomically(&report.output, &code)?;
        Ok(report)
    }
}

fn resolve(path: &Path) -> Result<PathBuf, GenerateError> {
    std::path::absolute(path).map_err(|source| GenerateError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    std::fs::create_dir_all(path).map_err(|source| GenerateError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write through a sibling temporary file so a failed run never leaves a
/// truncated output behind.
fn write_atomically(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
