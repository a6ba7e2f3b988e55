mod common;

use common::set_mtime;
use reflect_core::build::{Doxygen, PrebuiltXml};
use reflect_core::{GenerateError, Generator, GeneratorConfig, Outcome};
use std::fs;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

struct Workspace {
    input: TempDir,
    output: TempDir,
    xml: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let workspace = Self {
            input: tempfile::tempdir().unwrap(),
            output: tempfile::tempdir().unwrap(),
            xml: tempfile::tempdir().unwrap(),
        };
        common::write_headers(workspace.input.path());
        common::write_fixture_xml(workspace.xml.path(), workspace.input.path());
        workspace
    }

    fn write_xml(&self, name: &str, text: &str) {
        fs::write(self.xml.path().join(name), text).unwrap();
    }

    fn generator(&self) -> Generator {
        Generator::new(self.input.path(), self.output.path(), "hect")
            .with_producer(PrebuiltXml::new(self.xml.path()))
    }

    fn output_file(&self) -> std::path::PathBuf {
        self.output.path().join("RegisterTypes.h")
    }
}

#[test]
fn generates_registration_source() {
    let workspace = Workspace::new();

    let outcome = workspace.generator().run(false).unwrap();
    let Outcome::Generated(report) = outcome else {
        panic!("expected a generation run");
    };
    assert_eq!(report.enums, 1);
    assert_eq!(report.components, 1);
    assert_eq!(report.systems, 1);
    assert_eq!(report.scenes, 0);
    assert!(report.phase("ingest").is_some());

    let code = fs::read_to_string(workspace.output_file()).unwrap();
    assert!(code.contains("enumType.addValue(hect::Position_X, \"X\");"));
    assert!(code.contains("hect::encodeEnum(\"anchor\", typedValue.anchor);"));
    assert!(code.contains("hect::decodeEnum(\"anchor\", typedValue.anchor, true);"));
    assert!(code.contains("hect::ComponentRegistry::registerType<hect::Transform>();"));
    assert!(code.contains("hect::SystemRegistry::registerType<hect::Physics>();"));
    assert!(!code.contains("hect::Pool"));
    assert!(code.ends_with('\n'));

    let includes: Vec<_> = code.lines().filter(|line| line.starts_with("#include \"")).collect();
    assert_eq!(includes.len(), 3);
    assert!(includes.windows(2).all(|pair| pair[0] < pair[1]));

    assert!(!workspace.output.path().join("xml").exists());
}

#[test]
fn second_run_is_skipped_until_a_header_changes() {
    let workspace = Workspace::new();
    let generator = workspace.generator();

    assert!(matches!(generator.run(false).unwrap(), Outcome::Generated(_)));
    assert!(matches!(generator.run(false).unwrap(), Outcome::UpToDate));

    let later = SystemTime::now() + Duration::from_secs(60);
    set_mtime(&workspace.input.path().join("Physics.h"), later);
    assert!(!generator.is_up_to_date());
    assert!(matches!(generator.run(false).unwrap(), Outcome::Generated(_)));
}

#[test]
fn forced_runs_always_regenerate() {
    let workspace = Workspace::new();
    let generator = workspace.generator();

    generator.run(false).unwrap();
    let first = fs::read(workspace.output_file()).unwrap();
    assert!(matches!(generator.run(true).unwrap(), Outcome::Generated(_)));
    assert_eq!(fs::read(workspace.output_file()).unwrap(), first);
}

#[test]
fn malformed_ast_files_are_skipped() {
    let workspace = Workspace::new();
    workspace.write_xml("broken.xml", "<doxygen><compounddef");

    assert!(matches!(workspace.generator().run(false).unwrap(), Outcome::Generated(_)));
    let code = fs::read_to_string(workspace.output_file()).unwrap();
    assert!(code.contains("hect::Transform"));
}

#[test]
fn failed_producer_leaves_output_untouched() {
    let workspace = Workspace::new();
    fs::write(workspace.output_file(), "previous\n").unwrap();
    set_mtime(&workspace.output_file(), SystemTime::UNIX_EPOCH);

    let config = GeneratorConfig {
        doxygen_executable: "reflect-test-no-such-doxygen".to_string(),
        ..GeneratorConfig::default()
    };
    let generator = Generator::new(workspace.input.path(), workspace.output.path(), "hect")
        .with_config(config)
        .with_producer(Doxygen);

    let err = generator.run(false).unwrap_err();
    assert!(matches!(err, GenerateError::Spawn { .. }));
    assert_eq!(fs::read_to_string(workspace.output_file()).unwrap(), "previous\n");
    assert!(!workspace.output.path().join("xml").exists());
}

#[test]
fn missing_ast_directory_is_fatal() {
    let workspace = Workspace::new();
    let generator = Generator::new(workspace.input.path(), workspace.output.path(), "hect")
        .with_producer(PrebuiltXml::new(workspace.xml.path().join("missing")));

    let err = generator.run(true).unwrap_err();
    assert!(matches!(err, GenerateError::Ingest(_)));
    assert!(!workspace.output_file().exists());
}

#[test]
fn prebuilt_ast_inside_output_is_kept() {
    let workspace = Workspace::new();
    let ast_dir = workspace.output.path().join("xml");
    fs::create_dir(&ast_dir).unwrap();
    for entry in fs::read_dir(workspace.xml.path()).unwrap() {
        let path = entry.unwrap().path();
        fs::copy(&path, ast_dir.join(path.file_name().unwrap())).unwrap();
    }

    let generator = Generator::new(workspace.input.path(), workspace.output.path(), "hect")
        .with_producer(PrebuiltXml::new(&ast_dir));
    assert!(matches!(generator.run(true).unwrap(), Outcome::Generated(_)));
    assert!(ast_dir.join("namespacehect.xml").is_file());
}
