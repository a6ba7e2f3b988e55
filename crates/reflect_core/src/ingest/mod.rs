//! Documentation AST ingestion.
//!
//! The AST is a directory of per-compound XML files. Each `namespace`
//! compound contributes its enums, each public `class`/`struct` compound
//! contributes one class. Files and compounds that cannot be understood are
//! logged and skipped.

mod document;
mod error;
pub mod tags;

pub use document::parse_document;
pub use error::IngestError;

use crate::config::GeneratorConfig;
use crate::model::TypeModel;
use std::path::{Path, PathBuf};

/// Ingest every `*.xml` file in `dir`, in file-name order.
pub fn ingest_dir(dir: &Path, config: &GeneratorConfig) -> Result<TypeModel, IngestError> {
    let mut model = TypeModel::new();

    for path in xml_files(dir)? {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) => {
                let err = IngestError::ReadFile { path, source };
                tracing::warn!("skipping AST file: {err}");
                continue;
            }
        };

        match parse_document(&text, &config.tags) {
            Ok(types) => {
                tracing::debug!("{}: {} type(s)", path.display(), types.len());
                for ty in types {
                    model.push(ty);
                }
            }
            Err(err) => tracing::warn!("skipping '{}': {err}", path.display()),
        }
    }

    Ok(model)
}

fn xml_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let read_dir_err = |source| IngestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "xml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn unreadable_directory_is_fatal() {
        let err = ingest_dir(Path::new("/nonexistent/xml"), &GeneratorConfig::default())
            .unwrap_err();
        assert!(matches!(err, IngestError::ReadDir { .. }));
    }

    #[test]
    fn bad_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.xml"), "<doxygen><compounddef").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::write(
            dir.path().join("namespacehect.xml"),
            r#"<doxygen>
                 <compounddef kind="namespace" id="namespacehect">
                   <compoundname>hect</compoundname>
                   <sectiondef kind="enum">
                     <memberdef kind="enum" id="e1" prot="public">
                       <name>Position</name>
                       <enumvalue id="e1a"><name>X</name></enumvalue>
                     </memberdef>
                   </sectiondef>
                 </compounddef>
               </doxygen>"#,
        )
        .unwrap();

        let model = ingest_dir(dir.path(), &GeneratorConfig::default()).unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.by_name("hect::Position").map(|h| h.index()), Some(0));
    }
}
