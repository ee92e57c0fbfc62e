//! viewbind_compiler: Generation orchestration.
//!
//! Reads binding descriptions, loads them into models, and generates one
//! binder source file per model. Generation of independent models runs in
//! parallel; results keep input order.

pub mod description;
pub mod loader;

pub use description::{parse_descriptions, TargetDescription};
pub use loader::{load_models, DescriptionSource, LoadResult};

use rayon::prelude::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use viewbind_core::ClassName;
use viewbind_model::BindingModel;
use viewbind_options::GenerationOptions;
use viewbind_printer::Printer;
use viewbind_synth::Synthesizer;

/// Failures that stop a run before or after generation.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid description file {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A generated Java file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// The binder's canonical class name.
    pub class_name: String,
    pub path: PathBuf,
    pub text: String,
}

/// A batch of description files and the settings to generate them with.
pub struct Compiler {
    options: GenerationOptions,
    out_dir: PathBuf,
    /// (file name, source text), in the order added.
    sources: Vec<(String, String)>,
}

impl Compiler {
    pub fn new(options: GenerationOptions, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            options,
            out_dir: out_dir.into(),
            sources: Vec::new(),
        }
    }

    /// Add a description file's text.
    pub fn add_source(&mut self, file_name: impl Into<String>, source_text: impl Into<String>) {
        self.sources.push((file_name.into(), source_text.into()));
    }

    /// Read description files from disk.
    pub fn load_files(&mut self, files: &[PathBuf]) -> Result<(), CompileError> {
        for file in files {
            let content = std::fs::read_to_string(file).map_err(|source| CompileError::Read {
                path: file.clone(),
                source,
            })?;
            self.sources.push((file.display().to_string(), content));
        }
        Ok(())
    }

    /// Parse every source and load the models.
    pub fn load(&self) -> Result<LoadResult, CompileError> {
        let mut parsed = Vec::with_capacity(self.sources.len());
        for (file_name, text) in &self.sources {
            let targets = parse_descriptions(text).map_err(|source| CompileError::Json {
                file: file_name.clone(),
                source,
            })?;
            debug!(file = %file_name, targets = targets.len(), "parsed description file");
            parsed.push(DescriptionSource {
                file_name: file_name.clone(),
                targets,
            });
        }
        let mut result = load_models(&parsed);
        result.diagnostics.sort();
        Ok(result)
    }

    /// Generate one file per model, in model order.
    pub fn generate(&self, models: &[BindingModel]) -> Vec<OutputFile> {
        let synthesizer = Synthesizer::new(self.options);
        let files: Vec<OutputFile> = models
            .par_iter()
            .map(|model| {
                let java = synthesizer.brew_java(model);
                let text = Printer::new().print_java_file(&java);
                OutputFile {
                    class_name: model.binding_class().canonical_name(),
                    path: self.output_path(model.binding_class()),
                    text,
                }
            })
            .collect();
        info!(count = files.len(), "generated binders");
        files
    }

    /// `<out_dir>/<package path>/<Name>.java`.
    pub fn output_path(&self, class: &ClassName) -> PathBuf {
        let mut path = self.out_dir.clone();
        for segment in class.package().split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", class.simple_name()));
        path
    }
}

/// Write generated files, creating directories as needed.
pub fn write_output_files(files: &[OutputFile]) -> Result<(), CompileError> {
    for file in files {
        if let Some(parent) = file.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CompileError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&file.path, &file.text).map_err(|source| CompileError::Write {
            path: file.path.clone(),
            source,
        })?;
        debug!(path = %file.path.display(), "wrote binder");
    }
    Ok(())
}
