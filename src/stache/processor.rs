//! File processing API for stache templates
//!
//! This module provides an extensible API for processing template files with
//! different stages (token, ast, render) and formats (simple, json, tag, etc.).
//!
//! # Sample Sources
//!
//! The `template_sources` module provides access to verified template sample
//! files for testing. These samples are the only canonical sources for
//! template content and should be used instead of copying content to ensure
//! tests use the latest specification.
//!
//! ## Example Usage
//!
//! ```rust
//! use stache::stache::processor::template_sources::TemplateSources;
//!
//! // Get raw template text
//! let content = TemplateSources::get_string("020-iteration.stache").unwrap();
//!
//! // Get rendered output using the paired context file
//! let rendered = TemplateSources::get_rendered("020-iteration.stache").unwrap();
//!
//! // Get processed content in simple token format
//! let processed = TemplateSources::get_processed("020-iteration.stache", "token-simple").unwrap();
//! ```

use crate::stache::lexing::{lex, tokenize, Token};
use crate::stache::parsing::{parse, ParseError};
use crate::stache::rendering::eval;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Render,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    RawSimple,
    RawJson,
    Tag,
    Text,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "token-raw-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "render" => ProcessingStage::Render,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "raw-simple" => OutputFormat::RawSimple,
            "raw-json" => OutputFormat::RawJson,
            "tag" => OutputFormat::Tag,
            "text" => OutputFormat::Text,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1..].join("-"))),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::Token, OutputFormat::Simple) => {} // Valid
            (ProcessingStage::Token, OutputFormat::Json) => {}   // Valid
            (ProcessingStage::Token, OutputFormat::RawSimple) => {} // Valid
            (ProcessingStage::Token, OutputFormat::RawJson) => {} // Valid
            (ProcessingStage::Ast, OutputFormat::Tag) => {}      // Valid
            (ProcessingStage::Ast, OutputFormat::Json) => {}     // Valid
            (ProcessingStage::Render, OutputFormat::Text) => {}  // Valid
            (ProcessingStage::Token, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for token stage (only 'simple', 'json', 'raw-simple' and 'raw-json' are supported)",
                    format
                )))
            }
            (ProcessingStage::Ast, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for AST stage (only 'tag' and 'json' are supported)",
                    format
                )))
            }
            (ProcessingStage::Render, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' not supported for render stage (only 'text' is supported)",
                    format
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::RawSimple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::RawJson,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Tag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Render,
                format: OutputFormat::Text,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    ContextError(String),
    ParseFailed(ParseError),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::ContextError(msg) => write!(f, "Context error: {}", msg),
            ProcessingError::ParseFailed(err) => write!(f, "Parse failed: {}", err),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Process a template file according to the given specification
///
/// The context file is only consulted by the render stage; token and AST
/// stages ignore it.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    context_path: Option<&Path>,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();

    // Read the file
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;

    // Process according to stage
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = match spec.format {
                OutputFormat::RawSimple | OutputFormat::RawJson => tokenize(&content),
                _ => lex(&content),
            };
            format_tokens(&tokens, &spec.format)
        }
        ProcessingStage::Ast => {
            let nodes = parse(&content).map_err(ProcessingError::ParseFailed)?;

            match spec.format {
                OutputFormat::Tag => Ok(crate::stache::formats::serialize_ast_tag(&nodes)),
                OutputFormat::Json => serde_json::to_string_pretty(&nodes)
                    .map_err(|e| ProcessingError::IoError(e.to_string())),
                _ => Err(ProcessingError::InvalidFormatType(
                    "Only ast-tag and ast-json formats are supported for AST stage".to_string(),
                )),
            }
        }
        ProcessingStage::Render => {
            let nodes = parse(&content).map_err(ProcessingError::ParseFailed)?;
            let context = load_context(context_path)?;
            Ok(eval(&nodes, &context))
        }
    }
}

/// Load a rendering context from a JSON or YAML file
///
/// Without a path the context defaults to an empty mapping, so every symbol
/// and iteration falls back to its empty rendering.
pub fn load_context(context_path: Option<&Path>) -> Result<Value, ProcessingError> {
    let path = match context_path {
        Some(path) => path,
        None => return Ok(Value::Object(serde_json::Map::new())),
    };

    let content =
        fs::read_to_string(path).map_err(|e| ProcessingError::IoError(e.to_string()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            ProcessingError::ContextError(format!("Failed to parse {}: {}", path.display(), e))
        }),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            ProcessingError::ContextError(format!("Failed to parse {}: {}", path.display(), e))
        }),
        _ => Err(ProcessingError::ContextError(format!(
            "Unsupported context format: {} (expected .json, .yaml or .yml)",
            path.display()
        ))),
    }
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple | OutputFormat::RawSimple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&format!("{}", token));
            }
            Ok(result)
        }
        OutputFormat::Json | OutputFormat::RawJson => {
            let json = serde_json::to_string_pretty(tokens)
                .map_err(|e| ProcessingError::IoError(e.to_string()))?;
            Ok(json)
        }
        OutputFormat::Tag => Err(ProcessingError::InvalidFormatType(
            "ast-tag format only works with ast stage".to_string(),
        )),
        OutputFormat::Text => Err(ProcessingError::InvalidFormatType(
            "render-text format only works with render stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Token => "token",
                    ProcessingStage::Ast => "ast",
                    ProcessingStage::Render => "render",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::RawSimple => "raw-simple",
                    OutputFormat::RawJson => "raw-json",
                    OutputFormat::Tag => "tag",
                    OutputFormat::Text => "text",
                }
            )
        })
        .collect()
}

/// Sample sources module for accessing verified template test files
pub mod template_sources {
    use super::*;

    /// The current specification version - change this when spec updates
    pub const SPEC_VERSION: &str = "v1";

    /// Available sample files (canonical sources)
    ///
    /// Each sample is paired with a `.context.json` file holding the context
    /// it renders against.
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-literal.stache",
        "010-symbols.stache",
        "020-iteration.stache",
        "030-separators.stache",
        "040-nested.stache",
        "050-missing.stache",
    ];

    /// Format options for sample content
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleFormat {
        /// Raw template text
        String,
        /// Tokenized content (JSON format)
        Tokens,
        /// Rendered output using the paired context file
        Rendered,
        /// Processed content using the specified format string
        Processed(String),
    }

    /// Main interface for accessing template sample files
    pub struct TemplateSources;

    impl TemplateSources {
        /// Get the path to the samples directory
        fn samples_dir() -> String {
            format!("docs/specs/{}/samples", SPEC_VERSION)
        }

        /// Get the full path to a sample file
        fn sample_path(filename: &str) -> String {
            format!("{}/{}", Self::samples_dir(), filename)
        }

        /// Get the full path to the context file paired with a sample
        fn context_path(filename: &str) -> String {
            Self::sample_path(&filename.replace(".stache", ".context.json"))
        }

        /// Validate that a sample file exists and is available
        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content in the specified format
        pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;

            let path = Self::sample_path(filename);

            match format {
                SampleFormat::String => fs::read_to_string(&path).map_err(|e| {
                    ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
                }),
                SampleFormat::Tokens => {
                    let content = fs::read_to_string(&path).map_err(|e| {
                        ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
                    })?;

                    let tokens = lex(&content);
                    let json = serde_json::to_string_pretty(&tokens).map_err(|e| {
                        ProcessingError::IoError(format!("Failed to serialize tokens: {}", e))
                    })?;

                    Ok(json)
                }
                SampleFormat::Rendered => {
                    let content = fs::read_to_string(&path).map_err(|e| {
                        ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
                    })?;

                    let nodes = parse(&content).map_err(ProcessingError::ParseFailed)?;
                    let context = Self::get_context(filename)?;
                    Ok(eval(&nodes, &context))
                }
                SampleFormat::Processed(format_str) => {
                    let spec = ProcessingSpec::from_string(&format_str)?;
                    let context_path = Self::context_path(filename);
                    process_file(&path, &spec, Some(Path::new(&context_path)))
                }
            }
        }

        /// Get sample content as raw template text
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::String)
        }

        /// Get sample content as tokens (JSON format)
        pub fn get_tokens(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Tokens)
        }

        /// Get sample content rendered against its paired context
        pub fn get_rendered(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Rendered)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
        }

        /// Get the context value paired with a sample
        pub fn get_context(filename: &str) -> Result<Value, ProcessingError> {
            Self::validate_sample(filename)?;

            let path = Self::context_path(filename);
            let content = fs::read_to_string(&path).map_err(|e| {
                ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
            })?;

            serde_json::from_str(&content).map_err(|e| {
                ProcessingError::ContextError(format!("Failed to parse {}: {}", path, e))
            })
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_get_string_sample() {
            let content = TemplateSources::get_string("020-iteration.stache").unwrap();
            assert!(content.contains("{{#numbers}}"));
            assert!(content.contains("{{/numbers}}"));
        }

        #[test]
        fn test_get_context_sample() {
            let context = TemplateSources::get_context("010-symbols.stache").unwrap();
            assert_eq!(context["name"], "Ada");
            assert_eq!(context["city"], "Lisbon");
        }

        #[test]
        fn test_get_tokens_sample() {
            let tokens_json = TemplateSources::get_tokens("010-symbols.stache").unwrap();
            assert!(tokens_json.contains("\"Literal\""));
            assert!(tokens_json.contains("\"Symbol\""));
        }

        #[test]
        fn test_get_rendered_sample() {
            let rendered = TemplateSources::get_rendered("020-iteration.stache").unwrap();
            assert_eq!(rendered, "Number:1,Number:2,Number:3,Number:4,Number:5\n");
        }

        #[test]
        fn test_get_processed_sample() {
            let processed =
                TemplateSources::get_processed("020-iteration.stache", "token-simple").unwrap();
            assert!(processed.contains("<iter-init:numbers>"));
            assert!(processed.contains("<symbol:.>"));
            assert!(processed.contains("<iter-end:numbers>"));
        }

        #[test]
        fn test_validate_sample() {
            assert!(TemplateSources::validate_sample("000-literal.stache").is_ok());
            assert!(TemplateSources::validate_sample("invalid-sample.stache").is_err());
        }

        #[test]
        fn test_list_samples() {
            let samples = TemplateSources::list_samples();
            assert!(samples.contains(&"000-literal.stache"));
            assert!(samples.contains(&"010-symbols.stache"));
            assert!(samples.contains(&"020-iteration.stache"));
            assert!(samples.contains(&"030-separators.stache"));
            assert!(samples.contains(&"040-nested.stache"));
            assert!(samples.contains(&"050-missing.stache"));
            assert_eq!(samples.len(), 6);
        }

        #[test]
        fn test_all_samples_accessible() {
            for sample in TemplateSources::list_samples() {
                let content = TemplateSources::get_string(sample).unwrap();
                assert!(!content.is_empty(), "Sample {} should not be empty", sample);
                let rendered = TemplateSources::get_rendered(sample).unwrap();
                assert!(!rendered.is_empty(), "Sample {} should render", sample);
            }
        }
    }
}
