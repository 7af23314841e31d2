//! CLI argument definitions for `rdfv`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rdfv_cli::config::ReportFormat;
use rdfv_model::{DataFormat, HostLanguage};

#[derive(Parser)]
#[command(
    name = "rdfv",
    version,
    about = "RDFa validator - Turn extraction diagnostics into a validation report",
    long_about = "Turn the processor graph and default graph of an RDFa extraction run\n\
                  into a validation report.\n\n\
                  Diagnostics are grouped Error, Warning, Info; the extracted data is\n\
                  embedded as Turtle or N-Triples."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a validation report from extraction dumps.
    Report(ReportArgs),

    /// List the diagnostic classes and context predicates that are recognized.
    Vocab,
}

#[derive(Parser)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["uri", "upload", "text"])
))]
pub struct ReportArgs {
    /// Processor graph dump (N-Triples).
    #[arg(long = "processor-graph", value_name = "FILE")]
    pub processor_graph: PathBuf,

    /// Default graph dump (N-Triples).
    #[arg(long = "data-graph", value_name = "FILE")]
    pub data_graph: PathBuf,

    /// URI of the validated document.
    #[arg(long = "uri", value_name = "URI")]
    pub uri: Option<String>,

    /// Uploaded document.
    #[arg(long = "upload", value_name = "FILE")]
    pub upload: Option<PathBuf>,

    /// File holding the document text that was pasted in.
    #[arg(long = "text", value_name = "FILE")]
    pub text: Option<PathBuf>,

    /// Host language of the document (sniffed from the media type when absent).
    #[arg(long = "host-language", value_enum)]
    pub host_language: Option<HostLanguageArg>,

    /// Restrict processing to RDFa Lite.
    #[arg(long = "rdfa-lite")]
    pub rdfa_lite: bool,

    /// Also extract RDF embedded in the document.
    #[arg(long = "embedded-rdf")]
    pub embedded_rdf: bool,

    /// Perform vocabulary expansion.
    #[arg(long = "vocab-expansion")]
    pub vocab_expansion: bool,

    /// Notation for the generated data block.
    #[arg(long = "data-format", value_enum)]
    pub data_format: Option<DataFormatArg>,

    /// Report format.
    #[arg(long = "format", value_enum)]
    pub format: Option<ReportFormatArg>,

    /// Write the report here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML configuration file. Flags take precedence over its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HostLanguageArg {
    Xhtml,
    Html,
    Svg,
    Atom,
    Xml,
}

impl From<HostLanguageArg> for HostLanguage {
    fn from(value: HostLanguageArg) -> Self {
        match value {
            HostLanguageArg::Xhtml => Self::Xhtml,
            HostLanguageArg::Html => Self::Html,
            HostLanguageArg::Svg => Self::Svg,
            HostLanguageArg::Atom => Self::Atom,
            HostLanguageArg::Xml => Self::Xml,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DataFormatArg {
    #[value(alias = "nt")]
    Ntriples,
    #[value(alias = "ttl")]
    Turtle,
}

impl From<DataFormatArg> for DataFormat {
    fn from(value: DataFormatArg) -> Self {
        match value {
            DataFormatArg::Ntriples => Self::NTriples,
            DataFormatArg::Turtle => Self::Turtle,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Html,
    Json,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(value: ReportFormatArg) -> Self {
        match value {
            ReportFormatArg::Html => Self::Html,
            ReportFormatArg::Json => Self::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
