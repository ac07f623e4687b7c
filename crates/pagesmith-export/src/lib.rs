//! Project assembly and packaging for pagesmith exports.
//!
//! Assemblers turn an ordered list of component instances into a complete
//! project (a Next.js app or a single static HTML page). The export manager
//! validates the configuration, runs the right assembler, computes metadata
//! and can compress the result into a ZIP archive handed to a download sink.

pub mod archive;
pub mod assembler;
pub mod assets;
pub mod format;
pub mod html;
pub mod manager;
pub mod react;
pub mod sink;
pub mod templates;

pub use archive::{archive_filename, is_safe_path, write_project, ArchiveBuilder, ArchiveError};
pub use assembler::ProjectAssembler;
pub use assets::StyleAssets;
pub use format::{tidy, tidy_formatter, Formatter};
pub use html::HtmlAssembler;
pub use manager::{ExportError, ExportManager};
pub use react::ReactAssembler;
pub use sink::{DirectorySink, DownloadSink, MemorySink};
pub use templates::TemplateEngine;
