// Library interface for wordle-hinter
// This allows integration tests to access internal modules

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod session;
pub mod source;
pub mod store;

// Re-export commonly used items for easier testing
pub use diagnostics::{
    ConsoleDiagnostics, Diagnostics, LogDiagnostics, RecordingDiagnostics, SilentDiagnostics,
};
pub use error::{PatternError, SourceError, StoreError};
pub use pattern::WildcardPattern;
pub use session::{hint_loop, print_loaded, run_patterns};
pub use source::{DEFAULT_SOURCE_URL, FileSource, HttpSource, StrSource, WordSource};
pub use store::{DEFAULT_WORD_LENGTH, WordStore, WordStoreBuilder, is_admissible};
