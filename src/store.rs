// Fixed-length word store. Local source first, remote list as fallback.

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::{PatternError, SourceError, StoreError};
use crate::pattern::WildcardPattern;
use crate::source::{FileSource, HttpSource, WordSource};
use crate::{debug_log, info_log};
use std::io::BufRead;

pub const DEFAULT_WORD_LENGTH: usize = 5;

/// True if `line` has exactly `word_length` characters.
/// No trimming or case folding happens first.
#[must_use]
pub fn is_admissible(line: &str, word_length: usize) -> bool {
    line.chars().count() == word_length
}

#[derive(Debug)]
pub struct WordStore<D: Diagnostics = LogDiagnostics> {
    words: Vec<String>,
    word_length: usize,
    diagnostics: D,
}

impl<D: Diagnostics> WordStore<D> {
    /// Every stored word matching `pattern`, in the order they were read.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is blank or has no `*`.
    pub fn find_matches(&self, pattern: &str) -> Result<Vec<String>, PatternError> {
        let pattern = WildcardPattern::parse(pattern)?;
        Ok(self.find_matches_compiled(&pattern))
    }

    /// Same as [`find_matches`](Self::find_matches) with an already compiled pattern.
    pub fn find_matches_compiled(&self, pattern: &WildcardPattern) -> Vec<String> {
        let results: Vec<String> = self
            .words
            .iter()
            .filter(|word| pattern.is_match(word))
            .cloned()
            .collect();
        debug_log!("'{}' matched {} of {} words", pattern, results.len(), self.words.len());
        self.diagnostics
            .emit(&format!("Found {} coincidences", results.len()));
        results
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Emit every stored word on the diagnostics sink.
    pub fn list_all(&self) {
        for word in &self.words {
            self.diagnostics.emit(word);
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    fn admit(&mut self, line: String) -> bool {
        if is_admissible(&line, self.word_length) {
            self.words.push(line);
            true
        } else {
            false
        }
    }

    fn fill_from(&mut self, source: &dyn WordSource) -> Result<(), SourceError> {
        let reader = source.open()?;
        for line in reader.lines() {
            self.admit(line?);
        }
        Ok(())
    }

    /// Soft: any failure is reported and leaves the store empty.
    fn populate_local(&mut self, source: &dyn WordSource) -> bool {
        self.diagnostics
            .emit(&format!("Building dictionary from {}", source.describe()));

        if let Err(e) = self.fill_from(source) {
            self.diagnostics.emit(&format!(
                "There was an issue with the dictionary provided: {e}"
            ));
            self.words.clear();
            return false;
        }

        if self.words.is_empty() {
            self.diagnostics.emit(&format!(
                "Your dictionary has no {} letter words.",
                self.word_length
            ));
            return false;
        }

        true
    }

    /// Hard: any failure propagates and the partial store is dropped.
    fn populate_remote(&mut self, source: &dyn WordSource) -> Result<(), StoreError> {
        self.diagnostics.emit(&format!(
            "Building dictionary from default address: {}",
            source.describe()
        ));
        self.fill_from(source).map_err(StoreError::RemoteFetch)
    }
}

/// Configures where a [`WordStore`] comes from, then fills it with
/// [`populate`](Self::populate).
pub struct WordStoreBuilder<D: Diagnostics = LogDiagnostics> {
    word_length: usize,
    local: Option<Box<dyn WordSource>>,
    fallback: Box<dyn WordSource>,
    diagnostics: D,
}

impl WordStoreBuilder<LogDiagnostics> {
    /// No local source, the default remote list as fallback, and diagnostics
    /// sent to the log.
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            local: None,
            fallback: Box::new(HttpSource::default()),
            diagnostics: LogDiagnostics,
        }
    }
}

impl Default for WordStoreBuilder<LogDiagnostics> {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH)
    }
}

impl<D: Diagnostics> WordStoreBuilder<D> {
    /// Use a dictionary path. Blank locators clear the local source, so
    /// population goes straight to the fallback.
    #[must_use]
    pub fn source_locator(mut self, locator: &str) -> Self {
        self.local = FileSource::from_locator(locator)
            .map(|source| Box::new(source) as Box<dyn WordSource>);
        self
    }

    #[must_use]
    pub fn local_source(mut self, source: impl WordSource + 'static) -> Self {
        self.local = Some(Box::new(source));
        self
    }

    #[must_use]
    pub fn fallback_source(mut self, source: impl WordSource + 'static) -> Self {
        self.fallback = Box::new(source);
        self
    }

    #[must_use]
    pub fn diagnostics<D2: Diagnostics>(self, diagnostics: D2) -> WordStoreBuilder<D2> {
        WordStoreBuilder {
            word_length: self.word_length,
            local: self.local,
            fallback: self.fallback,
            diagnostics,
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Read the sources and return the filled store. Blocks until the chosen
    /// source has been read to the end.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RemoteFetch`] if the fallback source is needed and
    /// cannot be read. Local failures never surface here.
    pub fn populate(self) -> Result<WordStore<D>, StoreError> {
        let mut store = WordStore {
            words: Vec::new(),
            word_length: self.word_length,
            diagnostics: self.diagnostics,
        };

        let populated = match &self.local {
            Some(local) => store.populate_local(&**local),
            None => false,
        };

        if !populated {
            store.populate_remote(&*self.fallback)?;
        }

        info_log!(
            "Loaded {} words of length {}",
            store.words.len(),
            store.word_length
        );
        Ok(store)
    }
}
