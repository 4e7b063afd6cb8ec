use crate::debug_log;
use crate::error::SourceError;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// From <https://github.com/dwyl/english-words>
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words.txt";

/// Somewhere words can be read from, one per line.
pub trait WordSource {
    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;

    /// Open the source for line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the source cannot be reached.
    fn open(&self) -> Result<Box<dyn BufRead>, SourceError>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        (**self).open()
    }
}

/// A dictionary file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build from a user-supplied locator, expanding a leading `~`.
    /// Blank locators mean "no local source".
    #[must_use]
    pub fn from_locator(locator: &str) -> Option<Self> {
        if locator.trim().is_empty() {
            return None;
        }
        Some(Self::new(expand_home(locator)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// A word list served over plain HTTP GET. The body is streamed, not buffered.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpSource {
    /// No timeout: a stalled connection blocks until the peer gives up.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}

impl WordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        debug_log!("GET {} (timeout {:?})", self.url, self.timeout);
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client.get(&self.url).send()?.error_for_status()?;
        debug_log!("GET {} -> {}", self.url, response.status());
        Ok(Box::new(BufReader::new(response)))
    }
}

/// An in-memory word list.
#[derive(Debug, Clone)]
pub struct StrSource {
    name: String,
    data: String,
}

impl StrSource {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl WordSource for StrSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        Ok(Box::new(Cursor::new(self.data.clone().into_bytes())))
    }
}

/// Replace a leading `~` with the current user's home directory.
/// Left untouched when there is no home directory or no `~`.
#[must_use]
pub fn expand_home(locator: &str) -> PathBuf {
    let rest = if locator == "~" {
        Some("")
    } else {
        locator
            .strip_prefix("~/")
            .or_else(|| locator.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(locator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;

    fn read_all(source: &dyn WordSource) -> Vec<String> {
        source
            .open()
            .unwrap()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_from_locator_blank_is_none() {
        assert!(FileSource::from_locator("").is_none());
        assert!(FileSource::from_locator("   ").is_none());
        assert!(FileSource::from_locator("words.txt").is_some());
    }

    #[test]
    fn test_file_source_strips_line_terminators() {
        let path = std::env::temp_dir()
            .join(format!("wordle_hinter_{}_source_crlf.txt", std::process::id()));
        fs::write(&path, "happy\r\napple\ngrape").unwrap();

        let source = FileSource::new(&path);
        assert_eq!(read_all(&source), vec!["happy", "apple", "grape"]);
        assert_eq!(source.describe(), path.display().to_string());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/definitely/not/a/real/dictionary.txt");
        assert!(matches!(source.open(), Err(SourceError::Io(_))));
    }

    #[test]
    fn test_str_source_reopens() {
        let source = StrSource::new("memory", "one\ntwo\n");
        assert_eq!(read_all(&source), vec!["one", "two"]);
        assert_eq!(read_all(&source), vec!["one", "two"]);
        assert_eq!(source.describe(), "memory");
    }

    #[test]
    fn test_boxed_source_delegates() {
        let source: Box<dyn WordSource> = Box::new(StrSource::new("boxed", "x\n"));
        assert_eq!(source.describe(), "boxed");
        let mut text = String::new();
        source.open().unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "x\n");
    }

    #[test]
    fn test_http_source_defaults() {
        let source = HttpSource::default();
        assert_eq!(source.url(), DEFAULT_SOURCE_URL);
        assert_eq!(source.timeout(), None);
        assert_eq!(source.describe(), DEFAULT_SOURCE_URL);

        let source = source.with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(source.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_http_source_invalid_url_fails() {
        let source = HttpSource::new("not a url");
        assert!(matches!(source.open(), Err(SourceError::Http(_))));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("words.txt"), PathBuf::from("words.txt"));
        assert_eq!(expand_home("/tmp/words.txt"), PathBuf::from("/tmp/words.txt"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/words.txt"), home.join("words.txt"));
        }
    }
}
