//! Reference corpus loading.
//!
//! The corpus is the fixed comparison target for every similarity check. It is
//! loaded once at startup and shared read-only across requests; there is no
//! per-user or per-session variant.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

/// Built-in reference corpus used when no corpus file is configured.
///
/// A baseline of African research themes the service compares uploads against.
pub const DEFAULT_CORPUS: &str = "\
The economic impact of fuel subsidy removal in Nigeria has been studied extensively \
in recent years. Removing subsidies reduces government expenditure and is intended to \
promote market efficiency, yet studies consistently report increased inflation and \
reduced purchasing power among low-income households in both urban and rural areas.

Agricultural development in Sub-Saharan Africa continues to face persistent \
challenges, including climate change, inadequate infrastructure, and limited access \
to modern farming technology. Research institutions across the continent are \
developing sustainable farming practices that remain economically viable for \
smallholder farmers while protecting the environment.

Education systems in African countries have undergone significant reform aimed at \
improving access and quality. Challenges remain in teacher training, curriculum \
development, and resource allocation. Evidence shows that investment in early \
childhood education yields long-term benefits for economic development.

Healthcare systems in many African nations operate with limited resources and \
infrastructure. The COVID-19 pandemic underscored the importance of robust public \
health systems and sustained investment in health infrastructure. Current research \
focuses on cost-effective healthcare delivery tailored to local contexts.

Regional integration and trade agreements are central topics in African economic \
development research. The African Continental Free Trade Area represents a major \
milestone in promoting intra-African trade and economic cooperation across member \
states.";

/// Process-wide reference text for similarity comparison.
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    text: String,
}

impl ReferenceCorpus {
    /// Loads the corpus from a file, or falls back to [`DEFAULT_CORPUS`] when no
    /// path is configured.
    pub fn load(path: Option<&Path>) -> io::Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                info!(path = %path.display(), chars = text.len(), "Reference corpus loaded");
                Ok(Self { text })
            }
            None => {
                info!(chars = DEFAULT_CORPUS.len(), "Using built-in reference corpus");
                Ok(Self::builtin())
            }
        }
    }

    /// Returns the built-in corpus.
    pub fn builtin() -> Self {
        Self {
            text: DEFAULT_CORPUS.to_string(),
        }
    }

    /// The corpus text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_corpus_is_nonempty() {
        let corpus = ReferenceCorpus::builtin();
        assert!(!corpus.text().trim().is_empty());
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let corpus = ReferenceCorpus::load(None).expect("builtin load");
        assert_eq!(corpus.text(), DEFAULT_CORPUS);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "custom baseline text").expect("write");

        let corpus = ReferenceCorpus::load(Some(file.path())).expect("file load");
        assert_eq!(corpus.text(), "custom baseline text");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = ReferenceCorpus::load(Some(Path::new("/nonexistent/corpus.txt")));
        assert!(result.is_err());
    }
}
