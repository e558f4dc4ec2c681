use std::fmt;
use std::path::Path;

/// Declared format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Page-structured binary document.
    Pdf,
    /// Already-flat UTF-8 text.
    PlainText,
}

impl DocumentFormat {
    /// Guess the format from a file extension. Anything that is not a known
    /// text extension is treated as PDF.
    pub fn from_path(path: &Path) -> DocumentFormat {
        let is_text = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let lower = ext.to_ascii_lowercase();
                lower == "txt" || lower == "md" || lower == "text"
            })
            .unwrap_or(false);
        if is_text {
            DocumentFormat::PlainText
        } else {
            DocumentFormat::Pdf
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::PlainText => write!(f, "text"),
        }
    }
}

/// One input document as supplied by the host. Consumed by extraction.
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl Document {
    pub fn pdf(bytes: impl Into<Vec<u8>>) -> Self {
        Document {
            bytes: bytes.into(),
            format: DocumentFormat::Pdf,
        }
    }

    pub fn plain_text(text: impl Into<String>) -> Self {
        Document {
            bytes: text.into().into_bytes(),
            format: DocumentFormat::PlainText,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Lowercase alphabetic tokens joined by single spaces, stopwords removed.
///
/// Token order follows the source text and duplicates are kept, since term
/// frequency feeds the weighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Join already-normalized tokens.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        NormalizedText(tokens.into_iter().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
