use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, error, info};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Why an upload could not be turned into text. Each condition is surfaced
/// separately so the handler can report the concrete cause to the client.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF could not be parsed: {0}")]
    InvalidPdf(String),

    #[error("PDF file appears to be empty")]
    NoPages,

    #[error("could not extract any text from PDF")]
    NoText,
}

/// Extracts the text of every page and joins them in document order.
/// Returns trimmed, non-empty text or fails; there is no partial result.
pub fn extract_text_from_pdf(content: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(content).map_err(|e| {
        error!("PDF parsing failed: {e}");
        ExtractError::InvalidPdf(e.to_string())
    })?;

    if pages.is_empty() {
        error!("PDF has no pages");
        return Err(ExtractError::NoPages);
    }

    for (i, page) in pages.iter().enumerate() {
        debug!("Extracted {} characters from page {}", page.len(), i + 1);
    }

    let text = pages.join("\n").trim().to_string();
    if text.is_empty() {
        error!("No text could be extracted from any page");
        return Err(ExtractError::NoText);
    }

    info!("Successfully extracted {} characters from PDF", text.len());
    debug!("First 200 characters: {}", head(&text, 200));
    Ok(text)
}

/// First email-like and phone-like substrings of the raw text. Used as a
/// fallback source for the contact columns when the analyzer fails; never
/// feeds the response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
    }
}

fn head(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ────────────────────────────── tests ──────────────────────────────
