//! Text extraction from various file formats

use crate::error::{CvMatcherError, Result};
use lazy_static::lazy_static;
use pulldown_cmark::{html, Parser};
use regex::{Captures, Regex};
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

lazy_static! {
    /// A `<w:p>` paragraph element, excluding `<w:pPr>` and friends
    static ref DOCX_PARAGRAPH: Regex = Regex::new(r"(?s)<w:p[ >].*?</w:p>").unwrap();

    /// Text runs, tabs and line or page breaks inside a paragraph
    static ref DOCX_RUN: Regex =
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:(tab|br|cr)(?:\s[^>]*)?/>").unwrap();

    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();

    static ref NUMERIC_ENTITY: Regex = Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").unwrap();
}

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            CvMatcherError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        docx_to_text(&bytes).map_err(|e| match e {
            CvMatcherError::DocxExtraction(reason) => CvMatcherError::DocxExtraction(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                reason
            )),
            other => other,
        })
    }
}

/// Read `word/document.xml` out of the container and return one line per
/// paragraph.
pub fn docx_to_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut document_xml)?;

    let paragraphs: Vec<String> = DOCX_PARAGRAPH
        .find_iter(&document_xml)
        .map(|paragraph| {
            let mut line = String::new();
            for run in DOCX_RUN.captures_iter(paragraph.as_str()) {
                match (run.get(1), run.get(2).map(|m| m.as_str())) {
                    (Some(text), _) => line.push_str(&decode_entities(text.as_str())),
                    (None, Some("tab")) => line.push('\t'),
                    (None, Some(_)) => line.push('\n'),
                    (None, None) => {}
                }
            }
            line
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Render markdown to HTML and strip the tags, keeping one line per block
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n");

    let clean_text = decode_entities(&HTML_TAG.replace_all(&text, ""));

    let lines: Vec<&str> = clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

/// `&amp;` goes last so escaped references stay literal
fn decode_entities(text: &str) -> String {
    let named = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    let numeric = NUMERIC_ENTITY.replace_all(&named, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        match code.and_then(char::from_u32) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    });

    numeric.replace("&amp;", "&")
}
