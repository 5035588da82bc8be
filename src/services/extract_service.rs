use std::io::Cursor;

use crate::error::{Error, Result};

pub struct ExtractService;

impl ExtractService {
    /// Turns an uploaded document into plain text, dispatching on the
    /// file extension the client declared. Unknown extensions and
    /// unparseable payloads fail with separate variants so callers can
    /// tell the two apart.
    pub fn extract_text(data: &[u8], filename: &str) -> Result<String> {
        let extension = filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Self::extract_pdf(data),
            "docx" => Self::extract_docx(data),
            _ => Err(Error::UnsupportedFormat(
                "Invalid format. Use PDF or DOCX.".to_string(),
            )),
        }
    }

    fn extract_pdf(data: &[u8]) -> Result<String> {
        let cursor = Cursor::new(data);
        let doc = lopdf::Document::load_from(cursor)
            .map_err(|e| Error::Extraction(format!("Could not parse file content: {}", e)))?;

        let pages = doc.get_pages();
        let mut text = String::new();

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    tracing::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        if text.trim().is_empty() {
            return Err(Error::Extraction(
                "Could not parse file content: no text extracted from PDF".to_string(),
            ));
        }
        Ok(text)
    }

    fn extract_docx(data: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| Error::Extraction(format!("Could not parse file content: {}", e)))?;

        let mut text = String::new();
        for child in docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                for para_child in paragraph.children {
                    if let docx_rs::ParagraphChild::Run(run) = para_child {
                        for run_child in run.children {
                            if let docx_rs::RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                text.push('\n');
            }
        }
        Ok(text)
    }
}
