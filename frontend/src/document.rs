//! Press-release PDFs: fetching, page counting and page addressing for the
//! browser's built-in viewer.

use std::collections::BTreeMap;

use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Width the first page is drawn at inside a news card.
pub const THUMBNAIL_WIDTH: u32 = 310;

const PAGE_ASPECT: f64 = 11.0 / 8.5;

const PDF_HEADER: &[u8] = b"%PDF-";
/// Readers accept the header anywhere in the first kilobyte.
const HEADER_WINDOW: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("not a PDF document")]
    NotPdf,
    #[error("no pages found in document")]
    NoPages,
}

/// Downloads the document at `url` and counts its pages.
pub async fn fetch_page_count(url: &str) -> Result<u32, DocumentError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| DocumentError::Fetch(e.to_string()))?;
    if !response.ok() {
        return Err(DocumentError::Status(response.status()));
    }
    let bytes = response
        .binary()
        .await
        .map_err(|e| DocumentError::Fetch(e.to_string()))?;
    page_count(&bytes)
}

/// Runs [`fetch_page_count`] in the background and hands the result to
/// `on_done`. Failures are logged here so callers only decide what to show.
pub fn load_page_count(url: String, on_done: Callback<Result<u32, DocumentError>>) {
    spawn_local(async move {
        let result = fetch_page_count(&url).await;
        if let Err(e) = &result {
            gloo_console::error!(format!("PDF load failed: {} ({})", url, e));
        }
        on_done.emit(result);
    });
}

/// Counts the pages of a PDF held in memory.
///
/// Objects are indexed by number first, so a definition appended by an
/// incremental update replaces the earlier one instead of adding to it. The
/// `/Count` of the page tree root wins; without one, distinct `/Type /Page`
/// objects are counted. Documents that keep everything inside compressed
/// object streams fall back to the largest `/Count` entry in the file.
pub fn page_count(bytes: &[u8]) -> Result<u32, DocumentError> {
    let head = &bytes[..bytes.len().min(HEADER_WINDOW)];
    if find(head, PDF_HEADER, 0).is_none() {
        return Err(DocumentError::NotPdf);
    }

    let objects = objects(bytes);
    let root_count = objects
        .values()
        .filter(|body| has_type(body, b"/Pages") && find(body, b"/Parent", 0).is_none())
        .filter_map(|body| count_entries(body).next())
        .max()
        .unwrap_or(0);
    if root_count > 0 {
        return Ok(root_count);
    }

    let pages = objects.values().filter(|body| has_type(body, b"/Page")).count();
    if pages > 0 {
        return Ok(u32::try_from(pages).unwrap_or(u32::MAX));
    }
    count_entries(bytes)
        .max()
        .filter(|count| *count > 0)
        .ok_or(DocumentError::NoPages)
}

/// Frame height for a page drawn `width` pixels wide (US Letter proportions).
pub fn page_height(width: u32) -> u32 {
    (f64::from(width) * PAGE_ASPECT).round() as u32
}

/// Fragment-addressed URL of one page, understood by browser PDF viewers.
pub fn page_src(url: &str, page: u32) -> String {
    format!("{}#page={}&toolbar=0&navpanes=0&view=FitH", url, page)
}

/// Indirect objects by number. Later definitions replace earlier ones.
fn objects(bytes: &[u8]) -> BTreeMap<u32, &[u8]> {
    let mut objects = BTreeMap::new();
    let mut pos = 0;
    while let Some(at) = find(bytes, b"obj", pos) {
        pos = at + b"obj".len();
        // skips `endobj` and names such as `/objective`
        if is_name_char(bytes.get(pos)) || at == 0 || is_name_char(bytes.get(at - 1)) {
            continue;
        }
        let number = match object_number(&bytes[..at]) {
            Some(number) => number,
            None => continue,
        };
        let end = find(bytes, b"endobj", pos).unwrap_or(bytes.len());
        objects.insert(number, &bytes[pos..end]);
        pos = end;
    }
    objects
}

/// Reads `<number> <generation>` right before an `obj` keyword.
fn object_number(prefix: &[u8]) -> Option<u32> {
    let gen_end = skip_whitespace_back(prefix, prefix.len());
    let gen_start = skip_digits_back(prefix, gen_end);
    let num_end = skip_whitespace_back(prefix, gen_start);
    let num_start = skip_digits_back(prefix, num_end);
    if gen_end == prefix.len() || gen_start == gen_end || num_end == gen_start || num_start == num_end {
        return None;
    }
    parse_digits(&prefix[num_start..num_end])
}

fn has_type(body: &[u8], name: &[u8]) -> bool {
    let mut pos = 0;
    while let Some(at) = find(body, b"/Type", pos) {
        pos = at + b"/Type".len();
        let value = skip_whitespace(body, pos);
        if body[value..].starts_with(name) && !is_name_char(body.get(value + name.len())) {
            return true;
        }
    }
    false
}

/// Non-negative `/Count` values in order of appearance.
fn count_entries(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(at) = find(bytes, b"/Count", pos) {
            pos = at + b"/Count".len();
            let start = skip_whitespace(bytes, pos);
            let digits = bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            // outline entries may carry negative counts
            if let Some(value) = parse_digits(&bytes[start..start + digits]) {
                return Some(value);
            }
        }
        None
    })
}

fn parse_digits(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\r' | b'\n' | b'\x0c' | b'\0') {
        pos += 1;
    }
    pos
}

fn skip_whitespace_back(bytes: &[u8], mut end: usize) -> usize {
    while end > 0 && matches!(bytes[end - 1], b' ' | b'\t' | b'\r' | b'\n' | b'\x0c' | b'\0') {
        end -= 1;
    }
    end
}

fn skip_digits_back(bytes: &[u8], mut end: usize) -> usize {
    while end > 0 && bytes[end - 1].is_ascii_digit() {
        end -= 1;
    }
    end
}

fn is_name_char(byte: Option<&u8>) -> bool {
    byte.map_or(false, |b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(body: &str) -> Vec<u8> {
        format!("%PDF-1.4\n%\u{e2}\u{e3}\n{}\n%%EOF\n", body).into_bytes()
    }

    const THREE_PAGES: &str = "\
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj
2 0 obj << /Type /Pages /Kids [3 0 R 4 0 R 5 0 R] /Count 3 >> endobj
3 0 obj << /Type /Page /Parent 2 0 R >> endobj
4 0 obj << /Type/Page /Parent 2 0 R >> endobj
5 0 obj << /Parent 2 0 R /Type
/Page >> endobj";

    #[test]
    fn counts_page_objects() {
        assert_eq!(page_count(&pdf(THREE_PAGES)), Ok(3));
    }

    #[test]
    fn pages_node_is_not_a_page() {
        let doc = pdf("2 0 obj << /Type /Pages /Kids [] /Count 0 >> endobj");
        assert_eq!(page_count(&doc), Err(DocumentError::NoPages));
    }

    #[test]
    fn falls_back_to_page_tree_count() {
        let doc = pdf("\
1 0 obj << /Type /ObjStm /N 12 /First 80 >> stream ... endstream endobj
7 0 obj << /Count 12 /Kids [8 0 R 9 0 R] >> endobj
8 0 obj << /Count 5 >> endobj
9 0 obj << /Title (Outline) /Count -4 >> endobj");
        assert_eq!(page_count(&doc), Ok(12));
    }

    #[test]
    fn incremental_update_does_not_duplicate_pages() {
        let doc = pdf("\
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj
2 0 obj << /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >> endobj
3 0 obj << /Type /Page /Parent 2 0 R >> endobj
4 0 obj << /Type /Page /Parent 2 0 R >> endobj
trailer << /Root 1 0 R >>
%%EOF
3 0 obj << /Type /Page /Parent 2 0 R /Rotate 90 >> endobj
4 0 obj << /Type /Page /Parent 2 0 R /Annots [] >> endobj");
        assert_eq!(page_count(&doc), Ok(2));
    }

    #[test]
    fn rewritten_pages_count_once_without_tree_count() {
        let doc = pdf("\
2 0 obj << /Type /Pages /Kids [3 0 R 4 0 R] >> endobj
3 0 obj << /Type /Page /Parent 2 0 R >> endobj
4 0 obj << /Type /Page /Parent 2 0 R >> endobj
%%EOF
3 0 obj << /Type /Page /Parent 2 0 R /Rotate 180 >> endobj");
        assert_eq!(page_count(&doc), Ok(2));
    }

    #[test]
    fn nested_page_tree_uses_root_count() {
        let doc = pdf("\
2 0 obj << /Type /Pages /Kids [6 0 R 7 0 R] /Count 5 >> endobj
6 0 obj << /Type /Pages /Parent 2 0 R /Kids [] /Count 3 >> endobj
7 0 obj << /Type /Pages /Parent 2 0 R /Kids [] /Count 2 >> endobj");
        assert_eq!(page_count(&doc), Ok(5));
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        assert_eq!(
            page_count(b"<!doctype html><html><body>Not found</body></html>"),
            Err(DocumentError::NotPdf)
        );
        assert_eq!(page_count(b""), Err(DocumentError::NotPdf));
    }

    #[test]
    fn header_may_follow_leading_garbage() {
        let mut doc = vec![b' '; 100];
        doc.extend(pdf(THREE_PAGES));
        assert_eq!(page_count(&doc), Ok(3));
    }

    #[test]
    fn header_past_first_kilobyte_is_rejected() {
        let mut doc = vec![b'x'; HEADER_WINDOW];
        doc.extend(pdf(THREE_PAGES));
        assert_eq!(page_count(&doc), Err(DocumentError::NotPdf));
    }

    #[test]
    fn page_src_addresses_one_page() {
        assert_eq!(
            page_src("/PressAndNews/a.pdf", 4),
            "/PressAndNews/a.pdf#page=4&toolbar=0&navpanes=0&view=FitH"
        );
    }

    #[test]
    fn page_height_follows_letter_ratio() {
        assert_eq!(page_height(THUMBNAIL_WIDTH), 401);
        assert_eq!(page_height(850), 1100);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(DocumentError::Status(404).to_string(), "server responded with status 404");
        assert_eq!(DocumentError::NotPdf.to_string(), "not a PDF document");
    }
}
