use scraper::{Html, Selector};
use url::Url;

/// One PDF anchor discovered on a period page.
#[derive(Debug, Clone)]
pub struct PdfLink {
    /// Anchor text, or the href's last path segment when the text is empty.
    pub name: String,
    /// Href resolved against the page URL.
    pub url: String,
}

/// Walk every `<a href>` in document order and keep the PDF links.
///
/// Anchors without an href, hrefs that don't end in `.pdf`
/// (case-insensitive), and hrefs that fail to resolve against `page_url`
/// are skipped silently. No deduplication: the same href behind two
/// anchors yields two links.
pub fn extract_pdf_links(html: &str, page_url: &Url) -> Vec<PdfLink> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.to_lowercase().ends_with(".pdf") {
            continue;
        }
        let Ok(resolved) = page_url.join(href) else {
            continue;
        };

        let text = anchor.text().collect::<String>().trim().to_string();
        let name = if text.is_empty() {
            href.rsplit('/').next().unwrap_or(href).to_string()
        } else {
            text
        };

        links.push(PdfLink {
            name,
            url: resolved.to_string(),
        });
    }

    links
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.education.gov.za/Curriculum/Exams/2023Nov.aspx").unwrap()
    }

    fn links(html: &str) -> Vec<PdfLink> {
        extract_pdf_links(html, &base())
    }

    #[test]
    fn keeps_only_pdf_hrefs() {
        let html = r#"
            <html><body>
              <a href="/docs/Mathematics%20P1.pdf">Mathematics P1</a>
              <a href="/docs/answers.docx">Answers</a>
              <a href="contact.aspx">Contact us</a>
              <a name="top">No href at all</a>
            </body></html>
        "#;
        let out = links(html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Mathematics P1");
    }

    #[test]
    fn suffix_match_is_case_insensitive() {
        let html = r#"<a href="/docs/HISTORY%20P2.PDF">History P2</a>"#;
        let out = links(html);
        assert_eq!(out.len(), 1);
        assert!(out[0].url.ends_with("HISTORY%20P2.PDF"));
    }

    #[test]
    fn resolves_relative_hrefs_against_page_url() {
        let out = links(r#"<a href="papers/Geography%20P1.pdf">Geography P1</a>"#);
        assert_eq!(
            out[0].url,
            "https://www.education.gov.za/Curriculum/Exams/papers/Geography%20P1.pdf"
        );

        let out = links(r#"<a href="/root/Life%20Sciences.pdf">Life Sciences</a>"#);
        assert_eq!(out[0].url, "https://www.education.gov.za/root/Life%20Sciences.pdf");
    }

    #[test]
    fn absolute_hrefs_pass_through() {
        let out = links(r#"<a href="https://cdn.example.org/x/Maths.pdf">Maths</a>"#);
        assert_eq!(out[0].url, "https://cdn.example.org/x/Maths.pdf");
    }

    #[test]
    fn empty_anchor_text_falls_back_to_path_segment() {
        let out = links(r#"<a href="/docs/Accounting%20Memo.pdf">  </a>"#);
        assert_eq!(out[0].name, "Accounting%20Memo.pdf");
    }

    #[test]
    fn anchor_text_is_trimmed() {
        let out = links("<a href=\"/a.pdf\">\n  Economics P2\n</a>");
        assert_eq!(out[0].name, "Economics P2");
    }

    #[test]
    fn duplicate_hrefs_are_kept_in_document_order() {
        let html = r#"
            <a href="/docs/Tourism.pdf">Tourism (English)</a>
            <p>some prose</p>
            <a href="/docs/Tourism.pdf">Toerisme (Afrikaans)</a>
        "#;
        let out = links(html);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Tourism (English)");
        assert_eq!(out[1].name, "Toerisme (Afrikaans)");
        assert_eq!(out[0].url, out[1].url);
    }

    #[test]
    fn malformed_markup_is_not_an_error() {
        let out = links("<a href='/x.pdf'>unclosed <b>bold");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "unclosed bold");
    }
}
