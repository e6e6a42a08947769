//! Minimal HTML for the quote pages

use std::fmt::Write;

use quotesite_core::author::UNKNOWN_AUTHOR;

use crate::models::QuoteWithAuthor;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, main: &str, footer: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n<main>{}</main>\n<footer>{}</footer>\n</body>\n</html>\n",
        escape(title),
        main,
        footer
    )
}

/// Page for a single quote with links to the next random quote and, when
/// the author is known, more quotes by the same author.
pub fn quote_page(quote: &QuoteWithAuthor) -> String {
    let author = quote.author_name();

    let main = format!(
        "<figure><blockquote><p>{}</p></blockquote><figcaption>{}</figcaption></figure>",
        escape(&quote.quote),
        escape(&author)
    );

    let mut footer = format!("<a href=\"/random?quote_id={}\">Random</a>", quote.id);
    if author != UNKNOWN_AUTHOR {
        // Writing into a String cannot fail.
        let _ = write!(
            footer,
            " | <a href=\"/author/{}?quote_id={}\">More from {}</a>",
            quote.author_id,
            quote.id,
            escape(&author)
        );
    }

    layout(&format!("{} - {}", quote.quote, author), &main, &footer)
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        "<p>Not Found</p>",
        "<a href=\"/random\">Random</a>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(first_name: &str) -> QuoteWithAuthor {
        QuoteWithAuthor {
            id: 4,
            quote: "Less is <more> & \"better\"".into(),
            author_id: 9,
            first_name: first_name.into(),
            last_name: Some("Seneca".into()),
            image_url: None,
        }
    }

    #[test]
    fn escapes_quote_text() {
        let html = quote_page(&quote("Lucius"));
        assert!(html.contains("Less is &lt;more&gt; &amp; &quot;better&quot;"));
        assert!(!html.contains("<more>"));
    }

    #[test]
    fn links_to_random_and_author() {
        let html = quote_page(&quote("Lucius"));
        assert!(html.contains("href=\"/random?quote_id=4\""));
        assert!(html.contains("href=\"/author/9?quote_id=4\""));
        assert!(html.contains("More from Lucius Seneca"));
    }

    #[test]
    fn unknown_author_has_no_author_link() {
        let html = quote_page(&quote(""));
        assert!(html.contains("Unknown"));
        assert!(!html.contains("/author/"));
    }

    #[test]
    fn not_found_links_to_random() {
        let html = not_found_page();
        assert!(html.contains("Not Found"));
        assert!(html.contains("href=\"/random\""));
    }
}
