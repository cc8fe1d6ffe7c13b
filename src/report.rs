use std::{fs, path::Path};

use crate::dates::DateRange;
use crate::error::ScrapeError;
use crate::models::EventRecord;

const SEPARATOR: &str = " – ";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_report(city: &str, range: &DateRange, events: &[EventRecord]) -> String {
    let city = escape_html(city);
    let mut html = String::new();
    html.push_str(&format!(
        "<html><head><title>{city} Events</title></head><body>\n"
    ));
    html.push_str(&format!(
        "<h1>{city} Events from {} to {}</h1>\n",
        range.start_param(),
        range.end_param()
    ));
    html.push_str("<ul>\n");
    for event in events {
        html.push_str(&format!(
            "  <li><a href=\"{}\">{}</a>{SEPARATOR}{}{SEPARATOR}{}</li>\n",
            escape_html(&event.url),
            escape_html(&event.title),
            escape_html(&event.date),
            escape_html(&event.price),
        ));
    }
    html.push_str("</ul>\n</body></html>\n");
    html
}

/// Replaces whatever is at `path` with `html`.
pub fn write_report(path: &Path, html: &str) -> Result<(), ScrapeError> {
    let to_error = |source| ScrapeError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, html).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn range() -> DateRange {
        DateRange {
            start: NaiveDate::from_ymd_opt(2026, 10, 30).expect("start"),
            end: NaiveDate::from_ymd_opt(2026, 11, 1).expect("end"),
        }
    }

    fn record(title: &str, date: &str, price: &str, url: &str) -> EventRecord {
        EventRecord {
            title: title.to_string(),
            date: date.to_string(),
            price: price.to_string(),
            url: url.to_string(),
        }
    }

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("weekend-scrape-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn renders_one_item_per_event_in_order() {
        let events = vec![
            record("Jazz Night", "Fri, Oct 30, 8:00 PM", "From $25.00", "https://e.ca/e/1"),
            record("Market Walk", "Sat 11:00 AM", "Free", "https://e.ca/e/2"),
            record("Comedy", "N/A", "CA$15", ""),
        ];
        let html = render_report("Toronto", &range(), &events);

        assert_eq!(html.matches("<li>").count(), 3);
        let lines: Vec<&str> = html.lines().filter(|l| l.contains("<li>")).collect();
        assert_eq!(
            lines[0],
            "  <li><a href=\"https://e.ca/e/1\">Jazz Night</a> – Fri, Oct 30, 8:00 PM – From $25.00</li>"
        );
        assert_eq!(
            lines[1],
            "  <li><a href=\"https://e.ca/e/2\">Market Walk</a> – Sat 11:00 AM – Free</li>"
        );
        assert_eq!(lines[2], "  <li><a href=\"\">Comedy</a> – N/A – CA$15</li>");
    }

    #[test]
    fn empty_listing_still_renders_the_shell() {
        let html = render_report("Toronto", &range(), &[]);
        assert_eq!(
            html,
            "<html><head><title>Toronto Events</title></head><body>\n\
             <h1>Toronto Events from 2026-10-30 to 2026-11-01</h1>\n\
             <ul>\n\
             </ul>\n\
             </body></html>\n"
        );
    }

    #[test]
    fn escapes_markup_in_fields() {
        let events = vec![record(
            "<script>alert(1)</script>",
            "Fri & Sat",
            "\"$5\"",
            "https://e.ca/e?a=1&b='2'",
        )];
        let html = render_report("Toronto", &range(), &events);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Fri &amp; Sat"));
        assert!(html.contains("&quot;$5&quot;"));
        assert!(html.contains("href=\"https://e.ca/e?a=1&amp;b=&#39;2&#39;\""));
    }

    #[test]
    fn writing_twice_overwrites() {
        let path = scratch_file("overwrite/report.html");
        write_report(&path, "first run, with a longer body").expect("first write");
        write_report(&path, "second").expect("second write");
        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "second");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_a_file_write_error() {
        let blocker = scratch_file("blocker");
        write_report(&blocker, "plain file").expect("create blocker");
        let err = write_report(&blocker.join("report.html"), "x").expect_err("should fail");
        assert!(matches!(err, ScrapeError::FileWrite { .. }));
        let _ = fs::remove_file(&blocker);
    }
}
