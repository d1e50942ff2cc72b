//! Flat CSV import/export.
//!
//! The only persistence this crate offers. Export writes scored posts in a
//! fixed column order for spreadsheet triage; import accepts candidate posts
//! from manually exported searches, with every column optional — collectors
//! are messy, so missing fields default and malformed rows are skipped
//! rather than failing the run.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{Post, PostKind, ScoredPost, default_timestamp};

/// Max characters of body text kept in the `excerpt` column.
const EXCERPT_LEN: usize = 200;
/// Max characters of title kept in the `title` column.
const TITLE_LEN: usize = 200;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the export file. Field order is the column order.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    score: u32,
    source: &'a str,
    title: String,
    link: &'a str,
    author: &'a str,
    excerpt: String,
    date: String,
    score_breakdown: &'a str,
    evidence: &'a str,
}

/// One row of a candidate import file. Every column is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImportRow {
    kind: String,
    title: String,
    text: String,
    author: String,
    author_flair: String,
    url: String,
    date: String,
    source: String,
}

/// Write scored posts as CSV with columns
/// `score, source, title, link, author, excerpt, date, score_breakdown, evidence`.
pub fn export_csv<W: io::Write>(writer: W, posts: &[ScoredPost]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(writer);
    for scored in posts {
        w.serialize(ExportRow {
            score: scored.score,
            source: &scored.post.source,
            title: truncate_chars(&scored.post.title, TITLE_LEN),
            link: &scored.post.url,
            author: &scored.post.author,
            excerpt: excerpt(&scored.post.text, EXCERPT_LEN),
            date: scored.post.created_at.format("%Y-%m-%d %H:%M").to_string(),
            score_breakdown: &scored.breakdown,
            evidence: &scored.evidence,
        })?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_csv_file<P: AsRef<Path>>(path: P, posts: &[ScoredPost]) -> Result<(), ExportError> {
    export_csv(File::create(path)?, posts)
}

/// Read candidate posts from CSV. Unknown kinds fall back to the default,
/// bad dates fall back to the default timestamp, unreadable rows are skipped.
pub fn import_csv<R: io::Read>(reader: R) -> Result<Vec<Post>, ExportError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);
    let mut posts = Vec::new();
    for result in rdr.deserialize::<ImportRow>() {
        let Ok(row) = result else { continue };
        posts.push(Post {
            kind: PostKind::from_label(&row.kind).unwrap_or_default(),
            title: row.title,
            text: row.text,
            author: row.author,
            author_flair: row.author_flair,
            url: row.url,
            created_at: parse_date(&row.date),
            source: row.source,
        });
    }
    Ok(posts)
}

pub fn import_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Post>, ExportError> {
    import_csv(File::open(path)?)
}

/// Whitespace-collapsed excerpt of at most `max` chars, "..." if truncated.
pub fn excerpt(text: &str, max: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max {
        collapsed
    } else {
        let mut cut: String = collapsed.chars().take(max).collect();
        cut.push_str("...");
        cut
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn parse_date(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN)))
        .unwrap_or_else(|_| default_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SignalSet;

    fn scored(title: &str, score: u32) -> ScoredPost {
        ScoredPost {
            post: Post {
                title: title.to_string(),
                text: "body  with   spaces".to_string(),
                author: "ada".to_string(),
                url: "https://example.com/1".to_string(),
                source: "hackernews".to_string(),
                ..Post::default()
            },
            score,
            breakdown: "Strong Identity (+40)".to_string(),
            evidence: "Identity: \"quote\"".to_string(),
            signals: SignalSet::STRONG_IDENTITY,
        }
    }

    #[test]
    fn export_writes_expected_columns() {
        let mut out = Vec::new();
        export_csv(&mut out, &[scored("hello", 40)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "score,source,title,link,author,excerpt,date,score_breakdown,evidence");
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("40,hackernews,hello,https://example.com/1,ada,body with spaces,2024-06-01 00:00"));
    }

    #[test]
    fn import_defaults_missing_fields() {
        let csv = "title,text\nNeed help,I'm the CEO\n";
        let posts = import_csv(csv.as_bytes()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Need help");
        assert_eq!(posts[0].kind, PostKind::Post);
        assert!(posts[0].author.is_empty());
        assert_eq!(posts[0].created_at, default_timestamp());
    }

    #[test]
    fn import_parses_kind_and_date() {
        let csv = "kind,title,date\ncomment,hi,2024-01-15 08:30\n";
        let posts = import_csv(csv.as_bytes()).unwrap();
        assert_eq!(posts[0].kind, PostKind::Comment);
        assert_eq!(
            posts[0].created_at,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(8, 30, 0).unwrap()
        );
    }

    #[test]
    fn import_tolerates_bad_dates() {
        let csv = "title,date\nx,not-a-date\ny,2023-11-02\n";
        let posts = import_csv(csv.as_bytes()).unwrap();
        assert_eq!(posts[0].created_at, default_timestamp());
        assert_eq!(
            posts[1].created_at,
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap().and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn excerpt_collapses_and_truncates() {
        assert_eq!(excerpt("a  b\n\nc", 200), "a b c");
        let long = "word ".repeat(100);
        let cut = excerpt(&long, 20);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 23);
    }

    #[test]
    fn long_titles_are_truncated_on_export() {
        let mut sp = scored("x", 10);
        sp.post.title = "t".repeat(300);
        let mut out = Vec::new();
        export_csv(&mut out, &[sp]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&"t".repeat(200)));
        assert!(!text.contains(&"t".repeat(201)));
    }
}
