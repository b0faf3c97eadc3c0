use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use word_counter_core::FrequencyMap;

/// One line of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRow<'a> {
    pub word: &'a str,
    pub count: u64,
}

/// Everything a renderer needs, already in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView<'a> {
    pub title: String,
    pub total_words: u64,
    pub distinct_words: usize,
    #[serde(rename = "words")]
    pub rows: Vec<ReportRow<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_utc: Option<String>,
}

impl<'a> ReportView<'a> {
    /// Pairs each sorted word with its count from `map`.
    ///
    /// `sorted` must be the keys of `map`, as returned by `sort_keys(map)`.
    /// In release builds a word missing from `map` is left out of the table.
    pub fn new(title: impl Into<String>, map: &'a FrequencyMap, sorted: &[&'a str]) -> Self {
        debug_assert_eq!(sorted.len(), map.len(), "sorted words must be the map's keys");
        let rows = sorted
            .iter()
            .filter_map(|&word| {
                let count = map.count(word);
                debug_assert!(count.is_some(), "{word:?} is not a key of the map");
                count.map(|count| ReportRow { word, count })
            })
            .collect();
        Self {
            title: title.into(),
            total_words: map.total(),
            distinct_words: map.len(),
            rows,
            generated_utc: None,
        }
    }

    pub fn with_generated_utc(mut self, stamp: impl Into<String>) -> Self {
        self.generated_utc = Some(stamp.into());
        self
    }
}

pub trait ReportRenderer {
    fn render(&self, report: &ReportView<'_>) -> String;
    fn file_extension(&self) -> &'static str;
}

/// Renders a standalone HTML page with a two-column `Words`/`Counts` table.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTableRenderer;

impl ReportRenderer for HtmlTableRenderer {
    fn render(&self, report: &ReportView<'_>) -> String {
        let title = escape_html(&report.title);
        let mut out = format!(
            "<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Words Counted in {title}</title>\n\
             </head>\n<body>\n<h2>Words Counted in {title}</h2>\n<table border=\"1\">\n<tbody>\n\
             <tr>\n<th>Words</th>\n<th>Counts</th>\n</tr>\n"
        );
        for row in &report.rows {
            out.push_str(&format!(
                "<tr>\n<td>{word}</td>\n<td>{count}</td>\n</tr>\n",
                word = escape_html(row.word),
                count = row.count,
            ));
        }
        out.push_str("</tbody>\n</table>\n");
        out.push_str(&format!(
            "<p>{} words, {} distinct</p>\n",
            report.total_words, report.distinct_words
        ));
        if let Some(stamp) = &report.generated_utc {
            out.push_str(&format!("<p>Generated {}</p>\n", escape_html(stamp)));
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

/// Renders the report as a pretty-printed JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &ReportView<'_>) -> String {
        // Only strings and integers: serialization is infallible here.
        let mut json = serde_json::to_string_pretty(report).unwrap_or_default();
        json.push('\n');
        json
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

/// Escapes the characters HTML reserves in text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

impl ReportFormat {
    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Html => Box::new(HtmlTableRenderer),
            ReportFormat::Json => Box::new(JsonRenderer),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report format {0:?}, expected \"html\" or \"json\"")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
