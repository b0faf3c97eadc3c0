//! Word counter engine: document decoding, report rendering and persistence.
mod decode;
mod persist;
mod render;
mod report;

pub use decode::{decode_document, DecodeError, DecodedText};
pub use persist::{PersistError, ReportDir};
pub use render::{
    escape_html, HtmlTableRenderer, JsonRenderer, ReportFormat, ReportRenderer, ReportRow,
    ReportView, UnknownFormat,
};
pub use report::{
    build_report, render_report, ReportError, ReportInput, ReportOptions, ReportSummary,
};
