//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors produced by the engine are small structs describing what went wrong. The host decides
//! which regions of its input caused the error and packages both into an [`Error`], which can then
//! be rendered with [`ariadne`].

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// Builds a report with the given message, attaching one label per span.
///
/// Labels are matched to spans by position. Extra spans get an empty label, and extra labels are
/// dropped. If there are no spans at all, the report points at the start of the source.
pub fn report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: &[String],
    help: Option<String>,
) -> Report<'static, (&'a str, Range<usize>)> {
    let offset = spans.first().map(|span| span.start).unwrap_or(0);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            spans.iter()
                .enumerate()
                .map(|(i, span)| {
                    let mut label = Label::new((src_id, span.clone())).with_color(EXPR);
                    if let Some(label_str) = labels.get(i).filter(|s| !s.is_empty()) {
                        label = label.with_message(label_str);
                    }
                    label
                })
                .collect::<Vec<_>>()
        );

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes the report for this error into a string, including ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TooBig;

    impl ErrorKind for TooBig {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            report(
                src_id,
                spans,
                "the numbers got too big",
                &["this operand".to_string()],
                Some("try a smaller operand".to_string()),
            )
        }
    }

    #[test]
    fn report_mentions_message_and_label() {
        let input = "* 1000000000";
        let err = Error::new(vec![2..12], TooBig);
        let out = err.report_to_string("input", input).unwrap();
        let out = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(out.contains("the numbers got too big"));
        assert!(out.contains("this operand"));
        assert!(out.contains("try a smaller operand"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(vec![], TooBig);
        let out = err.report_to_string("input", "").unwrap();
        let out = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(out.contains("the numbers got too big"));
    }
}
