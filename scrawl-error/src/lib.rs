//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

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
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Builds a report with the given message, one label per span, and optional help text.
///
/// Implementors of [`ErrorKind`] can call this instead of assembling the [`Report`] builder by
/// hand; it applies the [`EXPR`] highlight color to every label.
pub fn build_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut builder = Report::build(ReportKind::Error, src_id, spans.first().map_or(0, |span| span.start))
        .with_message(message)
        .with_labels(
            labels
                .into_iter()
                .enumerate()
                .map(|(i, label_str)| {
                    let span = spans.get(i).cloned().unwrap_or(0..0);
                    let mut label = Label::new((src_id, span)).with_color(EXPR);

                    if !label_str.is_empty() {
                        label = label.with_message(label_str);
                    }

                    label
                })
                .collect::<Vec<_>>(),
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
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Build a report from this error kind and print it to stderr, resolving the spans against
    /// the given source text.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so its
    /// `eprint` method is the only way to render it.
    pub fn report_to_stderr(&self, src_id: &str, source: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Oops;

    impl ErrorKind for Oops {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            build_report(
                src_id,
                spans,
                "something went wrong".to_string(),
                vec!["here".to_string()],
                Some("try something else".to_string()),
            )
        }
    }

    #[test]
    fn report_contains_message_and_help() {
        let err = Error::new(vec![0..3], Oops);
        let mut out = Vec::new();
        err.build_report("input")
            .write(("input", Source::from("bad input")), &mut out)
            .unwrap();

        let rendered = String::from_utf8(strip_ansi_escapes::strip(&out)).unwrap();
        assert!(rendered.contains("something went wrong"));
        assert!(rendered.contains("try something else"));
    }
}
