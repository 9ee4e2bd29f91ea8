use lsp_types::{Diagnostic, DiagnosticSeverity};
use marknav_core::{DocumentId, Marker, MarkerRange, Position, Severity};

/// Convert a protocol diagnostic into a marker.
///
/// Missing and unrecognized severities count as errors rather than being
/// dropped, a server that never labels its diagnostics still gets
/// navigated.
pub fn marker_from_lsp(document: DocumentId, diagnostic: &Diagnostic) -> Marker {
    let severity = match diagnostic.severity {
        Some(sev) if sev == DiagnosticSeverity::WARNING => Severity::Warn,
        Some(sev) if sev == DiagnosticSeverity::INFORMATION => Severity::Info,
        Some(sev) if sev == DiagnosticSeverity::HINT => Severity::Hint,
        _ => Severity::Error,
    };
    let range = MarkerRange::new(
        Position::new(diagnostic.range.start.line, diagnostic.range.start.character),
        Position::new(diagnostic.range.end.line, diagnostic.range.end.character),
    );

    Marker::new(
        document,
        range,
        severity,
        diagnostic.source.as_deref(),
        &diagnostic.message,
    )
}
