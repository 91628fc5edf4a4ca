//! Trace-table rendering.
//!
//! [`TraceRow`] maps a per-iteration record to its column headers and
//! formatted cells; [`render`] lays the rows out as a fixed-width text
//! table. This is the only place trace numbers are turned into text.

use crate::root_finding::report::{
    BisectionRecord, FixedPointRecord, NewtonRecord, RegulaFalsiRecord, SecantRecord,
};

/// A record type that can be shown as one row of a trace table.
pub trait TraceRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

fn fmt(v: f64) -> String {
    format!("{v:.6}")
}

impl TraceRow for BisectionRecord {
    fn headers() -> &'static [&'static str] {
        &["i", "a", "b", "x", "f(x)"]
    }
    fn cells(&self) -> Vec<String> {
        vec![
            self.iteration.to_string(),
            fmt(self.a),
            fmt(self.b),
            fmt(self.x),
            fmt(self.fx),
        ]
    }
}

impl TraceRow for FixedPointRecord {
    fn headers() -> &'static [&'static str] {
        &["i", "x", "|x_new - x_prev|"]
    }
    fn cells(&self) -> Vec<String> {
        vec![self.iteration.to_string(), fmt(self.x), fmt(self.error)]
    }
}

impl TraceRow for SecantRecord {
    fn headers() -> &'static [&'static str] {
        &["i", "x", "|x - x_prev|"]
    }
    fn cells(&self) -> Vec<String> {
        vec![self.iteration.to_string(), fmt(self.x), fmt(self.step)]
    }
}

impl TraceRow for NewtonRecord {
    fn headers() -> &'static [&'static str] {
        &["i", "x", "|x_new - x|"]
    }
    fn cells(&self) -> Vec<String> {
        vec![self.iteration.to_string(), fmt(self.x), fmt(self.error)]
    }
}

impl TraceRow for RegulaFalsiRecord {
    fn headers() -> &'static [&'static str] {
        &["i", "a", "f(a)", "b", "f(b)", "c", "f(c)", "|b - a|"]
    }
    fn cells(&self) -> Vec<String> {
        vec![
            self.iteration.to_string(),
            fmt(self.a),
            fmt(self.fa),
            fmt(self.b),
            fmt(self.fb),
            fmt(self.c),
            fmt(self.fc),
            fmt(self.width),
        ]
    }
}

/// Renders a trace as a right-aligned fixed-width table with a header row
/// and a dashed separator. An empty trace renders the header alone.
pub fn render<R: TraceRow>(trace: &[R]) -> String {
    let headers = R::headers();
    let rows: Vec<Vec<String>> = trace.iter().map(TraceRow::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let line = |cells: &[String], widths: &[usize]| -> String {
        let fields: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:>width$}", width = *w))
            .collect();
        fields.join("  ")
    };

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_owned()).collect();
    out.push_str(&line(&header_cells, &widths));
    out.push('\n');

    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&dashes.join("  "));

    for row in &rows {
        out.push('\n');
        out.push_str(&line(row, &widths));
    }
    out
}
