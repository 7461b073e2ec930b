use serde::Serialize;
use std::any::Any;
use std::io::Write;

use super::json::JsonRenderer;
use super::table::TableRenderer;
use super::traits::Renderer;
use crate::presentation::{FormatOptions, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Json,
    Table,
}

impl From<crate::types::OutputFormat> for RenderFormat {
    fn from(format: crate::types::OutputFormat) -> Self {
        match format {
            crate::types::OutputFormat::Plain => Self::Table,
            crate::types::OutputFormat::Json => Self::Json,
        }
    }
}

/// Renderer picked at runtime from the `--format` flag.
pub enum OutputRenderer<W: Write> {
    Json(JsonRenderer<W>),
    Table(TableRenderer<W>),
}

pub fn renderer_for<W: Write>(
    format: RenderFormat,
    sink: W,
    options: FormatOptions,
) -> OutputRenderer<W> {
    match format {
        RenderFormat::Json => OutputRenderer::Json(JsonRenderer::new(sink)),
        RenderFormat::Table => OutputRenderer::Table(TableRenderer::with_options(sink, options)),
    }
}

impl<W: Write> OutputRenderer<W> {
    pub fn into_inner(self) -> W {
        match self {
            OutputRenderer::Json(r) => r.into_inner(),
            OutputRenderer::Table(r) => r.into_inner(),
        }
    }
}

impl<W: Write> Renderer for OutputRenderer<W> {
    fn render<T>(&mut self, value: &T) -> Result<(), RenderError>
    where
        T: Serialize + Any,
    {
        match self {
            OutputRenderer::Json(r) => r.render(value),
            OutputRenderer::Table(r) => r.render(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeview_testing::fixtures;

    #[test]
    fn test_renderer_for_dispatches_on_format() {
        let bridge = fixtures::sample_bridge("hapax", "http://hap.ax");

        let mut json = renderer_for(RenderFormat::Json, Vec::new(), FormatOptions::default());
        assert!(matches!(json, OutputRenderer::Json(_)));
        json.render(&bridge).unwrap();
        let out = String::from_utf8(json.into_inner()).unwrap();
        assert!(out.starts_with('{'));

        let mut table = renderer_for(RenderFormat::Table, Vec::new(), FormatOptions::default());
        table.render(&bridge).unwrap();
        let out = String::from_utf8(table.into_inner()).unwrap();
        assert!(out.starts_with("Name"));
    }

    #[test]
    fn test_plain_maps_to_table() {
        assert_eq!(
            RenderFormat::from(crate::types::OutputFormat::Plain),
            RenderFormat::Table
        );
        assert_eq!(
            RenderFormat::from(crate::types::OutputFormat::Json),
            RenderFormat::Json
        );
    }
}
