use serde::Serialize;
use std::any::Any;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::RenderError;

/// Pretty-printed JSON of any serializable value, one document per render.
pub struct JsonRenderer<W: Write> {
    sink: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render<T>(&mut self, value: &T) -> Result<(), RenderError>
    where
        T: Serialize + Any,
    {
        let json = serde_json::to_string_pretty(value).map_err(RenderError::Serialize)?;
        self.sink.write_all(json.as_bytes())?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }
}
