use anyhow::Result;
use nodeview_pagination::{LinkSet, Page, PageRequest, PageSize, Paginator};
use serde::Serialize;
use std::any::Any;
use std::io::Write;
use std::path::PathBuf;

use crate::args::PageArgs;
use crate::config::Config;
use crate::presentation::{FormatOptions, RenderFormat, Renderer, renderer_for};
use crate::store::FileStore;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub format: RenderFormat,
    pub options: FormatOptions,
}

impl HandlerContext {
    pub fn new(data_dir: PathBuf, config: Config, format: RenderFormat) -> Self {
        let options = FormatOptions::for_stdout(config.display.color);
        Self {
            data_dir,
            config,
            format,
            options,
        }
    }

    pub fn open_store(&self) -> Result<FileStore> {
        Ok(FileStore::open_in(&self.data_dir)?)
    }

    /// Render `value` to stdout in the selected format.
    pub fn render<T>(&self, value: &T) -> Result<()>
    where
        T: Serialize + Any,
    {
        let stdout = std::io::stdout();
        self.render_to(stdout.lock(), value)
    }

    pub fn render_to<W, T>(&self, sink: W, value: &T) -> Result<()>
    where
        W: Write,
        T: Serialize + Any,
    {
        let mut renderer = renderer_for(self.format, sink, self.options);
        renderer.render(value)?;
        Ok(())
    }

    /// Paginator for a list endpoint, bounded by the configured maximum.
    pub fn paginator(&self, base: &str) -> Result<Paginator> {
        Ok(Paginator::new(base, self.config.pagination.max_size)?)
    }

    /// Resolve `--offset`/`--page`/`--size` into a validated request.
    ///
    /// A missing `--size` falls back to `pagination.default_size`.
    pub fn page_request(&self, args: &PageArgs) -> Result<PageRequest> {
        let default_size = self.config.pagination.default_size.to_string();
        let raw_size = args.size.as_deref().unwrap_or(&default_size);
        let max = self.config.pagination.max_size;

        let size = PageSize::parse(Some(raw_size), max)?;
        let request = match args.page {
            Some(page) => PageRequest::from_page(page, size),
            None => PageRequest::new(args.offset, size),
        };
        Ok(request)
    }

    /// Render a page: the whole document for JSON, the items plus navigation
    /// hints on stderr otherwise.
    pub fn render_page<T>(&self, page: Page<T>) -> Result<()>
    where
        T: Serialize + Any,
    {
        match self.format {
            RenderFormat::Json => self.render(&page.into_document()),
            RenderFormat::Table => {
                self.render(&page.items)?;
                eprintln!("{} of {} shown", page.items.len(), page.total);
                print_navigation(&page.links);
                Ok(())
            }
        }
    }
}

pub fn print_navigation(links: &LinkSet) {
    if let Some(next) = &links.next {
        eprintln!("next: --offset {} --size {}  ({})", next.offset, next.size, next.href);
    }
    if let Some(prev) = &links.prev {
        eprintln!("prev: --offset {} --size {}  ({})", prev.offset, prev.size, prev.href);
    }
}
