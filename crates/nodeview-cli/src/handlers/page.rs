use anyhow::{Context, Result};
use nodeview_pagination::parse_paginated_response;
use nodeview_types::{BridgeType, JobSpec};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::path::Path;

use super::HandlerContext;
use super::context::print_navigation;
use crate::presentation::RenderFormat;
use crate::types::ItemKind;

pub fn handle_inspect(
    ctx: &HandlerContext,
    file: &Path,
    kind: ItemKind,
    link_header: Option<&str>,
) -> Result<()> {
    let body =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    match kind {
        ItemKind::Bridges => inspect::<BridgeType>(ctx, &body, link_header),
        ItemKind::Jobs => inspect::<JobSpec>(ctx, &body, link_header),
    }
}

fn inspect<T>(ctx: &HandlerContext, body: &[u8], link_header: Option<&str>) -> Result<()>
where
    T: DeserializeOwned + Serialize + Any,
{
    let (items, links) = parse_paginated_response::<T>(body, link_header)?;

    match ctx.format {
        RenderFormat::Json => ctx.render(&serde_json::json!({
            "data": items,
            "links": links,
        })),
        RenderFormat::Table => {
            ctx.render(&items)?;
            print_navigation(&links);
            Ok(())
        }
    }
}
