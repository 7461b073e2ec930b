use anyhow::{Context, Result};
use nodeview_types::{BridgeName, BridgeType};
use tracing::info;

use super::HandlerContext;
use crate::args::PageArgs;
use crate::store::Store;

pub const LIST_BASE: &str = "/v2/bridge_types";

pub fn handle_list(ctx: &HandlerContext, args: &PageArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let bridges = store.bridges()?;

    let request = ctx.page_request(args)?;
    let page = ctx.paginator(LIST_BASE)?.paginate_request(&bridges, request);
    ctx.render_page(page)
}

pub fn handle_show(ctx: &HandlerContext, name: &str) -> Result<()> {
    let name: BridgeName = name.parse()?;
    let store = ctx.open_store()?;
    let bridge = store.find_bridge(&name)?;
    ctx.render(&bridge)
}

pub fn handle_add(ctx: &HandlerContext, name: &str, url: &str, confirmations: u64) -> Result<()> {
    let bridge = BridgeType::parse(name, url)
        .with_context(|| format!("Cannot register bridge '{}'", name))?
        .with_confirmations(confirmations);

    let mut store = ctx.open_store()?;
    store.add_bridge(bridge.clone())?;
    info!(name = %bridge.name, url = %bridge.url, "bridge added");

    ctx.render(&bridge)
}

pub fn handle_remove(ctx: &HandlerContext, name: &str) -> Result<()> {
    let name: BridgeName = name.parse()?;
    let mut store = ctx.open_store()?;
    let removed = store.remove_bridge(&name)?;
    info!(name = %removed.name, "bridge removed");

    eprintln!("Removed bridge '{}'", removed.name);
    Ok(())
}
