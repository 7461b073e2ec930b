use anyhow::Result;
use nodeview_types::JobSpecWithRuns;

use super::HandlerContext;
use crate::args::PageArgs;
use crate::store::Store;

pub const LIST_BASE: &str = "/v2/specs";

pub fn handle_list(ctx: &HandlerContext, args: &PageArgs) -> Result<()> {
    let store = ctx.open_store()?;
    let mut jobs = store.jobs()?;
    jobs.sort_by_key(|j| j.created_at);

    let request = ctx.page_request(args)?;
    let page = ctx.paginator(LIST_BASE)?.paginate_request(&jobs, request);
    ctx.render_page(page)
}

pub fn handle_show(ctx: &HandlerContext, id: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let job = store.find_job(id)?;
    let runs = store.runs_for_job(&job.id)?;
    ctx.render(&JobSpecWithRuns::new(job, runs))
}
