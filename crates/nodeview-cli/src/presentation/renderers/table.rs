use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use nodeview_types::{BridgeType, JobRun, JobSpec, JobSpecWithRuns, RunStatus};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::any::Any;
use std::fmt::Write as _;
use std::io::Write;
use tracing::warn;

use super::traits::Renderer;
use crate::presentation::formatters::{FormatOptions, text, time};
use crate::presentation::{RenderError, Shape};

/// Human-readable tables for the shapes in [`Shape`].
///
/// Output is built in memory first, so an unsupported value leaves the sink
/// untouched.
pub struct TableRenderer<W: Write> {
    sink: W,
    options: FormatOptions,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, FormatOptions::default())
    }

    pub fn with_options(sink: W, options: FormatOptions) -> Self {
        Self { sink, options }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn format(&self, shape: Shape<'_>) -> String {
        match shape {
            Shape::BridgeList(bridges) => self.bridge_list(bridges),
            Shape::JobDetail(detail) => self.job_detail(detail),
            Shape::BridgeDetail(bridge) => self.bridge_detail(bridge),
            Shape::JobList(jobs) => self.job_list(jobs),
        }
    }

    fn table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if self.options.enable_color {
            table
                .enforce_styling()
                .set_content_arrangement(ContentArrangement::Dynamic);
        } else {
            table.force_no_tty();
        }
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
        table
    }

    fn bridge_list(&self, bridges: &[BridgeType]) -> String {
        format!("{}\n", self.bridge_table(bridges))
    }

    /// Tokens are left out of list output. Cells never wrap, so URLs stay
    /// copyable on narrow terminals.
    fn bridge_table(&self, bridges: &[BridgeType]) -> Table {
        let mut table = self.table(&["Name", "URL", "Confirmations"]);
        table.set_content_arrangement(ContentArrangement::Disabled);
        for bridge in bridges {
            table.add_row(vec![
                Cell::new(bridge.name.as_str()).fg(Color::Yellow),
                Cell::new(bridge.url.as_str()),
                Cell::new(bridge.default_confirmations),
            ]);
        }
        table
    }

    fn job_list(&self, jobs: &[JobSpec]) -> String {
        let mut table = self.table(&["ID", "Created At", "Initiators", "Tasks"]);
        for job in jobs {
            table.add_row(job_row(job));
        }
        format!("{table}\n")
    }

    /// Detail view shows every field, including both access tokens.
    fn bridge_detail(&self, bridge: &BridgeType) -> String {
        self.key_values(&[
            ("Name", bridge.name.to_string()),
            ("URL", bridge.url.to_string()),
            (
                "Default Confirmations",
                bridge.default_confirmations.to_string(),
            ),
            ("Incoming Token", bridge.incoming_token.clone()),
            ("Outgoing Token", bridge.outgoing_token.clone()),
        ])
    }

    fn job_detail(&self, detail: &JobSpecWithRuns) -> String {
        let job = &detail.job;
        let mut fields = vec![
            ("ID", job.id.clone()),
            ("Created At", time::format_timestamp(job.created_at)),
            ("Initiators", job.initiators_summary()),
            ("Tasks", job.tasks_summary()),
        ];
        if let Some(start) = job.start_at {
            fields.push(("Start At", time::format_timestamp(start)));
        }
        if let Some(end) = job.end_at {
            fields.push(("End At", time::format_timestamp(end)));
        }
        if let Some(payment) = job.min_payment {
            fields.push(("Min Payment", payment.to_string()));
        }

        let mut out = self.key_values(&fields);

        let mut runs = self.table(&["ID", "Status", "Created", "Completed", "Result", "Error"]);
        for run in &detail.runs {
            runs.add_row(self.run_row(run));
        }
        let _ = writeln!(out, "\n{}", self.heading(&format!("Runs ({})", detail.runs.len())));
        let _ = writeln!(out, "{runs}");
        out
    }

    fn run_row(&self, run: &JobRun) -> Vec<Cell> {
        let status_color = match run.status {
            RunStatus::Completed => Color::Green,
            RunStatus::Errored => Color::Red,
            RunStatus::Unstarted => Color::DarkGrey,
            _ => Color::Yellow,
        };
        let data = run
            .result
            .as_ref()
            .map(|r| text::compact_json(&r.data, self.options.truncate_text))
            .unwrap_or_default();

        vec![
            Cell::new(&run.id),
            Cell::new(run.status).fg(status_color),
            Cell::new(time::format_timestamp(run.created_at)),
            Cell::new(time::format_optional(run.completed_at)),
            Cell::new(data),
            Cell::new(run.error_message().unwrap_or_default()).fg(Color::Red),
        ]
    }

    fn key_values(&self, fields: &[(&str, String)]) -> String {
        let width = fields.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let mut out = String::new();
        for (key, value) in fields {
            let label = format!("{:<width$}", key, width = width);
            let _ = writeln!(out, "{}  {}", self.heading(&label), value);
        }
        out
    }

    fn heading(&self, text: &str) -> String {
        if self.options.enable_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn job_row(job: &JobSpec) -> Vec<Cell> {
    vec![
        Cell::new(&job.id).fg(Color::Yellow),
        Cell::new(time::format_timestamp(job.created_at)),
        Cell::new(job.initiators_summary()),
        Cell::new(job.tasks_summary()),
    ]
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render<T>(&mut self, value: &T) -> Result<(), RenderError>
    where
        T: Serialize + Any,
    {
        let Some(shape) = Shape::classify(value) else {
            let err = RenderError::unsupported::<T>();
            warn!(error = %err, "table renderer refused value");
            return Err(err);
        };

        let output = self.format(shape);
        self.sink.write_all(output.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeview_testing::fixtures;
    use nodeview_testing::sinks::FailingSink;

    fn render_to_string<T: Serialize + Any>(value: &T) -> String {
        let mut renderer = TableRenderer::new(Vec::new());
        renderer.render(value).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_bridge_list_hides_tokens() {
        let bridge = fixtures::new_bridge("hapax", "http://hap.ax");
        let out = render_to_string(&vec![bridge.clone()]);

        assert!(out.contains("hapax"));
        assert!(out.contains("http://hap.ax/"));
        assert!(!out.contains(&bridge.incoming_token));
        assert!(!out.contains(&bridge.outgoing_token));
    }

    #[test]
    fn test_bridge_list_does_not_wrap_urls() {
        let url = "https://adapter.example.com/v1/some/deeply/nested/bridge/endpoint";
        let bridges = vec![fixtures::new_bridge("hapax", url)];
        let renderer = TableRenderer::with_options(
            Vec::new(),
            FormatOptions {
                enable_color: true,
                ..FormatOptions::default()
            },
        );

        let mut table = renderer.bridge_table(&bridges);
        table.set_width(30);
        let out = table.to_string();
        assert!(out.contains(url), "URL was split:\n{}", out);
    }

    #[test]
    fn test_bridge_detail_shows_tokens() {
        let bridge = fixtures::new_bridge("hapax", "http://hap.ax");
        let out = render_to_string(&bridge);

        assert!(out.contains("hapax"));
        assert!(out.contains("http://hap.ax/"));
        assert!(out.contains(&bridge.incoming_token));
        assert!(out.contains(&bridge.outgoing_token));
    }

    #[test]
    fn test_job_detail_without_runs() {
        let (job, _) = fixtures::new_job_with_web_initiator();
        let detail = JobSpecWithRuns::new(job.clone(), vec![]);
        let out = render_to_string(&detail);

        assert!(out.contains(&job.id));
        assert!(out.contains("Runs (0)"));
        assert!(out.contains("Status"));
    }

    #[test]
    fn test_job_detail_with_run() {
        let (job, initiator) = fixtures::new_job_with_web_initiator();
        let run = job.new_run(&initiator);
        let detail = JobSpecWithRuns::new(job, vec![run.clone()]);
        let out = render_to_string(&detail);

        assert!(out.contains("Runs (1)"));
        assert!(out.contains(&run.id));
        assert!(out.contains("unstarted"));
    }

    #[test]
    fn test_job_list() {
        let jobs = vec![fixtures::sample_job(1), fixtures::sample_job(2)];
        let out = render_to_string(&jobs);

        assert!(out.contains(&jobs[0].id));
        assert!(out.contains(&jobs[1].id));
        assert!(out.contains("web, cron(0 */6 * * *)"));
        assert!(out.contains("httpget, jsonparse, ethtx"));
    }

    #[test]
    fn test_unknown_shape_is_rejected_without_writing() {
        #[derive(Serialize)]
        struct Anonymous {
            name: String,
        }

        let mut renderer = TableRenderer::new(Vec::new());
        let err = renderer
            .render(&Anonymous {
                name: "Romeo".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, RenderError::UnsupportedShape { .. }));
        assert!(err.to_string().contains("Anonymous"));
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut renderer = TableRenderer::new(FailingSink::after(10));
        let err = renderer.render(&vec![fixtures::sample_job(1)]).unwrap_err();
        assert!(matches!(err, RenderError::Sink(_)));
    }

    #[test]
    fn test_no_escape_codes_without_color() {
        let out = render_to_string(&fixtures::sample_job_with_runs(3));
        assert!(!out.contains('\u{1b}'));
    }
}
