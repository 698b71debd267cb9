use crate::cli::{DroughtArgs, Format};
use crate::exit_codes;
use crate::output;
use anyhow::Context;
use harmonic_filter::drought::{self, IndexKind, Query};
use serde::Serialize;

#[derive(Serialize)]
struct Series {
    title: String,
    index: IndexKind,
    weeks: Vec<u32>,
    values: Vec<f64>,
}

pub fn execute(args: DroughtArgs) -> i32 {
    let kind: IndexKind = match args.index.parse() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    match run(kind, &args) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::EXECUTION_ERROR
        }
    }
}

fn run(kind: IndexKind, args: &DroughtArgs) -> anyhow::Result<()> {
    let records = drought::load_records(&args.file)
        .with_context(|| format!("Failed to read '{}'", args.file))?;

    let query = Query {
        year: args.year,
        region: args.region,
        start_week: args.start_week,
        end_week: args.end_week,
    };
    let selected = drought::filter(&records, &query);
    if selected.is_empty() {
        log::warn!("no rows match {:?}", query);
    }

    let title = drought::chart_title(kind, &query);
    if !args.quiet {
        eprintln!("{}", title);
    }

    let text = match args.format {
        Format::Csv => output::to_csv(
            &["week", kind.as_str()],
            selected.iter().map(|r| (r.week, kind.value(r))),
        )?,
        Format::Json => {
            let series = Series {
                title,
                index: kind,
                weeks: selected.iter().map(|r| r.week).collect(),
                values: selected.iter().map(|r| kind.value(r)).collect(),
            };
            output::to_json(&series, args.compact)?
        }
    };
    output::write_output(&text, args.output.as_deref())
}
