use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

use coursedb_core::{
    export, report,
    report::{Query, SortKey},
    sample, CatalogConfig, Category, Course, CourseStore,
};

mod input;
mod menu;
mod render;

#[derive(Parser)]
#[command(name = "coursedb", version, about = "Course catalog over a fixed-record data file")]
struct Cli {
    /// JSON settings file (data_file, export_file, thresholds)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file, overrides the config
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[arg(long, global = true)]
    export_file: Option<PathBuf>,

    /// Economic/Standard cutoff for this session
    #[arg(long, global = true, value_parser = input::non_negative)]
    low: Option<f64>,

    /// Standard/Premium cutoff for this session
    #[arg(long, global = true, value_parser = input::non_negative)]
    high: Option<f64>,

    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(ValueEnum, Clone, Copy)]
enum CliCategory {
    Economic,
    Standard,
    Premium,
}

#[derive(ValueEnum, Clone, Copy)]
enum CliSortKey {
    Name,
    Cost,
    Hours,
}

#[derive(Subcommand)]
enum Cmd {
    /// Create the data file if it is missing
    Init,

    Add {
        #[arg(long, value_parser = clap::value_parser!(i32).range(1..))]
        code: i32,
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
        hours: i32,
        #[arg(long, value_parser = input::non_negative)]
        cost: f64,
    },

    Show {
        #[arg(long)]
        code: i32,
    },

    /// Alphabetical listing
    List,

    Average,

    CountAbove {
        #[arg(long, value_parser = input::non_negative)]
        threshold: f64,
    },

    Classify,

    Extremes,

    /// Overwrite the cost of an existing course in place
    SetCost {
        #[arg(long)]
        code: i32,
        #[arg(long, value_parser = input::non_negative)]
        cost: f64,
    },

    Export {
        /// Defaults to the configured export file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Append the built-in sample catalog (existing codes are skipped)
    Seed,

    Search {
        /// Matches the name (case-insensitive) or the code
        #[arg(long)]
        query: Option<String>,
        #[arg(long, value_enum)]
        category: Vec<CliCategory>,
        #[arg(long, value_parser = input::non_negative)]
        min: Option<f64>,
        #[arg(long, value_parser = input::non_negative)]
        max: Option<f64>,
        #[arg(long, value_enum, default_value_t = CliSortKey::Name)]
        sort: CliSortKey,
        #[arg(long, default_value_t = false)]
        desc: bool,
    },

    Menu,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut cfg = match &cli.config {
        Some(p) => CatalogConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(f) = &cli.file {
        cfg.data_file = f.clone();
    }
    if let Some(f) = &cli.export_file {
        cfg.export_file = f.clone();
    }
    cfg.override_thresholds(cli.low, cli.high)?;
    Ok(cfg)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let cfg = load_config(&cli)?;
    let store = CourseStore::open(&cfg.data_file)
        .with_context(|| format!("opening {}", cfg.data_file.display()))?;
    let t = cfg.thresholds;

    match cli.cmd.unwrap_or(Cmd::Menu) {
        Cmd::Init => {
            println!("init: {} ({} records)", store.path().display(), store.record_count()?);
        }
        Cmd::Add { code, name, hours, cost } => {
            if store.exists(code)? {
                bail!("a course with code {code} already exists");
            }
            let course = Course::new(code, &name, hours, cost);
            store.append(&course)?;
            println!("course added: [{}] {}", course.code, course.name);
        }
        Cmd::Show { code } => match store.find_by_code(code)? {
            Some((pos, course)) => {
                println!("position #{pos}");
                println!("{}", render::course_detail(&course, &t));
            }
            None => println!("course {code} not found"),
        },
        Cmd::List => {
            let sorted = report::sorted_by_name(store.read_all()?);
            if sorted.is_empty() {
                println!("{}", render::NO_COURSES);
            }
            print!("{}", render::listing(&sorted, &t));
        }
        Cmd::Average => match report::average_hours(&store.read_all()?) {
            Some(avg) => println!("average hours: {avg:.2}"),
            None => println!("{}", render::NO_COURSES),
        },
        Cmd::CountAbove { threshold } => {
            let n = report::count_above(&store.read_all()?, threshold);
            println!("{n} course(s) cost more than ${threshold:.2}");
        }
        Cmd::Classify => {
            let cls = report::classify(&store.read_all()?, &t);
            print!("{}", render::classification(&cls, &t));
        }
        Cmd::Extremes => match report::extremes(&store.read_all()?) {
            Some(ex) => print!("{}", render::extremes(&ex)),
            None => println!("{}", render::NO_COURSES),
        },
        Cmd::SetCost { code, cost } => {
            let Some((pos, _)) = store.find_by_code(code)? else {
                bail!("course {code} not found");
            };
            store.update_cost_checked(pos, code, cost)?;
            println!("cost updated: [{code}] ${cost:.2} at position #{pos}");
        }
        Cmd::Export { out } => {
            let out = out.unwrap_or(cfg.export_file);
            let n = export::export_json(&store.read_all()?, &out)
                .with_context(|| format!("exporting to {}", out.display()))?;
            println!("exported {n} course(s) to {}", out.display());
        }
        Cmd::Seed => {
            let n = sample::load_sample(&store)?;
            println!("seeded {n} sample course(s)");
        }
        Cmd::Search { query, category, min, max, sort, desc } => {
            let q = Query {
                text: query,
                categories: category
                    .into_iter()
                    .map(|c| match c {
                        CliCategory::Economic => Category::Economic,
                        CliCategory::Standard => Category::Standard,
                        CliCategory::Premium => Category::Premium,
                    })
                    .collect(),
                min_cost: min,
                max_cost: max,
                sort: match sort {
                    CliSortKey::Name => SortKey::Name,
                    CliSortKey::Cost => SortKey::Cost,
                    CliSortKey::Hours => SortKey::Hours,
                },
                descending: desc,
            };
            let hits = report::search(&store.read_all()?, &q, &t);
            println!("{} result(s)", hits.len());
            print!("{}", render::listing(&hits, &t));
        }
        Cmd::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::Menu::new(store, t, cfg.export_file, stdin.lock(), stdout.lock()).run()?;
        }
    }
    Ok(())
}
