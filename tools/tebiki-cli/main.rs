use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tebiki::prelude::*;
use tracing_subscriber::EnvFilter;

/// Walk through guided setup flows in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the flow JSON files
    #[arg(short, long, default_value = "flows")]
    flows: PathBuf,

    /// Log engine transitions (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available flows
    List {
        /// Group the flows by category
        #[arg(short = 'c', long)]
        by_category: bool,
    },
    /// Search flows by title, description or tag
    Search { query: String },
    /// Validate a single flow file
    Check { path: PathBuf },
    /// Walk through a flow interactively
    Run { flow_id: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check { path } => check_file(&path),
        Command::List { by_category } => list_flows(&load_catalog(&cli.flows), by_category),
        Command::Search { query } => {
            let catalog = load_catalog(&cli.flows);
            print_metadata(&catalog.search(&query));
        }
        Command::Run { flow_id } => {
            let catalog = load_catalog(&cli.flows);
            let graph = catalog.get(&flow_id).cloned().unwrap_or_else(|| {
                exit_with_error(&format!("No valid flow with id '{}'", flow_id))
            });
            run_session(NavigationEngine::new(graph));
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tebiki=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(dir: &Path) -> FlowCatalog {
    let catalog = FlowCatalog::from_dir(dir)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flows: {}", e)));
    for (path, error) in catalog.rejected() {
        eprintln!("Skipped {}: {}", path.display(), error);
    }
    catalog
}

fn check_file(path: &Path) {
    let mut catalog = FlowCatalog::new();
    match catalog.insert_file(path) {
        Ok(graph) => println!(
            "OK: '{}' ({} nodes, {} edges)",
            graph.id(),
            graph.len(),
            graph.edges().len()
        ),
        Err(e) => exit_with_error(&format!("{}: {}", path.display(), e)),
    }
}

fn list_flows(catalog: &FlowCatalog, by_category: bool) {
    if !by_category {
        print_metadata(&catalog.metadata());
        return;
    }
    for (category, flows) in catalog.by_category() {
        println!("{}:", category);
        print_metadata(&flows);
    }
}

fn print_metadata(flows: &[&FlowMetadata]) {
    if flows.is_empty() {
        println!("  (no flows)");
    }
    for flow in flows {
        println!("  {:<20} {} - {}", flow.id, flow.title, flow.description);
    }
}

const HELP: &str = "Commands: <number> choose, b back, t <n> toggle command, \
s <name>=<value> set variable, v variables, c checklist, q quit";

/// Runs one session until the user quits or stdin closes.
fn run_session(mut engine: NavigationEngine) {
    let projector = ChecklistProjector::default();
    println!("--- {} ---", engine.graph().metadata().title);
    println!("{}", HELP);

    let stdin = io::stdin();
    loop {
        let view = match engine.view() {
            Ok(view) => view,
            Err(e) => {
                // Only back navigation is possible from an unresolved node.
                println!("\nError: {}", e);
                if !engine.retreat() {
                    exit_with_error("No earlier step to return to");
                }
                continue;
            }
        };
        println!("\n{}", ViewFormatter::format_view(&view));
        if view.can_retreat {
            println!("  b) Back");
        }

        let Some(line) = prompt(&stdin) else { break };
        match parse_action(&line) {
            Action::Choose(n) => match n.checked_sub(1).and_then(|i| view.transitions.get(i)) {
                Some(t) => {
                    if let Err(e) = engine.advance(&t.target, t.context.as_deref()) {
                        println!("Error: {}", e);
                    }
                }
                None => println!("No option {}", n),
            },
            Action::Back => {
                if !engine.retreat() {
                    println!("Already at the first step");
                }
            }
            Action::Toggle(n) => match n.checked_sub(1) {
                Some(index) => {
                    engine.toggle_command(&view.node_id, index);
                }
                None => println!("Commands are numbered from 1"),
            },
            Action::Set(name, value) => engine.set_variable(name, value),
            Action::Variables => {
                println!("{}", ViewFormatter::format_variables(engine.state().variables()))
            }
            Action::Checklist => println!(
                "{}",
                ViewFormatter::format_checklist(&engine.checklist(&projector))
            ),
            Action::Quit => break,
            Action::Unknown => println!("{}", HELP),
        }
    }
}

enum Action {
    Choose(usize),
    Back,
    Toggle(usize),
    Set(String, String),
    Variables,
    Checklist,
    Quit,
    Unknown,
}

fn parse_action(line: &str) -> Action {
    let line = line.trim();
    if let Ok(n) = line.parse() {
        return Action::Choose(n);
    }
    match line.split_once(' ') {
        Some(("t", n)) => n.trim().parse().map_or(Action::Unknown, Action::Toggle),
        Some(("s", assignment)) => match assignment.split_once('=') {
            Some((name, value)) => Action::Set(name.trim().to_string(), value.trim().to_string()),
            None => Action::Unknown,
        },
        _ => match line {
            "b" => Action::Back,
            "v" => Action::Variables,
            "c" => Action::Checklist,
            "q" => Action::Quit,
            _ => Action::Unknown,
        },
    }
}

fn prompt(stdin: &io::Stdin) -> Option<String> {
    print!("> ");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
