//! Interactive observation planner.
//!
//! Keeps a current scenario (time, target, observer) plus a collection of
//! named configurations that is loaded from and saved to a JSON file.

use celestial_planner::commands::{self, objects, sweep, CommandOutput, ShellCommand};
use celestial_planner::session::Session;
use celestial_planner::store::{JsonStore, DEFAULT_STORE_FILE};
use celestial_planner::visibility::ScannedObject;
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan observations: horizontal coordinates, night sweeps and visibility scans")]
#[command(version)]
struct Cli {
    /// JSON file holding the named configurations
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    store: PathBuf,

    /// Start from the built-in examples and never touch the store file
    #[arg(long)]
    debug: bool,

    /// Evaluate one configuration, print the result and exit
    #[arg(short, long, value_name = "NAME")]
    execute: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(cli: &Cli) {
    let level = match (cli.debug, cli.verbose) {
        (true, _) | (_, 2..) => tracing::Level::DEBUG,
        (false, 1) => tracing::Level::INFO,
        (false, _) => tracing::Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".celestial_planner_history")
}

/// Arguments of these commands are configuration names.
const NAME_COMMANDS: &[&str] = &["ex", "load", "rm", "plot"];

struct PlannerHelper {
    commands: Vec<String>,
    configurations: Vec<String>,
}

impl PlannerHelper {
    fn new() -> Self {
        Self {
            commands: commands::COMMAND_NAMES
                .iter()
                .chain(&["quit", "exit"])
                .map(|s| s.to_string())
                .collect(),
            configurations: Vec::new(),
        }
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a String>, prefix: &str) -> Vec<Pair> {
    candidates
        .filter(|c| c.starts_with(prefix))
        .map(|c| Pair {
            display: c.clone(),
            replacement: c.clone(),
        })
        .collect()
}

impl Completer for PlannerHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        let words: Vec<&str> = up_to.split_whitespace().collect();
        let start = up_to.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let partial = if up_to.ends_with(' ') {
            ""
        } else {
            words.last().copied().unwrap_or("")
        };

        match words.as_slice() {
            [] => Ok((start, pairs(self.commands.iter(), ""))),
            [_] if !up_to.ends_with(' ') => {
                Ok((start, pairs(self.commands.iter(), &partial.to_lowercase())))
            }
            [cmd, ..] if NAME_COMMANDS.contains(&cmd.to_lowercase().as_str()) => {
                Ok((start, pairs(self.configurations.iter(), partial)))
            }
            _ => Ok((pos, vec![])),
        }
    }
}

impl Hinter for PlannerHelper {
    type Hint = String;
}
impl Highlighter for PlannerHelper {}
impl Validator for PlannerHelper {}
impl Helper for PlannerHelper {}

type PlannerEditor = Editor<PlannerHelper, DefaultHistory>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let store = JsonStore::new(&cli.store);
    let mut session = Session::new()?;
    let store_writable = !cli.debug && session.load_store_or_keep(&store);

    if let Some(name) = &cli.execute {
        let pos = session.execute_named(name)?;
        println!("{}", session.format_solution(&pos));
        return Ok(());
    }

    println!("celestial-planner v{}", env!("CARGO_PKG_VERSION"));
    println!("Type help for commands, Ctrl-D to exit\n");

    let mut rl: PlannerEditor = Editor::with_config(
        rustyline::Config::builder()
            .auto_add_history(true)
            .build(),
    )?;
    rl.set_helper(Some(PlannerHelper::new()));

    let history = history_path();
    let _ = rl.load_history(&history);

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.configurations = session.configurations.keys().cloned().collect();
        }

        match rl.readline(">> ") {
            Ok(line) => {
                let line = line.trim();
                if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                if let Err(e) = run_line(&mut rl, &mut session, line) {
                    eprintln!("Error: {e}");
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    if store_writable {
        session.save_store(&store)?;
        println!(
            "Saved {} configurations to {}",
            session.configurations.len(),
            store.path().display()
        );
    } else if !cli.debug {
        println!("Not saving: {} could not be read", store.path().display());
    }
    let _ = rl.save_history(&history);
    println!("Bye!");
    Ok(())
}

fn run_line(
    rl: &mut PlannerEditor,
    session: &mut Session,
    line: &str,
) -> celestial_planner::Result<()> {
    let Some(command) = ShellCommand::parse(line)? else {
        return Ok(());
    };

    if let ShellCommand::Remove(name) = &command {
        session.get(name)?;
        let question = format!("Are you sure you want to delete configuration {name}? (y/n) ");
        if !confirm(rl, &question) {
            println!("Deletion cancelled");
            return Ok(());
        }
    }

    match commands::execute(session, command)? {
        CommandOutput::Objects(found) => page_objects(rl, session, &found)?,
        output => print_output(output),
    }
    Ok(())
}

fn confirm(rl: &mut PlannerEditor, question: &str) -> bool {
    matches!(rl.readline(question), Ok(answer) if answer.trim().eq_ignore_ascii_case("y"))
}

/// Lists scan results, offering the full-night chart of each in turn.
fn page_objects(
    rl: &mut PlannerEditor,
    session: &Session,
    found: &[ScannedObject],
) -> celestial_planner::Result<()> {
    println!("Objects with good visibility:");
    for object in found {
        println!("  {}", objects::summary_line(object));
    }
    for object in found {
        if confirm(rl, &format!("Show plot for {}? (y/n) ", object.name)) {
            let report = sweep::object_report(
                &object.name,
                &object.configuration,
                &session.display,
                &session.criteria,
            )?;
            println!("{report}");
        }
    }
    Ok(())
}

fn print_output(output: CommandOutput) {
    match output {
        CommandOutput::Text(s) => println!("{s}"),
        CommandOutput::Table { headers, rows } => print_table(&headers, &rows),
        CommandOutput::Objects(found) => {
            for object in &found {
                println!("  {}", objects::summary_line(object));
            }
        }
        CommandOutput::None => {}
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let hw = headers[i].chars().count();
            let rw = rows
                .iter()
                .map(|r| r.get(i).map_or(0, |s| s.chars().count()))
                .max()
                .unwrap_or(0);
            hw.max(rw)
        })
        .collect();

    for (i, h) in headers.iter().enumerate() {
        print!("{:<width$}  ", h, width = widths[i]);
    }
    println!();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:<width$}  ", cell, width = widths[i]);
        }
        println!();
    }
}
