pub mod configs;
pub mod help;
pub mod objects;
pub mod scenario;
pub mod sweep;

use crate::error::{Error, Result};
use crate::session::Session;
use crate::visibility::ScannedObject;
use celestial_time::ParsedDateTime;

pub use scenario::AngleInput;
pub use sweep::PlotRequest;

pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Scan results; the shell decides how to page through them.
    Objects(Vec<ScannedObject>),
    None,
}

/// Every command the shell understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help(Option<String>),
    SetTime(ParsedDateTime),
    SetRa(AngleInput),
    SetDec(AngleInput),
    SetLon(AngleInput),
    SetLat(AngleInput),
    ResetLocation,
    ResetTime,
    Execute(Option<String>),
    Show,
    Save(Option<String>),
    Load(String),
    ListConfigurations,
    Remove(String),
    ToggleOutput,
    Plot(PlotRequest),
    /// `av`, or `av -a` to list every object whatever its verdict.
    Viable { all: bool },
    Search(String),
}

/// Command names, for completion and help.
pub const COMMAND_NAMES: &[&str] = &[
    "help", "ctime", "cra", "cdec", "clon", "clat", "rloc", "rtime", "ex", "ls", "save", "load",
    "lse", "rm", "co", "plot", "av", "sr",
];

impl ShellCommand {
    /// Parses one input line. Blank lines give `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let words = tokenize(line)?;
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let joined = (!args.is_empty()).then(|| args.join(" "));

        let command = match name.to_lowercase().as_str() {
            "help" => match args.as_slice() {
                [] => ShellCommand::Help(None),
                [topic] => ShellCommand::Help(Some(topic.to_string())),
                _ => return Err(usage_error("help")),
            },
            "ctime" => ShellCommand::SetTime(scenario::parse_time_args(&args)?),
            "cra" => ShellCommand::SetRa(scenario::parse_angle_args("cra", &args)?),
            "cdec" => ShellCommand::SetDec(scenario::parse_angle_args("cdec", &args)?),
            "clon" => ShellCommand::SetLon(scenario::parse_angle_args("clon", &args)?),
            "clat" => ShellCommand::SetLat(scenario::parse_angle_args("clat", &args)?),
            "rloc" => no_args("rloc", &args, ShellCommand::ResetLocation)?,
            "rtime" => no_args("rtime", &args, ShellCommand::ResetTime)?,
            "ex" => ShellCommand::Execute(optional_name("ex", joined)?),
            "ls" => no_args("ls", &args, ShellCommand::Show)?,
            "save" => ShellCommand::Save(optional_name("save", joined)?),
            "load" => ShellCommand::Load(require_name("load", joined)?),
            "lse" => no_args("lse", &args, ShellCommand::ListConfigurations)?,
            "rm" => ShellCommand::Remove(require_name("rm", joined)?),
            "co" => no_args("co", &args, ShellCommand::ToggleOutput)?,
            "plot" => ShellCommand::Plot(PlotRequest::parse(&args)?),
            "av" => match args.as_slice() {
                [] => ShellCommand::Viable { all: false },
                ["-a" | "--all"] => ShellCommand::Viable { all: true },
                _ => return Err(usage_error("av")),
            },
            "sr" => ShellCommand::Search(require_name("sr", joined)?),
            _ => {
                return Err(Error::Parse(format!(
                    "unknown command: {name}. Type help for a list of commands"
                )))
            }
        };
        Ok(Some(command))
    }
}

fn usage_error(command: &str) -> Error {
    Error::Parse(format!("usage: {}", help::usage(command)))
}

fn no_args(command: &str, args: &[&str], parsed: ShellCommand) -> Result<ShellCommand> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(usage_error(command))
    }
}

/// A name argument may be absent, but never blank.
fn optional_name(command: &str, name: Option<String>) -> Result<Option<String>> {
    match name {
        Some(name) if name.trim().is_empty() => Err(usage_error(command)),
        name => Ok(name),
    }
}

fn require_name(command: &str, name: Option<String>) -> Result<String> {
    optional_name(command, name)?.ok_or_else(|| usage_error(command))
}

/// Splits on whitespace, keeping `"double quoted"` runs together.
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }
    if in_quotes {
        return Err(Error::Parse("unterminated quote".to_string()));
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}

pub fn execute(session: &mut Session, command: ShellCommand) -> Result<CommandOutput> {
    match command {
        ShellCommand::Help(topic) => help::run(topic.as_deref()),
        ShellCommand::SetTime(time) => scenario::set_time(session, &time),
        ShellCommand::SetRa(input) => scenario::set_ra(session, input),
        ShellCommand::SetDec(input) => scenario::set_dec(session, input),
        ShellCommand::SetLon(input) => scenario::set_lon(session, input),
        ShellCommand::SetLat(input) => scenario::set_lat(session, input),
        ShellCommand::ResetLocation => scenario::reset_location(session),
        ShellCommand::ResetTime => scenario::reset_time(session),
        ShellCommand::Execute(name) => scenario::execute(session, name.as_deref()),
        ShellCommand::Show => scenario::show(session),
        ShellCommand::Save(name) => configs::save(session, name.as_deref()),
        ShellCommand::Load(name) => configs::load(session, &name),
        ShellCommand::ListConfigurations => configs::list(session),
        ShellCommand::Remove(name) => configs::remove(session, &name),
        ShellCommand::ToggleOutput => configs::toggle_output(session),
        ShellCommand::Plot(request) => sweep::plot(session, &request),
        ShellCommand::Viable { all } => objects::viable(session, all),
        ShellCommand::Search(name) => objects::search(session, &name),
    }
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    match ShellCommand::parse(input)? {
        Some(command) => execute(session, command),
        None => Ok(CommandOutput::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn session() -> Session {
        Session::with_catalog(Box::new(StaticCatalog::default())).unwrap()
    }

    #[test]
    fn tokenize_respects_quotes() {
        assert_eq!(
            tokenize(r#"plot "Veil Nebula" 12 0.5 -v"#).unwrap(),
            ["plot", "Veil Nebula", "12", "0.5", "-v"]
        );
        assert_eq!(tokenize("  ls  ").unwrap(), ["ls"]);
        assert_eq!(tokenize(r#"save """#).unwrap(), ["save", ""]);
        assert!(tokenize(r#"load "open"#).is_err());
    }

    #[test]
    fn parse_builds_tagged_commands() {
        assert_eq!(ShellCommand::parse("").unwrap(), None);
        assert_eq!(ShellCommand::parse("LS").unwrap(), Some(ShellCommand::Show));
        assert_eq!(
            ShellCommand::parse("cra 45.5").unwrap(),
            Some(ShellCommand::SetRa(AngleInput::Degrees(45.5)))
        );
        assert_eq!(
            ShellCommand::parse("cdec -29 51 56.74").unwrap(),
            Some(ShellCommand::SetDec(AngleInput::Sexagesimal([-29.0, 51.0, 56.74])))
        );
        assert_eq!(
            ShellCommand::parse("save my night").unwrap(),
            Some(ShellCommand::Save(Some("my night".to_string())))
        );
        assert_eq!(
            ShellCommand::parse("ex").unwrap(),
            Some(ShellCommand::Execute(None))
        );
    }

    #[test]
    fn parse_rejects_missing_names() {
        for line in ["load", "rm", "sr", "plot"] {
            assert!(
                matches!(ShellCommand::parse(line), Err(Error::Parse(_))),
                "{line}"
            );
        }
    }

    #[test]
    fn parse_av_all_flag() {
        assert_eq!(
            ShellCommand::parse("av").unwrap(),
            Some(ShellCommand::Viable { all: false })
        );
        for line in ["av -a", "AV --all"] {
            assert_eq!(
                ShellCommand::parse(line).unwrap(),
                Some(ShellCommand::Viable { all: true }),
                "{line}"
            );
        }
        for line in ["av all", "av -x", "av -a -a"] {
            assert!(matches!(ShellCommand::parse(line), Err(Error::Parse(_))), "{line}");
        }
    }

    #[test]
    fn parse_rejects_blank_names() {
        for line in [r#"save """#, r#"save "  ""#, r#"load """#, r#"rm """#, r#"ex """#] {
            assert!(matches!(ShellCommand::parse(line), Err(Error::Parse(_))), "{line}");
        }
    }

    #[test]
    fn parse_rejects_extra_arguments() {
        for line in ["ls now", "lse all", "co 1", "rloc here", "rtime now", "help ex ls"] {
            assert!(matches!(ShellCommand::parse(line), Err(Error::Parse(_))), "{line}");
        }
    }

    #[test]
    fn dispatch_unknown_command_errors() {
        let mut s = session();
        assert!(matches!(
            dispatch(&mut s, "ZZZNOTACMD"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn dispatch_empty_input_returns_none() {
        let mut s = session();
        assert!(matches!(dispatch(&mut s, "   ").unwrap(), CommandOutput::None));
    }

    #[test]
    fn dispatch_execute_prints_solution() {
        let mut s = session();
        match dispatch(&mut s, "ex config3").unwrap() {
            CommandOutput::Text(text) => {
                assert!(text.starts_with("Era: 205.6840"));
                assert!(text.contains("Azimuth: 190° 48'"));
                assert!(text.contains("Elevation: 9° 30'"));
            }
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn every_command_name_parses() {
        let mut s = session();
        for name in COMMAND_NAMES {
            let line = match *name {
                "ctime" => "ctime 2024 3 13".to_string(),
                "cra" | "cdec" | "clon" | "clat" => format!("{name} 10"),
                "load" | "rm" | "plot" => format!("{name} m57"),
                "sr" => "sr M57".to_string(),
                other => other.to_string(),
            };
            assert!(ShellCommand::parse(&line).unwrap().is_some(), "{line}");
        }
        assert!(dispatch(&mut s, "help").is_ok());
    }
}
