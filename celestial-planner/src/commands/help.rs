use super::CommandOutput;
use crate::error::Result;

/// `(name, usage, description)` for every command, in listing order.
const COMMANDS: &[(&str, &str, &str)] = &[
    ("help", "help [command]", "Show help for all commands or one command"),
    (
        "ctime",
        "ctime [year] [month] [day] [hour] [minute] [second]  |  ctime YYYY-MM-DDTHH:MM:SS",
        "Set the observation time (UTC)",
    ),
    (
        "cra",
        "cra [hours] [minutes] [seconds]  |  cra decimal_degrees",
        "Set the right ascension",
    ),
    (
        "cdec",
        "cdec [degrees] [arc-minutes] [arc-seconds]  |  cdec decimal_degrees",
        "Set the declination",
    ),
    (
        "clon",
        "clon [degrees] [arc-minutes] [arc-seconds]  |  clon decimal_degrees",
        "Set the observer longitude (east positive)",
    ),
    (
        "clat",
        "clat [degrees] [arc-minutes] [arc-seconds]  |  clat decimal_degrees",
        "Set the observer latitude",
    ),
    ("rloc", "rloc", "Reset the location to the Remeis observatory"),
    ("rtime", "rtime", "Follow the current time again"),
    (
        "ex",
        "ex [config_name]",
        "Compute azimuth and elevation for the current or a saved configuration",
    ),
    ("ls", "ls", "Show the current configuration"),
    (
        "save",
        "save [config_name]",
        "Save the current configuration (default name configN)",
    ),
    ("load", "load config_name", "Make a saved configuration current"),
    ("lse", "lse", "List saved configurations"),
    ("rm", "rm config_name", "Delete a saved configuration"),
    ("co", "co", "Toggle sexagesimal and decimal output"),
    (
        "plot",
        "plot config_name [length] [time_step] [-p] [-v] [-l] [-s FILE]",
        "Plot azimuth and elevation over time (hours; defaults 24 and 1)\n  \
         -p polar plot, -v list every sample, -l join polar points, -s write SVG",
    ),
    (
        "av",
        "av [-a]",
        "Scan showpiece objects for good visibility tonight (-a lists every object)",
    ),
    ("sr", "sr name", "Look up an object and show its track for the night"),
];

pub fn run(topic: Option<&str>) -> Result<CommandOutput> {
    let text = match topic {
        Some(cmd) => command_help(cmd),
        None => general_help(),
    };
    Ok(CommandOutput::Text(text))
}

/// Usage line of a command, or an empty string for unknown names.
pub fn usage(cmd: &str) -> &'static str {
    lookup(cmd).map_or("", |(_, usage, _)| *usage)
}

fn lookup(cmd: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let cmd = cmd.to_lowercase();
    COMMANDS.iter().find(|(name, _, _)| *name == cmd)
}

fn command_help(cmd: &str) -> String {
    match lookup(cmd) {
        Some((_, usage, description)) => format!("{usage}\n  {description}"),
        None => format!("Unknown command: {cmd}"),
    }
}

fn general_help() -> String {
    let mut text = String::from("Commands:\n");
    for (name, _, description) in COMMANDS {
        let summary = description.lines().next().unwrap_or_default();
        text.push_str(&format!("  {name:<7}{summary}\n"));
    }
    text.push_str("\nhelp <command> shows usage. Names with spaces go in double quotes.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::COMMAND_NAMES;

    #[test]
    fn every_command_has_help() {
        for name in COMMAND_NAMES {
            assert!(!usage(name).is_empty(), "{name}");
            assert!(general_help().contains(&format!("  {name} ")), "{name}");
        }
    }

    #[test]
    fn command_help_is_case_insensitive() {
        assert!(command_help("PLOT").starts_with("plot config_name"));
        assert_eq!(command_help("nope"), "Unknown command: nope");
    }
}
