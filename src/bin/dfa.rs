use anyhow::{bail, Context, Result};
use clap::{command, Arg, ArgAction, ArgMatches, Command};
use dfa_notation::lint::lint;
use dfa_notation::notation::{parse, write, Parsed};
use dfa_notation::snapshot::Snapshot;
use dfa_notation::{Dfa, StateId, Verdict};
use std::io::Read;
use stillwater::validation::Validation;
use tracing::{debug, warn, Level};

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .help("automaton description file, or - for stdin")
}

fn read_description(path: &str) -> Result<String> {
    if path == "-" {
        debug!("Reading description from stdin");
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("could not read description from stdin")?;
        return Ok(text);
    }
    debug!("Reading description from {:?}", path);
    std::fs::read_to_string(path).with_context(|| format!("could not read {path}"))
}

fn load(matches: &ArgMatches) -> Result<Parsed> {
    let path = matches
        .get_one::<String>("file")
        .context("missing description file")?;
    let parsed = parse(&read_description(path)?);
    for warning in &parsed.warnings {
        warn!("{warning}");
    }
    Ok(parsed)
}

fn state_name(dfa: &Dfa, id: StateId) -> &str {
    dfa.state(id).map_or("?", |s| s.name())
}

fn check(matches: &ArgMatches) -> Result<()> {
    let dfa = load(matches)?.automaton;
    for input in matches.get_many::<String>("input").into_iter().flatten() {
        let verdict = if dfa.accepts(input) {
            "accepted"
        } else {
            "rejected"
        };
        println!("{input:?}: {verdict}");
    }
    Ok(())
}

fn trace(matches: &ArgMatches) -> Result<()> {
    let dfa = load(matches)?.automaton;
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or_default();
    let trace = dfa.trace(input);

    let path: Vec<&str> = trace.path().into_iter().map(|id| state_name(&dfa, id)).collect();
    if !path.is_empty() {
        println!("{}", path.join(" -> "));
    }
    match trace.verdict() {
        Verdict::Accepted => println!("accepted"),
        Verdict::Rejected(rejection) => println!("rejected: {rejection}"),
    }
    Ok(())
}

fn describe(matches: &ArgMatches) -> Result<()> {
    let parsed = load(matches)?;
    print!("{}", write(&parsed.automaton));
    if !parsed.is_clean() {
        println!();
        for warning in &parsed.warnings {
            println!("# skipped {warning}");
        }
    }
    Ok(())
}

fn lint_command(matches: &ArgMatches) -> Result<()> {
    let dfa = load(matches)?.automaton;
    match lint(&dfa) {
        Validation::Success(_) => {
            println!("no issues");
            Ok(())
        }
        Validation::Failure(issues) => {
            for issue in issues.iter() {
                println!("{issue}");
            }
            bail!("{} lint issue(s)", issues.len())
        }
    }
}

fn snapshot(matches: &ArgMatches) -> Result<()> {
    let snapshot = Snapshot::new(load(matches)?.automaton);
    let output = matches.get_one::<String>("output");

    if matches.get_flag("binary") {
        let Some(target) = output else {
            bail!("--binary needs an output file");
        };
        let bytes = snapshot.to_bytes()?;
        std::fs::write(target, bytes).with_context(|| format!("could not write {target}"))?;
        debug!("Wrote binary snapshot {} to {:?}", snapshot.id, target);
        return Ok(());
    }

    let json = snapshot.to_json()?;
    match output {
        None => {
            debug!("No output file specified, using stdout");
            println!("{json}");
        }
        Some(target) => {
            std::fs::write(target, json).with_context(|| format!("could not write {target}"))?;
            debug!("Wrote snapshot {} to {:?}", snapshot.id, target);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = command!()
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .conflicts_with("debug"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Turn on debugging information")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether each input is accepted")
                .arg(file_arg())
                .arg(Arg::new("input").num_args(1..).required(true)),
        )
        .subcommand(
            Command::new("trace")
                .about("Show the states visited on one input")
                .arg(file_arg())
                .arg(Arg::new("input").help("input string, empty when omitted")),
        )
        .subcommand(
            Command::new("describe")
                .about("Print the automaton in canonical form with skipped lines")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("lint")
                .about("Check the automaton for likely mistakes")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Save the automaton as a versioned snapshot")
                .arg(file_arg())
                .arg(Arg::new("output").short('o').long("output"))
                .arg(
                    Arg::new("binary")
                        .long("binary")
                        .help("Write bincode instead of JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand_required(true)
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::TRACE
    } else if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global tracing subscriber")?;

    match matches.subcommand() {
        Some(("check", sub)) => check(sub),
        Some(("trace", sub)) => trace(sub),
        Some(("describe", sub)) => describe(sub),
        Some(("lint", sub)) => lint_command(sub),
        Some(("snapshot", sub)) => snapshot(sub),
        _ => unreachable!(),
    }
}
