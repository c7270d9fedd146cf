//! Ends In One
//!
//! This example parses the binary "ends in 1" automaton from its textual
//! description and classifies a few inputs.
//!
//! Key concepts:
//! - Best-effort parsing with warnings for skipped lines
//! - Yes/no acceptance with `accepts`
//! - Recorded runs with `trace`
//!
//! Run with: cargo run --example ends_in_one

use dfa_notation::notation::parse;
use dfa_notation::Verdict;

const DESCRIPTION: &str = "\
States: q0, q1
Alphabet: 0, 1
Start state: q0
Accept states: q1
Transitions:
q0, 0 -> q0
q0, 1 -> q1
q1, 0 -> q1
q1, 1 -> q1
";

fn main() {
    println!("=== Ends In One Example ===\n");

    let parsed = parse(DESCRIPTION);
    for warning in &parsed.warnings {
        println!("Skipped {warning}");
    }
    let dfa = parsed.automaton;

    println!("\nStates: {}", dfa.state_count());
    println!("Transitions: {}", dfa.transition_count());

    for input in ["", "0", "1", "01", "10", "000", "2"] {
        let trace = dfa.trace(input);
        let path: Vec<&str> = trace
            .path()
            .into_iter()
            .filter_map(|id| dfa.state(id).map(|s| s.name()))
            .collect();
        match trace.verdict() {
            Verdict::Accepted => println!("{input:?}: accepted via {}", path.join(" -> ")),
            Verdict::Rejected(reason) => println!("{input:?}: rejected ({reason})"),
        }
    }

    println!("\n=== Example Complete ===");
}
