//! `redirmap list` – show all rules.

use redirmap_core::RuleMutator;

pub fn run_list(mutator: &RuleMutator) {
    let rules = mutator.list_all();
    if rules.is_empty() {
        println!("No redirect rules found.");
        return;
    }
    println!("{:<4} {:<40} {}", "#", "HOST", "TARGET");
    for (i, (host, value)) in rules.iter().enumerate() {
        println!("{:<4} {:<40} {}", i + 1, host, value.target().unwrap_or("-"));
    }
}
