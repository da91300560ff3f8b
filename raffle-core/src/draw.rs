use rand::seq::IteratorRandom;
use std::collections::BTreeSet;

/// Uniform random choice over the registrant set. `None` when empty.
pub fn pick_winner(registrants: &BTreeSet<String>) -> Option<&str> {
    let mut rng = rand::thread_rng();
    registrants.iter().choose(&mut rng).map(String::as_str)
}
