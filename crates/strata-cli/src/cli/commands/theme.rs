use crate::cli::args::ThemeArgs;
use crate::exit_codes::SUCCESS;
use strata_core::corpus::identifier;
use strata_core::theme::{dominant_trigger, DEFAULT_EMOTION};

pub fn run(args: ThemeArgs) -> i32 {
    for name in &args.names {
        let name = identifier(name, &args.extension);
        println!("{name:30} → {}", describe(name));
    }
    SUCCESS
}

/// `label (trigger)`, or `label (default)` when nothing matched.
pub fn describe(name: &str) -> String {
    match dominant_trigger(name) {
        Some((trigger, emotion)) => format!("{emotion} ({trigger})"),
        None => format!("{DEFAULT_EMOTION} (default)"),
    }
}
