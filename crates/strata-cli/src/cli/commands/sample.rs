use crate::cli::args::SampleArgs;
use crate::exit_codes::SUCCESS;
use anyhow::Result;
use strata_core::corpus::identifier;
use strata_core::emoji::extract_emojis;
use strata_core::read_sample;

use super::theme::describe;

pub fn run(args: SampleArgs) -> Result<i32> {
    let content = read_sample(&args.corpus, &args.name, &args.extension)?;
    let stem = identifier(&args.name, &args.extension);

    println!("📜 {stem}\n");
    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }

    let emojis = extract_emojis(&content);
    if emojis.is_empty() {
        println!("\n✨ Emojis: (none)");
    } else {
        println!("\n✨ Emojis: {}", emojis.join(" "));
    }
    println!("🎭 Theme: {}", describe(stem));
    Ok(SUCCESS)
}
