use crate::cli::args::AnalyzeArgs;
use crate::exit_codes::SUCCESS;
use anyhow::Result;
use strata_core::{emoji, run_pipeline, ConfigFile};

use super::summary;

pub fn run(args: AnalyzeArgs) -> Result<i32> {
    let base = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let cfg = base.merge(flag_overrides(&args)).resolve()?;
    tracing::debug!(
        corpus = %cfg.corpus_root.display(),
        output = %cfg.output.display(),
        extension = %cfg.extension,
        top_n = cfg.top_n,
        stamp = cfg.stamp,
        "resolved config"
    );

    if !args.quiet {
        println!(
            "\n🌅 Starting pattern analysis of {}...\n",
            cfg.corpus_root.display()
        );
    }

    let outcome = run_pipeline(&cfg)?;

    if !args.quiet {
        let corpus = outcome.analyzer.corpus();
        print!(
            "{}",
            summary::render(&outcome.report, &emoji::tally(corpus), corpus.skipped())
        );
    }
    println!("\n💾 Analysis saved to: {}", cfg.output.display());
    if !args.quiet {
        print!("{}", summary::KEY_DISCOVERIES);
    }
    Ok(SUCCESS)
}

fn flag_overrides(args: &AnalyzeArgs) -> ConfigFile {
    ConfigFile {
        corpus_root: args.corpus.clone(),
        output: args.output.clone(),
        extension: args.extension.clone(),
        top_n: args.top,
        stamp: args.stamp.then_some(true),
    }
}
