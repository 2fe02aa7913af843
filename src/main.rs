//! podferry: Transfer Configuration CLI
//!
//! Runs the interactive wizard and hands the resulting configuration to the
//! transfer engine as a summary, a JSON document, or an exported file.

use anyhow::Result;
use clap::Parser;

use podferry::cli::runner::run_wizard;
use podferry::cli::theme::Theme;
use podferry::cli::wizard::WizardOutcome;
use podferry::cli::{confirm_overwrite, Cli};
use podferry::cluster::{KubectlLister, ResourceLister, StaticLister};
use podferry::report::{display_summary, export_json, write_export};
use podferry::utils::{print_banner, print_cancelled, print_completion, print_saved, print_warning};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }
    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::default()
    };

    // Fail on a bad inventory before taking over the terminal
    let lister: Box<dyn ResourceLister> = match &cli.inventory {
        Some(path) => Box::new(StaticLister::from_file(path)?),
        None => Box::new(KubectlLister::new(cli.kubectl.clone()).with_context(cli.context.clone())),
    };

    let config = match run_wizard(lister, &theme)? {
        WizardOutcome::Completed(config) => config,
        WizardOutcome::Cancelled => {
            print_cancelled();
            return Ok(());
        }
    };

    if cli.json {
        println!("{}", export_json(&config)?);
    } else {
        print_banner(env!("CARGO_PKG_VERSION"));
        display_summary(&config);
    }

    if let Some(output) = &cli.output {
        if output.exists() && !cli.no_confirm && !confirm_overwrite(output)? {
            print_warning("Kept the existing file; configuration not saved");
            return Ok(());
        }
        write_export(&config, output)?;
        if !cli.json {
            print_saved(output);
        }
    }

    if !cli.json {
        print_completion();
    }

    Ok(())
}
