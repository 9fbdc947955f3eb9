use console::style;
use mongo_dao_gen::{DryRunWriter, Generator, Outcome, Report};

pub(crate) fn heading(generator: &Generator, dry_run: bool) {
    let config = generator.config();
    let title = if dry_run {
        "Generating DAOs (dry run)"
    } else {
        "Generating DAOs"
    };

    println!();
    println!("  {}", style(title).cyan().bold().underlined());
    println!(
        "  {}",
        style(format!("Output directory: {}", config.dao_dir.display())).dim()
    );
    println!();
}

pub(crate) fn report(report: &Report) {
    for entry in &report.entries {
        match entry.outcome {
            Outcome::Written => println!(
                "  {} {} {}",
                style("✓").green().bold(),
                entry.path.display(),
                style(format!("({})", entry.kind.description())).dim()
            ),
            Outcome::Skipped => println!(
                "  {} {} {}",
                style("-").yellow().bold(),
                entry.path.display(),
                style("(exists, skipped)").dim()
            ),
        }
    }

    println!();
    println!(
        "  {}",
        style(format!(
            "{} file(s) written, {} skipped",
            report.written(),
            report.skipped()
        ))
        .green()
        .bold()
    );
    println!();
}

pub(crate) fn dry_run(writer: &DryRunWriter) {
    if writer.files().is_empty() {
        return;
    }

    println!("  {}", style("Nothing was written to disk. Would write:").yellow());
    for (path, contents) in writer.files() {
        println!(
            "    {} {}",
            path.display(),
            style(format!("({} lines)", contents.lines().count())).dim()
        );
    }
    println!();
}
