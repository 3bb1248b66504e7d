//! Main application orchestrator.
//!
//! Coordinates the entire flattening process:
//! 1. Initializes logging.
//! 2. Validates the input tree file.
//! 3. Parses the tree file into a node table.
//! 4. Flattens the tree from the requested root, streaming each rule to the
//!    output file as the traversal yields it (rules are never collected
//!    in memory first).
//! 5. Provides summary messages to the user.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::path::Flattener;
use crate::tree;
use std::io::Write; // For BufWriter::flush and writeln!

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if any unrecoverable error occurs during the process:
/// an unreadable or malformed input tree, a dangling node reference hit
/// during traversal, or an I/O failure on the output file.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("flatten.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (flatten.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to flatten.log");
        }
    }

    // Validate the input tree file. This is an early check.
    file_handler::validate_input_file(&cli.input_path, quiet_mode)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Processing File: {}", cli.input_path.display());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    // Parse the tree file into a node table.
    verbose_println!(quiet_mode, "\n[STEP 1] Parsing tree file...");
    let nodes = match tree::parse_file(&cli.input_path) {
        Ok(nodes) => nodes,
        Err(e) => {
            verbose_eprintln!(quiet_mode, "[ERROR] During parsing: {}", e);
            flush_log_or_warn();
            return Err(e.into());
        }
    };
    verbose_println!(quiet_mode, "   => Parsed {} node(s).", nodes.len());

    if nodes.is_empty() {
        if quiet_mode {
            println!("Done. No nodes found in {}.", cli.input_path.display());
        } else {
            verbose_println!(
                quiet_mode,
                "   => Nothing to flatten; no output file written."
            );
            flush_log_or_warn();
        }
        return Ok(());
    }

    // Flatten the tree, streaming each rule straight to the output writer.
    // The traversal is lazy; a failure mid-stream leaves a partial file
    // behind, but the error exit makes that unmistakable.
    verbose_println!(
        quiet_mode,
        "\n[STEP 2] Flattening tree from root {}...",
        cli.root_id
    );
    let mut writer = file_handler::init_output_writer(&cli.output_path)?;
    let flattener = Flattener::new(&nodes);
    let mut rule_count: usize = 0;
    for rule in flattener.flatten(cli.root_id) {
        let rule = rule.map_err(|e| {
            verbose_eprintln!(quiet_mode, "[ERROR] During flattening: {}", e);
            flush_log_or_warn();
            e
        })?;
        writeln!(&mut writer, "{}", rule)?;
        rule_count += 1;
    }
    writer.flush()?;
    verbose_println!(
        quiet_mode,
        "   => Wrote {} rule(s) to {}.",
        rule_count,
        cli.output_path.display()
    );

    // Final flush of flatten.log before exiting successfully.
    if !quiet_mode {
        flush_log_or_warn();
    }

    if quiet_mode {
        println!("Done.");
    } else {
        println!(
            "Flattening finished: {} rule(s) written to {}. See 'flatten.log' for verbose output.",
            rule_count,
            cli.output_path.display()
        );
    }

    Ok(())
}

/// Flushes the verbose log, downgrading a flush failure to a stderr warning.
fn flush_log_or_warn() {
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to flush flatten.log: {}", e);
    }
}
