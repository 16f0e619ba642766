//! Plater's main application entry point and orchestration logic.
//! Resolves the token table and feature flags from command-line arguments,
//! builds the inclusion plan and hands everything to the materializer.

use plater::{
    cli::{get_args, Args},
    constants::IGNORABLE_ROOT_ITEMS,
    error::{default_error_handler, Error, Result},
    fragments::{builtin_fragments, select, FeatureFlags},
    logger::init_logger,
    processor::Materializer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the token table from flags and the local clock
/// 2. Selects the inclusion plan from the enabled features
/// 3. Ensures the output directory exists
/// 4. Materializes the template into it
fn run(args: Args) -> Result<()> {
    let tokens = args.resolve_tokens();
    let flags: FeatureFlags = args.features.iter().map(String::as_str).collect();
    let plan = select(&flags, &builtin_fragments());

    std::fs::create_dir_all(&args.output_dir)
        .map_err(Error::unwritable(&args.output_dir))?;

    let processor = Materializer::new(
        &args.template_dir,
        &args.output_dir,
        &tokens,
        &plan,
        &IGNORABLE_ROOT_ITEMS,
    );
    processor.materialize()?;

    println!("Project '{}' materialized in {}.", args.name, args.output_dir.display());
    Ok(())
}
