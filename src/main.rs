//! apicrud's main application entry point.
//! Parses command-line arguments, wires the production prompter and
//! generator, and hands control to the processor.

use apicrud::{
    cli::{get_args, Args},
    config::get_layout,
    error::{default_error_handler, Result},
    generator::ShellGenerator,
    logger::init_logger,
    processor::Processor,
    prompt::DialoguerPrompter,
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
/// 1. Loads the project layout (defaults or apicrud.{json,yml,yaml})
/// 2. Wires the dialoguer prompter and the shell generator
/// 3. Runs the generation flow for the requested model
fn run(args: Args) -> Result<()> {
    let layout = get_layout(&args.project_root)?;
    let prompt = DialoguerPrompter::new(args.yes);
    let generator =
        ShellGenerator::new(args.project_root.clone(), layout.generator_command.clone());

    let processor = Processor::new(args.project_root, layout, &prompt, &generator);
    processor.run(args.model)
}
