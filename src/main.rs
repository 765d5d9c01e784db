//! gel's main application entry point.
//! Parses command-line arguments, sets up logging and hands off to the
//! compiler; any failure is reported on stderr with exit status 1.

use gel::{
    cli::get_args,
    compiler::run,
    error::default_error_handler,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        default_error_handler(err);
    }
}
