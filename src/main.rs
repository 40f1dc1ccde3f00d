use miette::Result;

/// Main entry point for the looped-list CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    looped_list::run()
}
