//! CLI entry point for the two-stage 2-D Burg lattice cascade

use burg2d::io::cli::{Cli, Session};
use burg2d::io::logging;
use clap::Parser;

fn main() -> burg2d::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let session = Session::new(cli);
    let result = session.run()?;
    session.export(&result)?;
    Ok(())
}
