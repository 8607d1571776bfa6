//! Apply the Bug #11 session-auth fixes to a web application checkout.
//!
//! With no arguments, patches `server/routes.ts` and `client/src/lib/api.ts`
//! relative to the current directory.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use authfix::apply::apply_in_root;
use authfix::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "authfix",
    version,
    about = "Patch server routes and client API helper for session-based auth"
)]
struct Cli {
    /// Project root that target paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Config file (defaults to `<root>/authfix.toml`; optional).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    apply_in_root(&cli.root, cli.config.as_deref(), &mut stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_current_dir() {
        let cli = Cli::parse_from(["authfix"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_root_and_config() {
        let cli = Cli::parse_from(["authfix", "--root", "app", "--config", "fix.toml"]);
        assert_eq!(cli.root, PathBuf::from("app"));
        assert_eq!(cli.config, Some(PathBuf::from("fix.toml")));
    }
}
