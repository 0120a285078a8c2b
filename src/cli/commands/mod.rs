pub mod diag;
pub mod env;
pub mod issues;
pub mod ls;
pub mod scan;
pub mod snitch;

use anyhow::Result;
use std::path::Path;

use crate::cli::{Cli, Command};
use crate::core::config::{Config, CONFIG_FILE_NAME};
use crate::core::dotenv::{self, DOTENV_FILE_NAME};
use crate::core::pattern::Category;
use crate::core::project::Project;
use crate::tracker::{GitLabClient, TrackerConfig};

/// Bootstraps `.env` and `yasp.yml` from the working directory, then runs the command.
pub async fn run(cli: &Cli) -> Result<()> {
    dotenv::load(Path::new(DOTENV_FILE_NAME))?;
    let config = Config::load(Path::new(CONFIG_FILE_NAME))?;
    let project = || Project::resolve(&cli.dir, &cli.ignore, &config);
    let tracker = || TrackerConfig::from_env().map(GitLabClient::new);

    match cli.command {
        Command::Ls => ls::execute(&project()?)?,
        Command::Print => scan::execute(&project()?, &config, Category::Print)?,
        Command::Todo => scan::execute(&project()?, &config, Category::Todo)?,
        Command::Env => env::execute(&config)?,
        Command::Diag => {
            diag::execute(&project()?, &config)?;
        }
        Command::Issues => issues::execute(&tracker()?).await?,
        Command::Snitch => snitch::execute(&project()?, &config, &tracker()?).await?,
    }

    Ok(())
}
