use anyhow::Result;
use clap::Parser;
use ratecutter::cli::{Cli, Commands};
use ratecutter::commands::{calculate, extract, init, submit};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            volume,
            fees,
            business_type,
            avg_ticket,
            format,
            output,
            config,
            plain,
        } => calculate::handle_calculate(calculate::CalculateConfig {
            volume,
            fees,
            business_type,
            avg_ticket,
            format: format.into(),
            output,
            config,
            plain,
        }),
        Commands::Submit {
            email,
            name,
            phone,
            business_name,
            volume,
            fees,
            business_type,
            avg_ticket,
            store_url,
            config,
        } => submit::handle_submit(submit::SubmitConfig {
            email,
            name,
            phone,
            business_name,
            volume,
            fees,
            business_type,
            avg_ticket,
            store_url,
            config,
        }),
        Commands::Extract { path, format } => extract::handle_extract(path, format.into()),
        Commands::Init { force } => init::init_config(force),
    }
}
