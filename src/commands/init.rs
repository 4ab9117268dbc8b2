use anyhow::Result;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# RateCutter Configuration

[proposal]
# Rate reduction offered in proposals, in percentage points
reduction = 0.5

[benchmarks]
# Rates below good_below are "good"; rates up to average_max are "average"
good_below = 2.5
average_max = 3.5

[lead_store]
# Insert endpoint for captured leads; submissions fail until this is set
# url = "https://example.com/rest/v1/leads"
# api_key = ""
timeout_secs = 30
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", DEFAULT_CONFIG_FILE);

    Ok(())
}
