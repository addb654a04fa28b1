use std::path::Path;

use crate::{
    InitArgs,
    config::{Config, DEFAULT_CONFIG_FILE},
};

/// Starter template: a receipt that exercises interpolation, expressions,
/// fallbacks, and the per-element repeat context.
const SAMPLE_TEMPLATE: &str = r#"## Receipt

From: {{ from }}
Date: {{ date }}

No. {{ loop.index }}: {{ quantity }} x {{ price }} = $ {{ quantity * price }}

Paid by {{ paidby or "cash" }}. Thank you!
"#;

const SAMPLE_DATA: &str = r#"from: Julie Lights
date: 3/14/2012
price: 32
loop:
  - quantity: 2
  - quantity: 1
    paidby: bitcoin
"#;

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    println!("Initializing project in {}", path.display());

    let config = Config::default();
    let config_text = serde_yaml::to_string(&config)?;
    write_new(&path.join(DEFAULT_CONFIG_FILE), &config_text).await?;
    write_new(&path.join(&config.files.template), SAMPLE_TEMPLATE).await?;
    write_new(&path.join(&config.files.data), SAMPLE_DATA).await?;

    Ok(())
}

async fn write_new(path: &Path, contents: &str) -> Result<(), anyhow::Error> {
    if path.exists() {
        println!("Keeping existing {path}", path = path.display());
        return Ok(());
    }
    tokio::fs::write(path, contents).await?;
    println!("Created {path}", path = path.display());
    Ok(())
}
