use super::working_file;
use crate::{SaveArgs, config::Config, store::Store};

pub async fn run(args: &SaveArgs) -> Result<(), anyhow::Error> {
    let (config, base) = Config::load_from_arg(args.config_file.as_deref()).await?;
    let store = Store::new(config.store.dir_path(&base));

    let source = working_file(&config, &base, args.kind);
    let contents = tokio::fs::read_to_string(&source)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", source.display()))?;

    let path = store.put(args.kind, &args.name, &contents).await?;
    println!(
        "Saved {source} as '{name}' ({path})",
        source = source.display(),
        name = args.name,
        path = path.display()
    );

    Ok(())
}
