use super::working_file;
use crate::{LoadArgs, config::Config, store::Store};

pub async fn run(args: &LoadArgs) -> Result<(), anyhow::Error> {
    let (config, base) = Config::load_from_arg(args.config_file.as_deref()).await?;
    let store = Store::new(config.store.dir_path(&base));

    let contents = store.get(args.kind, &args.name).await?;
    let target = working_file(&config, &base, args.kind);
    tokio::fs::write(&target, contents).await?;
    println!(
        "Loaded '{name}' into {target}",
        name = args.name,
        target = target.display()
    );

    Ok(())
}
