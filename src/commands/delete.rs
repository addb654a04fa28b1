use crate::{DeleteArgs, config::Config, store::Store};

pub async fn run(args: &DeleteArgs) -> Result<(), anyhow::Error> {
    if !args.yes {
        return Err(anyhow::anyhow!(
            "refusing to delete '{name}' without --yes",
            name = args.name
        ));
    }

    let (config, base) = Config::load_from_arg(args.config_file.as_deref()).await?;
    let store = Store::new(config.store.dir_path(&base));

    let path = store.delete(args.kind, &args.name).await?;
    println!("Deleted {path}", path = path.display());

    Ok(())
}
