use crate::{
    ListArgs,
    config::Config,
    store::{ItemKind, Store},
};

pub async fn run(args: &ListArgs) -> Result<(), anyhow::Error> {
    let (config, base) = Config::load_from_arg(args.config_file.as_deref()).await?;
    let store = Store::new(config.store.dir_path(&base));

    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => vec![ItemKind::Template, ItemKind::Data],
    };

    for kind in kinds {
        let names = store.list(kind).await?;
        if names.is_empty() {
            println!("No saved {kind} files.");
            continue;
        }
        println!("Saved {kind} files:");
        for name in names {
            println!("  {name}");
        }
    }

    Ok(())
}
