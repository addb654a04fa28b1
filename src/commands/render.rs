use crate::{
    RenderArgs,
    config::Config,
    preview::render_page,
    render::{Pipeline, parse_record},
};

pub async fn run(args: &RenderArgs) -> Result<(), anyhow::Error> {
    let (config, base) = Config::load_from_arg(args.config_file.as_deref()).await?;

    let template_path = args
        .template
        .clone()
        .unwrap_or_else(|| config.files.template_path(&base));
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| config.files.data_path(&base));

    let template = tokio::fs::read_to_string(&template_path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", template_path.display()))?;

    // The data file is optional; the template still renders without one.
    let data = match tokio::fs::read_to_string(&data_path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(anyhow::anyhow!(
                "failed to read {}: {e}",
                data_path.display()
            ));
        }
    };

    let record = match parse_record(&data) {
        Ok(record) => Some(record),
        Err(e) => {
            eprintln!("Data error: {e}");
            None
        }
    };

    let pipeline = Pipeline::new(config.markdown.clone());
    let mut output = pipeline.render(record.as_ref(), &template)?;

    if args.page {
        let title = template_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("mdfill");
        output = render_page(title, &output, false)?;
    }

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &output).await?;
            println!("Wrote {path}", path = path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}
