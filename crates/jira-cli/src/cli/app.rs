use super::*;
pub(super) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!(command = command_label(&cli.command), "Running command");

    let environment = load_environment(cli.env_file, &cli.profile)?;
    let connection = environment.connection();
    info!(connection = %connection, profile = %cli.profile, "Loaded connection");
    let fetcher = JiraApiFetcher::new(&connection);

    let output = match cli.command {
        Commands::Issues(args) => handle_issues(&fetcher, &environment, args)?,
        Commands::Array(args) => handle_array(&fetcher, args)?,
        Commands::Paginated(args) => handle_paginated(&fetcher, args)?,
    };
    println!("{}", render_output(&output, cli.count)?);
    Ok(())
}

pub(super) fn load_environment(
    env_file: Option<PathBuf>,
    profile: &str,
) -> anyhow::Result<JiraEnvironment> {
    let env_path = match env_file {
        Some(path) => path,
        None => default_env_path()?,
    };
    let env_file = EnvironmentFile::load(&env_path)?;
    Ok(env_file.profile(profile)?.clone())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(super) fn render_output(output: &Value, count: bool) -> anyhow::Result<String> {
    if count {
        let items = match output {
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        };
        return Ok(items.to_string());
    }
    serde_json::to_string_pretty(output).context("serialize output")
}
