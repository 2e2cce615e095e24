use std::path::PathBuf;

use birdfont_buildgen::emit;
use birdfont_buildgen::settings::BuildSettings;

#[derive(clap::Parser)]
#[command(name = "birdfont-buildgen")]
#[command(about = "Generate build-time configuration files for BirdFont")]
struct Cli {
    /// Output format: files or json
    #[arg(short, long, default_value = "files")]
    format: String,

    /// Build root the generated paths are resolved against
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Install path prefix
    #[arg(short, long, default_value = "/usr/local")]
    prefix: String,

    /// Staging destination used during installation
    #[arg(short, long, default_value = "")]
    dest: String,

    /// Compiler later build stages should invoke
    #[arg(long, default_value = "gcc")]
    cc: String,

    /// Override the version string embedded into the constants file
    #[arg(long)]
    version: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    use clap::Parser as _;
    let cli = Cli::parse();

    let settings = BuildSettings {
        version: cli
            .version
            .unwrap_or_else(|| birdfont_buildgen::VERSION.to_string()),
        prefix: cli.prefix,
        dest: cli.dest,
        cc: cli.cc,
    };

    match cli.format.as_str() {
        "files" => {
            emit::write_config(&cli.root, &settings.version, &settings.prefix)?;
            emit::write_compile_parameters(
                &cli.root,
                &settings.prefix,
                &settings.dest,
                &settings.cc,
            )?;
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        other => {
            color_eyre::eyre::bail!("unknown format: {other}");
        }
    }

    Ok(())
}
