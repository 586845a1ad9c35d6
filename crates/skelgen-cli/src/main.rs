use clap::{Parser, Subcommand};
use skelgen_codegen::{is_supported, Renderer};
use skelgen_manifest::{MalformedManifestError, Manifest, WalkError};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

mod format;

#[derive(Parser)]
#[command(name = "skelgen")]
#[command(about = "Generate Lit component skeletons from a Custom Elements Manifest")]
#[command(version)]
struct Cli {
    /// Show debug output, including which overrides were used
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write one skeleton source file per Lit custom element
    Generate {
        /// Custom Elements Manifest to read
        #[arg(long, env = "npm_config_cem", default_value = "./test/custom-elements.json")]
        cem: PathBuf,

        /// Directory the generated files are written to
        #[arg(long, env = "npm_config_gen", default_value = "./test")]
        out: PathBuf,

        /// Directory of fragment override templates (`<fragmentName>.hbs`)
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Format generated files with prettier
        #[arg(long)]
        prettier: bool,
    },

    /// List the declarations that would be generated or skipped, without writing
    Check {
        /// Custom Elements Manifest to read
        #[arg(long, env = "npm_config_cem", default_value = "./test/custom-elements.json")]
        cem: PathBuf,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Manifest(#[from] MalformedManifestError),

    #[error("prettier failed: {0}")]
    Format(String),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let result = match cli.command {
        Command::Generate {
            cem,
            out,
            templates,
            prettier,
        } => cmd_generate(&cem, &out, templates.as_deref(), prettier),
        Command::Check { cem } => cmd_check(&cem),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_manifest(path: &Path) -> Result<Manifest, CliError> {
    if !path.exists() {
        return Err(CliError::ManifestNotFound(path.to_path_buf()));
    }
    let source = std::fs::read_to_string(path).map_err(io_error(path))?;
    Ok(Manifest::from_json(&source)?)
}

fn cmd_generate(
    cem: &Path,
    out: &Path,
    templates: Option<&Path>,
    prettier: bool,
) -> Result<(), CliError> {
    tracing::info!(
        "skelgen, input: {}, output: {}",
        cem.display(),
        out.display()
    );

    let manifest = read_manifest(cem)?;
    let renderer = Renderer::with_overrides_dir(templates);
    let generation = skelgen_codegen::generate(&manifest, &renderer)?;

    if !generation.files.is_empty() {
        std::fs::create_dir_all(out).map_err(io_error(out))?;
    }

    for file in &generation.files {
        let path = out.join(file.file_name());
        let contents = if prettier {
            format::prettier(&file.source, &path).unwrap_or_else(|e| {
                tracing::warn!("{e}; writing {} unformatted", path.display());
                file.source.clone()
            })
        } else {
            file.source.clone()
        };
        std::fs::write(&path, contents).map_err(io_error(&path))?;
        tracing::debug!("Wrote {}", path.display());
    }

    tracing::info!(
        "Generated {} file(s), skipped {}",
        generation.files.len(),
        generation.skipped.len()
    );
    Ok(())
}

fn cmd_check(cem: &Path) -> Result<(), CliError> {
    let manifest = read_manifest(cem)?;

    let mut generated = 0;
    let mut skipped = 0;
    for item in manifest.custom_elements()? {
        let decl = match item {
            Ok(decl) => decl,
            Err(WalkError::Malformed(e)) => return Err(e.into()),
            Err(e @ WalkError::InvalidDeclaration { .. }) => {
                skipped += 1;
                tracing::warn!("{e}, would be skipped");
                continue;
            }
        };
        if is_supported(&decl) {
            generated += 1;
            tracing::info!("{} <{}> would be generated", decl.name, decl.tag_name);
        } else {
            skipped += 1;
            tracing::info!(
                "{} would be skipped, superclass package is {}",
                decl.name,
                decl.superclass_package().unwrap_or("not set")
            );
        }
    }

    tracing::info!("OK: {}, {generated} to generate, {skipped} to skip", cem.display());
    Ok(())
}
