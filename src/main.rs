// SPDX-License-Identifier: MPL-2.0
use kiln_gallery::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
KilnGallery - browse a catalog of pieces in a lightbox

USAGE:
  kiln_gallery [OPTIONS] [CATALOG]

ARGS:
  <CATALOG>            Catalog file to open (defaults to the last one opened)

OPTIONS:
  -h, --help           Print this help and exit
  --lang <LOCALE>      Interface language, e.g. en-US or fr
  --config-dir <DIR>   Directory holding settings.toml
  --i18n-dir <DIR>     Directory with extra .ftl translations

ENVIRONMENT:
  KILN_GALLERY_CONFIG_DIR   Same as --config-dir
  RUST_LOG                  Log filter (default: info,kiln_gallery=debug)
";

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kiln_gallery=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let catalog_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        catalog_path,
        i18n_dir,
        config_dir,
    }))
}

fn main() -> iced::Result {
    setup_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting KilnGallery");

    app::run(flags)
}
