// SPDX-License-Identifier: MPL-2.0
use lunar_gallery::app::{self, Flags};
use lunar_gallery::logging::{self, TracingConfig};

const HELP: &str = "\
Lunar Gallery

USAGE:
  lunar_gallery [OPTIONS]

OPTIONS:
  --lang <LANG>          UI language (e.g. en-US, fr)
  --memories <PATH>      Memories JSON document
  --images <DIR>         Directory relative image references resolve against
  --config-dir <DIR>     Directory holding settings.toml
  --debug                Verbose logging
  -h, --help             Print help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let tracing_config = TracingConfig {
        debug: args.contains("--debug"),
    };
    if let Err(err) = logging::init_tracing(&tracing_config) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        memories_path: args.opt_value_from_str("--memories")?,
        image_root: args.opt_value_from_str("--images")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
