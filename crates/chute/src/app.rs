use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("chute")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch a home-monitoring device from the terminal")
        .long_about("chute follows the security status and photo gallery of a home-monitoring device. Each view polls the device while it is open and stops as soon as it is closed.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Open a view and print its state every time it changes")
                .arg(
                    Arg::new("view")
                        .help("View to open")
                        .required(true)
                        .index(1)
                        .value_parser(["security", "photos"])
                )
                .arg(
                    Arg::new("base-url")
                        .long("base-url")
                        .short('u')
                        .help("Device base URL (overrides config and CHUTE_BASE_URL)")
                )
                .arg(
                    Arg::new("duration")
                        .long("duration")
                        .short('d')
                        .help("Close the view after this many seconds (default: until Ctrl-C)")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print each state as a JSON line")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("route")
                .about("Show which view a URL path opens")
                .arg(
                    Arg::new("path")
                        .help("URL path, e.g. /security")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
