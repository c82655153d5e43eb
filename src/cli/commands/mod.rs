use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create")
                .about("Create monthly partitions in the logger database")
                .arg(config_file_arg())
                .arg(from_date_arg("YYYY-MM date of the log partition to be created (or the first one to be created, if --to-date is supplied)"))
                .arg(to_date_arg("YYYY-MM date of the last log partition to be created")),
        )
        .subcommand(
            Command::new("drop")
                .about("Drop old log partitions for one service")
                .arg(config_file_arg())
                .arg(
                    Arg::new("service")
                        .help("service name (i.e. `mojeid`); lists available services when omitted")
                        .long("service")
                        .short('s'),
                )
                .arg(from_date_arg("YYYY-MM date of the log partition to be deleted (or the first one to be deleted, if --to-date is supplied)"))
                .arg(to_date_arg("YYYY-MM date of the last log partition to be deleted"))
                .arg(
                    Arg::new("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Just echo the SQL commands to be executed")
                        .long("dry-run"),
                ),
        )
}

fn config_file_arg() -> Arg {
    Arg::new("config_file")
        .env("LOGMAINT_CONFIG")
        .help("json config file")
        .long("config_file")
        .short('c')
        .required(true)
        .value_name("FILE")
}

fn from_date_arg(help: &str) -> Arg {
    Arg::new("from-date")
        .help(help.to_string())
        .long("from-date")
        .short('d')
        .value_name("YYYY-MM")
}

fn to_date_arg(help: &str) -> Arg {
    Arg::new("to-date")
        .help(help.to_string())
        .long("to-date")
        .value_name("YYYY-MM")
}
