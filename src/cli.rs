use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

const ABOUT: &str = "A fast CLI for working with Linear issues and git branches";

const LONG_ABOUT: &str = "\
quick-branch streamlines your workflow with Linear and git.

Quickly fetch issue details, assign yourself to issues, update statuses,
and create git branches with Linear's suggested branch names - all from
your terminal.

Use 'quick-branch start <issue> --turbo' for maximum speed: assign yourself,
update status to \"In Progress\", and checkout the branch in one command.";

fn issue_identifier() -> Arg {
    Arg::new("identifier")
        .value_name("ISSUE_ID")
        .help("Issue identifier (e.g., ENG-123) or issue URL")
        .required(true)
        .index(1)
}

fn flag(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name)
        .short(short)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("quick-branch")
        .about(ABOUT)
        .long_about(LONG_ABOUT)
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default is <config dir>/quick-branch/config.yaml)")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
        )
        .subcommand(
            Command::new("auth")
                .about("Store your Linear API key")
                .long_about("Store your Linear API key in the config file for future use.\nThe API key will be hidden while you type or paste it.")
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("Set the API key without prompting")
                        .conflicts_with("show")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the stored API key (masked)")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("issue")
                .about("Fetches a Linear issue")
                .long_about("Fetches a Linear issue. Copy its URL or branch name, print its description, or create a branch from it.")
                .arg(issue_identifier())
                .arg(flag("url", 'u', "Copies the issue URL to your clipboard"))
                .arg(flag("branch", 'b', "Copies the branch name to your clipboard"))
                .arg(flag("checkout", 'c', "Creates a new branch in the cwd using the branch name from Linear"))
                .arg(flag("verbose", 'v', "Prints the issue description"))
        )
        .subcommand(
            Command::new("list")
                .about("List Linear issues based on your saved filters")
                .subcommand(
                    Command::new("setup")
                        .about("Configure the filters used by the list command")
                )
        )
        .subcommand(
            Command::new("start")
                .about("Assigns you to an issue, optionally updating its status and checking out its branch")
                .arg(issue_identifier())
                .arg(flag("turbo", 't', "Assigns you, updates status to 'In Progress', and checks out the branch (all-in-one!)"))
                .arg(flag("status", 's', "Updates the status of the issue to 'In Progress'"))
                .arg(flag("checkout", 'c', "Creates a new branch in the cwd using the branch name from Linear"))
        )
}
