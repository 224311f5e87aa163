use std::path::PathBuf;
use std::process;

use quick_branch::build_cli;
use quick_branch::cli_context::CliContext;
use quick_branch::commands::clipboard::serve_clipboard_daemon;
use quick_branch::commands::{handle_auth, handle_issue, handle_list, handle_start};
use quick_branch::constants::CLIPBOARD_DAEMON_ENV;
use quick_branch::error::LinearResult;
use quick_branch::formatting::{SemanticColor, ThemedColorize};
use quick_branch::logging::{init_logging, log_error, log_info, log_panic_info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logging is best effort; a read-only cache dir must not stop the CLI.
    let _ = init_logging();

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    if std::env::var_os(CLIPBOARD_DAEMON_ENV).is_some() {
        serve_clipboard_daemon();
        return;
    }

    let matches = build_cli().get_matches();
    let config_path = matches.get_one::<PathBuf>("config").cloned();

    let result: LinearResult<()> = async {
        let mut context = CliContext::load(config_path)?;

        match matches.subcommand() {
            Some((name, sub_matches)) => {
                log_info(&format!("Running '{}'", name));
                match name {
                    "auth" => handle_auth(&mut context, sub_matches).await,
                    "issue" => handle_issue(&mut context, sub_matches).await,
                    "list" => handle_list(&mut context, sub_matches).await,
                    "start" => handle_start(&mut context, sub_matches).await,
                    _ => unreachable!("clap rejects unknown subcommands"),
                }
            }
            None => unreachable!("subcommand_required is set"),
        }
    }
    .await;

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".with_theme(SemanticColor::Error), e);
        process::exit(1);
    }
}
