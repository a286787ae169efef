use level_extractor::config::Config;
use level_extractor::core::cli::{CliArgs, USAGE};
use level_extractor::core::context::AppContext;
use level_extractor::logging::LogTarget;

fn main() {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(err.exit_code());
        }
    };
    if args.show_help {
        println!("{USAGE}");
        return;
    }

    let ctx = match AppContext::from_args(&args) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    if args.show_config {
        print_config(&ctx.config);
        return;
    }

    if let Err(err) = ctx.run() {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(err.exit_code());
    }
}

fn print_config(config: &Config) {
    let rows = config.rows();
    let key_width = rows.iter().map(|(k, _, _)| k.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, _, v)| v.len()).max().unwrap_or(0);
    for (key, description, value) in rows.iter() {
        println!("{key:<key_width$}  {value:<value_width$}  {description}");
    }
}
