use extenderpass::cmd;
use log::LevelFilter;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let level = if cmd::verbose_requested(&args) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    std::process::exit(cmd::run(args));
}
