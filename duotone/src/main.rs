use clap::Parser;
use duotone::cli::Cli;

fn main() {
    duotone::init_logger();

    if let Err(e) = duotone::run(Cli::parse()) {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}
