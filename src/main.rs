use tidy_move::{app, cli, output as out};

fn main() {
    let args = cli::parse();
    if let Err(e) = app::run(args) {
        out::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
