mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("dealbase: {err:#}");
        std::process::exit(1);
    }
}
