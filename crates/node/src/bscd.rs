fn main() {
    if let Err(err) = bscd::run_entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
