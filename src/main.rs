fn main() {
    if let Err(e) = jmd95_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
