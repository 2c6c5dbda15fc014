fn main() {
    if let Err(err) = discogs_split::run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
