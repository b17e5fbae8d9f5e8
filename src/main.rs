fn main() {
    #[cfg(feature = "cli")]
    idnconv::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("idnconv: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
