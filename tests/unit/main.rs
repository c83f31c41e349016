//! Unit tests mirroring the `src` tree, plus checks on the binary's argument surface


#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use polytile::io::cli::Cli;

    // Tests the clap definition is internally consistent
    // Verified by giving two arguments the same short flag
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    // Tests the binary is named after the crate
    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "polytile");
    }
}
