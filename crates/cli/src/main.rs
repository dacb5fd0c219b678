fn main() -> Result<(), Box<dyn std::error::Error>> {
    glint_cli::run()
}
