fn main() -> anyhow::Result<()> {
    memorize_cli::run()
}
