fn main() -> anyhow::Result<()> {
    larder::cli::run()
}
