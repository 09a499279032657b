fn main() -> anyhow::Result<()> {
    statefacts::cli::run()
}
