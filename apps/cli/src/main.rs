fn main() -> anyhow::Result<()> {
    bolao_cli::run()
}
