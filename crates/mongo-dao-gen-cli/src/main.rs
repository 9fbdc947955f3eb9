fn main() -> anyhow::Result<()> {
    mongo_dao_gen_cli::parse_and_run()
}
