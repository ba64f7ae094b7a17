use drd::Language;

fn main() -> anyhow::Result<()> {
    drd::cli::run(Language::French)
}
