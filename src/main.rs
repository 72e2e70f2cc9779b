use repo_flatten::cli::commands::run;

fn main() -> anyhow::Result<()> {
    run()
}
