mod commands;

#[derive(Debug, argh::FromArgs)]
#[argh(description = "a packer for big-endian binary frames")]
struct Options {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Pack(self::commands::pack::Options),
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();

    match options.subcommand {
        Subcommand::Pack(options) => {
            self::commands::pack::exec(options)?;
        }
    }

    Ok(())
}
