use anyhow::{Context, Result};
use tracing::info;

const USAGE: &str = "usage: tabula <game>[:<param>] [--p1 s] [--p2 s] [--first p1|p2] \
                     [--seed n] [--movetime ms] [--nodes n] [--position <board> <player>]";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tokens: Vec<&str> = args.iter().map(String::as_str).collect();
    let params = tabula_match::parse_args(&tokens).context(USAGE)?;

    info!("tabula starting");
    let record = tabula_match::run(&params)?;

    for (ply, (player, mv)) in record.moves.iter().enumerate() {
        println!("{:>3}. {player} {mv}", ply + 1);
    }
    println!("final: {}", record.final_notation);
    match record.winner {
        Some(player) => println!("winner: {player}"),
        None => println!("draw"),
    }

    Ok(())
}
