use player_registry::PlayerRegistry;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Testing PlayerRegistry...");

    let path =
        std::env::args().nth(1).unwrap_or_else(|| "data/players/round_players.json".to_string());

    let mut registry = PlayerRegistry::new();
    registry.load_from_file(&path).await?;

    info!("Registry loaded with {} players", registry.player_count());

    let mut players = registry.get_all_players();
    players.sort_by(|a, b| b.price.cmp(&a.price));

    println!("\nPlayers by price (round {:?}):", registry.current_round());
    println!("Name                 Pos  Team      Price    BE  Last");
    println!("------------------------------------------------------------");

    for player in players {
        println!(
            "{:20} {:4} {:4} {:10} {:5} {:>5}",
            player.name,
            player.position,
            player.team,
            player.price,
            player.breakeven,
            player.last_score().map_or("-".to_string(), |s| format!("{s:.0}"))
        );
    }

    match registry.round_average_score() {
        Some(avg) => println!("\nRound average score: {avg:.1}"),
        None => println!("\nNo scores recorded yet"),
    }

    Ok(())
}
