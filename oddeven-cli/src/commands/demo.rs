use super::{print_record, winner_message};
use oddeven_game::{GameEngine, Result};

/// Play one round from start to finish on a throwaway in-memory engine
pub fn run_demo(choice: u8, number_p1: u8, number_p2: u8) -> Result<()> {
    let mut engine = GameEngine::new();
    play_round(&mut engine, choice, number_p1, number_p2)
}

fn play_round(engine: &mut GameEngine, choice: u8, number_p1: u8, number_p2: u8) -> Result<()> {
    println!("OddEvenGame created (in memory, nothing is saved)");
    print_record("Initial Game Data", &engine.game_data());

    engine.init_game(choice, number_p1)?;
    println!("Game Initialized with Player 1's Choice and Number");
    print_record("Updated Game Data After Initialization", &engine.game_data());

    engine.play_game(number_p2)?;
    println!("Game Played with Player 2's Number");

    let last = engine.last_game_data();
    print_record("Last Game Data", &last);
    println!("{}", winner_message(&last));

    Ok(())
}
