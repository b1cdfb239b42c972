mod demo;

pub use demo::run_demo;

use crate::config::CliConfig;
use comfy_table::{presets::UTF8_FULL, Table};
use oddeven_game::{GameRecord, GameStore, OddEvenError, Result, Winner};
use std::io;

pub async fn deploy(config: &CliConfig, force: bool) -> Result<()> {
    let path = config.state_path();

    let overwrite = if force || !tokio::fs::try_exists(&path).await? {
        true
    } else {
        confirm(&format!(
            "A game already exists at {}. Replace it?",
            path.display()
        ))?
    };

    if !overwrite {
        println!("Keeping the existing game.");
        return Ok(());
    }

    let store = GameStore::deploy(&path, true).await?;

    println!("OddEvenGame deployed: {}", store.deployment().id);
    print_record("Initial Game Data", &store.engine().game_data());

    Ok(())
}

pub async fn init_game(config: &CliConfig, choice: u8, number: u8) -> Result<()> {
    let mut store = GameStore::open(config.state_path()).await?;

    let replacing = store.engine().is_awaiting_player2();
    store
        .transact(|engine| engine.init_game(choice, number))
        .await?;

    if replacing {
        println!("Previous commitment was replaced.");
    }
    println!("Game Initialized with Player 1's Choice and Number");
    print_record(
        "Updated Game Data After Initialization",
        &store.engine().game_data(),
    );
    println!();
    println!("Player 2 can now play:");
    println!("oddeven play <number>");

    Ok(())
}

pub async fn play_game(config: &CliConfig, number: u8) -> Result<()> {
    let mut store = GameStore::open(config.state_path()).await?;

    store.transact(|engine| engine.play_game(number)).await?;

    let last = store.engine().last_game_data();
    println!("Game Played with Player 2's Number");
    print_record("Last Game Data", &last);
    println!("{}", winner_message(&last));

    Ok(())
}

pub async fn show_status(config: &CliConfig) -> Result<()> {
    let store = GameStore::open(config.state_path()).await?;
    let deployment = store.deployment();
    let engine = store.engine();

    println!("Game: {}", deployment.id);
    println!("═══════════════════════════════════");
    println!(
        "Deployed: {}",
        deployment.deployed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("State File: {}", store.path().display());
    println!("Phase: {:?}", engine.phase());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Record",
        "choiceP1",
        "numberP1",
        "numberP2",
        "lastWinner",
    ]);

    for (label, record) in [
        ("Current", engine.game_data()),
        ("Last", engine.last_game_data()),
    ] {
        let (choice_p1, number_p1, number_p2, last_winner) = record.to_tuple();
        table.add_row(vec![
            label.to_string(),
            choice_p1.to_string(),
            number_p1.to_string(),
            number_p2.to_string(),
            last_winner.to_string(),
        ]);
    }

    println!("{}", table);
    println!("{}", winner_message(&engine.last_game_data()));

    Ok(())
}

fn print_record(label: &str, record: &GameRecord) {
    let (choice_p1, number_p1, number_p2, last_winner) = record.to_tuple();
    println!(
        "{}: {{ choiceP1: {}, numberP1: {}, numberP2: {}, lastWinner: {} }}",
        label, choice_p1, number_p1, number_p2, last_winner
    );
}

fn winner_message(record: &GameRecord) -> String {
    match record.last_winner {
        Some(Winner::Player1) => "Player 1 Wins!".to_string(),
        Some(Winner::Player2) => "Player 2 Wins!".to_string(),
        None => "No Winner Yet".to_string(),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| OddEvenError::Io(io::Error::new(io::ErrorKind::Other, e.to_string())))
}
