//! CLI Ace example for players sharing one terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use acers::{
    Card, Controller, Decision, Event, EventSink, Game, GameOptions, PendingTurn, PlayerId,
};
use tracing_subscriber::EnvFilter;

struct Terminal;

impl Controller for Terminal {
    fn decide(&mut self, game: &Game, turn: &PendingTurn) -> Decision {
        loop {
            print_turn(game, turn);

            let input = prompt_line(&format!(
                "Move [0-{}], or 'o <name>' to offer a hand: ",
                turn.legal.len().saturating_sub(1)
            ));

            if let Some(name) = input.strip_prefix("o ") {
                match find_player(game, name.trim()) {
                    Some(from) => {
                        println!(
                            "{} offered their hand to {}",
                            name_of(game, from),
                            name_of(game, turn.player)
                        );
                        return Decision::Offer(from);
                    }
                    None => {
                        println!("No player named {name}.");
                        continue;
                    }
                }
            }

            let Some(decision) = input
                .parse::<usize>()
                .ok()
                .and_then(|index| turn.legal.get(index).copied())
            else {
                println!("Invalid input. Try again.");
                continue;
            };

            print_decision(game, turn.player, decision);
            return decision;
        }
    }
}

struct Announcer<'a> {
    game: &'a Game,
}

impl EventSink for Announcer<'_> {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::Invalid(reason) => println!("Invalid: {reason}"),
            Event::Winners(players) => {
                let names: Vec<String> =
                    players.iter().map(|&id| name_of(self.game, id)).collect();
                let verb = if players.len() > 1 { "have" } else { "has" };
                println!("{} {verb} won!", names.join(", "));
            }
            Event::Loser(player) => println!("{} has lost.", name_of(self.game, *player)),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let count = loop {
        match prompt_line("Number of players? ").parse::<u8>() {
            Ok(count) if (2..=26).contains(&count) => break count,
            _ => println!("Enter a number from 2 to 26."),
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    for index in 0..count {
        let name = char::from(b'A' + index).to_string();
        if let Err(err) = game.join(name) {
            println!("Join error: {err}");
            return;
        }
    }

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    println!();

    let mut announcer = Announcer { game: &game };
    if let Err(err) = game.run(&mut Terminal, &mut announcer) {
        println!("Game error: {err}");
    }
}

fn print_turn(game: &Game, turn: &PendingTurn) {
    let hand = game.hand(turn.player).unwrap_or_default();

    println!("Player {}'s turn\n", name_of(game, turn.player));
    println!("[Hand: {}]", hand.len());
    for row in hand.cards().chunks(5) {
        let cards: Vec<String> = row.iter().map(|&card| coloured(card)).collect();
        println!("{}", cards.join(" / "));
    }

    println!("\nPossible inputs:");
    for (index, decision) in turn.legal.iter().enumerate() {
        match *decision {
            Decision::Play(card) => println!("[{index}] play / {}", coloured(card)),
            Decision::Cut(card) => println!("[{index}] cut / {}", coloured(card)),
            Decision::Accept(from) => println!("[{index}] accept {}'s hand", name_of(game, from)),
            Decision::Offer(_) => {}
        }
    }
}

fn print_decision(game: &Game, player: PlayerId, decision: Decision) {
    let name = name_of(game, player);
    match decision {
        Decision::Play(card) => println!("{name} played {}", coloured(card)),
        Decision::Cut(card) => println!("{name} cut with {}", coloured(card)),
        Decision::Accept(from) => println!("{name} accepted {}'s offer", name_of(game, from)),
        Decision::Offer(_) => {}
    }
    println!("\n===\n");
}

fn coloured(card: Card) -> String {
    if card.suit().is_red() {
        format!("\x1b[31m{card}\x1b[0m")
    } else {
        card.to_string()
    }
}

fn name_of(game: &Game, player: PlayerId) -> String {
    game.player_name(player)
        .unwrap_or_else(|| format!("#{player}"))
}

fn find_player(game: &Game, name: &str) -> Option<PlayerId> {
    game.players()
        .into_iter()
        .find(|player| player.name.eq_ignore_ascii_case(name))
        .map(|player| player.id)
}

/// Reads one line of input, exiting at end of input.
fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!();
            process::exit(0);
        }
        Ok(_) => input.trim().to_lowercase(),
    }
}
