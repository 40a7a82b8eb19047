use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use concentra::{ChooseOutcome, GameSession, PrefStore, ThemeStore};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Concentra interactive round player")]
struct Args {
    /// Preference store file holding the theme catalog
    #[arg(long, default_value = "themes.json")]
    store: PathBuf,

    /// Catalog name within the store
    #[arg(long, default_value = "default")]
    catalog: String,

    /// Theme to play, by name; defaults to the first playable theme
    #[arg(long)]
    theme: Option<String>,

    /// Seed for reproducible deals
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,
}

fn print_board(session: &GameSession) {
    for (index, card) in session.cards().iter().enumerate() {
        if card.is_matched {
            print!("{index:>2}:({})  ", card.content);
        } else if card.is_face_up {
            print!("{index:>2}: {}   ", card.content);
        } else {
            print!("{index:>2}: ##  ");
        }
        if index % 4 == 3 {
            println!();
        }
    }
    println!();
}

fn print_status(session: &GameSession) {
    println!(
        "Score: {}  Pairs: {}/{}",
        session.score(),
        session.found_pairs_count(),
        session.number_of_pairs()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut prefs = PrefStore::open(&args.store)?;
    let store = ThemeStore::load_or_default(&prefs, &args.catalog)?;
    if !prefs.contains(&ThemeStore::store_key(&args.catalog)) {
        // First run: persist the seeded catalog so later edits start from it.
        store.save_to(&mut prefs)?;
        prefs.save()?;
    }

    let theme = match &args.theme {
        Some(name) => store
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("no theme named '{name}' in catalog '{}'", args.catalog))?,
        None => store
            .playable()
            .next()
            .ok_or("catalog has no playable theme")?,
    };

    let mut session = GameSession::new(theme.clone(), args.seed)?;
    println!(
        "Playing '{}' with {} pairs. Enter a card number, 'r' to restart, 'q' to quit.",
        theme.name,
        session.number_of_pairs()
    );
    print_board(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }
        if cmd.eq_ignore_ascii_case("q") {
            break;
        }
        if cmd.eq_ignore_ascii_case("r") {
            session.restart()?;
            println!("New round.");
            print_board(&session);
            continue;
        }
        let Ok(index) = cmd.parse::<usize>() else {
            println!("Unrecognized input '{cmd}'.");
            continue;
        };
        let Some(card) = session.cards().get(index) else {
            println!("No card at index {index}.");
            continue;
        };
        match session.choose(card.id) {
            ChooseOutcome::Ignored => println!("Card {index} cannot be chosen."),
            ChooseOutcome::Flipped => {}
            ChooseOutcome::Matched { points } => println!("Match! +{points}"),
            ChooseOutcome::Mismatched { penalty } => {
                if penalty > 0 {
                    println!("No match. -{penalty}");
                } else {
                    println!("No match.");
                }
            }
        }
        print_board(&session);
        print_status(&session);
        if session.is_end_of_round() {
            println!(
                "Round complete, final score {}. 'r' deals a new round, 'q' quits.",
                session.score()
            );
        }
    }

    Ok(())
}
