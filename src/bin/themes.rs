use std::path::PathBuf;

use clap::{Parser, Subcommand};
use concentra::{PrefStore, RgbaColor, ThemeStore};

#[derive(Debug, Parser)]
#[command(name = "themes", about = "Concentra theme catalog tool")]
struct Args {
    /// Preference store file holding the catalog
    #[arg(long, default_value = "themes.json")]
    store: PathBuf,

    /// Catalog name within the store
    #[arg(long, default_value = "default")]
    catalog: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List themes in display order
    List {
        /// Include themes too small to play
        #[arg(long)]
        all: bool,
    },
    /// Add a theme at the front of the catalog
    Add {
        #[arg(long)]
        name: String,

        /// Comma-separated content tokens, e.g. "🐆,🐗,🦓"
        #[arg(long)]
        contents: String,

        /// Requested pair count (clamped to the pool size, minimum 2)
        #[arg(long, default_value_t = 2)]
        pairs: usize,

        /// Display color as "r,g,b" channels
        #[arg(long, default_value = "240,23,50")]
        color: String,
    },
    /// Remove a theme by name
    Remove {
        #[arg(long)]
        name: String,
    },
    /// Rename a theme
    Rename {
        #[arg(long)]
        name: String,

        #[arg(long)]
        to: String,
    },
}

fn parse_contents(s: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for tok in s.split(',') {
        let tok = tok.trim();
        if !tok.is_empty() && !tokens.iter().any(|t| t == tok) {
            tokens.push(tok.to_string());
        }
    }
    tokens
}

fn parse_color(s: &str) -> Result<RgbaColor, String> {
    let channels: Vec<f64> = s
        .split(',')
        .map(|x| x.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color '{s}': {e}"))?;
    if channels.len() != 3 {
        return Err(format!("expected three channels in '{s}'"));
    }
    Ok(RgbaColor::opaque(channels[0], channels[1], channels[2]))
}

fn find_id(store: &ThemeStore, name: &str) -> Result<concentra::ThemeId, String> {
    store
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .map(concentra::Theme::id)
        .ok_or_else(|| format!("no theme named '{name}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut prefs = PrefStore::open(&args.store)?;
    let mut store = ThemeStore::load_or_default(&prefs, &args.catalog)?;

    let mutated = match args.command {
        Command::List { all } => {
            for theme in store.iter() {
                if !all && !theme.is_playable() {
                    continue;
                }
                println!(
                    "[{}] {:<12} {} pairs from {} contents{}",
                    theme.id(),
                    theme.name,
                    theme.number_of_pairs,
                    theme.contents.len(),
                    if theme.is_playable() { "" } else { " (unplayable)" }
                );
            }
            false
        }
        Command::Add {
            name,
            contents,
            pairs,
            color,
        } => {
            let tokens = parse_contents(&contents);
            let color = parse_color(&color)?;
            let id = store.insert(&name, tokens, pairs, color);
            println!("Added '{name}' with id {id}.");
            true
        }
        Command::Remove { name } => {
            let id = find_id(&store, &name)?;
            match store.remove(id) {
                Some(theme) => {
                    println!("Removed '{}'.", theme.name);
                    true
                }
                None => return Err(format!("cannot remove the last theme '{name}'").into()),
            }
        }
        Command::Rename { name, to } => {
            let id = find_id(&store, &name)?;
            store.edit(id, |theme| theme.name = to.clone());
            println!("Renamed '{name}' to '{to}'.");
            true
        }
    };

    if mutated {
        store.save_to(&mut prefs)?;
        prefs.save()?;
    }

    Ok(())
}
