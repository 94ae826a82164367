use chxrd::config::{Config, DEFAULT_CONFIG_FILE};
use chxrd::{
    resolve_symbol_in, Base, ChordDatabase, ChordError, Extension, FavoriteRecord,
    FavoritesStore, Quality, Selection,
};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

const USAGE: &str = "Usage: chxrd [--json] <SYMBOL> [OCTAVE]
       chxrd --roots
       chxrd --chords
       chxrd build <ROOT> <OCTAVE> <BASE> [QUALITY] [EXTENSION]
       chxrd fav add <ROOT> <OCTAVE> <BASE> [QUALITY] [EXTENSION]
       chxrd fav list";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let config_path = env::var_os("CHXRD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if let Err(e) = run(&args, &config_path) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &[String], config_path: &Path) -> Result<(), ChordError> {
    let config = Config::load(config_path)?;
    let database = config.database()?;

    match args[0].as_str() {
        "--roots" => println!("{}", chxrd::list_root_spellings().join(" ")),
        "--chords" => {
            for suffix in database.suffixes() {
                let formula = database.formula_for(suffix).map(|f| f.to_string());
                println!("{:<10} {}", display_suffix(suffix), formula.unwrap_or_default());
            }
        }
        "build" => {
            let selection = parse_selection(&args[1..], &config)?;
            print_selection(&selection, &database)?;
        }
        "fav" => match args.get(1).map(String::as_str) {
            Some("add") => {
                let selection = parse_selection(&args[2..], &config)?;
                let Some(record) = FavoriteRecord::from_selection(&selection) else {
                    usage_exit()
                };
                let mut store = FavoritesStore::load(&config.favorites)?;
                store.add(record)?;
                eprintln!("Saved favorite #{} to {}", store.len(), store.path().display());
            }
            Some("list") => {
                let store = FavoritesStore::load(&config.favorites)?;
                for (i, record) in store.records().iter().enumerate() {
                    let chord = record.resolve(&database)?;
                    println!(
                        "{:>3}. {} {} [{}] (octave {}, {}): {}",
                        i + 1,
                        record.root,
                        record_key(record),
                        chord.formula,
                        record.octave,
                        record.mode,
                        chord.scientific_names.join(" ")
                    );
                }
            }
            _ => usage_exit(),
        },
        "--json" => {
            let Some(symbol) = args.get(1) else { usage_exit() };
            let octave = parse_octave(args.get(2), config.octave);
            let chord = resolve_symbol_in(&database, symbol, octave)?;
            match serde_json::to_string_pretty(&chord) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing chord: {}", e);
                    process::exit(1);
                }
            }
        }
        symbol => {
            let octave = parse_octave(args.get(1), config.octave);
            let chord = resolve_symbol_in(&database, symbol, octave)?;
            println!("{}", chord);
        }
    }
    Ok(())
}

fn parse_selection(args: &[String], config: &Config) -> Result<Selection, ChordError> {
    if args.len() < 3 {
        usage_exit();
    }
    let octave: i32 = args[1].parse().unwrap_or_else(|_| {
        eprintln!("Invalid octave '{}'", args[1]);
        process::exit(1);
    });
    let base = Base::from_str(&args[2]).unwrap_or_else(|| invalid_choice("base", &args[2]));

    let mut selection = Selection::new(config.mode)
        .with_root(&args[0])?
        .with_octave(octave)
        .with_base(base);
    if let Some(quality) = args.get(3) {
        let quality = Quality::from_str(quality).unwrap_or_else(|| invalid_choice("quality", quality));
        selection = selection.with_quality(quality);
    }
    if let Some(extension) = args.get(4) {
        let extension =
            Extension::from_str(extension).unwrap_or_else(|| invalid_choice("extension", extension));
        selection = selection.with_extension(extension);
    }
    Ok(selection)
}

fn print_selection(selection: &Selection, database: &ChordDatabase) -> Result<(), ChordError> {
    println!("{}", selection);
    if let Some(chord) = selection.resolve(database)? {
        println!("{}", chord);
    }
    Ok(())
}

fn record_key(record: &FavoriteRecord) -> String {
    let parts = [
        record.base.map(Base::as_str),
        record.quality.map(Quality::as_str),
        record.extension.map(Extension::as_str),
    ];
    parts.into_iter().flatten().collect()
}

fn parse_octave(arg: Option<&String>, default: i32) -> i32 {
    match arg {
        Some(text) => text.parse().unwrap_or_else(|_| {
            eprintln!("Invalid octave '{}'", text);
            process::exit(1);
        }),
        None => default,
    }
}

fn display_suffix(suffix: &str) -> &str {
    if suffix.is_empty() {
        "(major)"
    } else {
        suffix
    }
}

fn invalid_choice(kind: &str, value: &str) -> ! {
    eprintln!("Invalid {} '{}'", kind, value);
    process::exit(1);
}

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}
