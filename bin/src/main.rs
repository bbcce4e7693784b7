use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dialoguer::Input;
use eyre::{bail, eyre, Result, WrapErr};
use wordle_hotness_core::{
    algo, data,
    scoring::Weights,
    solvers,
    structs::{Dictionary, HintsN, KnowledgeN, WordHotness, WordN},
};

const WORDS_LENGTH: usize = 5;

type Word = WordN<WORDS_LENGTH>;
type Hints = HintsN<WORDS_LENGTH>;
type Knowledge = KnowledgeN<WORDS_LENGTH>;
type Dict = Dictionary<WORDS_LENGTH>;

#[derive(Parser, Debug)]
#[command(
    name = "wordle-hotness",
    about = "Constraint-tracking assistant for five-letter word guessing"
)]
struct Opts {
    /// Word list: a JSON object of {word: usage count}, or one word per line
    #[arg(short, long, default_value = "data/words_dictionary.json")]
    words: PathBuf,

    /// How many suggestions to show after each guess
    #[arg(short = 'k', long, default_value_t = 10)]
    suggestions: usize,

    #[arg(short, long, default_value_t = 6)]
    max_guesses: usize,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Guess a randomly chosen secret word
    Play,
    /// Track an external game: enter guesses and the hints they earned
    Suggest,
    /// Let the engine solve a given target by itself
    Auto { target: String },
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let dictionary = load_dictionary(&opts.words)?;
    println!("Dictionary size: {}", dictionary.len());

    let weights = Weights::default();
    match opts.mode {
        Mode::Play => play(&dictionary, &weights, opts.suggestions, opts.max_guesses),
        Mode::Suggest => suggest(&dictionary, &weights, opts.suggestions, opts.max_guesses),
        Mode::Auto { target } => auto(&dictionary, &weights, &target, opts.max_guesses),
    }
}

fn load_dictionary(path: &Path) -> Result<Dict> {
    let dictionary = if path.extension().map_or(false, |ext| ext == "json") {
        data::load_counts(path)
    } else {
        data::load_word_list(path)
    };
    dictionary.wrap_err_with(|| format!("failed to load word list from {}", path.display()))
}

fn read_guess(dictionary: &Dict, prompt: &str) -> Result<Word> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match Word::try_from(input.trim()) {
            Ok(word) if dictionary.contains(&word) => return Ok(word),
            Ok(word) => println!("\"{word}\" is not in the dictionary, try again"),
            Err(err) => println!("{err}"),
        }
    }
}

fn read_hints(prompt: &str) -> Result<Hints> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match input.trim().parse() {
            Ok(hints) => return Ok(hints),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_suggestions(dictionary: &Dict, knowledge: &Knowledge, weights: &Weights<WORDS_LENGTH>, k: usize) {
    let ranked = solvers::suggestions(dictionary, knowledge, weights, k);
    let line = ranked
        .iter()
        .filter(|suggestion| suggestion.score > f64::NEG_INFINITY)
        .map(|suggestion| format!("{} ({})", suggestion.word, suggestion.score))
        .collect::<Vec<_>>()
        .join(", ");
    if line.is_empty() {
        println!("No candidate fits the current knowledge");
    } else {
        println!("Suggestions: {line}");
    }
}

fn merge(knowledge: Knowledge, hotness: &WordHotness<WORDS_LENGTH>) -> Knowledge {
    let (knowledge, ignored) = algo::update_knowledge_traced(hotness, knowledge);
    if !ignored.is_empty() {
        println!(
            "(ignored contradictory evidence for: {})",
            ignored.iter().collect::<String>()
        );
    }
    knowledge
}

fn play(dictionary: &Dict, weights: &Weights<WORDS_LENGTH>, k: usize, max_guesses: usize) -> Result<()> {
    let target = solvers::random_word(dictionary)
        .ok_or_else(|| eyre!("the dictionary is empty"))?
        .clone();
    let mut knowledge = Knowledge::none();

    for round in 1..=max_guesses {
        let guess = read_guess(dictionary, &format!("guess {round}"))?;
        if guess == target {
            println!("Your guess {target} is correct!");
            return Ok(());
        }

        let hotness = algo::get_hotness(&guess, &target, dictionary)?;
        println!("{}", hotness.pretty());
        knowledge = merge(knowledge, &hotness);
        print_suggestions(dictionary, &knowledge, weights, k);
    }

    println!("Out of guesses, the word was {target}");
    Ok(())
}

fn suggest(dictionary: &Dict, weights: &Weights<WORDS_LENGTH>, k: usize, max_guesses: usize) -> Result<()> {
    let mut knowledge = Knowledge::none();

    for round in 1..=max_guesses {
        let guess = read_guess(dictionary, &format!("guess {round}"))?;
        let hints = read_hints("hints (c = correct, o = out of place, w = wrong)")?;
        if hints.is_all_correct() {
            println!("Solved in {round} guesses");
            return Ok(());
        }

        let hotness = WordHotness::from_hints(guess, &hints);
        knowledge = merge(knowledge, &hotness);
        println!("Current knowledge:\n{knowledge}");
        print_suggestions(dictionary, &knowledge, weights, k);
    }

    println!("Out of guesses");
    Ok(())
}

fn auto(dictionary: &Dict, weights: &Weights<WORDS_LENGTH>, target: &str, max_guesses: usize) -> Result<()> {
    let target = Word::try_from(target)?;
    let report = solvers::solve(dictionary, weights, &target, max_guesses, true)?;
    if !report.solved {
        bail!("failed to solve {target} within {max_guesses} guesses");
    }
    println!("Solved {target} in {} guesses", report.guesses.len());
    Ok(())
}
