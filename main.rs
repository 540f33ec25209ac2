use std::env;
use std::io::Result;
use std::process;
use std::time::Instant;

mod freq;

const DEFAULT_CORPUS: &str = "dish_names.txt"; // used when no argument is given
const DEFAULT_OUTPUT: &str = "dish_freq.csv";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (corpus, output) = match args.len() {
        1 => (DEFAULT_CORPUS.to_string(), DEFAULT_OUTPUT.to_string()),
        2 => (args[1].clone(), DEFAULT_OUTPUT.to_string()),
        3 => (args[1].clone(), args[2].clone()),
        _ => {
            eprintln!("Usage: {} [corpus] [output]", args[0]);
            process::exit(1);
        }
    };

    println!("--- Counting words in {} ---", corpus);
    let start = Instant::now();

    let raw = freq::load_corpus(&corpus)?;
    let counts = freq::count_tokens(&freq::clean(&raw));
    let total: u64 = counts.values().sum();
    freq::write_frequencies(&output, &counts)?;

    println!(
        "Wrote {} distinct words ({} total) to {}",
        counts.len(),
        total,
        output
    );
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}
