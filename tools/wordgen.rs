/// Wordgen — generates Jabberwocky-style gibberish words from sample text.
///
/// Usage: wordgen [--count N] [--context N] [--seed N] [--output <file>]
///                [--model <model.ron>] <text files...>
use std::process;

use jabberwock::core::{GeneratorConfig, WordGenerator};

/// Minimum total input size in chars; smaller corpora give useless models.
const MIN_LENGTH: usize = 2000;

const USAGE: &str = "Usage: wordgen [--count N] [--context N] [--seed N] \
                     [--output <file>] [--model <model.ron>] <text files...>";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut count = 10usize;
    let mut context_length = 2usize;
    let mut seed: Option<u64> = None;
    let mut output: Option<String> = None;
    let mut model_path: Option<String> = None;
    let mut filenames: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                i += 1;
                count = parse_arg(&args, i, "--count");
            }
            "--context" | "-l" => {
                i += 1;
                context_length = parse_arg(&args, i, "--context");
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_arg(&args, i, "--seed"));
            }
            "--output" | "-o" => {
                i += 1;
                output = args.get(i).cloned();
            }
            "--model" => {
                i += 1;
                model_path = args.get(i).cloned();
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
            file => filenames.push(file.to_string()),
        }
        i += 1;
    }

    if context_length == 0 {
        eprintln!("Error: --context must be a positive integer");
        process::exit(1);
    }

    if filenames.is_empty() {
        eprintln!("Error: at least one text file is required");
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let mut documents = Vec::new();
    for fname in &filenames {
        match std::fs::read_to_string(fname) {
            Ok(book) => {
                println!("Loaded '{}': {} chars", fname, book.len());
                documents.push(book);
            }
            Err(e) => {
                eprintln!("Error reading '{}': {}", fname, e);
            }
        }
    }

    let text = documents.join("\n\n");
    if text.len() < MIN_LENGTH {
        eprintln!(
            "Insufficient text: {} chars loaded, need at least {}",
            text.len(),
            MIN_LENGTH
        );
        process::exit(1);
    }
    println!("Loaded {} chars in total", text.len());

    let config = GeneratorConfig::default()
        .context_length(context_length)
        .seed(seed.unwrap_or_else(rand::random));

    println!("Building chain model (context length {})...", context_length);
    let mut generator = WordGenerator::from_text(&text, config).unwrap_or_else(|e| {
        eprintln!("Error building model: {}", e);
        process::exit(1);
    });
    println!(
        "Model trained: {} words, {} contexts, {} transitions",
        generator.vocabulary().len(),
        generator.model().contexts.len(),
        generator.model().transition_count()
    );

    if let Some(ref path) = model_path {
        generator
            .save_model(std::path::Path::new(path))
            .unwrap_or_else(|e| {
                eprintln!("Error saving model to '{}': {}", path, e);
                process::exit(1);
            });
        println!("Model saved to '{}'", path);
    }

    println!("Generating {} words...", count);
    let words = generator.generate(count).unwrap_or_else(|e| {
        eprintln!("Error generating words: {}", e);
        process::exit(1);
    });

    match output {
        Some(path) => {
            let mut contents = words.join("\n");
            contents.push('\n');
            std::fs::write(&path, contents).unwrap_or_else(|e| {
                eprintln!("Error writing '{}': {}", path, e);
                process::exit(1);
            });
            println!("Wrote {} words to '{}'", words.len(), path);
        }
        None => {
            for word in &words {
                println!("{}", word);
            }
        }
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    args.get(i)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("Error: {} requires a numeric value", flag);
            process::exit(1);
        })
}
