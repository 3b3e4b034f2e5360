use std::error::Error;

use stopwords::{Cleaner, Dictionary, Lang, all_langs, clean, guess_language};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=stopwords=debug shows dictionary selection and guess scores.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ────────────────────────────────────────────────────────────────
    // Single language – code or full BCP 47 tag
    // ────────────────────────────────────────────────────────────────
    println!(
        "English : {}",
        clean("The quick brown fox jumps over the lazy dog.", "en-US", false)
    );
    // →  quick brown fox jumps lazy dog

    println!(
        "German  : {}",
        clean("Die Katze sitzt auf dem Tisch und der Hund schläft.", "de", false)
    );
    // →  katze sitzt tisch hund schläft

    // Unknown language: passed through unfiltered
    println!("Unknown : {}", clean("Hello   world", "xx", false));
    // → Hello world

    // ────────────────────────────────────────────────────────────────
    // Web content – strip markup before filtering
    // ────────────────────────────────────────────────────────────────
    let html = r#"
        <div class="post">
            <h1>Welcome to my blog!</h1>
            <p>Today's special: caf&eacute; &amp; croissants</p>
            <script>alert("hacked!")</script>
        </div>
    "#;
    println!("HTML    : {}", clean(html, "en", true).trim());
    // → welcome blog today's special café croissants alert hacked

    // ────────────────────────────────────────────────────────────────
    // Language guessing over every built-in dictionary
    // ────────────────────────────────────────────────────────────────
    let candidates: Vec<&str> = all_langs().iter().map(Lang::code).collect();
    for text in [
        "Le chat est sur la table et les enfants jouent dans le jardin.",
        "El perro y el gato están en la casa con los niños.",
        "Η γάτα είναι πάνω στο τραπέζι και τα παιδιά παίζουν στον κήπο.",
        "xyzzy plugh",
    ] {
        let guess = guess_language(text, &candidates);
        match guess.best() {
            Some(lang) => println!(
                "Guess   : {lang} ({}/{} stop words) → {}",
                guess.max_matches, guess.total, guess.text
            ),
            None => println!("Guess   : no stop words in `{text}`"),
        }
    }

    // ────────────────────────────────────────────────────────────────
    // Custom configuration – digits kept, extra dictionary registered
    // ────────────────────────────────────────────────────────────────
    let cleaner = Cleaner::builder()
        .include_digits(true)
        .dictionary(Dictionary::from_words("en", ["rust", "crate"]))
        .dictionary(Dictionary::from_words("eo", ["la", "kaj", "de"]))
        .build()?;

    println!(
        "Custom  : {}",
        cleaner.clean("Rust 2024 edition crate release", "en", false)
    );
    // →  2024 edition release
    println!(
        "Esperanto: {}",
        cleaner.clean("La hundo kaj la kato de Marko", "eo", false)
    );
    // →  hundo kato marko

    Ok(())
}
