//! Smoke test for wordspot
//!
//! Runs the classic mixed exact/wildcard keyword scenario and prints the
//! report a driver would produce.

use wordspot::Scanner;

fn main() {
    println!("Running wordspot smoke tests...\n");

    test_exact_only();
    test_wildcard_only();
    test_mixed();

    println!("\n✅ All smoke tests passed!");
}

fn test_exact_only() {
    let scanner = Scanner::new(["he", "she", "his", "hers"]).unwrap();
    let matches = scanner.scan("ahishers");

    assert_eq!(matches.offsets("his"), Some(&[1][..]));
    assert_eq!(matches.offsets("she"), Some(&[3][..]));
    assert_eq!(matches.offsets("he"), Some(&[4][..]));
    assert_eq!(matches.offsets("hers"), Some(&[4][..]));
    println!("✓ Exact patterns");
}

fn test_wildcard_only() {
    let scanner = Scanner::new(["h*s"]).unwrap();
    let matches = scanner.scan("ahishers");

    assert_eq!(matches.offsets("his"), Some(&[1][..]));
    assert!(scanner.is_match("ahishers"));
    println!("✓ Wildcard patterns");
}

fn test_mixed() {
    let words = ["he", "she", "hers", "h*s", "p*t"];
    let text = "ahishers pets pepoterpotter";

    let scanner = Scanner::new(words).unwrap();
    let matches = scanner.scan(text);

    println!("✓ Mixed patterns");
    println!("\n> Search words: {:?}", words);
    println!("> Text: {}", text);
    println!("\n== RESULTS ==");
    for (word, offsets) in matches.iter() {
        for &i in offsets {
            println!(
                "Word {} appears from {} to {}",
                word,
                i,
                i + word.chars().count() - 1
            );
        }
    }
}
