//! Mixed wildcards and varied casing
//!
//! The dense multi-wildcard scenario: every window is reported with its
//! original casing, overlapping matches included.

use wordspot::Scanner;

fn main() {
    let text = "CatDdcabirg bIRdscaabird snaKsncKsAt ssnakESbirdog dsccaTdg";
    let words = ["c**", "b*R*", "sn*kS", "c**d*", "D*cA**", "S*NAKES", "s******"];

    println!("> Search words: {:?}", words);
    println!("> Text: {}", text);

    let scanner = Scanner::new(words).unwrap();
    let matches = scanner.scan(text);

    // Spot checks against the expected report.
    assert_eq!(matches.offsets("Cat"), Some(&[0][..]));
    assert_eq!(matches.offsets("bIRd"), Some(&[12][..]));
    assert_eq!(matches.offsets("bird"), Some(&[20, 44][..]));
    assert_eq!(matches.offsets("snaKs"), Some(&[25][..]));
    assert_eq!(matches.offsets("ssnakES"), Some(&[37][..]));
    assert_eq!(matches.offsets("sccaTdg"), Some(&[52][..]));

    println!("\n> Results:");
    for (word, offsets) in matches.iter() {
        for &i in offsets {
            println!(
                " - Word {} appears from {} to {}",
                word,
                i,
                i + word.chars().count() - 1
            );
        }
    }
}
