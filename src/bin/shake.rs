//! Shake the magic eight ball once and print the answer
//!
//! Extra arguments replace the default answers.

use anyhow::Result;

use sushi_neko::Oracle;

fn main() -> Result<()> {
    env_logger::init();

    let answers: Vec<String> = std::env::args().skip(1).collect();
    let oracle = if answers.is_empty() {
        Oracle::default()
    } else {
        Oracle::new(answers)
    };

    let mut rng = rand::rng();
    println!("{}", oracle.shake(&mut rng));
    Ok(())
}
