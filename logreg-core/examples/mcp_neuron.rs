//! Example: logistic transforms feeding a threshold neuron
//!
//! Run: `cargo run -p logreg-core --example mcp_neuron`

use logreg_core::prelude::*;

fn main() -> logreg_core::Result<()> {
    let lr = LogisticRegression::new();

    println!("Odds and log-odds:");
    for p in [0.1, 0.49, 0.5, 0.51, 0.9] {
        println!(
            "   p = {:.2}  odds = {:.3}  logit = {:+.3}",
            p,
            lr.odds(p),
            lr.logit(p, "odds")?
        );
    }
    println!();

    println!("Sigmoid:");
    for z in [-4.0, -2.0, 0.0, 2.0, 4.0] {
        println!("   z = {:+.1}  sigmoid = {:.3}", z, lr.sigmoid(z));
    }
    println!();

    let neuron = Neuron::new();
    let w = [1.0, 1.0, 0.0];
    println!("Neuron ({}), w = {:?}, t = 0.5:", neuron.algorithm(), w);
    for x in [[0.25, 0.3, 0.1], [0.1, 0.2, 0.9], [0.5, 0.0, 0.0]] {
        println!(
            "   x = {:?}  decide = {:+}  decide_bias = {}",
            x,
            neuron.decide(&w, &x, 0.5)?,
            neuron.decide_bias(&w, &x, 0.5)?
        );
    }

    Ok(())
}
