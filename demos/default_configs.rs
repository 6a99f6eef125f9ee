use option_sensitivity::{default_configs, evaluate_session};

fn main() {
    println!("Option-sensitivity Default Configuration Examples\n");

    let presets = [
        ("Reference", default_configs::reference(), "Interactive use"),
        ("Fine", default_configs::fine(), "Smooth charts for reports"),
        ("Coarse", default_configs::coarse(), "Smoke tests, debugging"),
    ];

    for (i, (name, config, use_case)) in presets.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!("   Sample count: {}", config.sample_count);
        println!("   Varied input: {}", config.varied);
        println!("   Use case: {}", use_case);

        match evaluate_session(config) {
            Ok(view) => {
                let first = view.result.samples.first();
                let last = view.result.samples.last();
                if let (Some(first), Some(last)) = (first, last) {
                    println!(
                        "   Range: {:.3} -> {:.3}, prices {:.4} -> {:.4}",
                        first.value, last.value, first.price, last.price
                    );
                }
                println!("   {}\n", view.summary);
            }
            Err(e) => println!("   Sweep failed: {}\n", e),
        }
    }
}
