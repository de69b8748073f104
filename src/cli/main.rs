use hat_draw::{experiment::Experiment, structures::target::Target};
use parse_args::parse_args;

mod parse_args;

/// A description of the target, e.g. "at least 2 red and 1 green".
fn describe(target: &Target) -> String {
    if target.is_empty() {
        return "anything".to_string();
    }

    let parts = target
        .minimums()
        .iter()
        .map(|(label, minimum)| format!("{minimum} {label}"))
        .collect::<Vec<_>>();
    format!("at least {}", parts.join(" and "))
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let (mut config, cli_options) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if !cli_options.seeded {
        config.seed.value = rand::random();
    }
    println!("c Seed: {}", config.seed.value);

    let draw_size = config.draw_size.value;
    let mut the_experiment = Experiment::from_config(config);

    let estimate = match the_experiment.run(&cli_options.pool, &cli_options.target) {
        Ok(estimate) => estimate,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Probability of drawing {} in {draw_size} draws from {}: {estimate}",
        describe(&cli_options.target),
        cli_options.pool,
    );
}
