//! Command-line driver: evolves a population on the Schaffer N.2 function
//! and prints `generation max mean min` for every generation.

use clap::Parser;
use tracing::{info, Level};
use u_bitga::ga::{GaConfig, Population, SchafferN2, StdoutReporter};

#[derive(Parser, Debug)]
#[command(name = "bitga", version, about = "Binary-encoded GA on the Schaffer N.2 function")]
struct Cli {
    /// Number of individuals (even)
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// Bits per chromosome
    #[arg(long, default_value_t = 24)]
    chromosome_size: u32,

    /// Crossover probability
    #[arg(long, default_value_t = 0.8)]
    crossover_rate: f64,

    /// Mutation probability
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    /// Number of generations
    #[arg(long, default_value_t = 150)]
    generations: usize,

    /// Random seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Carry the best individual into every generation
    #[arg(long)]
    elitism: bool,

    /// Evaluate fitness in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Log per-generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_chromosome_size(self.chromosome_size)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_max_generations(self.generations)
            .with_elitism(self.elitism)
            .with_parallel(self.parallel);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config();
    let mut rng = config.rng();

    let result = Population::new(config, SchafferN2, &mut rng).and_then(|mut population| {
        let summary = population.run(&mut rng, &mut StdoutReporter)?;
        if let Some(best) = summary.best {
            let (x, y) = population.point(&best.individual);
            info!(fitness = best.fitness(), x, y, age = best.age, "best individual");
        }
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
