use dotenv::dotenv;
use forager::config::AgentConfig;
use forager::infra::DefaultObserver;
use forager::planners::{EvaluationRegistry, build_agent};
use forager::sim::{DEFAULT_LAYOUT, Game, GameStatus, Layout};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("forager=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn seeded_rng(seed: Option<u64>, offset: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let config = AgentConfig::from_env()?;
    let registry = EvaluationRegistry::new();
    tracing::info!("Agent: {}", config.agent);
    if let Some(seed) = config.seed {
        tracing::info!("- seed: {}", seed);
    }

    let layout = match &config.layout {
        Some(path) => Layout::load(path)?,
        None => DEFAULT_LAYOUT.parse()?,
    };

    let mut successful_runs = 0;
    let mut failed_runs = 0;
    for game_index in 0..config.games {
        let offset = u64::from(game_index) * 2;
        let mut agent = build_agent(&config, &registry, seeded_rng(config.seed, offset))?;
        let mut game = Game::new(
            layout.clone(),
            DefaultObserver,
            seeded_rng(config.seed, offset + 1),
            config.max_turns,
        );

        let summary = game.run(game_index, agent.as_mut());
        match summary.status {
            GameStatus::Won => successful_runs += 1,
            _ => failed_runs += 1,
        }
        if let Some(folder) = &config.summary_folder {
            let path = summary.write_to(folder)?;
            tracing::debug!("Summary written to {}", path.display());
        }
    }

    tracing::info!(
        "Games: {}, won: {}, not won: {}",
        config.games,
        successful_runs,
        failed_runs
    );
    Ok(())
}
