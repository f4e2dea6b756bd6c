use planetsim::{bench_forces, run, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name, resolved under the scenarios/ directory
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Run the direct-vs-quadtree force benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file =
        File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    Ok(ScenarioConfig::from_yaml(reader)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_forces();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg)?;
    let steps = run(&mut scenario);

    println!(
        "advanced {} bodies over {} steps to t = {:.3}",
        scenario.system.bodies.len(),
        steps,
        scenario.system.t
    );
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        println!(
            "body {i}: position ({:.3}, {:.3}) velocity ({:.3}, {:.3})",
            body.position.x, body.position.y, body.velocity.x, body.velocity.y
        );
    }

    Ok(())
}
