use clap::Parser;

use biomag_config::{load_config, NutrientValues, OrganismConfig, ScenarioConfig};
use biomag_core::{
    concentration_shift, estimate_waste, evaluate_organism, GarbagePatch, NutrientTriple,
    OrganismParams, StrawUsage, WasteRouting,
};
use biomag_report::{chart, JsonRender, ProseRender, Render, RunReport, Sink, StdioSink};

use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario configuration file (JSON or TOML).
    /// Built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where the percent-change bar chart is written.
    #[arg(long, default_value = "bmf_change.svg")]
    chart: PathBuf,

    /// Emit the run summary as JSON instead of prose.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    // Load the scenario, or fall back to the presentation defaults.
    let scenario = match &args.config {
        Some(path) => match load_config(path) {
            Ok(scenario) => {
                log::info!("loaded scenario from {}", path.display());
                scenario
            }
            Err(e) => {
                eprintln!("Failed to load scenario: {:?}", e);
                process::exit(1);
            }
        },
        None => {
            log::info!("no scenario file given, using built-in defaults");
            ScenarioConfig::default()
        }
    };

    // --- Waste and concentration estimate ---
    let usage = StrawUsage {
        population: scenario.straws.population,
        straws_per_person_per_month: scenario.straws.per_person_per_month,
        straw_volume_l: scenario.straws.straw_volume_l,
    };
    let routing = WasteRouting {
        ocean_fraction: scenario.routing.ocean_fraction,
        patch_fraction: scenario.routing.patch_fraction,
    };
    let patch = GarbagePatch {
        mass_kg: scenario.patch.mass_kg,
        area_km2: scenario.patch.area_km2,
        plastic_density_kg_per_l: scenario.patch.plastic_density_kg_per_l,
    };

    let waste = estimate_waste(&usage, &routing);
    let shift = concentration_shift(&patch, waste.patch_volume_l);

    // --- Per-organism factors ---
    let z = to_triple(&scenario.effective_concentration);
    let digestibility_shift = scenario.coupling.lam * shift.delta_l_per_km2;
    log::debug!("uniform digestibility shift: {}", digestibility_shift);

    let readings = scenario
        .organisms
        .iter()
        .map(|organism| evaluate_organism(&to_params(organism), &z, digestibility_shift))
        .collect();

    let report = RunReport::new(waste, shift, readings);

    // --- Emit the report ---
    let renderer: Box<dyn Render> = if args.json {
        Box::new(JsonRender)
    } else {
        Box::new(ProseRender)
    };

    let rendered = match renderer.render(&report) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Failed to render report: {}", e);
            process::exit(1);
        }
    };

    let mut sink = StdioSink::new();
    if let Err(e) = sink.write(rendered.as_bytes()) {
        eprintln!("Failed to write report: {}", e);
        process::exit(1);
    }

    if let Err(e) = chart::render_bar_chart(&args.chart, &report.organisms) {
        eprintln!("Failed to render chart: {}", e);
        process::exit(1);
    }
    log::info!("chart written to {}", args.chart.display());
}

fn to_triple(values: &NutrientValues) -> NutrientTriple {
    NutrientTriple::new(values.protein, values.carbohydrate, values.lipid)
}

fn to_params(config: &OrganismConfig) -> OrganismParams {
    OrganismParams::new(
        config.name.clone(),
        to_triple(&config.digestibility),
        to_triple(&config.diet_fraction),
        config.gamma,
    )
}
