// cli/src/main.rs
use std::path::PathBuf;

use clap::Parser;

use wordwarp_engine::Dictionary;

mod play;
mod render;
mod survey;

use survey::{NoopSink, Runner, SurveyConfig, SurveySink, TableSink};

#[derive(Parser, Debug)]
#[command(name = "wordwarp_cli")]
struct Args {
    // ---------------- level / dictionary ----------------

    /// RNG seed (optional; random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Dictionary file (JSON string array, dict_build output). Built-in list if omitted.
    #[arg(long)]
    dict: Option<PathBuf>,

    // ---------------- interactive pacing ----------------

    /// Sleep ms between animation phases (0 = no pacing)
    #[arg(long, default_value_t = 400)]
    sleep_ms: u64,

    // ---------------- batch survey ----------------

    /// Generate N levels and report solvability stats instead of playing (0 = play)
    #[arg(long, default_value_t = 0)]
    survey_levels: u64,

    /// Progress bar (survey mode)
    #[arg(long)]
    progress: bool,

    /// Print a table row every N levels (0 disables)
    #[arg(long, default_value_t = 0)]
    report_every: u64,

    /// Reprint table header every N printed rows
    #[arg(long, default_value_t = 20)]
    report_header_every: u64,
}

fn main() {
    let args = Args::parse();

    let dict = match &args.dict {
        Some(path) => match Dictionary::from_json_path(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Dictionary::builtin(),
    };

    let base_seed = args.seed.unwrap_or_else(rand::random);

    if args.survey_levels > 0 {
        let cfg = SurveyConfig {
            levels: args.survey_levels,
            base_seed,
            progress: args.progress,
            report_every: args.report_every,
            report_header_every: args.report_header_every,
        };

        // Reporting sink: either a periodic table printer or a no-op.
        let sink: Box<dyn SurveySink> = if args.report_every > 0 {
            Box::new(TableSink::new(args.report_every, args.report_header_every))
        } else {
            Box::new(NoopSink::default())
        };

        let mut runner = Runner::new(cfg, sink);
        let report = runner.run(&dict);

        // Final one-line summary (useful for logs / grep).
        println!(
            "DONE: levels={} dict_words={} elapsed={:.3}s levels/s={:.1} avg_attempts={:.2} max_attempts={} fallbacks={} avg_solutions={:.2} avg_shortest={:.2}",
            report.levels,
            dict.len(),
            report.elapsed_s,
            report.levels_per_s,
            report.avg_attempts,
            report.max_attempts,
            report.fallbacks,
            report.avg_solutions,
            report.avg_shortest,
        );
        return;
    }

    play::run(base_seed, &dict, args.sleep_ms);
}
