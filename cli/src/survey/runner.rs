// cli/src/survey/runner.rs
#![forbid(unsafe_code)]

use indicatif::{ProgressBar, ProgressStyle};

use wordwarp_engine::{find_solutions, Dictionary, LevelGenerator};

use super::sink::SurveySink;
use super::stats::{FinalReport, SurveyStats};
use super::table::ReportRow;

/// Survey configuration (pure data; no logic).
#[derive(Clone, Debug)]
pub struct SurveyConfig {
    /// Total levels to generate.
    pub levels: u64,
    /// Base seed; level i uses base_seed + i so any level is reproducible
    /// in isolation.
    pub base_seed: u64,

    pub progress: bool,

    /// Print a stats row every N levels. 0 disables reporting completely.
    pub report_every: u64,
    /// Reprint the table header every N printed rows.
    pub report_header_every: u64,
}

/// Batch generator health check: generate N levels against the dictionary
/// and measure how hard the generate-and-test loop has to work. This is
/// where the retry-budget fallback becomes visible in numbers rather than a
/// one-off warning.
pub struct Runner {
    cfg: SurveyConfig,
    sink: Box<dyn SurveySink>,
}

impl Runner {
    pub fn new(cfg: SurveyConfig, sink: Box<dyn SurveySink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, dict: &Dictionary) -> FinalReport {
        let cfg = self.cfg.clone();

        // Progress bar is purely UI; runner logic works without it.
        let pb = if cfg.progress {
            let pb = ProgressBar::new(cfg.levels);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = SurveyStats::new();

        for level_id in 0..cfg.levels {
            let mut generator = LevelGenerator::new(cfg.base_seed.wrapping_add(level_id));
            let (level, report) = generator.generate(dict);

            let solutions = find_solutions(&level.cells, level.start, level.target, dict);
            let shortest = solutions.iter().map(|w| w.chars().count()).min();
            stats.on_level(&report, solutions.len(), shortest);

            if let Some(ref pb) = pb {
                pb.inc(1);
                if !report.solvable {
                    pb.set_message(format!("fallbacks={}", stats.fallbacks));
                }
            }

            if cfg.report_every > 0 && (stats.levels_done % cfg.report_every == 0) {
                let row = ReportRow {
                    level: stats.levels_done,
                    levels_total: cfg.levels,
                    lps: stats.levels_per_sec(),
                    avg_attempts: stats.avg_attempts(),
                    max_attempts: stats.attempts_max,
                    fallbacks: stats.fallbacks,
                    avg_solutions: stats.avg_solutions(),
                    avg_shortest: stats.avg_shortest(),
                };
                self.sink.on_report(&row);
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        stats.final_report()
    }
}
