#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use roulement::{
    io,
    model::{Horizon, Plan},
    storage::{JsonStorage, Storage},
    sync::{merge_conflicts, PlannedSchedules},
    Planner, Schedule, SolveError, SolveOptions,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de roulement équitable (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Définir un horizon quotidien [start, end]
    Span {
        /// %Y-%m-%d
        #[arg(long)]
        start: String,
        /// %Y-%m-%d
        #[arg(long)]
        end: String,
    },

    /// Importer des candidats depuis un CSV
    ImportCandidates {
        #[arg(long)]
        csv: String,
    },

    /// Importer les dates de slots depuis un CSV
    ImportSlots {
        #[arg(long)]
        csv: String,
    },

    /// Marquer une date indisponible pour un candidat
    Blackout {
        #[arg(long)]
        handle: String,
        /// %Y-%m-%d
        #[arg(long)]
        date: String,
    },

    /// Fusionner les conflits d'autres plannings (fichier JSON de plannings)
    Sync {
        #[arg(long)]
        json: String,
    },

    /// Résoudre le roulement au coût d'équité minimal
    Solve {
        /// Garde tous les enfants passant la borne (optimalité prouvée, plus lent)
        #[arg(long)]
        exhaustive: bool,
        /// Budget d'expansions de la recherche
        #[arg(long)]
        max_steps: Option<u64>,
        /// Affiche tous les plannings à égalité, pas seulement le premier
        #[arg(long)]
        all: bool,
        /// Export CSV du planning retenu (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Lister le planning courant et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut plan = storage.load().unwrap_or_default();

    let code = match cli.cmd {
        Commands::Span { start, end } => {
            let start: NaiveDate = start.parse()?;
            let end: NaiveDate = end.parse()?;
            plan.horizon = Horizon::span(start, end).map_err(anyhow::Error::msg)?;
            storage.save(&plan)?;
            0
        }
        Commands::ImportCandidates { csv } => {
            let candidates = io::import_candidates_csv(csv)?;
            plan.roster.candidates.extend(candidates);
            storage.save(&plan)?;
            0
        }
        Commands::ImportSlots { csv } => {
            plan.horizon = io::import_horizon_csv(csv)?;
            storage.save(&plan)?;
            0
        }
        Commands::Blackout { handle, date } => {
            let date: NaiveDate = date.parse()?;
            let Some(candidate) = plan.roster.find_mut_by_handle(&handle) else {
                bail!("unknown candidate: {handle}");
            };
            candidate.block(date);
            storage.save(&plan)?;
            0
        }
        Commands::Sync { json } => {
            let data = std::fs::read(&json)?;
            let schedules: Vec<Schedule> = serde_json::from_slice(&data)?;
            let source = PlannedSchedules::new(schedules);
            merge_conflicts(&mut plan.roster, &source, &plan.horizon)?;
            storage.save(&plan)?;
            0
        }
        Commands::Solve {
            exhaustive,
            max_steps,
            all,
            out_csv,
        } => {
            let mut planner = Planner::new();
            planner.add_candidates(plan.roster.candidates.clone());
            planner.set_horizon(plan.horizon.clone());

            let opts = SolveOptions {
                exhaustive,
                max_steps,
            };
            match planner.solve(opts) {
                Ok(outcome) => {
                    let shown: &[Schedule] = if all {
                        &outcome.schedules
                    } else {
                        std::slice::from_ref(outcome.preferred())
                    };
                    for schedule in shown {
                        print_schedule(schedule, &plan);
                    }
                    println!(
                        "cost={} ties={} expanded={} nodes={}",
                        outcome.cost,
                        outcome.schedules.len(),
                        outcome.expanded,
                        outcome.nodes
                    );
                    if let Some(path) = out_csv {
                        io::export_schedule_csv(path, outcome.preferred(), &plan.roster)?;
                    }
                    plan.schedule = Some(outcome.preferred().clone());
                    storage.save(&plan)?;
                    0
                }
                Err(err @ SolveError::Infeasible { .. }) => {
                    eprintln!("{err}");
                    // Code 2 = WARNING/INCOMPLETE
                    2
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_plan_json(path, &plan)?;
            }
            if let Some(schedule) = &plan.schedule {
                if let Some(path) = out_csv {
                    io::export_schedule_csv(path, schedule, &plan.roster)?;
                }
                print_schedule(schedule, &plan);
            } else {
                println!("no schedule yet (run solve)");
            }
            0
        }
    };

    std::process::exit(code);
}

fn print_schedule(schedule: &Schedule, plan: &Plan) {
    for entry in &schedule.entries {
        let handle = plan
            .roster
            .find_by_id(&entry.candidate)
            .map(|c| c.handle.as_str())
            .unwrap_or("-");
        println!("{} | {}", entry.date.format("%Y-%m-%d"), handle);
    }
}
