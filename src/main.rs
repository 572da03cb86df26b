//! biogate CLI
//!
//! Usage:
//!   biogate --status                        # Probe capabilities and print
//!   biogate --authenticate                  # Probe, then run a challenge
//!   biogate --serve                         # HTTP API server
//!   biogate --simulate --outcome failure    # Drive a scripted platform
//!   biogate --status --json                 # JSON output

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::sync::Arc;

use biogate::core::{
    run_server, AuthOptions, BiometricPlatform, BiometricProbe, HostPlatform, MockAnswers,
    MockPlatform, ProbeConfig,
};
use biogate::types::label::{modality_list, security_level_label};
use biogate::types::{AuthenticationType, ProbeError, SecurityLevel};
use biogate::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "biogate",
    version = VERSION,
    about = "Biometric capability probe and authentication gate",
    long_about = "biogate checks device biometric capability (hardware, enrollment,\n\
                  security level, modalities) and can run a single interactive\n\
                  authentication challenge.\n\n\
                  Modes:\n  \
                  --status        Probe capabilities and print a report\n  \
                  --authenticate  Probe, then run one challenge\n  \
                  --serve         HTTP API server mode\n\n\
                  On a dev host the real challenge is unavailable; use --simulate\n\
                  with --hardware/--enrolled/--level/--outcome to script one."
)]
struct Args {
    /// Probe capabilities and print a report (default mode)
    #[arg(short, long)]
    status: bool,

    /// Probe capabilities, then run one authentication challenge
    #[arg(short, long)]
    authenticate: bool,

    /// Run as HTTP API server
    #[arg(long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Clear authenticated state after a failed challenge
    /// (default keeps a prior success sticky)
    #[arg(long)]
    reset_on_failure: bool,

    /// Use a scripted platform instead of the host backend
    #[arg(long)]
    simulate: bool,

    /// Simulated: device has biometric hardware
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    hardware: bool,

    /// Simulated: user has enrolled a biometric credential
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    enrolled: bool,

    /// Simulated: enrolled security level
    #[arg(long, value_enum, default_value_t = LevelArg::Strong)]
    level: LevelArg,

    /// Simulated: challenge outcome
    #[arg(long, value_enum, default_value_t = OutcomeArg::Success)]
    outcome: OutcomeArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    None,
    Secret,
    Weak,
    Strong,
}

impl From<LevelArg> for SecurityLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::None => SecurityLevel::None,
            LevelArg::Secret => SecurityLevel::Secret,
            LevelArg::Weak => SecurityLevel::BiometricWeak,
            LevelArg::Strong => SecurityLevel::BiometricStrong,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutcomeArg {
    Success,
    Failure,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let platform = build_platform(&args);
    let config = ProbeConfig {
        reset_on_failure: args.reset_on_failure,
        options: AuthOptions::default(),
    };

    if args.serve {
        if let Err(e) = run_server(&args.addr, platform, config).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
    } else if args.authenticate {
        run_authenticate(platform, config, &args).await;
    } else {
        run_status(platform, config, &args).await;
    }
}

/// Pick the platform backend: host by default, scripted with --simulate
fn build_platform(args: &Args) -> Arc<dyn BiometricPlatform> {
    if args.simulate {
        let modalities = if args.hardware {
            vec![AuthenticationType::Fingerprint, AuthenticationType::FacialRecognition]
        } else {
            vec![]
        };
        Arc::new(MockPlatform::new(MockAnswers {
            has_hardware: args.hardware,
            is_enrolled: args.enrolled,
            enrolled_level: args.level.into(),
            supported_types: modalities,
            auth_succeeds: matches!(args.outcome, OutcomeArg::Success) && args.hardware && args.enrolled,
            failing_query: None,
            auth_errors: false,
        }))
    } else {
        Arc::new(HostPlatform::new())
    }
}

/// Probe capabilities and print a report
async fn run_status(platform: Arc<dyn BiometricPlatform>, config: ProbeConfig, args: &Args) {
    let mut probe = BiometricProbe::with_config(platform, config);

    match probe.initialize().await {
        Ok(snapshot) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot).unwrap());
            } else {
                print_snapshot_report(&probe);
            }
        }
        Err(e) => exit_probe_error(e),
    }
}

/// Probe, then run one authentication challenge
async fn run_authenticate(platform: Arc<dyn BiometricPlatform>, config: ProbeConfig, args: &Args) {
    let mut probe = BiometricProbe::with_config(platform, config);
    probe.on_success(|| println!("{}", "  Challenge succeeded".green()));
    probe.on_error(|| println!("{}", "  Challenge failed".red()));

    if let Err(e) = probe.initialize().await {
        exit_probe_error(e);
    }
    if !args.json {
        print_snapshot_report(&probe);
        println!();
    }

    match probe.authenticate().await {
        Ok(outcome) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
            } else {
                let verdict = if outcome.authenticated {
                    "Logged in".green().bold()
                } else {
                    "Logged out".red().bold()
                };
                println!("  {} ({})", verdict, outcome.reason.code());
            }
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(e) => exit_probe_error(e),
    }
}

/// Print the capability report for the latest snapshot
fn print_snapshot_report(probe: &BiometricProbe) {
    let snapshot = match probe.snapshot() {
        Some(s) => s,
        None => return,
    };

    println!("biogate v{} - capability report", VERSION);
    println!();
    println!("  Supported   {}", yes_no(snapshot.hardware_supported));
    println!("  Enrolled    {}", yes_no(snapshot.enrolled));
    println!("  Level       {}", security_level_label(snapshot.security_level));
    println!("  Modalities  {}", modality_list(&snapshot.modalities));
    println!();
    let readiness = if snapshot.is_usable() {
        "Ready for biometric challenge".green()
    } else {
        "Biometric challenge unavailable".yellow()
    };
    println!("  {}", readiness);
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}

fn exit_probe_error(e: ProbeError) -> ! {
    eprintln!("{} {}", "Probe error:".red().bold(), e);
    std::process::exit(2);
}
