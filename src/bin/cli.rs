use camguard::{CamguardConfig, Detector, FrameSource, ScoreReport, TamperKind};
use std::env;
use std::path::PathBuf;

const USAGE: &str = "Usage: camguard-cli <command> [args]

Commands:
  sabotage <image> [--no-smear]      blur, blackout, flash and smear scores
  scene-change <current> <previous>  scene change between two frames
  smear <image>                      smear score only
  batch <image>...                   sabotage scores for many images
  config                             print the effective configuration

Options:
  --config <file>   load calibration from a TOML file
  --json            print JSON instead of text";

struct Options {
    positional: Vec<String>,
    config: Option<PathBuf>,
    json: bool,
    no_smear: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    camguard::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let options = parse_options(&args[2..])?;
    let command = &args[1];
    let result = match command.as_str() {
        "sabotage" => cmd_sabotage(&options),
        "scene-change" => cmd_scene_change(&options),
        "smear" => cmd_smear(&options),
        "batch" => cmd_batch(&options),
        "config" => cmd_config(&options),
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn parse_options(args: &[String]) -> Result<Options, Box<dyn std::error::Error>> {
    let mut options = Options {
        positional: Vec::new(),
        config: None,
        json: false,
        no_smear: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--json" => options.json = true,
            "--no-smear" => options.no_smear = true,
            other => options.positional.push(other.to_string()),
        }
        i += 1;
    }

    Ok(options)
}

fn load_detector(options: &Options) -> Result<Detector, Box<dyn std::error::Error>> {
    let mut config = match &options.config {
        Some(path) => CamguardConfig::load_from_file(path)?,
        None => CamguardConfig::default(),
    };
    if options.no_smear {
        config.detector.include_smear = false;
    }
    Ok(Detector::new(config)?)
}

fn source_arg(options: &Options, index: usize, name: &str) -> Result<FrameSource, String> {
    options
        .positional
        .get(index)
        .map(|p| FrameSource::Path(PathBuf::from(p)))
        .ok_or_else(|| format!("{} image path required", name))
}

fn cmd_sabotage(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let detector = load_detector(options)?;
    let source = source_arg(options, 0, "input")?;
    let report = detector.detect_sabotage(&source)?;
    print_report(&source.describe(), &report, &detector, options.json)
}

fn cmd_scene_change(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let detector = load_detector(options)?;
    let current = source_arg(options, 0, "current")?;
    let previous = source_arg(options, 1, "previous")?;
    let report = detector.detect_scene_change(&current, Some(&previous))?;
    print_report(&current.describe(), &report, &detector, options.json)
}

fn cmd_smear(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let detector = load_detector(options)?;
    let source = source_arg(options, 0, "input")?;
    let report = detector.detect_smear(&source)?;
    print_report(&source.describe(), &report, &detector, options.json)
}

fn cmd_batch(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    if options.positional.is_empty() {
        return Err("batch requires at least one image path".into());
    }
    let detector = load_detector(options)?;
    let sources: Vec<FrameSource> = options
        .positional
        .iter()
        .map(|p| FrameSource::Path(PathBuf::from(p)))
        .collect();

    let results = detector.detect_sabotage_batch(&sources);
    let mut failures = 0;
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(report) => print_report(&source.describe(), &report, &detector, options.json)?,
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}", source.describe(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} images failed", failures, sources.len()).into());
    }
    Ok(())
}

fn cmd_config(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let detector = load_detector(options)?;
    print!("{}", detector.config().to_toml()?);
    Ok(())
}

fn print_report(
    label: &str,
    report: &ScoreReport,
    detector: &Detector,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    println!("{}", label);
    for (key, score) in report.to_map() {
        println!("  {:<18} {:6.2}", key, score);
    }
    let triggered: Vec<String> = report
        .triggered(&detector.config().alerts)
        .iter()
        .map(TamperKind::to_string)
        .collect();
    if !triggered.is_empty() {
        println!("  triggered: {}", triggered.join(", "));
    }
    Ok(())
}
