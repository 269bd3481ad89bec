use narwhal::{
    Bounds, Category, Inventory, Topology, TopologyBuilder, TopologyConfig, classify,
    generate_demo_topology,
};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Narwhal(narwhal::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Narwhal(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<narwhal::Error> for CliError {
    fn from(value: narwhal::Error) -> Self {
        Self::Narwhal(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Command {
    #[default]
    Topology,
    Summary,
    Demo,
    Classify,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    no_gateways: bool,
    no_demo: bool,
}

#[derive(Serialize)]
struct CategoryCountOut {
    category: Category,
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryOut {
    nodes: usize,
    edges: usize,
    is_demo: bool,
    categories: Vec<CategoryCountOut>,
    bounds: Option<Bounds>,
}

impl SummaryOut {
    fn from_topology(topology: &Topology) -> Self {
        Self {
            nodes: topology.nodes.len(),
            edges: topology.edges.len(),
            is_demo: topology.is_demo,
            categories: topology
                .category_counts()
                .into_iter()
                .map(|(category, count)| CategoryCountOut { category, count })
                .collect(),
            bounds: topology.bounds(),
        }
    }
}

fn usage() -> &'static str {
    "narwhal-cli\n\
\n\
USAGE:\n\
  narwhal-cli [topology] [--pretty] [--config <path>] [--no-gateways] [--no-demo] [<path>|-]\n\
  narwhal-cli summary [--pretty] [--config <path>] [--no-gateways] [--no-demo] [<path>|-]\n\
  narwhal-cli demo [--pretty]\n\
  narwhal-cli classify <device-type>\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the inventory is read from stdin.\n\
  - An inventory is a JSON array of devices, or an object with `devices` and `connections`.\n\
  - Explicit connections are used as given; without them, links are inferred.\n\
  - Set NARWHAL_LOG (e.g. NARWHAL_LOG=debug) to see pipeline logs on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    let command = match it.peek().map(|a| a.as_str()) {
        Some("topology") => Some(Command::Topology),
        Some("summary") => Some(Command::Summary),
        Some("demo") => Some(Command::Demo),
        Some("classify") => Some(Command::Classify),
        _ => None,
    };
    if let Some(command) = command {
        args.command = command;
        it.next();
    }

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--no-gateways" => args.no_gateways = true,
            "--no-demo" => args.no_demo = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.command == Command::Classify && args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NARWHAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn load_config(args: &Args) -> Result<TopologyConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            TopologyConfig::from_json_str(&text).map_err(narwhal::Error::from)?
        }
        None => TopologyConfig::default(),
    };
    if args.no_gateways {
        config.prioritize_gateways = false;
    }
    if args.no_demo {
        config.demo_when_empty = false;
    }
    Ok(config)
}

fn build_topology(args: &Args) -> Result<Topology, CliError> {
    let builder = TopologyBuilder::new(load_config(args)?)?;
    let text = read_input(args.input.as_deref())?;
    let inventory = Inventory::from_json_str(&text).map_err(narwhal::Error::from)?;
    tracing::info!(
        devices = inventory.devices.len(),
        connections = inventory.connections.len(),
        "building topology"
    );
    Ok(builder.build_with_connections(&inventory.devices, &inventory.connections)?)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Classify => {
            let device_type = args.input.as_deref().unwrap_or_default();
            println!("{}", classify(device_type));
            Ok(())
        }
        Command::Demo => write_json(&generate_demo_topology(), args.pretty),
        Command::Topology => write_json(&build_topology(&args)?, args.pretty),
        Command::Summary => {
            let topology = build_topology(&args)?;
            write_json(&SummaryOut::from_topology(&topology), args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
