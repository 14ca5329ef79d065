use cartograph::{GraphModel, load_graph, save_graph};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(cartograph::Error),
    Json(serde_json::Error),
    Dangling(Vec<String>),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Dangling(ids) => {
                write!(f, "Dangling edge references: {}", ids.join(", "))
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<cartograph::Error> for CliError {
    fn from(value: cartograph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Inspect,
    Validate,
    Normalize,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    strict: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct InspectOut {
    nodes: usize,
    edges: usize,
    labeled_nodes: usize,
    dangling_edges: Vec<String>,
}

fn usage() -> &'static str {
    "cartograph-cli\n\
\n\
USAGE:\n\
  cartograph-cli [inspect] [--pretty] [<path>|-]\n\
  cartograph-cli validate [--strict] [<path>|-]\n\
  cartograph-cli normalize [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - inspect prints a JSON summary of the graph document.\n\
  - validate exits 0 on a well-formed document; --strict also rejects edges\n\
    whose endpoints are missing.\n\
  - normalize re-serializes the document canonically (legacy fields are\n\
    dropped, derived state is never written) to stdout or --out.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "inspect" => args.command = Command::Inspect,
            "validate" => args.command = Command::Validate,
            "normalize" => args.command = Command::Normalize,
            "--pretty" => args.pretty = true,
            "--strict" => args.strict = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
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

    Ok(args)
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

fn load_model(text: &str) -> Result<GraphModel, CliError> {
    let (nodes, edges) = load_graph(text)?;
    let mut graph = GraphModel::new();
    graph.replace_all(nodes, edges);
    Ok(graph)
}

fn dangling_edges(graph: &GraphModel) -> Vec<String> {
    graph
        .edges()
        .filter(|e| graph.node(&e.node1).is_none() || graph.node(&e.node2).is_none())
        .map(|e| e.id.clone())
        .collect()
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;

    match args.command {
        Command::Inspect => {
            let graph = load_model(&text)?;
            let out = InspectOut {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                labeled_nodes: graph.nodes().filter(|n| n.is_labeled()).count(),
                dangling_edges: dangling_edges(&graph),
            };
            write_json(&out, args.pretty)
        }
        Command::Validate => {
            let graph = load_model(&text)?;
            if args.strict {
                let dangling = dangling_edges(&graph);
                if !dangling.is_empty() {
                    return Err(CliError::Dangling(dangling));
                }
            }
            Ok(())
        }
        Command::Normalize => {
            let graph = load_model(&text)?;
            let normalized = save_graph(&graph);
            match args.out.as_deref() {
                None => {
                    print!("{normalized}");
                    Ok(())
                }
                Some(path) => {
                    std::fs::write(path, normalized)?;
                    Ok(())
                }
            }
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

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Dangling(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
