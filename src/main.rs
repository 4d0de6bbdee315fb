use clap::{Parser, ValueEnum};
use log::debug;
use recipe_search::render::{self, html, terminal};
use recipe_search::{load_config, RecipeSearch, ResultsView, SearchError, Searcher};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-search",
    version,
    about = "Find recipes by ingredients you have at home"
)]
struct Args {
    /// Ingredient query to search for
    query: Option<String>,

    /// Fill the query from an example chip (1-5 or its name)
    #[arg(short, long, conflicts_with = "query")]
    example: Option<String>,

    /// Output format for one-shot searches
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the rendered output to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Read queries from stdin until `:quit`
    #[arg(short, long)]
    interactive: bool,

    /// Configuration file (defaults to recipe-search.toml if present)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

const USAGE: &str =
    "Type ingredients and press enter. `:example N` fills an example, `:quit` exits.";

/// One line of interactive input
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Example(&'a str),
    /// Submit whatever the query currently holds
    Submit,
    /// Replace the query and submit
    Search(&'a str),
    /// Unknown command, or a command missing its argument
    Usage,
}

/// Lines starting with `:` are commands and never reach the API
fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Submit;
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Search(line);
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };
    match name {
        "quit" | "q" => Command::Quit,
        "example" | "e" if !argument.is_empty() => Command::Example(argument),
        _ => Command::Usage,
    }
}

#[tokio::main]
async fn main() -> Result<(), SearchError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    debug!("Loaded configuration: base_url={}", config.api.base_url);

    let searcher = RecipeSearch::builder().config(&config).build()?;

    if let Some(reference) = &args.example {
        searcher.select_example(reference).await?;
    }
    if let Some(query) = &args.query {
        searcher.set_query(query.as_str()).await;
    }

    if args.interactive || (args.query.is_none() && args.example.is_none()) {
        return interactive(searcher).await;
    }

    searcher.submit().await;
    let snapshot = searcher.snapshot().await;
    let view = render::view_snapshot(&snapshot);
    let rendered = match args.format {
        Format::Text => format!("{}\n{}\n", terminal::header(&snapshot.query), view),
        Format::Html => html::page(&snapshot.query, &view),
    };

    match &args.output {
        Some(path) => tokio::fs::write(path, rendered).await?,
        None => print!("{rendered}"),
    }
    Ok(())
}

async fn interactive(searcher: Searcher) -> Result<(), SearchError> {
    let query = searcher.snapshot().await.query;
    println!("{}", terminal::header(&query));
    println!("{USAGE}\n");

    // Print the results area whenever it changes
    let mut updates = searcher.subscribe();
    let printer = tokio::spawn(async move {
        let mut last = ResultsView::Idle;
        while updates.changed().await.is_ok() {
            let view = render::view_snapshot(&updates.borrow_and_update());
            if view != last {
                println!("{view}\n");
                last = view;
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::Example(reference) => match searcher.select_example(reference).await {
                Ok(query) => println!("Search: {query}"),
                Err(e) => eprintln!("{e}"),
            },
            Command::Usage => eprintln!("{USAGE}"),
            Command::Submit => {
                let searcher = searcher.clone();
                tokio::spawn(async move { searcher.submit().await });
            }
            Command::Search(query) => {
                searcher.set_query(query).await;
                let searcher = searcher.clone();
                tokio::spawn(async move { searcher.submit().await });
            }
        }
    }

    printer.abort();
    Ok(())
}
