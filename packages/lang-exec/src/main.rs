//! assistant-eval: evaluate expressions, loop headers, conditions and
//! assignments against a variable environment, printing JSON results.
//!
//! Usage:
//!   assistant-eval eval '$(git rev-parse HEAD)'
//!   assistant-eval --var name=foo for 'for $w in $name'
//!   assistant-eval if 'if defined $name' --else
//!   assistant-eval --vars vars.json assign '$ok, $out' '$(make)'

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use assistant_lang::Value;
use assistant_lang_exec::config::HostConfig;
use assistant_lang_exec::control::Section;
use assistant_lang_exec::host::ProcessHost;
use assistant_lang_exec::state::Environment;
use assistant_lang_exec::{assign, evaluate_str, resolve_condition, resolve_iterable};

#[derive(Parser)]
#[command(name = "assistant-eval", version, about = "Evaluate assistant script expressions")]
struct Cli {
    /// Bind a text variable (format: NAME=VALUE). Repeatable.
    #[arg(long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// JSON object file with initial variables.
    #[arg(long = "vars", value_name = "FILE")]
    vars_file: Option<PathBuf>,

    /// TOML file configuring how commands are run.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print its logical and value results.
    Eval { expression: String },

    /// Resolve a loop header and print its control variables and items.
    For { header: String },

    /// Resolve an if header and print the branch that applies.
    If {
        header: String,

        /// Treat the if as followed by an else section.
        #[arg(long = "else")]
        has_else: bool,
    },

    /// Assign an expression to one or two targets and print the environment.
    Assign { targets: String, expression: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("assistant-eval: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    let host = ProcessHost::new(config);
    let mut env = load_environment(cli.vars_file.as_ref(), &cli.vars)?;

    let output = match cli.command {
        Commands::Eval { expression } => {
            serde_json::to_value(evaluate_str(&env, &host, &expression)?)?
        }
        Commands::For { header } => serde_json::to_value(resolve_iterable(&env, &host, &header)?)?,
        Commands::If { header, has_else } => {
            let if_section = Section::new(header, "if");
            let else_section = Section::new("else", "else");
            let next = has_else.then_some(&else_section);
            let branch = resolve_condition(&env, &host, &if_section, next)?;
            json!({
                "branch": branch.kind.index(),
                "skip_next": branch.skip_next,
                "taken": branch.body,
            })
        }
        Commands::Assign {
            targets,
            expression,
        } => {
            assign(&mut env, &host, &targets, &Value::text(expression))?;
            serde_json::to_value(env.as_map())?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Variables from `--vars` first, then each `--var` on top in order.
fn load_environment(vars_file: Option<&PathBuf>, pairs: &[String]) -> Result<Environment> {
    let mut env = match vars_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let vars: IndexMap<String, Value> = serde_json::from_str(&text)
                .with_context(|| format!("{} is not a JSON object of variables", path.display()))?;
            Environment::from(vars)
        }
        None => Environment::new(),
    };
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("--var expects NAME=VALUE, got: {pair}"))?;
        env.set(name, value);
    }
    tracing::debug!(count = env.len(), "loaded variables");
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;

    fn vars_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn var_pairs_bind_text() {
        let env = load_environment(None, &["name=foo".into(), "query=a=b".into()]).unwrap();
        assert_eq!(env.get("name"), Some(&Value::text("foo")));
        assert_eq!(env.get("query"), Some(&Value::text("a=b")));
    }

    #[test]
    fn var_without_equals_is_rejected() {
        let err = load_environment(None, &["name".into()]).unwrap_err();
        assert_eq!(err.to_string(), "--var expects NAME=VALUE, got: name");
    }

    #[test]
    fn var_overrides_file_value() {
        let file = vars_file(indoc! {r#"
            {"name": "from-file", "count": 3, "debug": true, "deps": {"serde": "1"}}
        "#});
        let path = file.path().to_path_buf();
        let env = load_environment(Some(&path), &["name=from-flag".into()]).unwrap();

        assert_eq!(env.get("name"), Some(&Value::text("from-flag")));
        assert_eq!(env.get("count"), Some(&Value::text("3")));
        assert_eq!(env.get("debug"), Some(&Value::Bool(true)));
        assert!(matches!(env.get("deps"), Some(Value::Mapping(_))));
        let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "count", "debug", "deps"]);
    }

    #[test]
    fn vars_file_must_be_an_object() {
        let file = vars_file("[1, 2]");
        let path = file.path().to_path_buf();
        let err = load_environment(Some(&path), &[]).unwrap_err();
        assert!(err.to_string().contains("is not a JSON object of variables"), "{err}");
    }

    #[test]
    fn missing_vars_file() {
        let path = PathBuf::from("/nonexistent/vars.json");
        let err = load_environment(Some(&path), &[]).unwrap_err();
        assert_eq!(err.to_string(), "cannot read /nonexistent/vars.json");
    }
}
