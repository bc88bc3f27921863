use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExpectArg {
    Any,
    Compound,
    List,
}

#[derive(Parser, Debug)]
#[command(name = "snbt", about = "Convert SNBT (stringified NBT) to JSON", version)]
struct Args {
    /// Which construct the input must be
    #[arg(long, value_enum, default_value_t = ExpectArg::Any)]
    expect: ExpectArg,

    /// Share storage between equal compound keys
    #[arg(long, default_value_t = false)]
    intern_names: bool,

    /// Share storage between equal string values
    #[arg(long, default_value_t = false)]
    intern_values: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = snbt::Options {
        intern_names: args.intern_names,
        intern_values: args.intern_values,
    };

    let json = match args.expect {
        ExpectArg::Any => snbt::parse_value_with(&buf, &options)?.to_json(),
        ExpectArg::Compound => snbt::parse_compound_with(&buf, &options)?.to_json(),
        ExpectArg::List => snbt::Value::List(snbt::parse_list_with(&buf, &options)?).to_json(),
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", serde_json::to_string(&json)?);
    }

    Ok(())
}
