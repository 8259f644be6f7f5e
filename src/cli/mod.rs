mod group_list;
mod verify;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::json;

use dealbase::{DEAL_CODEC, Partition, encode_deal, parse_index};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the index of a deal.
    Encode {
        /// Three or four groups of 13 element ids, e.g. `0-12` or `0,4,8-10`.
        #[arg(num_args = 3..=4, required = true)]
        groups: Vec<String>,
        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Print the deal with the given index.
    Decode {
        /// Decimal index below the number of deals.
        #[arg(allow_hyphen_values = true)]
        index: String,
        /// Print JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Generate random deals and print them with their indices.
    Random {
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible output; drawn from entropy when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check the codec round trip on random deals and random indices.
    Verify {
        #[arg(long, default_value_t = 100_000)]
        samples: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print the radix of each group and the total number of deals.
    Bounds,
}

/// Parse CLI arguments and execute the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode { groups, json } => {
            let groups = groups
                .iter()
                .map(|group| group_list::parse_group(group))
                .collect::<Result<Vec<_>>>()?;
            let index = encode_deal(groups.as_slice()).context("cannot encode deal")?;
            if json {
                println!("{}", json!({ "index": index.to_string() }));
            } else {
                println!("{index}");
            }
        }
        Commands::Decode { index, json } => {
            let index = parse_index(&index)?;
            let partition = DEAL_CODEC.decode(index)?;
            if json {
                let value = json!({
                    "index": index.to_string(),
                    "groups": partition.groups(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{partition}");
            }
        }
        Commands::Random { count, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            for i in 0..count {
                let partition = Partition::random(&mut rng);
                let index = DEAL_CODEC.encode_partition(&partition)?;
                if i > 0 {
                    println!();
                }
                println!("{index}");
                println!("{partition}");
            }
        }
        Commands::Verify { samples, seed } => {
            verify::run_verify(samples, seed)?;
        }
        Commands::Bounds => {
            let [first, second, third] = DEAL_CODEC.radices();
            println!("C(52,13) = {first}");
            println!("C(39,13) = {second}");
            println!("C(26,13) = {third}");
            println!("deals    = {}", DEAL_CODEC.total_deals());
            info!("largest index is {}", DEAL_CODEC.total_deals() - 1);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
