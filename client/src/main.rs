use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::{Parser, Subcommand, ValueHint};
use solana_sdk::pubkey::Pubkey;
use swapr_client::interface::{load_json, save_json, ClientConfig, OfferReceipt};
use swapr_client::{AssembledTransaction, OfferClient, RpcGateway};
use swapr_core::amount::{to_base_units, to_ui_amount};
use swapr_core::intent::{new_offer_id, parse_mint};
use swapr_core::message::parse_blockhash;
use swapr_core::{
    find_offer_address, EscrowProgram, MakeOfferIntent, TakeOfferIntent, TokenPrograms,
    TokenStandard, TransactionIntent,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_CLIENT_CONFIG_PATH: &str = "./swapr_config.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Make {
            config,
            mint_a,
            mint_b,
            amount_a,
            amount_b,
            decimals_a,
            decimals_b,
            offer_id,
            blockhash,
            dry_run,
            outfile,
        } => {
            let config: ClientConfig = load_json(&config)?;
            let client = OfferClient::from_config(&config)?;

            let intent = MakeOfferIntent::parse(
                offer_id.unwrap_or_else(new_offer_id),
                &mint_a,
                &mint_b,
                to_base_units(&amount_a, decimals_a)?,
                to_base_units(&amount_b, decimals_b)?,
            )?;
            tracing::info!(
                "Offering {} of {} for {} of {}",
                to_ui_amount(intent.amount_a, decimals_a)?,
                intent.mint_a,
                to_ui_amount(intent.amount_b, decimals_b)?,
                intent.mint_b
            );

            let assembled = prepare(&client, intent.into(), blockhash).await?;
            let signature = if dry_run {
                print_dry_run(&assembled)?;
                None
            } else {
                Some(client.submit(assembled.clone()).await?.to_string())
            };

            let receipt = OfferReceipt {
                program_id: config.program_id,
                offer_id: intent.offer_id,
                offer: assembled.offer,
                maker: client.signer(),
                mint_a: intent.mint_a,
                mint_b: intent.mint_b,
                amount_a: intent.amount_a,
                amount_b: intent.amount_b,
                standards: assembled.standards,
                signature,
            };
            if let Some(path) = outfile {
                save_json(&path, &receipt)?;
                tracing::info!("Offer receipt written to {:?}", path);
            }
            if !dry_run {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
                tracing::info!("Offer created successfully");
            }
        }
        Commands::Take {
            config,
            receipt,
            maker,
            offer,
            mint_a,
            mint_b,
            blockhash,
            dry_run,
        } => {
            let config: ClientConfig = load_json(&config)?;
            let intent = match receipt {
                Some(path) => {
                    let receipt: OfferReceipt = load_json(&path)?;
                    receipt.check_program(&config)?;
                    receipt.take_intent()
                }
                None => TakeOfferIntent::parse(
                    &required(maker, "--maker")?,
                    &required(offer, "--offer")?,
                    &required(mint_a, "--mint-a")?,
                    &required(mint_b, "--mint-b")?,
                )?,
            };

            let client = OfferClient::from_config(&config)?;
            let assembled = prepare(&client, intent.into(), blockhash).await?;
            if dry_run {
                print_dry_run(&assembled)?;
            } else {
                let signature = client.submit(assembled).await?;
                println!("{signature}");
                tracing::info!("Offer taken successfully");
            }
        }
        Commands::Derive {
            program_id,
            maker,
            offer_id,
            mint,
        } => {
            let program_id = parse_pubkey(&program_id, "program id")?;
            let maker = parse_pubkey(&maker, "maker")?;
            let program = EscrowProgram::new(program_id, TokenPrograms::default());

            let (offer, bump) = find_offer_address(&program_id, &maker, offer_id);
            let mut out = serde_json::json!({
                "offer": offer.to_string(),
                "bump": bump,
            });
            if let Some(mint) = mint {
                let mint = parse_mint(&mint)?;
                // a vault address is only meaningful under the mint's actual standard
                for standard in [TokenStandard::Legacy, TokenStandard::Extended] {
                    out[format!("vault_{standard}")] = program
                        .associated_address(&mint, &offer, standard)
                        .to_string()
                        .into();
                    out[format!("maker_account_{standard}")] = program
                        .associated_address(&mint, &maker, standard)
                        .to_string()
                        .into();
                }
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

async fn prepare(
    client: &OfferClient<RpcGateway>,
    intent: TransactionIntent,
    blockhash: Option<String>,
) -> anyhow::Result<AssembledTransaction> {
    let assembled = match blockhash {
        Some(b) => client.prepare_at(&intent, parse_blockhash(&b)?).await?,
        None => client.prepare(&intent).await?,
    };
    Ok(assembled)
}

fn parse_pubkey(s: &str, what: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(s.trim()).with_context(|| format!("parsing {what} {s:?}"))
}

fn required(value: Option<String>, flag: &str) -> anyhow::Result<String> {
    value.with_context(|| format!("{flag} is required unless --receipt is given"))
}

fn print_dry_run(assembled: &AssembledTransaction) -> anyhow::Result<()> {
    let out = serde_json::json!({
        "offer": assembled.offer.to_string(),
        "standards": assembled.standards,
        "message": BASE64.encode(assembled.message.serialize()),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

#[derive(Parser)]
#[command(name = "swapr-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lock mint A in a new offer in exchange for mint B
    Make {
        #[arg(short, long,
            value_parser,
            default_value = DEFAULT_CLIENT_CONFIG_PATH,
            value_hint = ValueHint::FilePath)]
        config: PathBuf,

        #[arg(long)]
        mint_a: String,

        #[arg(long)]
        mint_b: String,

        /// Offered amount of mint A, as a decimal string
        #[arg(long)]
        amount_a: String,

        /// Requested amount of mint B, as a decimal string
        #[arg(long)]
        amount_b: String,

        /// Decimals of mint A; 0 means amounts are already in base units
        #[arg(long, default_value_t = 0)]
        decimals_a: u8,

        #[arg(long, default_value_t = 0)]
        decimals_b: u8,

        /// Reuse a specific offer id instead of drawing a random one
        #[arg(long)]
        offer_id: Option<u64>,

        /// Bind to this blockhash instead of fetching the latest one
        #[arg(long)]
        blockhash: Option<String>,

        /// Print the unsigned message instead of submitting it
        #[arg(long)]
        dry_run: bool,

        #[arg(short, long,
            value_parser,
            value_hint = ValueHint::FilePath)]
        outfile: Option<PathBuf>,
    },
    /// Accept an existing offer
    Take {
        #[arg(short, long,
            value_parser,
            default_value = DEFAULT_CLIENT_CONFIG_PATH,
            value_hint = ValueHint::FilePath)]
        config: PathBuf,

        /// Receipt written by `make`
        #[arg(short, long,
            value_parser,
            value_hint = ValueHint::FilePath,
            conflicts_with_all = ["maker", "offer", "mint_a", "mint_b"])]
        receipt: Option<PathBuf>,

        #[arg(long)]
        maker: Option<String>,

        #[arg(long)]
        offer: Option<String>,

        #[arg(long)]
        mint_a: Option<String>,

        #[arg(long)]
        mint_b: Option<String>,

        #[arg(long)]
        blockhash: Option<String>,

        #[arg(long)]
        dry_run: bool,
    },
    /// Print offer and holding-account addresses without touching the network
    Derive {
        #[arg(long)]
        program_id: String,

        #[arg(long)]
        maker: String,

        #[arg(long)]
        offer_id: u64,

        #[arg(long)]
        mint: Option<String>,
    },
}
