//! Console Halli Galli
//!
//! Reads `<channel> <player> <text>` lines from stdin and prints every
//! table's notifications to stdout. Closing stdin closes all tables.
use clap::Parser;
use halligalli::Args;
use halligalli::Console;
use halligalli::Intent;
use hg_cards::Catalog;
use hg_gameroom::Handle;
use hg_gameroom::Rule;
use hg_gameroom::relay;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hg_core::log();
    hg_core::kys();
    let ref args = Args::parse();
    let rule = Rule::try_from(args)?;
    let catalog = Arc::new(Catalog::load(&args.assets)?);
    let Handle {
        events,
        messages,
        task,
    } = Handle::spawn(rule, catalog.clone())?;
    let printer = tokio::spawn(relay(messages, Console::stdout(rule, catalog)));
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Intent::parse(&line) {
            Some(event) => {
                log::debug!("[console] {} <- {}", event.channel, event.action);
                if events.send(event).await.is_err() {
                    break;
                }
            }
            None => log::warn!("[console] expected <channel> <player> <text>"),
        }
    }
    drop(events);
    task.await?;
    printer.await?;
    Ok(())
}
