use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::available_parallelism;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use torrust_memstore::common::common::setup_logging;
use torrust_memstore::config::structs::configuration::Configuration;
use torrust_memstore::structs::Cli;
use torrust_memstore::tracker::structs::tracker_store::TrackerStore;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let store = match TrackerStore::new(config.clone()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("[BOOT] unable to build the tracker store: {e}");
            exit(1);
        }
    };

    info!("[BOOT] Starting thread for deadlocks...");
    std::thread::spawn(|| {
        loop {
            std::thread::sleep(Duration::from_secs(30));
            let deadlocks = deadlock::check_deadlock();
            if !deadlocks.is_empty() {
                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                for (i, threads) in deadlocks.iter().enumerate() {
                    info!("[DEADLOCK] #{i}");
                    for t in threads {
                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                        info!("[DEADLOCK] {:#?}", t.backtrace());
                    }
                }
            }
        }
    });

    let running = Arc::new(AtomicBool::new(true));
    let console_interval = config.log_console_interval.unwrap_or(0);
    if console_interval > 0 {
        info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
        let store_stats = store.clone();
        let running_stats = running.clone();
        std::thread::spawn(move || {
            while running_stats.load(Ordering::Relaxed) {
                std::thread::sleep(Duration::from_secs(console_interval));
                let stats = store_stats.get_stats();
                info!(
                    "[STATS] Peers: {} - Torrents: {} - Inserts: {}/{} - Removals: {}/{} - Growths: {} | Exhausted: {} - Collisions: {} - Failures: {}",
                    stats.peers, stats.torrents, stats.peer_inserts, stats.torrent_inserts,
                    stats.peer_removals, stats.torrent_removals, stats.arena_growths,
                    stats.exhausted, stats.collisions, stats.failures
                );
            }
        });
    }

    if let Some(operations) = args.self_test {
        let threads = available_parallelism().map(|n| n.get()).unwrap_or(4);
        let report = store.self_test(operations, threads);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    running.store(false, Ordering::Relaxed);

    match store.audit() {
        Ok(audit) => info!("[AUDIT] {}", serde_json::to_string(&audit)?),
        Err(e) => {
            error!("[AUDIT] store invariants violated: {e}");
            exit(1);
        }
    }

    println!("{}", serde_json::to_string_pretty(&store.get_stats())?);
    Ok(())
}
