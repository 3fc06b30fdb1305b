use std::net::Ipv4Addr;
use log::{info, warn};
use rand::RngExt;
use crate::store::enums::store_error::StoreError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::self_test_report::SelfTestReport;
use crate::tracker::structs::tracker_store::TrackerStore;

impl TrackerStore {
    /// Runs `operations` random inserts, lookups and removals spread over `threads` workers.
    ///
    /// Workers only look up and remove keys they inserted themselves, so every
    /// lookup of a live key is expected to hit. Failed operations are counted,
    /// not retried.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn self_test(&self, operations: u64, threads: usize) -> SelfTestReport
    {
        let threads = threads.max(1);
        info!("[SELFTEST] running {operations} operations on {threads} threads");

        let mut report = SelfTestReport { threads, ..Default::default() };
        std::thread::scope(|scope| {
            let workers: Vec<_> = (0..threads)
                .map(|worker| {
                    let share = operations / threads as u64 + u64::from((worker as u64) < operations % threads as u64);
                    scope.spawn(move || self.self_test_worker(share))
                })
                .collect();
            for worker in workers {
                match worker.join() {
                    Ok(partial) => report += partial,
                    Err(_) => warn!("[SELFTEST] a worker panicked"),
                }
            }
        });

        info!(
            "[SELFTEST] done: {} inserted, {} found, {} removed, {} failed",
            report.inserted, report.found, report.removed, report.failed
        );
        report
    }

    fn self_test_worker(&self, operations: u64) -> SelfTestReport
    {
        let mut rng = rand::rng();
        let mut report = SelfTestReport { threads: 1, operations, ..Default::default() };
        let mut peers: Vec<PeerId> = Vec::new();
        let mut torrents: Vec<InfoHash> = Vec::new();

        for _ in 0..operations {
            let result: Result<(), StoreError> = match rng.random_range(0..6u8) {
                0 | 1 => {
                    let peer_id = PeerId(rng.random());
                    let record = PeerRecord {
                        peer_id,
                        address: Ipv4Addr::from(rng.random::<u32>()),
                        port: rng.random(),
                        left: rng.random_range(0..1024),
                        event: AnnounceEvent::Started,
                        numwant: 50,
                        torrent: torrents.last().copied(),
                        ..Default::default()
                    };
                    self.insert_user(record).map(|outcome| {
                        if outcome.is_inserted() {
                            report.inserted += 1;
                            peers.push(peer_id);
                        }
                    })
                }
                2 => {
                    let info_hash = InfoHash(rng.random());
                    self.add_torrent(info_hash).map(|outcome| {
                        if outcome.is_inserted() {
                            report.inserted += 1;
                            torrents.push(info_hash);
                        }
                    })
                }
                3 if !peers.is_empty() => {
                    let peer_id = peers[rng.random_range(0..peers.len())];
                    self.get_user(peer_id).map(|found| {
                        if found.is_some() {
                            report.found += 1;
                        }
                    })
                }
                4 if !peers.is_empty() => {
                    let peer_id = peers.swap_remove(rng.random_range(0..peers.len()));
                    self.remove_user(peer_id).map(|removed| {
                        if removed.is_some() {
                            report.removed += 1;
                        }
                    })
                }
                5 if !torrents.is_empty() => {
                    let info_hash = torrents.swap_remove(rng.random_range(0..torrents.len()));
                    self.remove_torrent(info_hash).map(|removed| {
                        if removed.is_some() {
                            report.removed += 1;
                        }
                    })
                }
                _ => Ok(()),
            };
            if result.is_err() {
                report.failed += 1;
            }
        }
        report
    }
}
