#[cfg(test)]
mod tracker_tests {
    mod identifier_tests {
        use crate::store::enums::store_error::StoreError;
        use crate::tracker::structs::auth_key::AuthKey;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;

        const HEX: &str = "0102030405060708090a0b0c0d0e0f1011121314";

        #[test]
        fn test_info_hash_display_and_parse() {
            let hash: InfoHash = HEX.parse().unwrap();
            assert_eq!(hash.0[19], 0x14);
            assert_eq!(hash.to_string(), HEX);
        }

        #[test]
        fn test_parse_rejects_bad_hex() {
            assert!("zz".parse::<InfoHash>().is_err());
            assert!("0102".parse::<PeerId>().is_err());
            assert!(HEX[..38].parse::<AuthKey>().is_err());
        }

        #[test]
        fn test_try_from_slice() {
            let bytes = [5u8; 20];
            assert_eq!(PeerId::try_from(&bytes[..]).unwrap(), PeerId(bytes));
            assert_eq!(AuthKey::try_from(&bytes[..3]), Err(StoreError::InvalidKeyLength(3)));
            assert_eq!(InfoHash::try_from(&[0u8; 21][..]), Err(StoreError::InvalidKeyLength(21)));
        }

        #[test]
        fn test_serde_as_hex_string() {
            let peer_id: PeerId = HEX.parse().unwrap();
            let json = serde_json::to_string(&peer_id).unwrap();
            assert_eq!(json, format!("\"{HEX}\""));
            let back: PeerId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, peer_id);
            assert!(serde_json::from_str::<AuthKey>("\"nothex\"").is_err());
        }

        #[test]
        fn test_as_ref_bytes() {
            let hash = InfoHash([9u8; 20]);
            assert_eq!(hash.as_ref(), &[9u8; 20]);
        }
    }

    mod record_tests {
        use std::net::Ipv4Addr;
        use std::str::FromStr;
        use crate::arena::enums::record::Record;
        use crate::arena::enums::storage_kind::StorageKind;
        use crate::store::traits::stored_record::StoredRecord;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::account_record::AccountRecord;
        use crate::tracker::structs::auth_key::AuthKey;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::peer_record::PeerRecord;
        use crate::tracker::structs::torrent_record::TorrentRecord;

        #[test]
        fn test_peer_record_new() {
            let record = PeerRecord::new(PeerId([1u8; 20]), Ipv4Addr::new(10, 0, 0, 1), 51413, 30);
            assert_eq!(record.address, Ipv4Addr::new(10, 0, 0, 1));
            assert_eq!(record.port, 51413);
            assert_eq!(record.numwant, 30);
            assert_eq!(record.event, AnnounceEvent::Started);
            assert_eq!((record.downloaded, record.uploaded, record.left), (0, 0, 0));
            assert_eq!(record.torrent, None);
            assert_eq!(record.account, None);
        }

        #[test]
        fn test_peer_record_seeder() {
            let mut record = PeerRecord::default();
            assert!(record.is_seeder());
            record.left = 10;
            assert!(!record.is_seeder());
            record.left = 0;
            record.event = AnnounceEvent::Stopped;
            assert!(!record.is_seeder());
        }

        #[test]
        fn test_record_variants_round_trip_through_slot_payload() {
            let peer = PeerRecord { port: 1, ..Default::default() };
            let record = peer.into_record();
            assert_eq!(record.kind(), Some(StorageKind::Peer));
            assert_eq!(PeerRecord::from_record(&record), Some(&peer));
            assert_eq!(TorrentRecord::from_record(&record), None);
            assert_eq!(AccountRecord::from_record(&Record::Vacant), None);
        }

        #[test]
        fn test_key_bytes_follow_the_record() {
            let torrent = TorrentRecord::new(InfoHash([3u8; 20]));
            assert_eq!(torrent.into_record().key_bytes(), Some(&[3u8; 20][..]));
            assert_eq!(Record::Vacant.key_bytes(), None);
            assert_eq!(Record::default_for(StorageKind::Account), Record::Account(AccountRecord::default()));
        }

        #[test]
        fn test_account_credit_saturates() {
            let mut account = AccountRecord::new(AuthKey([2u8; 20]));
            account.credit(10, 20);
            account.credit(u64::MAX, 1);
            assert_eq!(account.total_downloaded, u64::MAX);
            assert_eq!(account.total_uploaded, 21);
        }

        #[test]
        fn test_torrent_peers() {
            let torrent = TorrentRecord { seeders: 3, leechers: 4, ..Default::default() };
            assert_eq!(torrent.peers(), 7);
        }

        #[test]
        fn test_announce_event_text() {
            assert_eq!(AnnounceEvent::from_str("completed").unwrap(), AnnounceEvent::Completed);
            assert_eq!(AnnounceEvent::Stopped.to_string(), "stopped");
            assert!(AnnounceEvent::from_str("paused").is_err());
            assert_eq!(serde_json::to_string(&AnnounceEvent::Started).unwrap(), "\"started\"");
            assert_eq!(AnnounceEvent::Completed as u8, 1);
        }

        #[test]
        fn test_peer_record_serde() {
            let record = PeerRecord {
                torrent: Some(InfoHash([1u8; 20])),
                event: AnnounceEvent::Completed,
                ..Default::default()
            };
            let json = serde_json::to_string(&record).unwrap();
            let back: PeerRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(back, record);
        }
    }

    mod tracker_store_tests {
        use std::net::Ipv4Addr;
        use std::sync::Arc;
        use crate::config::enums::collision_policy::CollisionPolicy;
        use crate::config::structs::configuration::Configuration;
        use crate::store::enums::insert_outcome::InsertOutcome;
        use crate::store::enums::store_error::StoreError;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::peer_record::PeerRecord;
        use crate::tracker::structs::tracker_store::TrackerStore;

        fn store_with(configure: impl FnOnce(&mut Configuration)) -> TrackerStore {
            let mut config = Configuration::init();
            configure(&mut config);
            TrackerStore::new(Arc::new(config)).unwrap()
        }

        fn peer(n: u8) -> PeerId {
            PeerId([n; 20])
        }

        fn torrent(n: u8) -> InfoHash {
            InfoHash([n; 20])
        }

        #[test]
        fn test_add_get_remove_user() {
            let store = store_with(|_| {});
            assert!(store.add_user(peer(1), Ipv4Addr::new(1, 2, 3, 4), 6881, 50).unwrap().is_inserted());
            let record = store.get_user(peer(1)).unwrap().unwrap();
            assert_eq!(record.peer_id, peer(1));
            assert_eq!(record.address, Ipv4Addr::new(1, 2, 3, 4));
            assert_eq!(store.users_count(), 1);
            assert_eq!(store.remove_user(peer(1)).unwrap().unwrap().port, 6881);
            assert_eq!(store.remove_user(peer(1)).unwrap(), None);
            assert_eq!(store.get_user(peer(1)).unwrap(), None);
        }

        #[test]
        fn test_duplicate_user_is_not_overwritten() {
            let store = store_with(|_| {});
            store.add_user(peer(1), Ipv4Addr::LOCALHOST, 1000, 10).unwrap();
            let outcome = store.add_user(peer(1), Ipv4Addr::LOCALHOST, 2000, 10).unwrap();
            assert!(matches!(outcome, InsertOutcome::AlreadyPresent(_)));
            assert_eq!(store.get_user(peer(1)).unwrap().unwrap().port, 1000);
            assert_eq!(store.get_stats().peers, 1);
        }

        #[test]
        fn test_insert_user_keeps_back_references() {
            let store = store_with(|_| {});
            store.add_torrent(torrent(9)).unwrap();
            let record = PeerRecord {
                peer_id: peer(2),
                torrent: Some(torrent(9)),
                left: 100,
                event: AnnounceEvent::Started,
                ..Default::default()
            };
            store.insert_user(record).unwrap();
            let stored = store.get_user(peer(2)).unwrap().unwrap();
            let torrent_record = store.get_torrent(stored.torrent.unwrap()).unwrap().unwrap();
            assert_eq!(torrent_record.info_hash, torrent(9));
        }

        #[test]
        fn test_update_user_and_torrent() {
            let store = store_with(|_| {});
            store.add_user(peer(3), Ipv4Addr::LOCALHOST, 1, 1).unwrap();
            store.add_torrent(torrent(3)).unwrap();
            let updated = store.update_user(peer(3), |record| {
                record.uploaded += 512;
                record.event = AnnounceEvent::Completed;
            }).unwrap().unwrap();
            assert_eq!(updated.uploaded, 512);
            store.update_torrent(torrent(3), |record| record.completed += 1).unwrap();
            assert_eq!(store.get_torrent(torrent(3)).unwrap().unwrap().completed, 1);
            assert_eq!(store.update_torrent(torrent(4), |record| record.completed += 1).unwrap(), None);
        }

        #[test]
        fn test_torrents_listing_and_counts() {
            let store = store_with(|_| {});
            for n in 0..10 {
                store.add_torrent(torrent(n)).unwrap();
            }
            store.remove_torrent(torrent(0)).unwrap();
            assert_eq!(store.torrents_count(), 9);
            assert_eq!(store.get_torrents().unwrap().len(), 9);
            let stats = store.get_stats();
            assert_eq!(stats.torrents, 9);
            assert_eq!(stats.torrent_inserts, 10);
            assert_eq!(stats.torrent_removals, 1);
        }

        #[test]
        fn test_growth_is_counted() {
            let store = store_with(|config| config.store.peers_capacity = 2);
            for n in 0..5 {
                store.add_user(peer(n), Ipv4Addr::LOCALHOST, 1, 1).unwrap();
            }
            assert_eq!(store.get_stats().arena_growths, 2);
            let audit = store.audit().unwrap();
            assert_eq!(audit.peers.capacity, 8);
            assert_eq!(audit.peers.occupied, 5);
            assert_eq!(store.get_users().unwrap().len(), 5);
        }

        #[test]
        fn test_fixed_store_reports_exhaustion() {
            let store = store_with(|config| {
                config.store.torrents_capacity = 2;
                config.store.growth_enabled = false;
            });
            store.add_torrent(torrent(1)).unwrap();
            store.add_torrent(torrent(2)).unwrap();
            assert_eq!(store.add_torrent(torrent(3)), Err(StoreError::ResourceExhausted { capacity: 2 }));
            assert_eq!(store.get_stats().exhausted, 1);
            assert_eq!(store.torrents_count(), 2);
            store.audit().unwrap();
        }

        #[test]
        fn test_reference_policy_collision_is_counted() {
            let store = store_with(|config| config.store.collision_policy = CollisionPolicy::reference);
            let mut seen = std::collections::HashMap::new();
            let mut collided = false;
            for n in 0..=255u8 {
                match store.add_torrent(torrent(n)) {
                    Ok(_) => {}
                    Err(StoreError::KeyCollision { sort_key }) => {
                        *seen.entry(sort_key).or_insert(0) += 1;
                        collided = true;
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
            assert!(collided, "256 keys over 100 buckets must collide");
            assert!(store.torrents_count() <= 100);
            assert_eq!(store.get_stats().collisions, seen.values().sum::<i64>());
            store.audit().unwrap();
        }

        #[test]
        fn test_store_is_send_and_sync() {
            fn assert_send_sync<T: Send + Sync>() {}
            assert_send_sync::<TrackerStore>();
        }
    }
}
