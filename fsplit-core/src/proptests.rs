//! Property-based tests for the split/join protocol.
//!
//! Each case runs against a fresh in-memory store:
//!
//! - join(split(b, c)) == b, with and without Base64
//! - fragment count and sizes follow ceil(L / c)
//! - decode(encode(b)) == b

use proptest::prelude::*;

use crate::codec::TextCodec;
use crate::codec::b64::Base64Codec;
use crate::config::Config;
use crate::join::{JoinOptions, join};
use crate::split::{SplitOptions, split};
use crate::store::FragmentStore;
use crate::store_mem::MemFragmentStore;

fn split_opts(chunk_size: usize, encode: bool) -> SplitOptions {
    SplitOptions {
        chunk_size,
        encode,
        dry_run: false,
    }
}

proptest! {
    /// Splitting then joining returns the original bytes.
    #[test]
    fn split_join_roundtrip(
        data in prop::collection::vec(any::<u8>(), 1..2000),
        chunk in 1usize..300,
    ) {
        // keep under the default cap so the property is about ordering, not truncation
        let chunk = chunk.max(data.len().div_ceil(99));
        let cfg = Config::default();
        let store = MemFragmentStore::with_file("src", &data);
        split(&store, "src", &split_opts(chunk, false), &cfg).unwrap();

        let opts = JoinOptions { out_name: Some("out".into()), decode: false };
        join(&store, "src.001", &opts, &cfg).unwrap();
        prop_assert_eq!(store.read("out").unwrap(), data);
    }

    /// Same with the Base64 layer in between.
    #[test]
    fn split_join_roundtrip_encoded(
        data in prop::collection::vec(any::<u8>(), 1..2000),
        chunk in 1usize..300,
    ) {
        let encoded_len = data.len().div_ceil(3) * 4;
        let chunk = chunk.max(encoded_len.div_ceil(99));
        let cfg = Config::default();
        let store = MemFragmentStore::with_file("src", &data);
        split(&store, "src", &split_opts(chunk, true), &cfg).unwrap();

        let opts = JoinOptions { out_name: Some("out".into()), decode: true };
        join(&store, "src.b64.001", &opts, &cfg).unwrap();
        prop_assert_eq!(store.read("out").unwrap(), data);
    }

    /// ceil(L / c) fragments; all full except possibly the last.
    #[test]
    fn fragment_sizes(len in 0usize..5000, chunk in 1usize..700) {
        let cfg = Config::default();
        let store = MemFragmentStore::with_file("src", &vec![0xA5; len]);
        let rep = split(&store, "src", &split_opts(chunk, false), &cfg).unwrap();

        prop_assert_eq!(rep.fragments.len(), len.div_ceil(chunk));
        if let Some((last, init)) = rep.fragments.split_last() {
            prop_assert!(init.iter().all(|f| f.len == chunk as u64));
            let expect_last = if len % chunk == 0 { chunk } else { len % chunk };
            prop_assert_eq!(last.len, expect_last as u64);
        }
        for (i, f) in rep.fragments.iter().enumerate() {
            prop_assert_eq!(f.seq as usize, i + 1);
        }
    }

    /// Base64 is an exact inverse and only emits printable ASCII.
    #[test]
    fn base64_roundtrip(data: Vec<u8>) {
        let c = Base64Codec;
        let enc = c.encode(&data);
        prop_assert!(enc.iter().all(|b| b.is_ascii_graphic()));
        if !data.is_empty() {
            prop_assert!(enc.len() > data.len());
        }
        prop_assert_eq!(c.decode(&enc).unwrap(), data);
    }
}
