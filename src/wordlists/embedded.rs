//! Embedded word list
//!
//! Compiled into the binary at build time from `data/daily_words.txt`.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/daily.rs"));
