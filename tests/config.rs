extern crate rand;
extern crate skipkv;

use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::sync::mpsc::channel;
use std::thread::sleep;
use std::time::Duration;

use rand::random;

use skipkv::util::mstime;
use skipkv::{open, open_with_logger, Config, Error, Level, Logger, SkipList};

macro_rules! config {
    ($str: expr) => {{
        let filepath = tmp_path("conf");
        File::create(&filepath).unwrap().write_all($str).unwrap();
        let mut config = Config::new();
        config.parsefile(&filepath).unwrap();
        config
    }};
}

fn tmp_path(extension: &str) -> String {
    let dirpath = std::env::temp_dir().join(format!("skipkv-tests-{}", mstime()));
    create_dir_all(&dirpath).unwrap();
    let path = dirpath.join(format!("{}.{}", random::<u64>(), extension));
    path.to_str().unwrap().to_owned()
}

fn sample(seed: u64) -> Vec<(usize, Vec<i32>)> {
    let mut config = Config::new();
    config.parse(&format!("maxlevel 6\nseed {}", seed)).unwrap();
    let (tx, _rx) = channel();
    let mut sl = open_with_logger(&config, Logger::channel(Level::Warning, tx)).unwrap();
    for k in 0..200 {
        sl.insert(k, ());
    }
    (0..sl.level())
        .map(|lvl| (lvl, sl.level_keys(lvl).cloned().collect()))
        .collect()
}

#[test]
fn parse_maxlevel() {
    let config = config!(b"maxlevel 3");
    assert_eq!(config.max_level, 3);
    let sl: SkipList<i32, i32> = open(&config).unwrap();
    assert_eq!(sl.max_level(), 3);
}

#[test]
fn reject_negative_maxlevel() {
    let mut config = Config::new();
    assert!(config.parse("maxlevel -1").is_err());
    assert_eq!(config.max_level, 16);
}

#[test]
fn open_rejects_zero_levels() {
    let mut config = Config::new();
    config.max_level = 0;
    match open::<i32, i32>(&config) {
        Err(Error::SkipList(_)) => (),
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }
}

#[test]
fn open_clamps_huge_maxlevel() {
    assert_eq!(skipkv::config::MAX_LEVEL_LIMIT, skipkv::skiplist::MAX_LEVEL_LIMIT);
    let config = config!(b"maxlevel 9223372036854775807\nseed 7");
    assert_eq!(config.max_level, 64);
    let mut sl: SkipList<i32, i32> = open(&config).unwrap();
    sl.insert(1, 1);
    assert_eq!(sl.max_level(), 64);

    let mut config = Config::new();
    config.max_level = usize::max_value();
    let sl: SkipList<i32, i32> = open(&config).unwrap();
    assert_eq!(sl.max_level(), 64);
}

#[test]
fn seed_makes_levels_reproducible() {
    assert_eq!(sample(99), sample(99));
}

#[test]
fn logs_through_configured_logger() {
    let (tx, rx) = channel();
    let mut config = Config::new();
    config.parse("maxlevel 2\nloglevel debug").unwrap();
    let mut sl = open_with_logger(&config, Logger::channel(config.loglevel, tx)).unwrap();
    sl.insert("k", 1);

    assert_eq!(
        rx.recv().unwrap(),
        b"skiplist logging attached: max level 2, 0 levels, 0 keys\n".to_vec()
    );
    let grew = String::from_utf8(rx.recv().unwrap()).unwrap();
    assert!(grew.starts_with("skiplist grew to "), "{}", grew);
}

#[test]
fn logs_to_configured_file() {
    let logfile = tmp_path("log");
    let config = config!(format!("loglevel verbose\nlogfile \"{}\"", logfile).as_bytes());
    let sl: SkipList<u8, u8> = open(&config).unwrap();
    drop(sl);

    let mut contents = String::new();
    for _ in 0..50 {
        contents.clear();
        File::open(&logfile)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        if !contents.is_empty() {
            break;
        }
        sleep(Duration::from_millis(10));
    }
    assert_eq!(contents, "skiplist logging attached: max level 16, 0 levels, 0 keys\n");
}
