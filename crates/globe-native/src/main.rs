use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use globe_core::{compose_message, NotesStore, StoreConfig, StoreEvent};
use smallvec::SmallVec;

const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, PartialEq)]
enum Command {
    Send(String),
    Locate { lat: f64, lng: f64 },
    Stats,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(Command::Send(trimmed.to_string()));
    };
    let args: SmallVec<[&str; 3]> = rest.split_whitespace().collect();
    match args.as_slice() {
        ["quit"] | ["q"] => Ok(Command::Quit),
        ["stats"] => Ok(Command::Stats),
        ["loc", lat, lng] => {
            let lat: f64 = lat.parse().map_err(|_| format!("bad latitude {lat:?}"))?;
            let lng: f64 = lng.parse().map_err(|_| format!("bad longitude {lng:?}"))?;
            Ok(Command::Locate { lat, lng })
        }
        _ => Err(format!("unknown command :{rest}")),
    }
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

fn spawn_stdin_reader() -> anyhow::Result<Receiver<String>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

fn print_stats(store: &NotesStore) {
    let s = store.stats();
    println!(
        "sent={} in_transit={} delivered={}",
        s.sent, s.in_transit, s.delivered
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = StoreConfig::default();
    config.validate()?;
    let fallback = config.fallback_location;
    let mut store = NotesStore::from_entropy(config);
    store.set_user_location(fallback.lat, fallback.lng);
    log::info!(
        "[native] ready, origin ({:.4},{:.4}); type a note, :loc LAT LNG, :stats or :quit",
        fallback.lat,
        fallback.lng
    );

    let lines = spawn_stdin_reader()?;
    let mut events = Vec::new();
    let mut input_open = true;
    loop {
        events.clear();
        store.advance(now_ms(), &mut events);
        for ev in &events {
            match ev {
                StoreEvent::Landed(n) => println!(
                    "landed {} at ({:.2},{:.2}): {}",
                    n.id, n.lat, n.lng, n.message
                ),
                StoreEvent::Evicted(id) => log::debug!("[native] evicted {}", id),
            }
        }

        if !input_open {
            // Stdin closed: drain remaining flights, then exit.
            if store.pending_landings() == 0 {
                break;
            }
            thread::sleep(TICK);
            continue;
        }

        let line = match lines.recv_timeout(TICK) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                input_open = false;
                continue;
            }
        };
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Stats) => print_stats(&store),
            Ok(Command::Locate { lat, lng }) => {
                store.set_user_location(lat, lng);
                log::info!("[native] origin set to ({:.4},{:.4})", lat, lng);
            }
            Ok(Command::Send(text)) => {
                let message = compose_message(&text, store.rng_mut());
                let id = store.send_note(message.clone(), now_ms());
                println!("sent {}: {}", id, message);
            }
            Err(e) => log::warn!("[native] {}", e),
        }
    }

    print_stats(&store);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_sends() {
        assert_eq!(
            parse_command("  hello world "),
            Ok(Command::Send("hello world".into()))
        );
        assert_eq!(parse_command(""), Ok(Command::Send(String::new())));
    }

    #[test]
    fn colon_commands_parse() {
        assert_eq!(parse_command(":quit"), Ok(Command::Quit));
        assert_eq!(parse_command(":stats"), Ok(Command::Stats));
        assert_eq!(
            parse_command(":loc 51.5 -0.12"),
            Ok(Command::Locate {
                lat: 51.5,
                lng: -0.12
            })
        );
    }

    #[test]
    fn malformed_commands_are_errors() {
        assert!(parse_command(":loc north 3").is_err());
        assert!(parse_command(":loc 1").is_err());
        assert!(parse_command(":dance").is_err());
    }
}
