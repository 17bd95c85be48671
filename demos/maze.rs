//! Random maze demo: searches a generated map with both queue strategies and
//! draws the result in the terminal.
//!
//! Run: cargo run --bin maze -- [--seed N] [--size WxH] [--eight]
//! Set `RUST_LOG=debug` to see the engine's own log lines.

use std::io;
use std::time::Instant;

use keypath::{AStar, HeapQueue, LinearQueue, OpenClosedSet, Query, SearchResult};
use keypath_demos::{MapParams, random_map, render};
use keypath_grid::{Connectivity, GridMap, Point};
use rand::SeedableRng;

struct Args {
    seed: u64,
    params: MapParams,
    eight: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: rand::random(),
        params: MapParams::default(),
        eight: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                let v = it.next().ok_or("--seed needs a value")?;
                args.seed = v.parse().map_err(|e| format!("bad seed {v:?}: {e}"))?;
            }
            "--size" => {
                let v = it.next().ok_or("--size needs a value")?;
                let (w, h) = v
                    .split_once('x')
                    .ok_or_else(|| format!("bad size {v:?}, expected WxH"))?;
                args.params.width = w.parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
                args.params.height = h.parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
                if args.params.width < 2 || args.params.height < 2 {
                    return Err(format!("size {v} is too small"));
                }
            }
            "--eight" => args.eight = true,
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(args)
}

fn timed<Q: OpenClosedSet + Default>(engine: &AStar, query: &Query<'_>, name: &str) -> SearchResult {
    let mut queue = Q::default();
    let t = Instant::now();
    let result = engine.search_with(query, &mut queue);
    log::info!(
        "{name}: {:?} in {:?}, expanded {}, generated {}, reparented {}",
        result.stats.termination,
        t.elapsed(),
        result.stats.expanded,
        result.stats.generated,
        result.stats.reparented
    );
    result
}

fn run(args: &Args) -> io::Result<()> {
    let params = args.params;
    let start = Point::new(0, 0);
    let goal = Point::new(params.width - 1, params.height - 1);

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let mut map: GridMap = random_map(&params, &[start, goal], &mut rng)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    if args.eight {
        map = map.with_connectivity(Connectivity::Eight);
    }
    log::info!("seed {}, {}x{} map", args.seed, params.width, params.height);

    let (Some(s), Some(g)) = (map.key(start), map.key(goal)) else {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "endpoints off the map"));
    };
    let query = Query::new(s, g, &map);
    let engine = AStar::new();

    let linear = timed::<LinearQueue>(&engine, &query, "linear");
    let heap = timed::<HeapQueue>(&engine, &query, "heap");
    if linear.keys() != heap.keys() {
        log::warn!("queue strategies disagree on the path");
    }

    let path = heap.keys().map(|k| map.path_points(k)).unwrap_or_default();
    let mut out = io::stdout();
    render(&mut out, &map, &path)?;
    match heap.path {
        Some(p) => println!("path: {} steps, cost {:.2} (seed {})", p.len() - 1, p.cost, args.seed),
        None => println!("no path (seed {})", args.seed),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("usage: maze [--seed N] [--size WxH] [--eight]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
