// Evaluator for the list zipper
// - replays the same random cursor edits on a `Zipper` and on a `Vec`
// - prints one csv row per sequence type per rep

use std::error::Error;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use listzip::zip::VecCursor;
use listzip::{Cmd, Zipper};

const DEFAULT_SEED: u64 = 0;
const DEFAULT_TAG: &str = "None";
const DEFAULT_TAGHEAD: &str = "Tag";
const DEFAULT_START: usize = 10_000;
const DEFAULT_EDITS: usize = 10_000;
const DEFAULT_REPS: usize = 1;

/// Evaluator for the list zipper, timed against a Vec with an index
#[derive(Parser, Debug)]
#[command(name = "evalzip", version, about, long_about = None)]
struct Args {
	/// supress csv header
	#[arg(long)]
	nohead: bool,
	/// random seed, incremented for each rep
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,
	/// user tag
	#[arg(long, default_value = DEFAULT_TAG)]
	tag: String,
	/// header title for tag
	#[arg(long, default_value = DEFAULT_TAGHEAD)]
	taghead: String,
	/// starting sequence length
	#[arg(short, long, default_value_t = DEFAULT_START)]
	start: usize,
	/// number of timed edits
	#[arg(short, long, default_value_t = DEFAULT_EDITS)]
	edits: usize,
	/// number of sequences tested
	#[arg(short, long, default_value_t = DEFAULT_REPS)]
	reps: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
	// RUST_LOG controls the log level, warn if not set
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new("warn"))?;
	fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	info!(?args, "starting evaluation");

	let print_result = |version: &str, number: usize, edits: usize, time: Duration| {
		println!("{}, {}, {}, {}, {}, {}, {}, {}",
			OffsetDateTime::now_utc().unix_timestamp(), args.seed, version, number,
			args.start, edits, time.whole_microseconds(), args.tag
		);
	};

	if !args.nohead {
		println!("UnixTime, Seed, SeqType, SeqNum, PriorElements, Edits, Micros, {}", args.taghead);
	}

	for rep in 0..args.reps {
		let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(rep as u64));
		let cmds: Vec<Cmd<usize>> = (0..args.edits)
			.map(|i| Cmd::random(&mut rng, args.start + i))
			.collect();
		debug!(rep, cmds = cmds.len(), "generated edits");

		// zipper
		let zip = Zipper::at_end(0..args.start).reset_to_start();
		let start_time = OffsetDateTime::now_utc();
		let zip = edit_zipper(zip, &cmds);
		print_result("Zipper", rep, cmds.len(), OffsetDateTime::now_utc() - start_time);

		// vec
		let mut vec = VecCursor::new((0..args.start).collect());
		let start_time = OffsetDateTime::now_utc();
		edit_vec(&mut vec, &cmds);
		print_result("Vec", rep, cmds.len(), OffsetDateTime::now_utc() - start_time);

		if zip.to_vec() != vec.items() {
			return Err(format!("rep {}: zipper and vec disagree after {} edits", rep, cmds.len()).into())
		}
		debug!(rep, len = zip.len(), "sequences agree");
	}
	Ok(())
}

fn edit_zipper(zip: Zipper<usize>, cmds: &[Cmd<usize>]) -> Zipper<usize> {
	zip.run(cmds.iter().cloned())
}

fn edit_vec(vec: &mut VecCursor<usize>, cmds: &[Cmd<usize>]) {
	for cmd in cmds {
		vec.do_cmd(cmd.clone());
	}
}
