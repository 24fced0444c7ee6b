// Commands for driving a zipper
// - `Dir` and `Cmd` name every cursor operation as data
// - `VecCursor` replays the same commands on a `Vec` and an index,
//   an O(n)-per-edit model used to check and time the zipper

use rand::Rng;

use crate::zipper::Zipper;

#[derive(PartialEq,Eq,Debug,Clone,Copy)]
pub enum Dir {L, R}

impl Dir {
	pub fn rev(self) -> Self {
		match self {Dir::R => Dir::L, Dir::L => Dir::R}
	}
}

/// A single zipper operation
#[derive(PartialEq,Eq,Debug,Clone)]
pub enum Cmd<T> {
	Move(Dir),
	Insert(T),
	Delete,
	Push(T),
	Pop,
	Replace(T),
	Reverse,
	ToStart,
	ToEnd,
}

impl<T> Cmd<T> {
	/// a random command, mostly moves and local edits
	///
	/// `val` is used if the command carries an element.
	pub fn random<R: Rng>(rng: &mut R, val: T) -> Self {
		match rng.gen_range(0..40) {
			0..=9 => Cmd::Move(Dir::L),
			10..=19 => Cmd::Move(Dir::R),
			20..=24 => Cmd::Insert(val),
			25..=28 => Cmd::Delete,
			29..=32 => Cmd::Push(val),
			33..=35 => Cmd::Pop,
			36..=37 => Cmd::Replace(val),
			38 => Cmd::Reverse,
			_ => if rng.gen() { Cmd::ToStart } else { Cmd::ToEnd },
		}
	}
}

impl<T: Clone> Zipper<T> {

	pub fn shift(&self, dir: Dir) -> Self {
		match dir {Dir::L => self.move_left(), Dir::R => self.move_right()}
	}

	pub fn do_cmd(&self, cmd: Cmd<T>) -> Self {
		match cmd {
			Cmd::Move(dir) => self.shift(dir),
			Cmd::Insert(val) => self.insert(val),
			Cmd::Delete => self.delete(),
			Cmd::Push(val) => self.push(val),
			Cmd::Pop => self.pop(),
			Cmd::Replace(val) => self.replace(val),
			Cmd::Reverse => self.reverse(),
			Cmd::ToStart => self.reset_to_start(),
			Cmd::ToEnd => self.reset_to_end(),
		}
	}

	/// apply each command in turn
	pub fn run<I: IntoIterator<Item = Cmd<T>>>(&self, cmds: I) -> Self {
		cmds.into_iter().fold(self.clone(), |z, cmd| z.do_cmd(cmd))
	}
}

/// An index into a `Vec`, with the zipper's cursor semantics
///
/// `hole` marks a position with no element focused. At `pos == len`
/// that is the zipper's past-the-end focus; anywhere else it is the
/// shape left by reversing a zipper focused past its end.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct VecCursor<T> {
	items: Vec<T>,
	pos: usize,
	hole: bool,
}

impl<T: Clone> VecCursor<T> {
	pub fn new(items: Vec<T>) -> Self {
		VecCursor { hole: items.is_empty(), items: items, pos: 0 }
	}

	pub fn items(&self) -> &[T] { &self.items }
	pub fn pos(&self) -> usize { self.pos }
	pub fn cursor(&self) -> Option<&T> {
		if self.hole { None } else { self.items.get(self.pos) }
	}

	// elements after the cursor
	fn right_len(&self) -> usize {
		self.items.len() - self.pos - (!self.hole) as usize
	}

	pub fn do_cmd(&mut self, cmd: Cmd<T>) {
		let len = self.items.len();
		match cmd {
			Cmd::Move(Dir::L) => if self.pos > 0 {
				self.pos -= 1;
				self.hole = false;
			},
			Cmd::Move(Dir::R) => if self.hole {
				if self.pos < len { self.hole = false }
			} else {
				self.pos += 1;
				self.hole = self.pos == len;
			},
			Cmd::Insert(val) => {
				self.items.insert(self.pos, val);
				self.hole = false;
			},
			Cmd::Delete => if !self.hole {
				self.items.remove(self.pos);
				self.hole = self.pos == self.items.len();
			},
			Cmd::Push(val) => {
				self.items.insert(self.pos, val);
				self.pos += 1;
			},
			Cmd::Pop => if self.pos > 0 {
				self.items.remove(self.pos - 1);
				self.pos -= 1;
			},
			Cmd::Replace(val) => if self.hole {
				self.items.insert(self.pos, val);
				self.hole = false;
			} else {
				self.items[self.pos] = val;
			},
			Cmd::Reverse => {
				self.items.reverse();
				self.pos = if self.hole { len - self.pos } else { len - 1 - self.pos };
			},
			Cmd::ToStart => if self.pos + self.right_len() > 0 {
				self.pos = 0;
				self.hole = false;
			},
			Cmd::ToEnd => if self.right_len() > 0 {
				self.pos = len;
				self.hole = true;
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

  #[test]
  fn test_cmds() {
  	let z = Zipper::at_start(vec![1,2,3]).unwrap();
  	let edited = z.run(vec![
  		Cmd::Move(Dir::R),
  		Cmd::Replace(7),
  		Cmd::Push(6),
  		Cmd::Move(Dir::R.rev()),
  		Cmd::Delete,
  	]);
  	assert_eq!(vec![1,7,3], edited.to_vec());
  	assert_eq!(Some(&7), edited.cursor());
  	assert_eq!(z, z.run(vec![]));
  }

  #[test]
  fn test_vec_cursor_matches_zipper() {
  	let mut rng = StdRng::seed_from_u64(0x5eed);
  	for round in 0..50 {
  		let start: Vec<usize> = (0..round % 7).collect();
  		let mut zip = Zipper::at_end(start.clone()).reset_to_start();
  		let mut model = VecCursor::new(start);
  		for step in 0..200 {
  			let cmd = Cmd::random(&mut rng, 1000 + step);
  			zip = zip.do_cmd(cmd.clone());
  			model.do_cmd(cmd.clone());
  			assert_eq!(model.items(), &zip.to_vec()[..], "after {:?}", cmd);
  			assert_eq!(model.cursor(), zip.cursor(), "after {:?}", cmd);
  			assert_eq!(model.pos(), zip.position(), "after {:?}", cmd);
  			assert_eq!(model.items().len(), zip.len());
  		}
  	}
  }

  #[test]
  fn test_only_reverse_makes_a_gap() {
  	let mut rng = StdRng::seed_from_u64(7);
  	let mut zip = Zipper::at_start(vec![0,1,2]).unwrap();
  	for step in 0..2000 {
  		let cmd = Cmd::random(&mut rng, step);
  		let was_at_end = zip.is_at_end();
  		zip = zip.do_cmd(cmd.clone());
  		if zip.validate().is_err() {
  			assert!(was_at_end && cmd == Cmd::Reverse, "gap after {:?}", cmd);
  			zip = zip.reverse();
  		}
  	}
  }
}
