#![allow(dead_code, unreachable_pub)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use web_pec::{ArcOptions, ArcRuntime, Handshake, PecEnvironment};

/// Something [`TestEnv`] was asked to do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
	Channel(u32, u32),
	Start(String),
	Handshake {
		worker: String,
		handshake: Handshake,
		port: u32,
	},
}

/// Records every call; ports are numbered in creation order.
#[derive(Clone, Debug, Default)]
pub struct TestEnv {
	pub events: Rc<RefCell<Vec<Event>>>,
	pub fail: Option<Step>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
	Channel,
	Start,
	Handshake,
}

#[derive(Debug, Eq, PartialEq)]
pub struct Failed(pub Step);

impl TestEnv {
	pub fn failing(step: Step) -> Self {
		Self {
			fail: Some(step),
			..Self::default()
		}
	}

	pub fn events(&self) -> Vec<Event> {
		self.events.borrow().clone()
	}

	pub fn handshakes(&self) -> Vec<Handshake> {
		self.events
			.borrow()
			.iter()
			.filter_map(|event| match event {
				Event::Handshake { handshake, .. } => Some(handshake.clone()),
				_ => None,
			})
			.collect()
	}

	fn check(&self, step: Step) -> Result<(), Failed> {
		if self.fail == Some(step) {
			Err(Failed(step))
		} else {
			Ok(())
		}
	}
}

impl PecEnvironment for TestEnv {
	type Port = u32;
	type Worker = String;
	type Error = Failed;

	fn channel(&self) -> Result<(u32, u32), Failed> {
		self.check(Step::Channel)?;
		let mut events = self.events.borrow_mut();
		let channels = events
			.iter()
			.filter(|event| matches!(event, Event::Channel(..)))
			.count();
		let next = u32::try_from(channels).unwrap() * 2;
		events.push(Event::Channel(next, next + 1));
		Ok((next, next + 1))
	}

	fn start(&self, worker_path: &str) -> Result<String, Failed> {
		self.check(Step::Start)?;
		self.events
			.borrow_mut()
			.push(Event::Start(worker_path.to_owned()));
		Ok(worker_path.to_owned())
	}

	fn post_handshake(
		&self,
		worker: &String,
		handshake: &Handshake,
		transfer: u32,
	) -> Result<(), Failed> {
		self.check(Step::Handshake)?;
		self.events.borrow_mut().push(Event::Handshake {
			worker: worker.clone(),
			handshake: handshake.clone(),
			port: transfer,
		});
		Ok(())
	}
}

/// Runtime whose arcs are the options they were created with.
#[derive(Debug, Default)]
pub struct TestRuntime;

impl ArcRuntime for TestRuntime {
	type Arc = ArcOptions<Self>;
	type SlotComposer = &'static str;
	type Context = Vec<String>;
	type Loader = Infallible;
	type Env = TestEnv;

	fn new_arc(&self, options: ArcOptions<Self>) -> Self::Arc {
		options
	}
}
