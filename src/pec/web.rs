//! Browser implementation of [`PecEnvironment`].

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{MessageChannel, MessagePort, Worker};

use super::{Handshake, PecEnvironment};

/// Starts PECs as dedicated [`Worker`]s connected over a [`MessageChannel`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WebPec;

impl PecEnvironment for WebPec {
	type Port = MessagePort;
	type Worker = Worker;
	type Error = SpawnError;

	fn channel(&self) -> Result<(MessagePort, MessagePort), SpawnError> {
		let channel = MessageChannel::new().map_err(SpawnErrorKind::Channel.with())?;
		Ok((channel.port1(), channel.port2()))
	}

	fn start(&self, worker_path: &str) -> Result<Worker, SpawnError> {
		Worker::new(worker_path).map_err(SpawnErrorKind::Worker.with())
	}

	fn post_handshake(
		&self,
		worker: &Worker,
		handshake: &Handshake,
		transfer: MessagePort,
	) -> Result<(), SpawnError> {
		let message = handshake_to_js(handshake).map_err(SpawnErrorKind::Handshake.with())?;

		worker
			.post_message_with_transfer(&message, &Array::of1(&transfer))
			.map_err(|error| {
				tracing::warn!("failed to transfer PEC port: {error:?}");
				SpawnErrorKind::Handshake.with()(error)
			})
	}
}

/// Builds `{id, base}` with `base` as a plain object.
fn handshake_to_js(handshake: &Handshake) -> Result<JsValue, JsValue> {
	let base = Object::new();

	for (key, value) in &handshake.base {
		Reflect::set(&base, &key.into(), &value.into())?;
	}

	let message = Object::new();
	Reflect::set(&message, &"id".into(), &handshake.id.as_str().into())?;
	Reflect::set(&message, &"base".into(), &base)?;

	Ok(message.into())
}

/// Error starting a PEC in the browser.
#[derive(Clone, Debug)]
pub struct SpawnError {
	/// Which step failed.
	pub kind: SpawnErrorKind,
	/// Exception thrown by the browser.
	pub error: JsValue,
}

/// Step of [`create_channel()`](super::create_channel) that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpawnErrorKind {
	/// `new MessageChannel()` threw.
	Channel,
	/// `new Worker()` threw, e.g. because of an invalid URL.
	Worker,
	/// Building or posting the handshake threw.
	Handshake,
}

impl SpawnErrorKind {
	/// Returns a function wrapping a [`JsValue`] into a [`SpawnError`] of this
	/// kind.
	fn with(self) -> impl FnOnce(JsValue) -> SpawnError {
		move |error| SpawnError { kind: self, error }
	}
}

impl Display for SpawnError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		let step = match self.kind {
			SpawnErrorKind::Channel => "creating message channel",
			SpawnErrorKind::Worker => "starting worker",
			SpawnErrorKind::Handshake => "sending handshake",
		};

		write!(formatter, "error {step}: {:?}", self.error)
	}
}

impl Error for SpawnError {}
