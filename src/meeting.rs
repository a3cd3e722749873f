//! Meeting request and response schemas.
//!
//! [`MeetingRequest`] is serialized verbatim as the creation body; unset options are
//! omitted so the provider applies its own defaults. [`MeetingResponse`] decodes the
//! fields callers usually need into a lenient view and keeps the body it came from, so
//! re-serializing a response reproduces what the provider sent.

// crates.io
use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
// self
use crate::_prelude::*;

/// Meeting kinds, encoded as the provider's integer codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MeetingType {
	/// Starts immediately (`1`).
	#[default]
	Instant,
	/// Starts at `start_time` (`2`).
	Scheduled,
	/// Recurring without a fixed time (`3`).
	RecurringNoFixedTime,
	/// Recurring with a fixed time (`8`).
	RecurringFixedTime,
	/// Any code this crate does not know about.
	Other(u8),
}
impl From<u8> for MeetingType {
	fn from(code: u8) -> Self {
		match code {
			1 => Self::Instant,
			2 => Self::Scheduled,
			3 => Self::RecurringNoFixedTime,
			8 => Self::RecurringFixedTime,
			other => Self::Other(other),
		}
	}
}
impl From<MeetingType> for u8 {
	fn from(kind: MeetingType) -> Self {
		match kind {
			MeetingType::Instant => 1,
			MeetingType::Scheduled => 2,
			MeetingType::RecurringNoFixedTime => 3,
			MeetingType::RecurringFixedTime => 8,
			MeetingType::Other(code) => code,
		}
	}
}

/// Meeting encryption modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionType {
	/// Keys are stored in the provider's cloud.
	EnhancedEncryption,
	/// End-to-end encryption.
	E2ee,
}

/// Automatic recording targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoRecording {
	/// Recording disabled.
	None,
	/// Record on the host's machine.
	Local,
	/// Record to the provider's cloud.
	Cloud,
}

/// Pre-assigned breakout room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutRoom {
	/// Room name.
	pub name: String,
	/// Participant emails or names assigned to the room.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub participants: Vec<String>,
}

/// Breakout room configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakoutRoomSettings {
	/// Enables breakout rooms.
	pub enable: bool,
	/// Pre-assigned rooms.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub rooms: Vec<BreakoutRoom>,
}

/// Invitee registered for an authenticated meeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInvitee {
	/// Invitee email address.
	pub email: String,
}

/// Continuous chat configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousMeetingChat {
	/// Enables continuous chat.
	pub enable: bool,
	/// Adds invited external users to the chat.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auto_add_invited_external_users: Option<bool>,
	/// Adds meeting participants to the chat.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auto_add_meeting_participants: Option<bool>,
}

/// Optional meeting settings; `None` leaves the provider default in place.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSettings {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub host_video: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub participant_video: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub join_before_host: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mute_upon_entry: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub waiting_room: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub allow_multiple_devices: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub breakout_room: Option<BreakoutRoomSettings>,
	/// Provider calendar integration code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub calendar_type: Option<u8>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contact_email: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub contact_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email_notification: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub encryption_type: Option<EncryptionType>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auto_recording: Option<AutoRecording>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub focus_mode: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meeting_authentication: Option<bool>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub meeting_invitees: Vec<MeetingInvitee>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub private_meeting: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub watermark: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub continuous_meeting_chat: Option<ContinuousMeetingChat>,
}
impl MeetingSettings {
	/// Adds an invitee and turns on meeting authentication.
	pub fn invite(mut self, email: impl Into<String>) -> Self {
		self.meeting_invitees.push(MeetingInvitee { email: email.into() });
		self.meeting_authentication = Some(true);

		self
	}
}

/// Body of the meeting creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
	/// Meeting topic.
	pub topic: String,
	/// Meeting kind.
	#[serde(rename = "type")]
	pub kind: MeetingType,
	/// Longer description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub agenda: Option<String>,
	/// Start instant, sent as RFC 3339.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
	pub start_time: Option<OffsetDateTime>,
	/// Duration in minutes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub duration: Option<u32>,
	/// IANA timezone name used to display `start_time`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timezone: Option<String>,
	/// Meeting passcode.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
	/// Asks the provider to generate a passcode.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_password: Option<bool>,
	/// Optional settings.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub settings: Option<MeetingSettings>,
}
impl MeetingRequest {
	/// Instant meeting stamped with the current UTC time (whole seconds).
	pub fn instant(topic: impl Into<String>) -> Self {
		let now = OffsetDateTime::now_utc();

		Self::new(topic, MeetingType::Instant).with_start_time(now.replace_nanosecond(0).unwrap_or(now))
	}

	/// Scheduled meeting starting at `start_time` and lasting `duration_minutes`.
	pub fn scheduled(
		topic: impl Into<String>,
		start_time: OffsetDateTime,
		duration_minutes: u32,
	) -> Self {
		Self::new(topic, MeetingType::Scheduled)
			.with_start_time(start_time)
			.with_duration(duration_minutes)
	}

	/// Bare request with only a topic and kind.
	pub fn new(topic: impl Into<String>, kind: MeetingType) -> Self {
		Self {
			topic: topic.into(),
			kind,
			agenda: None,
			start_time: None,
			duration: None,
			timezone: None,
			password: None,
			default_password: None,
			settings: None,
		}
	}

	/// Sets the agenda.
	pub fn with_agenda(mut self, agenda: impl Into<String>) -> Self {
		self.agenda = Some(agenda.into());

		self
	}

	/// Sets the start instant.
	pub fn with_start_time(mut self, start_time: OffsetDateTime) -> Self {
		self.start_time = Some(start_time);

		self
	}

	/// Sets the duration in minutes.
	pub fn with_duration(mut self, minutes: u32) -> Self {
		self.duration = Some(minutes);

		self
	}

	/// Sets the display timezone.
	pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
		self.timezone = Some(timezone.into());

		self
	}

	/// Sets an explicit passcode and disables provider-generated ones.
	pub fn with_password(mut self, password: impl Into<String>) -> Self {
		self.password = Some(password.into());
		self.default_password = Some(false);

		self
	}

	/// Attaches settings.
	pub fn with_settings(mut self, settings: MeetingSettings) -> Self {
		self.settings = Some(settings);

		self
	}
}

/// Created meeting as reported by the provider.
///
/// The public fields are a lenient view decoded from the response body; only `id` is
/// required and `start_time` stays in the provider's own formatting. The body itself is
/// kept as received, so serializing a [`MeetingResponse`] (or calling
/// [`MeetingResponse::to_value`]) yields exactly what the provider sent, explicit
/// `null`s included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct MeetingResponse {
	/// Meeting number.
	pub id: u64,
	/// Instance UUID.
	pub uuid: Option<String>,
	/// Host user identifier.
	pub host_id: Option<String>,
	/// Meeting topic.
	pub topic: Option<String>,
	/// Meeting kind.
	pub kind: Option<MeetingType>,
	/// Start time exactly as the provider formatted it; see [`MeetingResponse::starts_at`].
	pub start_time: Option<String>,
	/// Duration in minutes.
	pub duration: Option<u32>,
	/// Display timezone.
	pub timezone: Option<String>,
	/// URL participants use to join.
	pub join_url: Option<String>,
	/// URL the host uses to start the meeting; treat as a credential.
	pub start_url: Option<String>,
	/// Meeting passcode.
	pub password: Option<String>,
	body: Map<String, Value>,
}
impl MeetingResponse {
	/// Returns the provider body as received.
	pub fn to_value(&self) -> Value {
		Value::Object(self.body.clone())
	}

	/// Borrows the provider body as received.
	pub fn body(&self) -> &Map<String, Value> {
		&self.body
	}

	/// Looks up any top-level field of the provider body, typed or not.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.body.get(field)
	}

	/// Parses [`MeetingResponse::start_time`] as RFC 3339.
	///
	/// Returns `None` when the field is absent or carries no UTC offset.
	pub fn starts_at(&self) -> Option<OffsetDateTime> {
		OffsetDateTime::parse(self.start_time.as_deref()?, &Rfc3339).ok()
	}
}
impl TryFrom<Map<String, Value>> for MeetingResponse {
	type Error = serde_path_to_error::Error<serde_json::Error>;

	fn try_from(body: Map<String, Value>) -> Result<Self, Self::Error> {
		let fields: MeetingFields =
			serde_path_to_error::deserialize(Value::Object(body.clone()))?;

		Ok(Self {
			id: fields.id,
			uuid: fields.uuid,
			host_id: fields.host_id,
			topic: fields.topic,
			kind: fields.kind,
			start_time: fields.start_time,
			duration: fields.duration,
			timezone: fields.timezone,
			join_url: fields.join_url,
			start_url: fields.start_url,
			password: fields.password,
			body,
		})
	}
}
impl From<MeetingResponse> for Map<String, Value> {
	fn from(response: MeetingResponse) -> Self {
		response.body
	}
}

#[derive(Deserialize)]
struct MeetingFields {
	id: u64,
	#[serde(default)]
	uuid: Option<String>,
	#[serde(default)]
	host_id: Option<String>,
	#[serde(default)]
	topic: Option<String>,
	#[serde(default, rename = "type")]
	kind: Option<MeetingType>,
	#[serde(default)]
	start_time: Option<String>,
	#[serde(default)]
	duration: Option<u32>,
	#[serde(default)]
	timezone: Option<String>,
	#[serde(default)]
	join_url: Option<String>,
	#[serde(default)]
	start_url: Option<String>,
	#[serde(default)]
	password: Option<String>,
}
