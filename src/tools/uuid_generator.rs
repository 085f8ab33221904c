//! UUID generator

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{OutputRegion, Phase, ToolDescriptor, ToolKey, ToolSession, Transform};

/// Short description shown next to the generator
pub const UUID_EXPLANATION: &str = "A UUID (Universally Unique Identifier) is a 128-bit number \
used to uniquely identify information.\n\n\
- v1: Time-based (includes timestamp and node id)\n\
- v4: Random (fully random or pseudo-random)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UuidVersion {
    /// Time and node based
    V1,
    /// Random
    #[default]
    V4,
}

impl UuidVersion {
    pub const ALL: [UuidVersion; 2] = [UuidVersion::V1, UuidVersion::V4];

    pub fn label(self) -> &'static str {
        match self {
            UuidVersion::V1 => "v1 (time-based)",
            UuidVersion::V4 => "v4 (random)",
        }
    }
}

/// A generated identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedUuid {
    pub uuid: Uuid,
    pub version: UuidVersion,
}

impl GeneratedUuid {
    /// Hyphenated lowercase form
    pub fn text(&self) -> String {
        self.uuid.hyphenated().to_string()
    }

    /// Embedded creation time, for time-based ids
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let (secs, nanos) = self.uuid.get_timestamp()?.to_unix();
        DateTime::from_timestamp(i64::try_from(secs).ok()?, nanos)
    }
}

/// Random node id with the multicast bit set, so it can never collide with
/// a real MAC address (RFC 4122 §4.5).
fn random_node_id() -> [u8; 6] {
    let mut node: [u8; 6] = rand::random();
    node[0] |= 0x01;
    node
}

/// Generate one identifier
pub fn generate(version: UuidVersion) -> GeneratedUuid {
    let uuid = match version {
        UuidVersion::V1 => Uuid::now_v1(&random_node_id()),
        UuidVersion::V4 => Uuid::new_v4(),
    };
    GeneratedUuid { uuid, version }
}

/// UUID generator. Has no text input; only the version is configurable.
#[derive(Debug, Default)]
pub struct UuidGenerator {
    version: UuidVersion,
    session: ToolSession<GeneratedUuid>,
}

impl UuidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> UuidVersion {
        self.version
    }

    pub fn set_version(&mut self, version: UuidVersion) {
        self.version = version;
    }

    pub fn current(&self) -> Option<&GeneratedUuid> {
        self.session.output()
    }
}

impl Transform for UuidGenerator {
    fn descriptor(&self) -> &'static ToolDescriptor {
        ToolKey::Uuid.descriptor()
    }

    fn input(&self) -> &str {
        self.session.input()
    }

    fn set_input(&mut self, _text: String) {}

    fn run_transform(&mut self) {
        let generated = generate(self.version);
        debug!("Generated UUID {:?}", generated.version);
        self.session.succeed(generated);
    }

    fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn error(&self) -> Option<&str> {
        self.session.error()
    }

    fn copy_text(&self, region: OutputRegion) -> Option<String> {
        match region {
            OutputRegion::Main => self.current().map(GeneratedUuid::text),
            _ => None,
        }
    }

    fn clear_all(&mut self) {
        self.version = UuidVersion::default();
        self.session.reset();
    }
}
