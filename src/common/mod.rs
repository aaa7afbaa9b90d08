//! Types shared by every Redfish resource kind.
//!
//! Resource bodies in this API family combine scalar attributes with a
//! `Links` block that points at related resources by URI instead of
//! embedding them. The types here cover both halves: the client-bound
//! [`Entity`] base that every resource flattens in, the wire-level
//! [`Link`] objects, and the [`Reference`] values the link extractor
//! produces from them.

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::redfish::client::Client;

/// Base fields shared by every resource, plus the client handle the
/// resource uses to fetch its own references later.
///
/// The handle is a back-reference, not ownership: it is a cheap clone of
/// the client that fetched the resource and has no lifetime implications
/// for the client itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    /// Canonical self URI of the resource.
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
    /// Opaque resource identifier.
    #[serde(rename = "Id", default)]
    pub id: String,
    /// Human-readable resource name.
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(skip)]
    client: Option<Client>,
}

impl Entity {
    /// Bind the client that fetched this resource.
    pub fn set_client(&mut self, client: Client) {
        self.client = Some(client);
    }

    /// The bound client, if the resource came out of a fetch.
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

/// One wire-level link object, `{"@odata.id": "..."}`.
///
/// A link object without an `@odata.id` key decodes to the empty string;
/// the extractor treats such entries as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: String,
}

/// An unresolved pointer to one or more related resources.
///
/// A reference carries raw URIs only and never a cached target: resolving
/// it is a separate, explicit fetch the caller issues. It is either a
/// one-to-one relationship (possibly empty) or an ordered one-to-many
/// relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// A single related resource; empty string when the link was absent.
    Single(String),
    /// Related resources in source order.
    Many(Vec<String>),
}

impl Reference {
    /// Extract a single-valued reference from an optional link object.
    pub(crate) fn from_link(link: Option<&Link>) -> Self {
        Reference::Single(link.map(|l| l.odata_id.clone()).unwrap_or_default())
    }

    /// Extract a multi-valued reference, preserving source order and
    /// omitting entries that carried no URI.
    pub(crate) fn from_links(links: &[Link]) -> Self {
        Reference::Many(
            links
                .iter()
                .filter(|l| !l.odata_id.is_empty())
                .map(|l| l.odata_id.clone())
                .collect(),
        )
    }

    /// The single URI, or the empty string for multi-valued references.
    pub fn uri(&self) -> &str {
        match self {
            Reference::Single(uri) => uri,
            Reference::Many(_) => "",
        }
    }

    /// All URIs held by this reference. An absent single-valued link
    /// yields no URIs, so iterating never produces an empty target.
    pub fn uris(&self) -> &[String] {
        match self {
            Reference::Single(uri) if uri.is_empty() => &[],
            Reference::Single(uri) => std::slice::from_ref(uri),
            Reference::Many(uris) => uris,
        }
    }

    /// True when the reference points at nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Reference::Single(uri) => uri.is_empty(),
            Reference::Many(uris) => uris.is_empty(),
        }
    }
}

/// Status and health properties reported by a resource.
///
/// Passed through opaquely; the core does not interpret these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Status {
    pub state: Option<String>,
    pub health: Option<String>,
    pub health_rollup: Option<String>,
}

/// The type of processor contained in a socket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessorType {
    Cpu,
    Gpu,
    Fpga,
    Dsp,
    Accelerator,
    Core,
    Thread,
    Oem,
    /// Absent from the body, or a value this client does not know. The
    /// wire type is an open string set, so unknown values are not a
    /// decode failure.
    #[default]
    Unknown,
}

impl ProcessorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessorType::Cpu => "CPU",
            ProcessorType::Gpu => "GPU",
            ProcessorType::Fpga => "FPGA",
            ProcessorType::Dsp => "DSP",
            ProcessorType::Accelerator => "Accelerator",
            ProcessorType::Core => "Core",
            ProcessorType::Thread => "Thread",
            ProcessorType::Oem => "OEM",
            ProcessorType::Unknown => "",
        }
    }
}

impl fmt::Display for ProcessorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProcessorType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "CPU" => ProcessorType::Cpu,
            "GPU" => ProcessorType::Gpu,
            "FPGA" => ProcessorType::Fpga,
            "DSP" => ProcessorType::Dsp,
            "Accelerator" => ProcessorType::Accelerator,
            "Core" => ProcessorType::Core,
            "Thread" => ProcessorType::Thread,
            "OEM" => ProcessorType::Oem,
            _ => ProcessorType::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reference_from_absent_link_is_empty() {
        let reference = Reference::from_link(None);
        assert_eq!(reference, Reference::Single(String::new()));
        assert!(reference.is_empty());
    }

    #[test]
    fn test_empty_single_reference_yields_no_uris() {
        let reference = Reference::from_link(None);
        assert!(reference.uris().is_empty());
    }

    #[test]
    fn test_single_reference_keeps_uri() {
        let link = Link {
            odata_id: "/redfish/v1/Chassis/1".to_string(),
        };
        let reference = Reference::from_link(Some(&link));
        assert_eq!(reference.uri(), "/redfish/v1/Chassis/1");
        assert!(!reference.is_empty());
    }

    #[test]
    fn test_many_reference_preserves_order_and_omits_blank_entries() {
        let links = vec![
            Link {
                odata_id: "/redfish/v1/Processors/1".to_string(),
            },
            Link::default(),
            Link {
                odata_id: "/redfish/v1/Processors/2".to_string(),
            },
        ];
        let reference = Reference::from_links(&links);
        assert_eq!(
            reference.uris(),
            ["/redfish/v1/Processors/1", "/redfish/v1/Processors/2"]
        );
    }

    #[test]
    fn test_processor_type_tolerates_unknown_values() {
        let parsed: ProcessorType = serde_json::from_str("\"CPU\"").unwrap();
        assert_eq!(parsed, ProcessorType::Cpu);

        let parsed: ProcessorType = serde_json::from_str("\"Quantum\"").unwrap();
        assert_eq!(parsed, ProcessorType::Unknown);
    }

    #[test]
    fn test_link_without_odata_id_decodes_to_empty() {
        let link: Link = serde_json::from_str("{\"Name\": \"stray\"}").unwrap();
        assert!(link.odata_id.is_empty());
    }
}
