//! SubProcessor resource
//!
//! A sub-processor is a single processor contained within a larger
//! processor (a core complex inside a socket, for example). Its body is
//! the representative case for the crate's two decode concerns: a field
//! some services type incorrectly on the wire, and a `Links` block of
//! lazy references to related resources.

use serde::Deserialize;

use super::client::Client;
use crate::common::{Entity, Link, ProcessorType, Reference, Status};
use crate::error::Error;

/// A single sub-processor contained within a processor.
///
/// Immutable once decoded; safe to share read-only across tasks.
#[derive(Debug, Clone)]
pub struct SubProcessor {
    /// Common resource identity plus the bound client handle.
    pub entity: Entity,
    /// Odata context of the resource.
    pub odata_context: String,
    /// Odata type of the resource.
    pub odata_type: String,
    /// Maximum rated clock speed in MHz. Zero when the service omitted
    /// the field or sent a value that could not be recovered.
    pub max_speed_mhz: f32,
    /// The type of processor in this socket.
    pub processor_type: ProcessorType,
    /// Total count of independent execution threads.
    pub total_threads: u32,
    /// Status and health properties of the resource.
    pub status: Status,
    chassis: Reference,
    connected_processors: Reference,
}

/// Raw decode envelope: the resource's scalar shape plus the auxiliary
/// `Links` block, parameterized over the clock-speed field's type.
///
/// The strict pass reads the body with `Speed = f32`; if that fails, the
/// fallback pass re-reads it with `Speed = String`. Keeping one generic
/// shape means the two passes cannot drift apart in their field mapping.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSubProcessor<Speed> {
    #[serde(flatten)]
    entity: Entity,
    #[serde(rename = "@odata.context", default)]
    odata_context: String,
    #[serde(rename = "@odata.type", default)]
    odata_type: String,
    #[serde(rename = "MaxSpeedMHz", default)]
    max_speed_mhz: Option<Speed>,
    #[serde(default)]
    processor_type: ProcessorType,
    #[serde(default)]
    total_threads: u32,
    #[serde(default)]
    status: Status,
    #[serde(default)]
    links: SubProcessorLinks,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct SubProcessorLinks {
    chassis: Option<Link>,
    connected_processors: Vec<Link>,
}

impl RawSubProcessor<String> {
    /// Re-type the widened clock-speed text back to a number.
    ///
    /// Empty or unparsable text drops the field to its default instead of
    /// failing: losing one optional measurement is preferred over losing
    /// the whole resource.
    fn coerce_speed(self) -> RawSubProcessor<f32> {
        let RawSubProcessor {
            entity,
            odata_context,
            odata_type,
            max_speed_mhz,
            processor_type,
            total_threads,
            status,
            links,
        } = self;

        let max_speed_mhz = max_speed_mhz
            .filter(|text| !text.is_empty())
            .and_then(|text| text.trim().parse::<f32>().ok());

        RawSubProcessor {
            entity,
            odata_context,
            odata_type,
            max_speed_mhz,
            processor_type,
            total_threads,
            status,
            links,
        }
    }
}

impl From<RawSubProcessor<f32>> for SubProcessor {
    fn from(raw: RawSubProcessor<f32>) -> Self {
        SubProcessor {
            entity: raw.entity,
            odata_context: raw.odata_context,
            odata_type: raw.odata_type,
            max_speed_mhz: raw.max_speed_mhz.unwrap_or_default(),
            processor_type: raw.processor_type,
            total_threads: raw.total_threads,
            status: raw.status,
            chassis: Reference::from_link(raw.links.chassis.as_ref()),
            connected_processors: Reference::from_links(&raw.links.connected_processors),
        }
    }
}

impl SubProcessor {
    /// Decode a sub-processor from a raw response body.
    ///
    /// Tries the declared shape first. If the body violates it, the same
    /// body is re-read with `MaxSpeedMHz` widened to text and the text
    /// coerced back to a number. When both passes fail, the strict pass's
    /// error is the one reported: the caller should see the canonical
    /// schema violation, not the widened pass's own failure.
    pub fn from_response(body: &[u8]) -> Result<Self, Error> {
        let raw = match serde_json::from_slice::<RawSubProcessor<f32>>(body) {
            Ok(raw) => raw,
            Err(strict_err) => match serde_json::from_slice::<RawSubProcessor<String>>(body) {
                Ok(widened) => widened.coerce_speed(),
                Err(_) => return Err(Error::Decode(strict_err)),
            },
        };

        Ok(raw.into())
    }

    /// Fetch the sub-processor at `uri` and bind `client` onto it so it
    /// can later resolve its own references.
    pub async fn get(client: &Client, uri: &str) -> Result<Self, Error> {
        let body = client.get(uri).await?;

        let mut sub_processor = Self::from_response(body.as_bytes())?;
        sub_processor.entity.set_client(client.clone());

        Ok(sub_processor)
    }

    /// Unresolved reference to the chassis physically containing this
    /// processor.
    pub fn chassis(&self) -> &Reference {
        &self.chassis
    }

    /// Unresolved references to the processors directly connected to this
    /// one, in source order.
    pub fn connected_processors(&self) -> &Reference {
        &self.connected_processors
    }

    /// Resolve the connected-processor references through the bound
    /// client, one fresh fetch per URI.
    ///
    /// Nothing is cached: calling this twice fetches twice.
    pub async fn fetch_connected_processors(&self) -> Result<Vec<SubProcessor>, Error> {
        let client = self.entity.client().ok_or(Error::NoClient)?;

        let mut resolved = Vec::with_capacity(self.connected_processors.uris().len());
        for uri in self.connected_processors.uris() {
            resolved.push(SubProcessor::get(client, uri).await?);
        }

        Ok(resolved)
    }
}
